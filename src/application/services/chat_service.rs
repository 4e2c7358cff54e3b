use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::{DownstreamError, RagBackend};
use crate::domain::{
    ChatLlmQuery, ChatLlmRequest, ChatRequest, ChatResponse, ChatResponseData,
    ChatRetrieverQuery, ChatRetrieverRequest, ErrorCd, Payload,
};
use crate::infrastructure::observability::{sanitize_prompt, truncate_for_log};

const EXCLUDED_FAQ_CATEGORIES: [&str; 3] = ["담당자 메일 문의", "AI 직접 질문", "챗봇 문의"];

const FALLBACK_KO: &str = "죄송합니다. 지금 답변을 드릴 수 없습니다.";

/// Apology returned when no answer could be produced, by request language.
pub fn fallback_message(lang: &str) -> &'static str {
    match lang {
        "jp" => "申し訳ありませんが、現在回答することができません。",
        "en" => "Sorry, we cannot provide an answer at this time.",
        "cn" => "抱歉，我们目前无法提供答案。",
        _ => FALLBACK_KO,
    }
}

pub struct ChatService<B>
where
    B: RagBackend,
{
    backend: Arc<B>,
    faq_systems: HashSet<String>,
    chat_history_enabled: bool,
}

impl<B> ChatService<B>
where
    B: RagBackend,
{
    /// `faq_type` is a comma-separated list of RAG system ids that use FAQ categories.
    pub fn new(backend: Arc<B>, faq_type: &str, chat_history_enabled: bool) -> Self {
        let faq_systems = faq_type
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            backend,
            faq_systems,
            chat_history_enabled,
        }
    }

    /// Prefixes the user's question with its FAQ categories for FAQ-backed systems.
    pub fn optimize_faq_query(&self, request: &ChatRequest) -> String {
        let user = &request.chat.user;

        let is_faq_system = request
            .meta
            .rag_sys_info
            .as_deref()
            .is_some_and(|sys| self.faq_systems.contains(sys));
        if !is_faq_system {
            return user.clone();
        }

        let categories: Vec<String> = request
            .chat
            .categories()
            .into_iter()
            .enumerate()
            .filter_map(|(idx, category)| {
                let category = category.filter(|c| !c.is_empty())?;
                if EXCLUDED_FAQ_CATEGORIES.contains(&category) {
                    return None;
                }
                Some(if idx == 2 {
                    category.to_string()
                } else {
                    format!("'{}'", category)
                })
            })
            .collect();

        if categories.is_empty() {
            user.clone()
        } else {
            format!("{}, {}", categories.join(", "), user)
        }
    }

    pub async fn process(&self, request: &ChatRequest) -> ChatResponse {
        let session_id = request.meta.session_id.as_deref().unwrap_or("N/A");
        tracing::info!(
            session_id,
            lang = %request.chat.lang,
            question = %sanitize_prompt(&request.chat.user),
            "Processing chat"
        );

        match self.answer(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(session_id, error = %e, "Chat failed");
                ChatResponse {
                    result_cd: ErrorCd::CommonException.code(),
                    result_desc: Some(ErrorCd::CommonException.description().to_string()),
                    meta: request.meta.clone(),
                    chat: ChatResponseData {
                        category1: request.chat.category1.clone(),
                        category2: request.chat.category2.clone(),
                        category3: request.chat.category3.clone(),
                        user: request.chat.user.clone(),
                        system: Some(fallback_message(&request.chat.lang).to_string()),
                        info: Some(Vec::new()),
                    },
                }
            }
        }
    }

    async fn answer(&self, request: &ChatRequest) -> Result<ChatResponse, DownstreamError> {
        let session_id = request.meta.session_id.as_deref().unwrap_or("N/A");

        let payloads = if self.chat_history_enabled {
            Vec::new()
        } else {
            self.retrieve(request).await?
        };

        let llm_request = ChatLlmRequest {
            meta: request.meta.clone(),
            chat: ChatLlmQuery {
                category1: request.chat.category1.clone(),
                category2: request.chat.category2.clone(),
                category3: request.chat.category3.clone(),
                lang: request.chat.lang.clone(),
                user: request.chat.user.clone(),
                payload: Some(payloads),
            },
        };

        if let Ok(body) = serde_json::to_string(&llm_request) {
            tracing::debug!(session_id, body = %truncate_for_log(&body), "Chat LLM request");
        }

        self.backend.chat(&llm_request).await
    }

    async fn retrieve(&self, request: &ChatRequest) -> Result<Vec<Payload>, DownstreamError> {
        let retriever_request = ChatRetrieverRequest {
            meta: request.meta.clone(),
            chat: ChatRetrieverQuery {
                category1: request.chat.category1.clone(),
                category2: request.chat.category2.clone(),
                category3: request.chat.category3.clone(),
                user: self.optimize_faq_query(request),
            },
        };

        let response = self.backend.retrieve(&retriever_request).await?;
        let payloads = response
            .chat
            .payload
            .unwrap_or_default()
            .into_iter()
            .map(|p| Payload {
                doc_path: None,
                ..p
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            session_id = request.meta.session_id.as_deref().unwrap_or("N/A"),
            payloads = payloads.len(),
            "Retriever returned payloads"
        );

        Ok(payloads)
    }
}
