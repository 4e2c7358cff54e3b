#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use bot_controller::application::ports::{CallbackNotifier, DownstreamError, RagBackend};
use bot_controller::application::services::DocumentService;
use bot_controller::domain::{
    CallbackRequest, CallbackResponse, ChatLlmRequest, ChatResponse, ChatResponseData,
    ChatRetrieved, ChatRetrieverRequest, ChatRetrieverResponse, DeleteDocRequest,
    DeleteDocResponse, DocChatCommonMeta, DocDelResDocument, DocumentRegisterRequestMeta,
    ErrorCd, ExtractCallbackRequest, ExtractCallbackResult, ExtractDocRequest,
    ExtractDocResponse, FileInfo, IndexingCallbackRequest, IndexingCallbackRequestMeta,
    IndexingCallbackResult, IndexingRequest, IndexingResponse, Meta, PageInfo, Payload,
    RegisterDocRequest, RegisterDocuments, SearchDocRequest, SearchDocResponse,
    SearchDocResult, SearchRes,
};
use bot_controller::presentation::config::{
    ApiInterfaceSettings, ChatHistorySettings, HttpClientSettings, LoggingSettings,
    RetrieverSettings, ServerSettings,
};
use bot_controller::presentation::Settings;

pub const CALLER_CALLBACK_URL: &str = "http://caller.test/callback";
pub const EXTRACT_CALLBACK_URL: &str = "http://gateway.test/v1/extract-callback";
pub const INDEXING_CALLBACK_URL: &str = "http://gateway.test/v1/indexing-callback";
pub const FAQ_SYSTEM: &str = "faq-bot";

/// How the mock extractor answers for a given document.
#[derive(Debug, Clone)]
pub enum ExtractOutcome {
    Accepted,
    Rejected(i32, &'static str),
    Unreachable,
}

fn unreachable_error(endpoint: &str) -> DownstreamError {
    DownstreamError::Connection(format!("http://backend.test/{}", endpoint))
}

pub struct MockRagBackend {
    extract_outcomes: HashMap<String, ExtractOutcome>,
    extract_delay: Option<Duration>,
    extract_panics: bool,
    index_response: Option<IndexingResponse>,
    delete_fails: bool,
    search_results: Option<(Vec<SearchDocResult>, i32)>,
    retrieve_payloads: Option<Vec<Payload>>,
    chat_fails: bool,
    pub extract_calls: Mutex<Vec<ExtractDocRequest>>,
    pub index_calls: Mutex<Vec<IndexingRequest>>,
    pub delete_calls: Mutex<Vec<DeleteDocRequest>>,
    pub search_calls: Mutex<Vec<SearchDocRequest>>,
    pub retrieve_calls: Mutex<Vec<ChatRetrieverRequest>>,
    pub chat_calls: Mutex<Vec<ChatLlmRequest>>,
}

impl MockRagBackend {
    pub fn new() -> Self {
        Self {
            extract_outcomes: HashMap::new(),
            extract_delay: None,
            extract_panics: false,
            index_response: Some(IndexingResponse::from_error(ErrorCd::Success)),
            delete_fails: false,
            search_results: Some((Vec::new(), 0)),
            retrieve_payloads: Some(Vec::new()),
            chat_fails: false,
            extract_calls: Mutex::new(Vec::new()),
            index_calls: Mutex::new(Vec::new()),
            delete_calls: Mutex::new(Vec::new()),
            search_calls: Mutex::new(Vec::new()),
            retrieve_calls: Mutex::new(Vec::new()),
            chat_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_extract_outcome(mut self, doc_uid: &str, outcome: ExtractOutcome) -> Self {
        self.extract_outcomes.insert(doc_uid.to_string(), outcome);
        self
    }

    pub fn with_extract_delay(mut self, delay: Duration) -> Self {
        self.extract_delay = Some(delay);
        self
    }

    pub fn with_extract_panic(mut self) -> Self {
        self.extract_panics = true;
        self
    }

    pub fn with_index_response(mut self, response: IndexingResponse) -> Self {
        self.index_response = Some(response);
        self
    }

    pub fn with_index_unreachable(mut self) -> Self {
        self.index_response = None;
        self
    }

    pub fn with_delete_unreachable(mut self) -> Self {
        self.delete_fails = true;
        self
    }

    pub fn with_search_results(mut self, results: Vec<SearchDocResult>, search_cnt: i32) -> Self {
        self.search_results = Some((results, search_cnt));
        self
    }

    pub fn with_search_unreachable(mut self) -> Self {
        self.search_results = None;
        self
    }

    pub fn with_retrieved_payloads(mut self, payloads: Vec<Payload>) -> Self {
        self.retrieve_payloads = Some(payloads);
        self
    }

    pub fn with_chat_unreachable(mut self) -> Self {
        self.chat_fails = true;
        self
    }

    pub fn extract_count(&self) -> usize {
        self.extract_calls.lock().unwrap().len()
    }

    pub fn index_count(&self) -> usize {
        self.index_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RagBackend for MockRagBackend {
    async fn extract(
        &self,
        request: &ExtractDocRequest,
    ) -> Result<ExtractDocResponse, DownstreamError> {
        self.extract_calls.lock().unwrap().push(request.clone());

        if let Some(delay) = self.extract_delay {
            tokio::time::sleep(delay).await;
        }

        if self.extract_panics {
            panic!("extractor crashed on {}", request.doc_uid());
        }

        let outcome = self
            .extract_outcomes
            .get(request.doc_uid())
            .cloned()
            .unwrap_or(ExtractOutcome::Accepted);

        match outcome {
            ExtractOutcome::Accepted => Ok(ExtractDocResponse {
                result_cd: ErrorCd::Success.code(),
                result_desc: ErrorCd::Success.description().to_string(),
                meta: None,
            }),
            ExtractOutcome::Rejected(result_cd, result_desc) => Ok(ExtractDocResponse {
                result_cd,
                result_desc: result_desc.to_string(),
                meta: None,
            }),
            ExtractOutcome::Unreachable => Err(unreachable_error("extract")),
        }
    }

    async fn index(&self, request: &IndexingRequest) -> Result<IndexingResponse, DownstreamError> {
        self.index_calls.lock().unwrap().push(request.clone());
        self.index_response
            .clone()
            .ok_or_else(|| unreachable_error("indexing"))
    }

    async fn delete(
        &self,
        request: &DeleteDocRequest,
    ) -> Result<DeleteDocResponse, DownstreamError> {
        self.delete_calls.lock().unwrap().push(request.clone());
        if self.delete_fails {
            return Err(unreachable_error("delete"));
        }

        Ok(DeleteDocResponse {
            result_cd: ErrorCd::Success.code(),
            result_desc: Some(ErrorCd::Success.description().to_string()),
            meta: request.meta.clone(),
            documents: request
                .documents
                .iter()
                .map(|d| DocDelResDocument {
                    doc_uid: d.doc_uid.clone(),
                    success: true,
                })
                .collect(),
        })
    }

    async fn search(
        &self,
        request: &SearchDocRequest,
    ) -> Result<SearchDocResponse, DownstreamError> {
        self.search_calls.lock().unwrap().push(request.clone());
        let (results, search_cnt) = self
            .search_results
            .clone()
            .ok_or_else(|| unreachable_error("search"))?;

        Ok(SearchDocResponse {
            result_cd: ErrorCd::Success.code(),
            result_desc: Some(ErrorCd::Success.description().to_string()),
            meta: request.meta.doc_chat_meta(),
            search: Some(SearchRes {
                content: request.search.content.clone(),
                next_ids: Some("next-1".to_string()),
                search_cnt,
                page_per_cnt: None,
                page_num: None,
                result: Some(results),
            }),
        })
    }

    async fn retrieve(
        &self,
        request: &ChatRetrieverRequest,
    ) -> Result<ChatRetrieverResponse, DownstreamError> {
        self.retrieve_calls.lock().unwrap().push(request.clone());
        let payloads = self
            .retrieve_payloads
            .clone()
            .ok_or_else(|| unreachable_error("retriever"))?;

        Ok(ChatRetrieverResponse {
            result_cd: ErrorCd::Success.code(),
            result_desc: ErrorCd::Success.description().to_string(),
            meta: request.meta.clone(),
            chat: ChatRetrieved {
                category1: request.chat.category1.clone(),
                category2: request.chat.category2.clone(),
                category3: request.chat.category3.clone(),
                user: request.chat.user.clone(),
                payload: Some(payloads),
            },
        })
    }

    async fn chat(&self, request: &ChatLlmRequest) -> Result<ChatResponse, DownstreamError> {
        self.chat_calls.lock().unwrap().push(request.clone());
        if self.chat_fails {
            return Err(unreachable_error("chat"));
        }

        Ok(ChatResponse {
            result_cd: ErrorCd::Success.code(),
            result_desc: Some(ErrorCd::Success.description().to_string()),
            meta: request.meta.clone(),
            chat: ChatResponseData {
                category1: request.chat.category1.clone(),
                category2: request.chat.category2.clone(),
                category3: request.chat.category3.clone(),
                user: request.chat.user.clone(),
                system: Some("Mock answer".to_string()),
                info: request.chat.payload.clone(),
            },
        })
    }
}

/// Records every callback; optionally fails each delivery after recording it.
pub struct MockCallbackNotifier {
    fail: bool,
    pub calls: Mutex<Vec<(String, CallbackRequest)>>,
}

impl MockCallbackNotifier {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded(&self) -> Vec<(String, CallbackRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallbackNotifier for MockCallbackNotifier {
    async fn notify(
        &self,
        callback_url: &str,
        request: &CallbackRequest,
    ) -> Result<CallbackResponse, DownstreamError> {
        self.calls
            .lock()
            .unwrap()
            .push((callback_url.to_string(), request.clone()));

        if self.fail {
            return Err(DownstreamError::HttpStatus {
                url: callback_url.to_string(),
                status: 500,
                body: "callback receiver down".to_string(),
            });
        }

        Ok(CallbackResponse {
            result_cd: ErrorCd::Success.code(),
            result_desc: ErrorCd::Success.description().to_string(),
            doc_uid: request.result.doc_uid.clone(),
        })
    }
}

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        api_interface: ApiInterfaceSettings {
            extract_request_url: "http://backend.test/extract".to_string(),
            indexing_request_url: "http://backend.test/indexing".to_string(),
            doc_del_request_url: "http://backend.test/delete".to_string(),
            doc_search_request_url: "http://backend.test/search".to_string(),
            retriever_request_url: "http://backend.test/retriever".to_string(),
            chat_llm_request_url: "http://backend.test/chat".to_string(),
            extract_callback_url: EXTRACT_CALLBACK_URL.to_string(),
            indexing_callback_url: INDEXING_CALLBACK_URL.to_string(),
        },
        http_client: HttpClientSettings::default(),
        retriever: RetrieverSettings {
            faq_type: FAQ_SYSTEM.to_string(),
        },
        chat_history: ChatHistorySettings { enabled: false },
        logging: LoggingSettings {
            level: "debug".to_string(),
            enable_json: false,
        },
    }
}

pub fn meta() -> Meta {
    Meta {
        company_id: "acme".to_string(),
        dept_class: Some("sales".to_string()),
        rag_sys_info: Some("doc-bot".to_string()),
        session_id: Some("sess-1".to_string()),
        callback_url: Some(CALLER_CALLBACK_URL.to_string()),
        modify_flag: false,
    }
}

pub fn doc_chat_meta(rag_sys_info: &str) -> DocChatCommonMeta {
    DocChatCommonMeta {
        company_id: "acme".to_string(),
        dept_class: Some("sales".to_string()),
        rag_sys_info: Some(rag_sys_info.to_string()),
        session_id: Some("sess-1".to_string()),
    }
}

pub fn file_info(doc_uid: &str) -> FileInfo {
    FileInfo {
        doc_uid: doc_uid.to_string(),
        doc_ext: "pdf".to_string(),
        doc_name: format!("{}.pdf", doc_uid),
        doc_path: "/shared/docs".to_string(),
        job_class: Some("manual".to_string()),
        file_url: Some(format!("http://files.test/{}.pdf", doc_uid)),
        new_reg_flag: true,
        old_doc_uid: None,
    }
}

pub fn register_request(doc_uids: &[&str]) -> RegisterDocRequest {
    RegisterDocRequest {
        meta: DocumentRegisterRequestMeta {
            company_id: "acme".to_string(),
            dept_class: Some("sales".to_string()),
            rag_sys_info: Some("doc-bot".to_string()),
            session_id: Some("sess-1".to_string()),
            callback_url: Some(CALLER_CALLBACK_URL.to_string()),
            modify_flag: false,
            policy: Vec::new(),
            param1: None,
            param2: None,
            param3: None,
        },
        documents: RegisterDocuments {
            file_get_type: "URL".to_string(),
            file_get_info: None,
            files: doc_uids.iter().map(|uid| file_info(uid)).collect(),
        },
    }
}

/// Per-file extract requests exactly as the registration path derives them.
pub fn extract_requests(request: &RegisterDocRequest) -> Vec<ExtractDocRequest> {
    DocumentService::new(
        Arc::new(MockRagBackend::new()),
        EXTRACT_CALLBACK_URL.to_string(),
        INDEXING_CALLBACK_URL.to_string(),
    )
    .build_extract_requests(request)
}

pub fn extract_callback_request(
    doc_uid: &str,
    result_cd: i32,
    modify_flag: bool,
) -> ExtractCallbackRequest {
    ExtractCallbackRequest {
        result_cd,
        result_desc: if ErrorCd::is_success_code(result_cd) {
            "Success".to_string()
        } else {
            "Unsupported file".to_string()
        },
        meta: Meta {
            modify_flag,
            ..meta()
        },
        result: ExtractCallbackResult {
            doc_uid: doc_uid.to_string(),
            doc_name: format!("{}.pdf", doc_uid),
            doc_path: "/shared/docs".to_string(),
            job_class: Some("manual".to_string()),
            step_cd: 1,
            page_info: Some(vec![
                PageInfo {
                    page_num: 1,
                    context: Some("first page".to_string()),
                },
                PageInfo {
                    page_num: 2,
                    context: None,
                },
            ]),
        },
    }
}

pub fn indexing_callback_request(doc_uid: &str) -> IndexingCallbackRequest {
    IndexingCallbackRequest {
        result_cd: ErrorCd::Success.code(),
        result_desc: "Success".to_string(),
        meta: IndexingCallbackRequestMeta {
            company_id: "acme".to_string(),
            dept_class: Some("sales".to_string()),
            session_id: Some("sess-1".to_string()),
            callback_url: Some(CALLER_CALLBACK_URL.to_string()),
            modify_flag: false,
        },
        result: IndexingCallbackResult {
            doc_uid: doc_uid.to_string(),
            step_cd: 2,
            page_info: Some(vec![PageInfo {
                page_num: 1,
                context: Some("first page".to_string()),
            }]),
        },
    }
}

pub fn search_result(file_name: &str) -> SearchDocResult {
    SearchDocResult {
        search_seq: None,
        file_name: Some(file_name.to_string()),
        file_path: Some("/shared/docs".to_string()),
        doc_page: Some("1".to_string()),
        data: Some(format!("contents of {}", file_name)),
    }
}
