use serde::{Deserialize, Serialize};

use super::meta::{DocChatCommonMeta, SessionContext};
use super::page::Payload;

pub const DEFAULT_LANG: &str = "ko";

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequestData {
    #[serde(default)]
    pub category1: Option<String>,
    #[serde(default)]
    pub category2: Option<String>,
    #[serde(default)]
    pub category3: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    pub user: String,
}

impl ChatRequestData {
    pub fn categories(&self) -> [Option<&str>; 3] {
        [
            self.category1.as_deref(),
            self.category2.as_deref(),
            self.category3.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub meta: DocChatCommonMeta,
    pub chat: ChatRequestData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponseData {
    #[serde(default)]
    pub category1: Option<String>,
    #[serde(default)]
    pub category2: Option<String>,
    #[serde(default)]
    pub category3: Option<String>,
    pub user: String,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub info: Option<Vec<Payload>>,
}

/// Chat answer, passed through from the chat model with its own result code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub result_cd: i32,
    #[serde(default)]
    pub result_desc: Option<String>,
    pub meta: DocChatCommonMeta,
    pub chat: ChatResponseData,
}

/// Retriever query: the caller's chat data without `lang`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRetrieverRequest {
    pub meta: DocChatCommonMeta,
    pub chat: ChatRetrieverQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRetrieverQuery {
    #[serde(default)]
    pub category1: Option<String>,
    #[serde(default)]
    pub category2: Option<String>,
    #[serde(default)]
    pub category3: Option<String>,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRetrieverResponse {
    pub result_cd: i32,
    pub result_desc: String,
    pub meta: DocChatCommonMeta,
    pub chat: ChatRetrieved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRetrieved {
    #[serde(default)]
    pub category1: Option<String>,
    #[serde(default)]
    pub category2: Option<String>,
    #[serde(default)]
    pub category3: Option<String>,
    pub user: String,
    #[serde(default)]
    pub payload: Option<Vec<Payload>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLlmRequest {
    pub meta: DocChatCommonMeta,
    pub chat: ChatLlmQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLlmQuery {
    #[serde(default)]
    pub category1: Option<String>,
    #[serde(default)]
    pub category2: Option<String>,
    #[serde(default)]
    pub category3: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    pub user: String,
    #[serde(default)]
    pub payload: Option<Vec<Payload>>,
}

impl SessionContext for ChatRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }

    fn rag_sys_info(&self) -> Option<&str> {
        self.meta.rag_sys_info()
    }
}
