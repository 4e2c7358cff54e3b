use serde::{Deserialize, Serialize};

use super::meta::{DocChatCommonMeta, Meta, SessionContext};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReq {
    pub content: String,
    pub max_cnt: i32,
    #[serde(default)]
    pub page_per_cnt: Option<i32>,
    #[serde(default)]
    pub page_num: Option<i32>,
    #[serde(default)]
    pub next_ids: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocRequest {
    pub meta: Meta,
    pub search: SearchReq,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocResult {
    #[serde(default)]
    pub search_seq: Option<i32>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub doc_page: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRes {
    pub content: String,
    #[serde(default)]
    pub next_ids: Option<String>,
    pub search_cnt: i32,
    #[serde(default)]
    pub page_per_cnt: Option<i32>,
    #[serde(default)]
    pub page_num: Option<i32>,
    #[serde(default)]
    pub result: Option<Vec<SearchDocResult>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDocResponse {
    pub result_cd: i32,
    #[serde(default)]
    pub result_desc: Option<String>,
    pub meta: DocChatCommonMeta,
    #[serde(default)]
    pub search: Option<SearchRes>,
}

impl SessionContext for SearchDocRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }

    fn rag_sys_info(&self) -> Option<&str> {
        self.meta.rag_sys_info()
    }
}
