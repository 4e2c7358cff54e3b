use serde::{Deserialize, Serialize};

use super::meta::{DocChatCommonMeta, SessionContext};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocDelDocument {
    pub doc_uid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocDelResDocument {
    pub doc_uid: String,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDocRequest {
    pub meta: DocChatCommonMeta,
    pub documents: Vec<DocDelDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteDocResponse {
    pub result_cd: i32,
    #[serde(default)]
    pub result_desc: Option<String>,
    pub meta: DocChatCommonMeta,
    pub documents: Vec<DocDelResDocument>,
}

impl SessionContext for DeleteDocRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }

    fn rag_sys_info(&self) -> Option<&str> {
        self.meta.rag_sys_info()
    }
}
