use serde::{Deserialize, Serialize};

use super::error_cd::ErrorCd;
use super::meta::{
    IndexingCallbackRequestMeta, IndexingRequestMeta, ModifyDocResponseMeta, SessionContext,
};
use super::page::PageInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingDocument {
    pub doc_uid: String,
    pub doc_name: String,
    #[serde(default)]
    pub job_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingData {
    pub document: IndexingDocument,
    #[serde(default)]
    pub page_info: Option<Vec<PageInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingRequest {
    pub meta: IndexingRequestMeta,
    pub data: IndexingData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingResponse {
    pub result_cd: i32,
    pub result_desc: String,
    #[serde(default)]
    pub meta: Option<ModifyDocResponseMeta>,
}

impl IndexingResponse {
    pub fn from_error(error: ErrorCd) -> Self {
        Self {
            result_cd: error.code(),
            result_desc: error.description().to_string(),
            meta: None,
        }
    }

    pub fn is_success(&self) -> bool {
        ErrorCd::is_success_code(self.result_cd)
    }
}

/// Sent by the indexer once a document has been ingested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingCallbackRequest {
    pub result_cd: i32,
    pub result_desc: String,
    pub meta: IndexingCallbackRequestMeta,
    pub result: IndexingCallbackResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingCallbackResult {
    pub doc_uid: String,
    pub step_cd: i32,
    #[serde(default)]
    pub page_info: Option<Vec<PageInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingCallbackResponse {
    pub result_cd: i32,
    pub result_desc: String,
    pub doc_uid: String,
}

impl SessionContext for IndexingRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }

    fn rag_sys_info(&self) -> Option<&str> {
        self.meta.rag_sys_info()
    }
}

impl SessionContext for IndexingCallbackRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }
}
