use serde::{Deserialize, Serialize};

use super::indexing::IndexingResponse;
use super::meta::{Meta, ModifyDocResponseMeta, SessionContext};
use super::page::PageInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyReqDocument {
    pub doc_uid: String,
    #[serde(default)]
    pub doc_name: Option<String>,
    #[serde(default)]
    pub job_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyReqData {
    pub document: ModifyReqDocument,
    #[serde(default)]
    pub page_info: Option<Vec<PageInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyDocRequest {
    pub meta: Meta,
    pub data: ModifyReqData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyDocResponse {
    pub result_cd: i32,
    #[serde(default)]
    pub result_desc: Option<String>,
    pub meta: ModifyDocResponseMeta,
}

impl ModifyDocResponse {
    /// Adopts an indexer answer, substituting `fallback_meta` when the indexer omitted one.
    pub fn from_indexing(response: IndexingResponse, fallback_meta: ModifyDocResponseMeta) -> Self {
        Self {
            result_cd: response.result_cd,
            result_desc: Some(response.result_desc),
            meta: response.meta.unwrap_or(fallback_meta),
        }
    }
}

impl SessionContext for ModifyDocRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }

    fn rag_sys_info(&self) -> Option<&str> {
        self.meta.rag_sys_info()
    }
}
