use serde::{Deserialize, Serialize};

use super::meta::{ExtractDocRequestMeta, ExtractDocResponseMeta, Meta, SessionContext};
use super::page::PageInfo;
use super::registration::{FileGetInfo, FileInfo};

/// Per-file extract request; one is derived for every `FileInfo` of a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractDocRequest {
    pub meta: ExtractDocRequestMeta,
    pub documents: ExtractDocuments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractDocuments {
    pub file_get_type: String,
    #[serde(default)]
    pub file_get_info: Option<FileGetInfo>,
    pub files: FileInfo,
}

impl ExtractDocRequest {
    pub fn doc_uid(&self) -> &str {
        &self.documents.files.doc_uid
    }
}

/// Extractor acknowledgement. Only the code matters to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractDocResponse {
    pub result_cd: i32,
    #[serde(default)]
    pub result_desc: String,
    #[serde(default)]
    pub meta: Option<ExtractDocResponseMeta>,
}

/// Sent by the extractor once a file has been processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractCallbackRequest {
    pub result_cd: i32,
    pub result_desc: String,
    pub meta: Meta,
    pub result: ExtractCallbackResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractCallbackResult {
    pub doc_uid: String,
    pub doc_name: String,
    pub doc_path: String,
    #[serde(default)]
    pub job_class: Option<String>,
    pub step_cd: i32,
    #[serde(default)]
    pub page_info: Option<Vec<PageInfo>>,
}

impl ExtractCallbackResult {
    pub fn has_context(&self) -> bool {
        self.page_info
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(PageInfo::has_context)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractCallbackResponse {
    pub result_cd: i32,
    pub result_desc: String,
    pub doc_uid: String,
}

impl SessionContext for ExtractDocRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }

    fn rag_sys_info(&self) -> Option<&str> {
        self.meta.rag_sys_info()
    }
}

impl SessionContext for ExtractCallbackRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }

    fn rag_sys_info(&self) -> Option<&str> {
        self.meta.rag_sys_info()
    }
}
