use serde::{Deserialize, Serialize};

use super::meta::{DocumentRegisterRequestMeta, DocumentRegisterResponseMeta, SessionContext};

pub const FILE_GET_TYPE_URL: &str = "url";

/// Credentials and location needed by the extractor to fetch source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileGetInfo {
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

/// One document to register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub doc_uid: String,
    pub doc_ext: String,
    pub doc_name: String,
    pub doc_path: String,
    #[serde(default)]
    pub job_class: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub new_reg_flag: bool,
    #[serde(default)]
    pub old_doc_uid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDocuments {
    pub file_get_type: String,
    #[serde(default)]
    pub file_get_info: Option<FileGetInfo>,
    pub files: Vec<FileInfo>,
}

impl RegisterDocuments {
    pub fn fetches_by_url(&self) -> bool {
        self.file_get_type.eq_ignore_ascii_case(FILE_GET_TYPE_URL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDocRequest {
    pub meta: DocumentRegisterRequestMeta,
    pub documents: RegisterDocuments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDocResponse {
    pub result_cd: i32,
    pub result_desc: String,
    pub meta: DocumentRegisterResponseMeta,
}

impl SessionContext for RegisterDocRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }

    fn rag_sys_info(&self) -> Option<&str> {
        self.meta.rag_sys_info()
    }
}
