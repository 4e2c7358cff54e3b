//! Correlation metadata carried on requests and responses.
//!
//! Every variant shares `company_id` and `dept_class`; the rest depends on the
//! hop the payload travels (caller -> gateway, gateway -> backend, backend ->
//! callback receiver).

use serde::{Deserialize, Serialize};

/// Access to the fields used to key log lines for a request.
pub trait SessionContext {
    fn session_id(&self) -> Option<&str>;

    fn rag_sys_info(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub key: String,
    pub value: String,
}

/// Tenant and session context sent by callers on modify and search requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub rag_sys_info: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub modify_flag: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequestMeta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub modify_flag: bool,
}

/// Meta shared by delete, search and chat exchanges with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocChatCommonMeta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub rag_sys_info: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyDocResponseMeta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub doc_uid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRegisterRequestMeta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub rag_sys_info: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub modify_flag: bool,
    #[serde(default)]
    pub policy: Vec<Policy>,
    #[serde(default)]
    pub param1: Option<String>,
    #[serde(default)]
    pub param2: Option<String>,
    #[serde(default)]
    pub param3: Option<String>,
}

/// Correlation fields echoed back to the caller after registration fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRegisterResponseMeta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

pub type ExtractDocResponseMeta = DocumentRegisterResponseMeta;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractDocRequestMeta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub rag_sys_info: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub modify_flag: bool,
    #[serde(default)]
    pub policy: Vec<Policy>,
    #[serde(default)]
    pub param1: Option<String>,
    #[serde(default)]
    pub param2: Option<String>,
    #[serde(default)]
    pub param3: Option<String>,
    pub extract_callback_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingRequestMeta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub rag_sys_info: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub modify_flag: bool,
    #[serde(default)]
    pub indexing_callback_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingCallbackRequestMeta {
    pub company_id: String,
    #[serde(default)]
    pub dept_class: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub modify_flag: bool,
}

impl DocumentRegisterRequestMeta {
    pub fn response_meta(&self) -> DocumentRegisterResponseMeta {
        DocumentRegisterResponseMeta {
            company_id: self.company_id.clone(),
            dept_class: self.dept_class.clone(),
            session_id: self.session_id.clone(),
        }
    }

    pub fn with_extract_callback(&self, extract_callback_url: &str) -> ExtractDocRequestMeta {
        ExtractDocRequestMeta {
            company_id: self.company_id.clone(),
            dept_class: self.dept_class.clone(),
            rag_sys_info: self.rag_sys_info.clone(),
            session_id: self.session_id.clone(),
            callback_url: self.callback_url.clone(),
            modify_flag: self.modify_flag,
            policy: self.policy.clone(),
            param1: self.param1.clone(),
            param2: self.param2.clone(),
            param3: self.param3.clone(),
            extract_callback_url: extract_callback_url.to_string(),
        }
    }
}

impl Meta {
    pub fn doc_chat_meta(&self) -> DocChatCommonMeta {
        DocChatCommonMeta {
            company_id: self.company_id.clone(),
            dept_class: self.dept_class.clone(),
            rag_sys_info: self.rag_sys_info.clone(),
            session_id: self.session_id.clone(),
        }
    }

    pub fn callback_meta(&self) -> CallbackRequestMeta {
        CallbackRequestMeta {
            company_id: self.company_id.clone(),
            dept_class: self.dept_class.clone(),
            session_id: self.session_id.clone(),
            modify_flag: self.modify_flag,
        }
    }

    pub fn indexing_meta(&self, indexing_callback_url: &str) -> IndexingRequestMeta {
        IndexingRequestMeta {
            company_id: self.company_id.clone(),
            dept_class: self.dept_class.clone(),
            rag_sys_info: self.rag_sys_info.clone(),
            session_id: self.session_id.clone(),
            callback_url: self.callback_url.clone(),
            modify_flag: self.modify_flag,
            indexing_callback_url: Some(indexing_callback_url.to_string()),
        }
    }
}

impl ExtractDocRequestMeta {
    pub fn callback_meta(&self) -> CallbackRequestMeta {
        CallbackRequestMeta {
            company_id: self.company_id.clone(),
            dept_class: self.dept_class.clone(),
            session_id: self.session_id.clone(),
            modify_flag: self.modify_flag,
        }
    }
}

impl IndexingCallbackRequestMeta {
    pub fn callback_meta(&self) -> CallbackRequestMeta {
        CallbackRequestMeta {
            company_id: self.company_id.clone(),
            dept_class: self.dept_class.clone(),
            session_id: self.session_id.clone(),
            modify_flag: self.modify_flag,
        }
    }
}

macro_rules! session_context {
    ($ty:ty) => {
        impl SessionContext for $ty {
            fn session_id(&self) -> Option<&str> {
                self.session_id.as_deref()
            }
        }
    };
    ($ty:ty, rag) => {
        impl SessionContext for $ty {
            fn session_id(&self) -> Option<&str> {
                self.session_id.as_deref()
            }

            fn rag_sys_info(&self) -> Option<&str> {
                self.rag_sys_info.as_deref()
            }
        }
    };
}

session_context!(Meta, rag);
session_context!(DocChatCommonMeta, rag);
session_context!(DocumentRegisterRequestMeta, rag);
session_context!(ExtractDocRequestMeta, rag);
session_context!(IndexingRequestMeta, rag);
session_context!(CallbackRequestMeta);
session_context!(ModifyDocResponseMeta);
session_context!(DocumentRegisterResponseMeta);
session_context!(IndexingCallbackRequestMeta);
