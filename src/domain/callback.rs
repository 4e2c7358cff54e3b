use serde::{Deserialize, Serialize};

use super::meta::{CallbackRequestMeta, SessionContext};
use super::page::PageInfo;

/// Outcome payload posted to a caller's callback URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    pub result_cd: i32,
    pub result_desc: String,
    pub meta: CallbackRequestMeta,
    pub result: CallbackResult,
}

/// `page_info` is only meaningful when `result_cd` is the success code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackResult {
    pub doc_uid: String,
    pub step_cd: i32,
    #[serde(default)]
    pub page_info: Option<Vec<PageInfo>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackResponse {
    pub result_cd: i32,
    pub result_desc: String,
    pub doc_uid: String,
}

impl SessionContext for CallbackRequest {
    fn session_id(&self) -> Option<&str> {
        self.meta.session_id()
    }
}
