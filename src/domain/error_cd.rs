use std::fmt;

use serde::Serialize;

/// Result codes shared by every response envelope and outbound callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCd {
    Success,
    InvalidRequest,
    CommonException,
    NoFileInfo,
    NoCallbackUrl,
    IndexingReqExcept,
    IndexingCallbackExcept,
    DeleteDocExcept,
    SearchDocExcept,
    ExtractReqExcept,
}

impl ErrorCd {
    pub fn code(&self) -> i32 {
        match self {
            ErrorCd::Success => 200,
            ErrorCd::InvalidRequest => 422,
            ErrorCd::CommonException => 500,
            ErrorCd::NoFileInfo => 460,
            ErrorCd::NoCallbackUrl => 461,
            ErrorCd::IndexingReqExcept => 462,
            ErrorCd::IndexingCallbackExcept => 463,
            ErrorCd::DeleteDocExcept => 464,
            ErrorCd::SearchDocExcept => 465,
            ErrorCd::ExtractReqExcept => 466,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCd::Success => "Success",
            ErrorCd::InvalidRequest => "Request validation failed.",
            ErrorCd::CommonException => "Internal Server Error",
            ErrorCd::NoFileInfo => "File information does not exist",
            ErrorCd::NoCallbackUrl => "Callback URL does not exist",
            ErrorCd::IndexingReqExcept => "An error occurred while calling the indexing API.",
            ErrorCd::IndexingCallbackExcept => "Error while processing indexing callback.",
            ErrorCd::DeleteDocExcept => "Document delete failed (exception).",
            ErrorCd::SearchDocExcept => "Document search failed (exception).",
            ErrorCd::ExtractReqExcept => "An error occurred while calling the extract API.",
        }
    }

    pub fn is_success_code(code: i32) -> bool {
        code == ErrorCd::Success.code()
    }

    pub fn envelope(&self) -> ResultEnvelope {
        ResultEnvelope {
            result_cd: self.code(),
            result_desc: self.description().to_string(),
        }
    }
}

impl fmt::Display for ErrorCd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.description())
    }
}

/// Minimal `{result_cd, result_desc}` body used when no richer response applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEnvelope {
    pub result_cd: i32,
    pub result_desc: String,
}
