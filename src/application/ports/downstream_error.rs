#[derive(Debug, thiserror::Error)]
pub enum DownstreamError {
    #[error("request timeout: POST {url} exceeded {timeout_secs} seconds")]
    Timeout { url: String, timeout_secs: u64 },
    #[error("connection error: unable to reach {0}")]
    Connection(String),
    #[error("http error: POST {url} returned status {status}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("no callback url configured for session {0}")]
    MissingCallbackUrl(String),
}

impl DownstreamError {
    /// Whether a retry has a chance to succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            DownstreamError::Connection(_) => true,
            DownstreamError::HttpStatus { status, .. } => {
                matches!(status, 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}
