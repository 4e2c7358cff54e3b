use async_trait::async_trait;

use super::DownstreamError;
use crate::domain::{CallbackRequest, CallbackResponse};

/// Delivers outcome notifications to a caller-supplied callback URL.
#[async_trait]
pub trait CallbackNotifier: Send + Sync {
    async fn notify(
        &self,
        callback_url: &str,
        request: &CallbackRequest,
    ) -> Result<CallbackResponse, DownstreamError>;
}
