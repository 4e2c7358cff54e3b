use async_trait::async_trait;

use super::RestClient;
use crate::application::ports::{CallbackNotifier, DownstreamError};
use crate::domain::{CallbackRequest, CallbackResponse};

pub struct HttpCallbackNotifier {
    client: RestClient,
}

impl HttpCallbackNotifier {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CallbackNotifier for HttpCallbackNotifier {
    async fn notify(
        &self,
        callback_url: &str,
        request: &CallbackRequest,
    ) -> Result<CallbackResponse, DownstreamError> {
        self.client.post_json(callback_url, request).await
    }
}
