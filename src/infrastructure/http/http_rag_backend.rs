use async_trait::async_trait;

use super::RestClient;
use crate::application::ports::{DownstreamError, RagBackend};
use crate::domain::{
    ChatLlmRequest, ChatResponse, ChatRetrieverRequest, ChatRetrieverResponse, DeleteDocRequest,
    DeleteDocResponse, ExtractDocRequest, ExtractDocResponse, IndexingRequest, IndexingResponse,
    SearchDocRequest, SearchDocResponse,
};
use crate::presentation::config::ApiInterfaceSettings;

pub struct HttpRagBackend {
    client: RestClient,
    endpoints: ApiInterfaceSettings,
}

impl HttpRagBackend {
    pub fn new(client: RestClient, endpoints: ApiInterfaceSettings) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl RagBackend for HttpRagBackend {
    async fn extract(
        &self,
        request: &ExtractDocRequest,
    ) -> Result<ExtractDocResponse, DownstreamError> {
        self.client
            .post_json(&self.endpoints.extract_request_url, request)
            .await
    }

    async fn index(&self, request: &IndexingRequest) -> Result<IndexingResponse, DownstreamError> {
        self.client
            .post_json(&self.endpoints.indexing_request_url, request)
            .await
    }

    async fn delete(
        &self,
        request: &DeleteDocRequest,
    ) -> Result<DeleteDocResponse, DownstreamError> {
        self.client
            .post_json(&self.endpoints.doc_del_request_url, request)
            .await
    }

    async fn search(
        &self,
        request: &SearchDocRequest,
    ) -> Result<SearchDocResponse, DownstreamError> {
        self.client
            .post_json(&self.endpoints.doc_search_request_url, request)
            .await
    }

    async fn retrieve(
        &self,
        request: &ChatRetrieverRequest,
    ) -> Result<ChatRetrieverResponse, DownstreamError> {
        self.client
            .post_json(&self.endpoints.retriever_request_url, request)
            .await
    }

    async fn chat(&self, request: &ChatLlmRequest) -> Result<ChatResponse, DownstreamError> {
        self.client
            .post_json(&self.endpoints.chat_llm_request_url, request)
            .await
    }
}
