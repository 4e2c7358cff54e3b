use async_trait::async_trait;

use super::DownstreamError;
use crate::domain::{
    ChatLlmRequest, ChatResponse, ChatRetrieverRequest, ChatRetrieverResponse, DeleteDocRequest,
    DeleteDocResponse, ExtractDocRequest, ExtractDocResponse, IndexingRequest, IndexingResponse,
    SearchDocRequest, SearchDocResponse,
};

/// The external RAG service: extraction, indexing, deletion, search and chat.
#[async_trait]
pub trait RagBackend: Send + Sync {
    async fn extract(
        &self,
        request: &ExtractDocRequest,
    ) -> Result<ExtractDocResponse, DownstreamError>;

    async fn index(&self, request: &IndexingRequest) -> Result<IndexingResponse, DownstreamError>;

    async fn delete(
        &self,
        request: &DeleteDocRequest,
    ) -> Result<DeleteDocResponse, DownstreamError>;

    async fn search(
        &self,
        request: &SearchDocRequest,
    ) -> Result<SearchDocResponse, DownstreamError>;

    async fn retrieve(
        &self,
        request: &ChatRetrieverRequest,
    ) -> Result<ChatRetrieverResponse, DownstreamError>;

    async fn chat(&self, request: &ChatLlmRequest) -> Result<ChatResponse, DownstreamError>;
}
