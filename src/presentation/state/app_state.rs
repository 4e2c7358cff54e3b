use std::sync::Arc;

use crate::application::ports::{CallbackNotifier, RagBackend};
use crate::application::services::{
    CallbackSender, ChatService, DocumentService, ExtractDispatcher, ExtractionPipeline,
};
use crate::presentation::config::Settings;

pub struct AppState<B, N>
where
    B: RagBackend,
    N: CallbackNotifier,
{
    pub document_service: Arc<DocumentService<B>>,
    pub chat_service: Arc<ChatService<B>>,
    pub extract_dispatcher: Arc<ExtractDispatcher<B, N>>,
    pub extraction_pipeline: Arc<ExtractionPipeline<B, N>>,
}

impl<B, N> AppState<B, N>
where
    B: RagBackend,
    N: CallbackNotifier,
{
    /// Wires every service around the two downstream ports.
    pub fn new(backend: Arc<B>, notifier: Arc<N>, settings: &Settings) -> Self {
        let callbacks = CallbackSender::new(notifier);
        let api = &settings.api_interface;

        Self {
            document_service: Arc::new(DocumentService::new(
                Arc::clone(&backend),
                api.extract_callback_url.clone(),
                api.indexing_callback_url.clone(),
            )),
            chat_service: Arc::new(ChatService::new(
                Arc::clone(&backend),
                &settings.retriever.faq_type,
                settings.chat_history.enabled,
            )),
            extract_dispatcher: Arc::new(ExtractDispatcher::new(
                Arc::clone(&backend),
                callbacks.clone(),
            )),
            extraction_pipeline: Arc::new(ExtractionPipeline::new(
                backend,
                callbacks,
                api.indexing_callback_url.clone(),
            )),
        }
    }
}

impl<B, N> Clone for AppState<B, N>
where
    B: RagBackend,
    N: CallbackNotifier,
{
    fn clone(&self) -> Self {
        Self {
            document_service: Arc::clone(&self.document_service),
            chat_service: Arc::clone(&self.chat_service),
            extract_dispatcher: Arc::clone(&self.extract_dispatcher),
            extraction_pipeline: Arc::clone(&self.extraction_pipeline),
        }
    }
}
