mod callback_sender;
mod chat_service;
mod document_service;
mod extract_dispatcher;
mod extraction_pipeline;

pub use callback_sender::CallbackSender;
pub use chat_service::{ChatService, fallback_message};
pub use document_service::{DocumentService, number_results, paginate};
pub use extract_dispatcher::ExtractDispatcher;
pub use extraction_pipeline::ExtractionPipeline;
