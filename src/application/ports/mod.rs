mod callback_notifier;
mod downstream_error;
mod rag_backend;

pub use callback_notifier::CallbackNotifier;
pub use downstream_error::DownstreamError;
pub use rag_backend::RagBackend;
