mod http_callback_notifier;
mod http_rag_backend;
mod rest_client;

pub use http_callback_notifier::HttpCallbackNotifier;
pub use http_rag_backend::HttpRagBackend;
pub use rest_client::RestClient;
