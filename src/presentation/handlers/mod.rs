mod chat;
mod delete;
mod dummy_callback;
mod extract_callback;
mod health;
mod indexing_callback;
mod modify;
mod register;
mod search;

pub use chat::chat_handler;
pub use delete::delete_handler;
pub use dummy_callback::dummy_callback_handler;
pub use extract_callback::extract_callback_handler;
pub use health::health_handler;
pub use indexing_callback::indexing_callback_handler;
pub use modify::modify_handler;
pub use register::register_handler;
pub use search::search_handler;
