mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ApiInterfaceSettings, ChatHistorySettings, HttpClientSettings, LoggingSettings,
    RetrieverSettings, ServerSettings, Settings,
};
