use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use bot_controller::infrastructure::http::{HttpCallbackNotifier, HttpRagBackend, RestClient};
use bot_controller::infrastructure::observability::{TracingConfig, init_tracing};
use bot_controller::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(environment.as_str(), &settings.logging),
        settings.server.port,
    );

    let rest_client =
        RestClient::new(&settings.http_client).context("Failed to build HTTP client")?;
    let backend = Arc::new(HttpRagBackend::new(
        rest_client.clone(),
        settings.api_interface.clone(),
    ));
    let notifier = Arc::new(HttpCallbackNotifier::new(rest_client));

    let state = AppState::new(backend, notifier, &settings);
    let router = create_router(state);

    let ip: std::net::IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid server host: {}", settings.server.host))?;
    let addr = SocketAddr::new(ip, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
