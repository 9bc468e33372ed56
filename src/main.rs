use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubescript::{config::settings::Settings, services::youtube::YouTubeClient, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;
    let provider = YouTubeClient::new(&settings.accept_language)?;
    let state = AppState {
        provider: Arc::new(provider),
    };

    let listener = tokio::net::TcpListener::bind(settings.addr()).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, tubescript::app(state)).await?;
    Ok(())
}
