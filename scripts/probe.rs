//! Run with: cargo run --bin probe -- <youtube-url-or-id>

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tubescript::config::settings::Settings;
use tubescript::modules::transcript::{
    fetcher::TranscriptFetcher,
    model::TranscriptOutcome,
    schema::{TranscriptErrorResponse, TranscriptResponse},
};
use tubescript::services::youtube::YouTubeClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input = std::env::args()
        .nth(1)
        .context("usage: probe <youtube-url-or-id>")?;

    let settings = Settings::from_env()?;
    let fetcher = TranscriptFetcher::new(Arc::new(YouTubeClient::new(&settings.accept_language)?));

    let rendered = match fetcher.run(&input).await {
        TranscriptOutcome::Success(success) => serde_json::to_string_pretty(&TranscriptResponse::from(success))?,
        TranscriptOutcome::Failure(failure) => {
            serde_json::to_string_pretty(&TranscriptErrorResponse::from(failure))?
        }
    };
    println!("{}", rendered);

    Ok(())
}
