use axum::{routing::post, Router};

use crate::modules::transcript::controller;
use crate::AppState;

pub const TRANSCRIPT_PATH: &str = "/api/youtube_transcript";

pub fn routes() -> Router<AppState> {
    Router::new().route(
        TRANSCRIPT_PATH,
        post(controller::get_transcript)
            .options(controller::preflight)
            .fallback(controller::method_not_allowed),
    )
}
