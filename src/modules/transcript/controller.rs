use axum::{body::Bytes, extract::State, Json};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::modules::transcript::{
    error::ApiError,
    fetcher::{TranscriptFetcher, INVALID_INPUT},
    model::TranscriptOutcome,
    schema::{MessageResponse, TranscriptRequest, TranscriptResponse},
};
use crate::AppState;

fn parse_request(body: &[u8]) -> Result<TranscriptRequest, ApiError> {
    let body = if body.is_empty() { b"{}".as_slice() } else { body };

    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ApiError::Internal(format!("Invalid JSON body: {}", e)))?;
    if !value.is_object() {
        return Err(ApiError::Internal("Request body is not a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| ApiError::Internal(format!("Invalid request body: {}", e)))
}

pub async fn get_transcript(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let payload = parse_request(&body)?;
    if payload.validate().is_err() {
        return Err(ApiError::MissingUrl);
    }

    let fetcher = TranscriptFetcher::new(state.provider.clone());
    let span = info_span!("transcript_request", request_id = %Uuid::new_v4());

    let outcome = match payload.youtube_url() {
        Some(input) => fetcher.run(input).instrument(span).await,
        None => {
            warn!("youtubeUrl is not a string");
            TranscriptOutcome::failure(INVALID_INPUT, None)
        }
    };

    match outcome {
        TranscriptOutcome::Success(success) => Ok(Json(success.into())),
        TranscriptOutcome::Failure(failure) => Err(ApiError::Transcript(failure.into())),
    }
}

pub async fn preflight() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "CORS preflight".to_string(),
    })
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_body_as_empty_object() {
        let request = parse_request(b"").unwrap();
        assert!(request.youtube_url.is_none());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_parse_youtube_url() {
        let request = parse_request(br#"{"youtubeUrl": "dQw4w9WgXcQ"}"#).unwrap();
        assert_eq!(request.youtube_url(), Some("dQw4w9WgXcQ"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_url_fails_validation() {
        let request = parse_request(br#"{"youtubeUrl": ""}"#).unwrap();
        assert!(request.validate().is_err());

        let request = parse_request(br#"{"youtubeUrl": null}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_string_url_parses() {
        let request = parse_request(br#"{"youtubeUrl": 42}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.youtube_url(), None);
    }

    #[test]
    fn test_malformed_bodies_are_internal_errors() {
        let bodies: [&[u8]; 3] = [b"{not json", b"[\"dQw4w9WgXcQ\"]", b"null"];
        for body in bodies {
            assert!(matches!(parse_request(body), Err(ApiError::Internal(_))));
        }
    }
}
