use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::modules::transcript::model::{TranscriptFailure, TranscriptSuccess};

/// `youtubeUrl` is kept as raw JSON: empty values (`""`, `0`, `false`, `[]`,
/// `{}`) count as missing, other non-strings are rejected later as bad input.
#[derive(Debug, Deserialize, Validate)]
pub struct TranscriptRequest {
    #[serde(rename = "youtubeUrl", default)]
    #[validate(required, custom(function = "validate_not_empty"))]
    pub youtube_url: Option<Value>,
}

impl TranscriptRequest {
    pub fn youtube_url(&self) -> Option<&str> {
        self.youtube_url.as_ref().and_then(Value::as_str)
    }
}

fn validate_not_empty(value: &Value) -> Result<(), ValidationError> {
    let present = match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    };

    if present {
        Ok(())
    } else {
        Err(ValidationError::new("required"))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResponse {
    pub success: bool,
    pub transcript: String,
    pub video_title: String,
    pub video_id: String,
    pub language: String,
    pub word_count: usize,
}

impl From<TranscriptSuccess> for TranscriptResponse {
    fn from(s: TranscriptSuccess) -> Self {
        Self {
            success: true,
            transcript: s.transcript,
            video_title: s.video_title,
            video_id: s.video_id.to_string(),
            language: s.language,
            word_count: s.word_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptErrorResponse {
    pub success: bool,
    pub error: String,
    pub video_id: Option<String>,
}

impl From<TranscriptFailure> for TranscriptErrorResponse {
    fn from(f: TranscriptFailure) -> Self {
        Self {
            success: false,
            error: f.error,
            video_id: f.video_id.map(|id| id.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> TranscriptRequest {
        serde_json::from_value(json!({ "youtubeUrl": value })).unwrap()
    }

    #[test]
    fn test_empty_values_fail_validation() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(request(value.clone()).validate().is_err(), "{} should be missing", value);
        }
    }

    #[test]
    fn test_non_empty_values_pass_validation() {
        for value in [json!("dQw4w9WgXcQ"), json!(42), json!(true), json!(["dQw4w9WgXcQ"]), json!({ "a": 1 })] {
            assert!(request(value.clone()).validate().is_ok(), "{} should be present", value);
        }
    }

    #[test]
    fn test_youtube_url_only_returns_strings() {
        assert_eq!(request(json!("dQw4w9WgXcQ")).youtube_url(), Some("dQw4w9WgXcQ"));
        assert_eq!(request(json!(42)).youtube_url(), None);
    }
}
