use serde::Serialize;
use std::fmt;

/// An 11-character YouTube video identifier. Only the resolver builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub(super) fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSuccess {
    pub transcript: String,
    pub video_title: String,
    pub video_id: VideoId,
    pub language: String,
    pub word_count: usize,
}

impl TranscriptSuccess {
    pub fn new(video_id: VideoId, language: String, transcript: String) -> Self {
        Self {
            word_count: transcript.split_whitespace().count(),
            video_title: format!("YouTube Video {}", video_id),
            transcript,
            video_id,
            language,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptFailure {
    pub error: String,
    pub video_id: Option<VideoId>,
}

/// Result of one pass through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptOutcome {
    Success(TranscriptSuccess),
    Failure(TranscriptFailure),
}

impl TranscriptOutcome {
    pub fn failure(error: impl Into<String>, video_id: Option<VideoId>) -> Self {
        Self::Failure(TranscriptFailure {
            error: error.into(),
            video_id,
        })
    }
}
