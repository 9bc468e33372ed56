use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a caption provider. The messages are diagnostic text
/// forwarded to callers as-is; nothing downstream should match on them.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("YouTube is blocking requests from this IP (video {0})")]
    IpBlocked(String),
    #[error("YouTube requires sign-in to confirm this is not a bot (video {0})")]
    RequestBlocked(String),
    #[error("Video {0} is age restricted")]
    AgeRestricted(String),
    #[error("Video {0} is no longer available")]
    VideoUnavailable(String),
    #[error("Video {0} is unplayable: {1}")]
    VideoUnplayable(String, String),
    #[error("Subtitles are disabled for video {0}")]
    TranscriptsDisabled(String),
    #[error("Could not parse YouTube data for video {0}")]
    DataUnparsable(String),
    #[error("Failed to accept the consent cookie for video {0}")]
    ConsentCookie(String),
    #[error("Video {0} requires a PO token to fetch captions")]
    PoTokenRequired(String),
    #[error("Invalid caption data: {0}")]
    InvalidResponse(String),
    #[error("No transcript found for video {video_id} in languages {languages:?}")]
    NoTranscriptFound {
        video_id: String,
        languages: Vec<String>,
    },
}

/// A single timed caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// One caption track advertised for a video.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    pub language_code: String,
    pub language: String,
    pub is_generated: bool,
    pub base_url: String,
}

/// Every caption track available for a video, in the order the provider listed them.
#[derive(Debug, Clone, Default)]
pub struct TranscriptList {
    pub video_id: String,
    pub tracks: Vec<TrackInfo>,
}

impl TranscriptList {
    pub fn new(video_id: impl Into<String>, tracks: Vec<TrackInfo>) -> Self {
        Self {
            video_id: video_id.into(),
            tracks,
        }
    }

    pub fn find_manually_created(&self, language_codes: &[&str]) -> Result<&TrackInfo, ProviderError> {
        self.find(language_codes, false)
    }

    pub fn find_generated(&self, language_codes: &[&str]) -> Result<&TrackInfo, ProviderError> {
        self.find(language_codes, true)
    }

    fn find(&self, language_codes: &[&str], generated: bool) -> Result<&TrackInfo, ProviderError> {
        for lang_code in language_codes {
            if let Some(track) = self
                .tracks
                .iter()
                .find(|t| t.is_generated == generated && t.language_code == *lang_code)
            {
                return Ok(track);
            }
        }
        Err(ProviderError::NoTranscriptFound {
            video_id: self.video_id.clone(),
            languages: language_codes.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Manually created tracks first, then generated ones.
    pub fn iter(&self) -> impl Iterator<Item = &TrackInfo> {
        let manual = self.tracks.iter().filter(|t| !t.is_generated);
        let generated = self.tracks.iter().filter(|t| t.is_generated);
        manual.chain(generated)
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Source of caption data, keyed by video id.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn list_transcripts(&self, video_id: &str) -> Result<TranscriptList, ProviderError>;

    async fn fetch_segments(&self, video_id: &str, track: &TrackInfo) -> Result<Vec<Segment>, ProviderError>;
}
