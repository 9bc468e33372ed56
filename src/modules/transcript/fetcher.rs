use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::modules::transcript::model::{TranscriptOutcome, TranscriptSuccess, VideoId};
use crate::modules::transcript::resolver;
use crate::services::provider::{ProviderError, Segment, TrackInfo, TranscriptList, TranscriptProvider};

pub const INVALID_INPUT: &str = "Invalid YouTube URL or video ID";
pub const NO_TRANSCRIPTS: &str = "No transcripts available";

/// One way of picking a caption track out of a video's listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Human-authored track in exactly this language.
    Manual(&'static str),
    /// Speech-recognition track in exactly this language.
    Generated(&'static str),
    /// Whatever the provider lists first.
    FirstAvailable,
}

/// Tried in order; the first strategy that yields fetched segments wins.
pub const FALLBACK_ORDER: [Strategy; 5] = [
    Strategy::Manual("en"),
    Strategy::Manual("en-US"),
    Strategy::Manual("en-GB"),
    Strategy::Generated("en"),
    Strategy::FirstAvailable,
];

impl Strategy {
    fn select<'a>(&self, list: &'a TranscriptList) -> Result<&'a TrackInfo, ProviderError> {
        match *self {
            Strategy::Manual(code) => list.find_manually_created(&[code]),
            Strategy::Generated(code) => list.find_generated(&[code]),
            Strategy::FirstAvailable => list.iter().next().ok_or_else(|| ProviderError::NoTranscriptFound {
                video_id: list.video_id.clone(),
                languages: Vec::new(),
            }),
        }
    }

    fn label(&self, track: &TrackInfo) -> String {
        match *self {
            Strategy::Manual(code) => code.to_string(),
            Strategy::Generated(code) => format!("{} (auto-generated)", code),
            Strategy::FirstAvailable => track.language_code.clone(),
        }
    }
}

struct Selection {
    language: String,
    track_name: String,
    segments: Vec<Segment>,
}

pub struct TranscriptFetcher {
    provider: Arc<dyn TranscriptProvider>,
}

impl TranscriptFetcher {
    pub fn new(provider: Arc<dyn TranscriptProvider>) -> Self {
        Self { provider }
    }

    /// Resolve `input` to a video id and fetch its transcript. The provider is
    /// never called when the input does not resolve.
    pub async fn run(&self, input: &str) -> TranscriptOutcome {
        match resolver::resolve(input) {
            Some(video_id) => self.fetch(&video_id).await,
            None => {
                warn!(input, "could not resolve a video id");
                TranscriptOutcome::failure(INVALID_INPUT, None)
            }
        }
    }

    #[instrument(skip_all, fields(video_id = %video_id))]
    pub async fn fetch(&self, video_id: &VideoId) -> TranscriptOutcome {
        info!("extracting transcript");

        let list = match self.provider.list_transcripts(video_id.as_str()).await {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "listing transcripts failed");
                return TranscriptOutcome::failure(e.to_string(), Some(video_id.clone()));
            }
        };

        if list.is_empty() {
            warn!("provider listed no transcripts");
            return TranscriptOutcome::failure(NO_TRANSCRIPTS, Some(video_id.clone()));
        }

        let mut last_error = None;
        for strategy in FALLBACK_ORDER {
            match self.attempt(strategy, video_id, &list).await {
                Ok(selection) => {
                    info!(?strategy, language = %selection.language, track = %selection.track_name, "transcript selected");
                    let transcript = flatten(&selection.segments);
                    info!(characters = transcript.chars().count(), "transcript extracted");
                    return TranscriptOutcome::Success(TranscriptSuccess::new(
                        video_id.clone(),
                        selection.language,
                        transcript,
                    ));
                }
                Err(e) => {
                    debug!(?strategy, error = %e, "strategy unavailable");
                    last_error = Some(e);
                }
            }
        }

        let error = match last_error {
            Some(e) => format!("Could not fetch transcript: {}", e),
            None => NO_TRANSCRIPTS.to_string(),
        };
        warn!(%error, "every fallback strategy failed");
        TranscriptOutcome::failure(error, Some(video_id.clone()))
    }

    async fn attempt(
        &self,
        strategy: Strategy,
        video_id: &VideoId,
        list: &TranscriptList,
    ) -> Result<Selection, ProviderError> {
        let track = strategy.select(list)?;
        let segments = self.provider.fetch_segments(video_id.as_str(), track).await?;
        Ok(Selection {
            language: strategy.label(track),
            track_name: track.language.clone(),
            segments,
        })
    }
}

/// Segment texts joined one per line, in provider order.
pub fn flatten(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
