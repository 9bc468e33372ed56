use regex::Regex;
use std::sync::LazyLock;

use crate::modules::transcript::model::VideoId;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})")
        .expect("valid regex")
});
static BARE_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("valid regex"));

/// Extract a video id from a watch, short or embed URL, or accept the input
/// as-is when it is exactly a bare id. The input is not trimmed.
pub fn resolve(input: &str) -> Option<VideoId> {
    if let Some(id) = URL_RE.captures(input).and_then(|caps| caps.get(1)) {
        return Some(VideoId::new(id.as_str()));
    }

    if BARE_ID_RE.is_match(input) {
        return Some(VideoId::new(input));
    }

    None
}
