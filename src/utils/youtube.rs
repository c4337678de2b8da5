//! YouTube trailer reference utilities.

use regex::Regex;
use std::sync::OnceLock;

fn video_url_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(
                r"(?:youtube\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{6,})",
            )
            .ok()
        })
        .as_ref()
}

/// Reduce user input to a bare YouTube video id.
///
/// Accepts a bare id or a `watch?v=`, `youtu.be/`, `embed/` or `shorts/` URL.
/// Input that matches none of these is returned trimmed and unchanged.
pub fn extract_video_id(input: &str) -> String {
    let input = input.trim();

    if let Some(caps) = video_url_pattern().and_then(|re| re.captures(input)) {
        return caps[1].to_string();
    }

    input.to_string()
}
