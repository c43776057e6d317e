use log::{debug, warn};

use crate::errors::ConversionError;
use crate::timecode::{seconds_to_delta, TimeOfDay};
use crate::transcript::{is_text_whitespace, RawEntry};

// @module: Time-bounded segments derived from adjacent transcript entries

/// Shortest duration a segment may have, in seconds
pub const MIN_SEGMENT_DURATION: f64 = 0.001;

// @struct: Text spoken between one timecode and the next
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    // @field: Start in seconds since midnight
    pub start_seconds: f64,

    // @field: End in seconds since midnight
    pub end_seconds: f64,

    // @field: Positive length used for splitting
    pub duration_seconds: f64,

    // @field: Trimmed text
    pub text: String,
}

/// Turn parsed entries into segments.
///
/// Each segment ends one frame before the next entry starts. The final entry
/// has no successor and lasts `default_last_duration` seconds. Durations are
/// floored at [`MIN_SEGMENT_DURATION`] so out-of-order or repeated timecodes
/// still yield a positive span.
pub fn build_segments(
    entries: &[RawEntry],
    fps: f64,
    default_last_duration: f64,
) -> Result<Vec<Segment>, ConversionError> {
    let frame = seconds_to_delta(1.0 / fps);
    let last_duration = seconds_to_delta(default_last_duration);

    let mut segments = Vec::with_capacity(entries.len());
    let mut clamped = 0usize;

    for (i, entry) in entries.iter().enumerate() {
        let start = TimeOfDay::parse(&entry.timecode)?;
        let end = match entries.get(i + 1) {
            Some(next) => TimeOfDay::parse(&next.timecode)? + -frame,
            None => start + last_duration,
        };

        let start_seconds = start.to_seconds();
        let end_seconds = end.to_seconds();
        let span = end_seconds - start_seconds;
        if span < MIN_SEGMENT_DURATION {
            clamped += 1;
        }

        segments.push(Segment {
            start_seconds,
            end_seconds,
            duration_seconds: span.max(MIN_SEGMENT_DURATION),
            text: entry.text.trim_matches(is_text_whitespace).to_string(),
        });
    }

    if clamped > 0 {
        warn!(
            "{} segment(s) had non-increasing timecodes, duration clamped to {}s",
            clamped, MIN_SEGMENT_DURATION
        );
    }

    debug!("Built {} segments at {} fps", segments.len(), fps);
    Ok(segments)
}
