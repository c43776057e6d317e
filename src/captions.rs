/*!
 * Caption splitting.
 *
 * A segment's text is wrapped to a maximum line width, the wrapped lines are
 * grouped into caption blocks of a maximum line count, and the segment's
 * duration is shared evenly between the blocks. When a segment splits into
 * several blocks, each block ends one frame early so consecutive blocks do
 * not touch on screen.
 */

use log::debug;

use crate::segments::{Segment, MIN_SEGMENT_DURATION};
use crate::timecode::{delta_to_seconds, drop_frame_adjust};
use crate::transcript::is_text_whitespace;

// @struct: One displayed caption with its own timing
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionBlock {
    // @field: Start in seconds, drop-frame corrected
    pub start_seconds: f64,

    // @field: End in seconds, drop-frame corrected
    pub end_seconds: f64,

    // @field: Caption text, lines separated by '\n'
    pub text: String,
}

/// Limits applied while splitting segments into captions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLimits {
    pub max_chars_per_line: usize,
    pub max_lines_per_caption: usize,
}

/// Greedily wrap text into lines of at most `max_chars` characters.
///
/// Words are never broken: a word longer than the limit sits alone on its
/// own line. Empty or whitespace-only text yields a single empty line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut words = text.split(is_text_whitespace).filter(|word| !word.is_empty());
    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    let mut current_len = first.chars().count();

    for word in words {
        let word_len = word.chars().count();
        if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }
    lines.push(current);

    lines
}

/// Group wrapped lines into caption texts of at most `max_lines` lines each
pub fn group_lines(lines: &[String], max_lines: usize) -> Vec<String> {
    lines
        .chunks(max_lines.max(1))
        .map(|chunk| chunk.join("\n"))
        .collect()
}

/// Start and end (in seconds, before drop-frame correction) of each part of a segment
pub fn part_bounds(segment: &Segment, n_parts: usize, fps: f64) -> Vec<(f64, f64)> {
    if n_parts <= 1 {
        return vec![(
            segment.start_seconds,
            segment.start_seconds + segment.duration_seconds,
        )];
    }

    let frame = 1.0 / fps;
    let part_duration = segment.duration_seconds / n_parts as f64;

    (0..n_parts)
        .map(|p| {
            let part_start = segment.start_seconds + p as f64 * part_duration;
            let mut part_end = segment.start_seconds + (p + 1) as f64 * part_duration - frame;
            if part_end <= part_start {
                part_end = part_start + part_duration.max(MIN_SEGMENT_DURATION);
            }
            (part_start, part_end)
        })
        .collect()
}

/// Split one segment into drop-frame corrected caption blocks
pub fn split_segment(segment: &Segment, fps: f64, limits: SplitLimits) -> Vec<CaptionBlock> {
    let lines = wrap_text(&segment.text, limits.max_chars_per_line);
    let texts = group_lines(&lines, limits.max_lines_per_caption);
    let bounds = part_bounds(segment, texts.len(), fps);

    texts
        .into_iter()
        .zip(bounds)
        .map(|(text, (start, end))| CaptionBlock {
            start_seconds: delta_to_seconds(drop_frame_adjust(start, fps)),
            end_seconds: delta_to_seconds(drop_frame_adjust(end, fps)),
            text,
        })
        .collect()
}

/// Split every segment, keeping segment order and then part order
pub fn build_caption_blocks(segments: &[Segment], fps: f64, limits: SplitLimits) -> Vec<CaptionBlock> {
    let blocks: Vec<CaptionBlock> = segments
        .iter()
        .flat_map(|segment| split_segment(segment, fps, limits))
        .collect();

    debug!(
        "Split {} segments into {} caption blocks",
        segments.len(),
        blocks.len()
    );
    blocks
}
