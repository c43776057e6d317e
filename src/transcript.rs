use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ConversionError;

// @module: Timestamped transcript decoding and parsing

// @const: One transcript line: [HH:MM:SS.ff] optional text
static TRANSCRIPT_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(\d{2}:\d{2}:\d{2}\.\d{2})\]\s*(.*)").unwrap()
});

// @struct: One timestamped transcript line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    // @field: Timecode text, HH:MM:SS.ff
    pub timecode: String,

    // @field: Text following the timecode, untrimmed
    pub text: String,
}

impl RawEntry {
    pub fn new(timecode: impl Into<String>, text: impl Into<String>) -> Self {
        RawEntry {
            timecode: timecode.into(),
            text: text.into(),
        }
    }
}

/// Decode uploaded transcript bytes as UTF-8
pub fn decode_content(content: &[u8]) -> Result<&str, ConversionError> {
    std::str::from_utf8(content).map_err(ConversionError::from)
}

/// Split text into lines on every line boundary a transcript may use:
/// `\n`, `\r\n`, `\r`, vertical tab, form feed, file/group/record separators,
/// NEL, and the Unicode line and paragraph separators.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

/// Whitespace as caption text sees it: Unicode whitespace plus the
/// information separators `\x1c`..=`\x1f`
pub fn is_text_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Extract timestamped entries from transcript text.
///
/// Lines that do not start with a bracketed `HH:MM:SS.ff` timecode are skipped.
/// Fails with [`ConversionError::NoTimecodesFound`] when nothing matches.
pub fn parse_transcript(content: &str) -> Result<Vec<RawEntry>, ConversionError> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in split_lines(content) {
        match TRANSCRIPT_LINE_REGEX.captures(line) {
            Some(caps) => entries.push(RawEntry::new(&caps[1], &caps[2])),
            None => {
                if !line.trim().is_empty() {
                    skipped += 1;
                }
            }
        }
    }

    if skipped > 0 {
        debug!("Skipped {} line(s) without a leading timecode", skipped);
    }

    if entries.is_empty() {
        warn!("Transcript contains no timestamped lines");
        return Err(ConversionError::NoTimecodesFound);
    }

    debug!("Parsed {} transcript entries", entries.len());
    Ok(entries)
}
