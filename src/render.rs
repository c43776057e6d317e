/*!
 * Rendering of caption blocks to SRT or Avid caption text.
 *
 * Both renderers also produce a short preview of the first few captions and
 * derive the output file name from the input file name.
 */

use std::path::Path;

use crate::captions::CaptionBlock;
use crate::timecode::{format_frames, seconds_to_delta, TimeOfDay};

/// Number of captions shown in a preview
pub const PREVIEW_UNITS: usize = 5;

/// Marker appended to a preview when captions were left out
pub const PREVIEW_ELLIPSIS: &str = "...";

/// First line of every Avid caption file
pub const AVID_HEADER: &str = "@ This file written with the Avid Caption plugin, version 1";
pub const AVID_BEGIN: &str = "<begin subtitles>";
pub const AVID_END: &str = "<end subtitles>";

const AVID_SUFFIX: &str = "_avid";

/// Output flavour
#[derive(Debug, Clone, PartialEq)]
pub enum RenderMode {
    /// SubRip text, file named `<stem><suffix>.srt`
    Srt { suffix: String },
    /// Avid caption plugin text, file named `<stem>_avid.txt`
    Avid,
}

impl RenderMode {
    /// Extension of files written in this mode
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt { .. } => "srt",
            Self::Avid => "txt",
        }
    }

    /// Output file name for an input file name: last extension replaced
    pub fn output_file_name(&self, input_name: &str) -> String {
        let stem = strip_extension(input_name);
        match self {
            Self::Srt { suffix } => format!("{}{}.{}", stem, suffix, self.extension()),
            Self::Avid => format!("{}{}.{}", stem, AVID_SUFFIX, self.extension()),
        }
    }
}

/// Rendered caption text together with its preview
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub preview: String,
}

/// Render blocks in the given mode
pub fn render(blocks: &[CaptionBlock], mode: &RenderMode, fps: f64) -> Rendered {
    match mode {
        RenderMode::Srt { .. } => render_srt(blocks),
        RenderMode::Avid => render_avid(blocks, fps),
    }
}

/// Render blocks as SRT: numbered from 1, blank line between blocks
pub fn render_srt(blocks: &[CaptionBlock]) -> Rendered {
    let units: Vec<String> = blocks
        .iter()
        .enumerate()
        .map(|(i, block)| format_srt_block(i + 1, block))
        .collect();

    let mut preview = units
        .iter()
        .take(PREVIEW_UNITS)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    if units.len() > PREVIEW_UNITS {
        preview.push('\n');
        preview.push_str(PREVIEW_ELLIPSIS);
    }

    Rendered {
        text: units.join("\n"),
        preview,
    }
}

/// Format one SRT block; the result ends with a newline
pub fn format_srt_block(index: usize, block: &CaptionBlock) -> String {
    format!(
        "{}\n{} --> {}\n{}\n",
        index,
        TimeOfDay::from_seconds(block.start_seconds).format_srt(),
        TimeOfDay::from_seconds(block.end_seconds).format_srt(),
        block.text
    )
}

/// Render blocks as Avid caption text, one caption per line
pub fn render_avid(blocks: &[CaptionBlock], fps: f64) -> Rendered {
    let header = [AVID_HEADER, "", AVID_BEGIN];
    let captions: Vec<String> = blocks
        .iter()
        .map(|block| format_avid_line(block, fps))
        .collect();

    let mut lines: Vec<&str> = header.to_vec();
    lines.extend(captions.iter().map(String::as_str));
    lines.extend(["", AVID_END]);

    let mut preview_lines: Vec<&str> = header.to_vec();
    preview_lines.extend(captions.iter().take(PREVIEW_UNITS).map(String::as_str));
    if captions.len() > PREVIEW_UNITS {
        preview_lines.push(PREVIEW_ELLIPSIS);
    }

    let mut text = lines.join("\n");
    text.push('\n');

    Rendered {
        text,
        preview: preview_lines.join("\n"),
    }
}

/// Format one Avid caption line: frame timecodes then flattened text
pub fn format_avid_line(block: &CaptionBlock, fps: f64) -> String {
    format!(
        "{} {} {}",
        format_frames(seconds_to_delta(block.start_seconds), fps),
        format_frames(seconds_to_delta(block.end_seconds), fps),
        block.text.replace('\n', " ")
    )
}

fn strip_extension(file_name: &str) -> String {
    Path::new(file_name)
        .with_extension("")
        .to_string_lossy()
        .into_owned()
}
