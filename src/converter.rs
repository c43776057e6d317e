/*!
 * Transcript to caption conversion pipeline.
 *
 * One call takes the raw transcript bytes, its file name and the conversion
 * options, and returns the rendered caption file. Stages run in order:
 * frame rate detection, decoding and parsing, segment building, caption
 * splitting, rendering. Any failure aborts the whole conversion.
 */

use log::{debug, info};

use crate::app_config::ConversionOptions;
use crate::captions::build_caption_blocks;
use crate::errors::ConversionError;
use crate::framerate::{detect_framerate, is_drop_frame_rate};
use crate::render::render;
use crate::segments::build_segments;
use crate::transcript::{decode_content, parse_transcript};

/// Result of converting one transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutput {
    /// Full caption file contents
    pub text: String,

    /// First few captions, with "..." when more follow
    pub preview: String,

    /// Name for the generated file
    pub file_name: String,

    /// Frame rate used for timing
    pub fps: f64,

    /// Number of caption blocks rendered
    pub caption_count: usize,
}

/// Convert a timestamped transcript into SRT or Avid caption text
pub fn convert(
    content: &[u8],
    file_name: &str,
    options: &ConversionOptions,
) -> Result<ConversionOutput, ConversionError> {
    options.validate()?;

    let fps = options
        .frame_rate
        .unwrap_or_else(|| detect_framerate(file_name));
    if is_drop_frame_rate(fps) {
        info!("Using drop-frame timing at {} fps", fps);
    }

    let text = decode_content(content)?;
    let entries = parse_transcript(text)?;
    let segments = build_segments(&entries, fps, options.default_last_duration)?;
    let blocks = build_caption_blocks(&segments, fps, options.split_limits());

    let mode = options.render_mode();
    let rendered = render(&blocks, &mode, fps);
    let output_name = mode.output_file_name(file_name);

    debug!(
        "Converted '{}' into {} captions as '{}'",
        file_name,
        blocks.len(),
        output_name
    );

    Ok(ConversionOutput {
        text: rendered.text,
        preview: rendered.preview,
        file_name: output_name,
        fps,
        caption_count: blocks.len(),
    })
}
