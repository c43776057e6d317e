use log::debug;

// @module: Frame rate detection from file names

/// Frame rate used when the file name carries no hint
pub const DEFAULT_FPS: f64 = 25.0;

// @const: Tokens searched in priority order, first hit wins
const FRAME_RATE_TOKENS: [(&str, f64); 4] = [
    ("29.97", 29.97),
    ("30", 30.0),
    ("25", 25.0),
    ("24", 24.0),
];

// @const: Rates that use SMPTE drop-frame counting
const DROP_FRAME_RATES: [f64; 2] = [29.97, 59.94];

/// Infer the frame rate from tokens in a file name.
///
/// The name is lowercased and searched for each token in priority order, so
/// `"clip_29.97.txt"` yields 29.97 even though it contains neither `30` nor `25`,
/// and `"ep30_take25.txt"` yields 30.0. Falls back to [`DEFAULT_FPS`].
pub fn detect_framerate(file_name: &str) -> f64 {
    let name = file_name.to_lowercase();

    let fps = FRAME_RATE_TOKENS
        .iter()
        .find(|(token, _)| name.contains(token))
        .map(|(_, fps)| *fps)
        .unwrap_or(DEFAULT_FPS);

    debug!("Detected frame rate {} from file name '{}'", fps, file_name);
    fps
}

/// Whether drop-frame correction applies at this frame rate
pub fn is_drop_frame_rate(fps: f64) -> bool {
    DROP_FRAME_RATES.iter().any(|rate| (fps - rate).abs() < 1e-9)
}

/// Number of frame labels skipped each minute at a drop-frame rate
pub fn dropped_frames_per_minute(fps: f64) -> Option<i64> {
    if (fps - 29.97).abs() < 1e-9 {
        Some(2)
    } else if (fps - 59.94).abs() < 1e-9 {
        Some(4)
    } else {
        None
    }
}
