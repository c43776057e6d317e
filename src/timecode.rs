/*!
 * Timecode parsing, arithmetic and formatting.
 *
 * Transcript timecodes are times of day (`HH:MM:SS.ff`). Arithmetic on them
 * follows clock semantics: subtracting past midnight wraps to the previous day.
 * Two output notations are supported:
 * - SRT: `HH:MM:SS,mmm` with milliseconds truncated
 * - Frame count: `HH:MM:SS:FF` at a given frame rate
 */

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{NaiveTime, TimeDelta, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ConversionError;
use crate::framerate::dropped_frames_per_minute;

// @const: Strict HH:MM:SS.f{1,6} grammar
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})\.([0-9]{1,6})$").unwrap()
});

const MICROS_PER_SECOND: i64 = 1_000_000;

/// A wall-clock time of day with microsecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse a `HH:MM:SS.ff` timecode.
    ///
    /// The fractional part may carry one to six digits and is read as a decimal
    /// fraction, so `.04` is 40 milliseconds.
    pub fn parse(text: &str) -> Result<Self, ConversionError> {
        let caps = TIMECODE_REGEX
            .captures(text)
            .ok_or_else(|| ConversionError::format(text, "expected HH:MM:SS.ff"))?;

        let field = |idx: usize, name: &str| -> Result<u32, ConversionError> {
            caps[idx]
                .parse::<u32>()
                .map_err(|_| ConversionError::format(text, format!("unreadable {}", name)))
        };

        let hours = field(1, "hours")?;
        let minutes = field(2, "minutes")?;
        let seconds = field(3, "seconds")?;

        let fraction = &caps[4];
        let micros = fraction
            .parse::<u32>()
            .map_err(|_| ConversionError::format(text, "unreadable fraction"))?
            * 10u32.pow(6 - fraction.len() as u32);

        NaiveTime::from_hms_micro_opt(hours, minutes, seconds, micros)
            .map(Self)
            .ok_or_else(|| ConversionError::format(text, "time component out of range"))
    }

    /// Midnight plus `delta`, wrapping around a 24 hour clock
    pub fn from_delta(delta: TimeDelta) -> Self {
        Self(NaiveTime::MIN + delta)
    }

    /// Midnight plus a number of seconds, rounded to the microsecond
    pub fn from_seconds(seconds: f64) -> Self {
        Self::from_delta(seconds_to_delta(seconds))
    }

    /// Seconds since midnight
    pub fn to_seconds(&self) -> f64 {
        self.0.hour() as f64 * 3600.0
            + self.0.minute() as f64 * 60.0
            + self.0.second() as f64
            + self.micros() as f64 / MICROS_PER_SECOND as f64
    }

    /// Format as an SRT timestamp (HH:MM:SS,mmm), truncating to milliseconds
    pub fn format_srt(&self) -> String {
        format!(
            "{:02}:{:02}:{:02},{:03}",
            self.0.hour(),
            self.0.minute(),
            self.0.second(),
            self.micros() / 1_000
        )
    }

    fn micros(&self) -> u32 {
        // Leap-second nanos are never produced by parse or from_delta
        (self.0.nanosecond() % 1_000_000_000) / 1_000
    }
}

impl Sub for TimeOfDay {
    type Output = TimeDelta;

    fn sub(self, rhs: Self) -> TimeDelta {
        self.0 - rhs.0
    }
}

impl Add<TimeDelta> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, rhs: TimeDelta) -> TimeOfDay {
        Self(self.0 + rhs)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:06}",
            self.0.hour(),
            self.0.minute(),
            self.0.second(),
            self.micros()
        )
    }
}

/// Convert fractional seconds to a duration, rounding half to even at the microsecond
pub fn seconds_to_delta(seconds: f64) -> TimeDelta {
    TimeDelta::microseconds((seconds * MICROS_PER_SECOND as f64).round_ties_even() as i64)
}

/// Convert a duration back to fractional seconds
pub fn delta_to_seconds(delta: TimeDelta) -> f64 {
    delta.num_microseconds().unwrap_or(i64::MAX) as f64 / MICROS_PER_SECOND as f64
}

/// Format a duration as `HH:MM:SS:FF` at the given frame rate.
///
/// The frame number is the rounded fractional second times `fps`; when rounding
/// reaches the next second it is held at the last frame label instead.
pub fn format_frames(duration: TimeDelta, fps: f64) -> String {
    let total_micros = duration.num_microseconds().unwrap_or(0).max(0);
    let whole_seconds = total_micros / MICROS_PER_SECOND;
    let fraction = (total_micros % MICROS_PER_SECOND) as f64 / MICROS_PER_SECOND as f64;

    let hours = whole_seconds / 3600;
    let minutes = (whole_seconds % 3600) / 60;
    let seconds = whole_seconds % 60;

    let mut frames = (fraction * fps).round_ties_even() as i64;
    if frames as f64 >= fps {
        frames = (fps.ceil() as i64 - 1).max(0);
    }

    format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, frames)
}

/// Apply SMPTE drop-frame correction to a position in seconds.
///
/// Only 29.97 and 59.94 fps are corrected; any other rate returns the input
/// unchanged as a duration. The position is quantized to whole frames, then
/// 2 (or 4) frames are removed for every elapsed minute except each tenth.
pub fn drop_frame_adjust(seconds: f64, fps: f64) -> TimeDelta {
    let Some(drop_frames) = dropped_frames_per_minute(fps) else {
        return seconds_to_delta(seconds);
    };

    let total_frames = (seconds * fps).round_ties_even() as i64;
    let frames_per_10_minutes = (fps * 60.0 * 10.0).round_ties_even() as i64;
    let frames_per_minute = (fps * 60.0).round_ties_even() as i64;

    // Floor division: early in a ten-minute block `m - drop_frames` is negative
    let d = total_frames.div_euclid(frames_per_10_minutes);
    let m = total_frames.rem_euclid(frames_per_10_minutes);
    let minute_drops = (m - drop_frames).div_euclid(frames_per_minute - drop_frames).max(0);
    let dropped = drop_frames * (9 * d + minute_drops);

    seconds_to_delta((total_frames - dropped) as f64 / fps)
}
