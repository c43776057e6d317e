//! Application configuration: conversion options and log level, loaded from
//! `capconv.json` with a default for every missing field.

use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::captions::SplitLimits;
use crate::errors::ConversionError;
use crate::render::RenderMode;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Conversion options
    #[serde(default)]
    pub conversion: ConversionOptions,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Options for a single transcript conversion
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConversionOptions {
    /// Seconds the final transcript entry stays on screen
    #[serde(default = "default_last_duration")]
    pub default_last_duration: f64,

    /// Word-wrap width in characters
    #[serde(default = "default_max_chars_per_line")]
    pub max_chars_per_line: usize,

    /// Lines per caption before splitting into another caption
    #[serde(default = "default_max_lines_per_caption")]
    pub max_lines_per_caption: usize,

    /// Write Avid caption text instead of SRT
    #[serde(default)]
    pub export_avid: bool,

    /// Suffix appended to SRT output file names
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Frame rate to use instead of detecting it from the file name
    #[serde(default)]
    pub frame_rate: Option<f64>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            default_last_duration: default_last_duration(),
            max_chars_per_line: default_max_chars_per_line(),
            max_lines_per_caption: default_max_lines_per_caption(),
            export_avid: false,
            output_suffix: default_output_suffix(),
            frame_rate: None,
        }
    }
}

impl ConversionOptions {
    /// Validate option ranges
    pub fn validate(&self) -> Result<(), ConversionError> {
        if !self.default_last_duration.is_finite() || self.default_last_duration <= 0.0 {
            return Err(ConversionError::InvalidOption(format!(
                "default_last_duration must be a positive number of seconds, got {}",
                self.default_last_duration
            )));
        }

        if self.max_chars_per_line == 0 {
            return Err(ConversionError::InvalidOption(
                "max_chars_per_line must be at least 1".to_string(),
            ));
        }

        if self.max_lines_per_caption == 0 {
            return Err(ConversionError::InvalidOption(
                "max_lines_per_caption must be at least 1".to_string(),
            ));
        }

        if let Some(fps) = self.frame_rate {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(ConversionError::InvalidOption(format!(
                    "frame_rate must be positive, got {}",
                    fps
                )));
            }
        }

        Ok(())
    }

    /// Rendering mode selected by these options
    pub fn render_mode(&self) -> RenderMode {
        if self.export_avid {
            RenderMode::Avid
        } else {
            RenderMode::Srt {
                suffix: self.output_suffix.clone(),
            }
        }
    }

    /// Wrapping and grouping limits
    pub fn split_limits(&self) -> SplitLimits {
        SplitLimits {
            max_chars_per_line: self.max_chars_per_line,
            max_lines_per_caption: self.max_lines_per_caption,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_last_duration() -> f64 {
    3.0
}

fn default_max_chars_per_line() -> usize {
    42
}

fn default_max_lines_per_caption() -> usize {
    2
}

fn default_output_suffix() -> String {
    "_converted".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConversionError> {
        self.conversion.validate()
    }
}
