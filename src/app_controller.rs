use log::{info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::app_config::{Config, LogLevel};
use crate::converter::{convert, ConversionOutput};
use crate::errors::AppError;
use crate::file_utils::FileManager;

// @module: Application controller for transcript conversion

/// Command line values that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    // @field: Force Avid output; false leaves the file's choice alone
    pub export_avid: bool,
    pub max_chars_per_line: Option<usize>,
    pub max_lines_per_caption: Option<usize>,
    pub default_last_duration: Option<f64>,
    pub output_suffix: Option<String>,
    pub frame_rate: Option<f64>,
    pub log_level: Option<LogLevel>,
}

impl ConfigOverrides {
    /// Apply every value that was given on top of `config`
    pub fn apply_to(&self, config: &mut Config) {
        let conversion = &mut config.conversion;

        if self.export_avid {
            conversion.export_avid = true;
        }
        if let Some(max_chars) = self.max_chars_per_line {
            conversion.max_chars_per_line = max_chars;
        }
        if let Some(max_lines) = self.max_lines_per_caption {
            conversion.max_lines_per_caption = max_lines;
        }
        if let Some(last_duration) = self.default_last_duration {
            conversion.default_last_duration = last_duration;
        }
        if let Some(suffix) = &self.output_suffix {
            conversion.output_suffix = suffix.clone();
        }
        if let Some(fps) = self.frame_rate {
            conversion.frame_rate = Some(fps);
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
    }
}

/// What a run did with the output file
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Captions were written to `path`
    Written {
        path: PathBuf,
        output: ConversionOutput,
    },

    /// `path` already existed and overwriting was not forced
    Skipped { path: PathBuf },
}

/// Main application controller for transcript conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Load the config file, creating a default one when missing
    pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config, AppError> {
        let config_path = config_path.as_ref();

        if config_path.exists() {
            let file = File::open(config_path)?;
            let reader = BufReader::new(file);
            Ok(serde_json::from_reader(reader)?)
        } else {
            warn!("Config file not found at {:?}, creating default config.", config_path);

            let config = Config::default();
            let config_json = serde_json::to_string_pretty(&config)?;
            std::fs::write(config_path, config_json)?;
            Ok(config)
        }
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self { config })
    }

    /// Configuration this controller runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert `input_file` and write the captions.
    ///
    /// The output goes into `output_dir`, or next to the input when none is
    /// given. An existing output file is left untouched unless
    /// `force_overwrite` is set.
    pub fn run(
        &self,
        input_file: &Path,
        output_dir: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<RunOutcome, AppError> {
        if !FileManager::file_exists(input_file) {
            return Err(AppError::File(format!(
                "Input file does not exist: {:?}",
                input_file
            )));
        }

        let file_name = FileManager::file_name_of(input_file)?;
        let output_name = self
            .config
            .conversion
            .render_mode()
            .output_file_name(&file_name);
        let output_path = FileManager::generate_output_path(input_file, output_dir, &output_name);

        if output_path.exists() && !force_overwrite {
            warn!(
                "Skipping file, output already exists: {:?} (use -f to force overwrite)",
                output_path
            );
            return Ok(RunOutcome::Skipped { path: output_path });
        }

        let content = FileManager::read_bytes(input_file)?;
        let output = convert(&content, &file_name, &self.config.conversion)?;
        FileManager::write_to_file(&output_path, &output.text)?;

        info!(
            "Wrote {} captions at {} fps: {:?}",
            output.caption_count, output.fps, output_path
        );

        Ok(RunOutcome::Written {
            path: output_path,
            output,
        })
    }
}
