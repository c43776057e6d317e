// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use capconv::app_config;
use capconv::app_controller::{ConfigOverrides, Controller, RunOutcome};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a timestamped transcript into captions (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for capconv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct ConvertArgs {
    /// Transcript file with [HH:MM:SS.ff] lines
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Directory for the generated file (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force: bool,

    /// Write Avid caption text instead of SRT
    #[arg(short, long)]
    avid: bool,

    /// Maximum characters per caption line
    #[arg(long)]
    max_chars: Option<usize>,

    /// Maximum lines per caption
    #[arg(long)]
    max_lines: Option<usize>,

    /// Seconds the last transcript entry stays on screen
    #[arg(long)]
    last_duration: Option<f64>,

    /// Suffix for SRT output file names
    #[arg(long)]
    suffix: Option<String>,

    /// Frame rate to use instead of detecting it from the file name
    #[arg(long)]
    fps: Option<f64>,

    /// Configuration file path
    #[arg(short, long, default_value = "capconv.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// capconv - transcript to caption converter
///
/// Turns a plain-text transcript with [HH:MM:SS.ff] timecodes into an SRT
/// subtitle file or an Avid caption plugin text file.
#[derive(Parser, Debug)]
#[command(name = "capconv")]
#[command(version)]
#[command(about = "Timestamped transcript to SRT / Avid caption converter")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "capconv turns a plain-text transcript with [HH:MM:SS.ff] timecodes into captions.

EXAMPLES:
    capconv interview.txt                       # Convert to interview_converted.srt
    capconv -a interview_29.97.txt              # Avid captions with drop-frame timing
    capconv --max-chars 32 --max-lines 1 in.txt # Narrow single-line captions
    capconv --fps 24 -o out/ in.txt             # Force 24 fps, write into out/
    capconv completions bash > capconv.bash     # Generate bash completions

FRAME RATE:
    The frame rate is detected from the file name (29.97, 30, 25 or 24, in that
    order), defaulting to 25. Drop-frame correction applies at 29.97 and 59.94.

CONFIGURATION:
    Defaults are read from capconv.json. If the file doesn't exist, a default
    one is created automatically. Command line flags override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Prefix and ANSI color for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info by default, refined once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "capconv", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        // Bare INPUT_FILE behaves like `convert`
        None => run_convert(cli.convert),
    }
}

impl ConvertArgs {
    // @returns: Flags that override the config file
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            export_avid: self.avid,
            max_chars_per_line: self.max_chars,
            max_lines_per_caption: self.max_lines,
            default_last_duration: self.last_duration,
            output_suffix: self.suffix.clone(),
            frame_rate: self.fps,
            log_level: self.log_level.clone().map(Into::into),
        }
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    let input_file = args.input_file.clone()
        .ok_or_else(|| anyhow!("INPUT_FILE is required"))?;

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &args.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Controller::load_config(&args.config_path)
        .with_context(|| format!("Failed to load config file: {}", args.config_path))?;
    args.overrides().apply_to(&mut config);

    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;
    log::set_max_level(controller.config().log_level.to_level_filter());

    let outcome = controller
        .run(&input_file, args.output_dir.as_deref(), args.force)
        .with_context(|| format!("Failed to convert {:?}", input_file))?;

    if let RunOutcome::Written { output, .. } = outcome {
        println!("{}", output.preview);
    }

    Ok(())
}
