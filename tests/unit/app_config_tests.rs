/*!
 * Tests for application configuration functionality
 */

use capconv::app_config::{Config, ConversionOptions, LogLevel};
use capconv::errors::ConversionError;
use capconv::render::RenderMode;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.conversion.default_last_duration, 3.0);
    assert_eq!(config.conversion.max_chars_per_line, 42);
    assert_eq!(config.conversion.max_lines_per_caption, 2);
    assert!(!config.conversion.export_avid);
    assert_eq!(config.conversion.output_suffix, "_converted");
    assert_eq!(config.conversion.frame_rate, None);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withOutOfRangeOptions_shouldFail() {
    let mut options = ConversionOptions::default();

    options.default_last_duration = 0.0;
    assert!(matches!(options.validate(), Err(ConversionError::InvalidOption(_))));
    options.default_last_duration = f64::NAN;
    assert!(options.validate().is_err());
    options.default_last_duration = 3.0;

    options.max_chars_per_line = 0;
    assert!(options.validate().is_err());
    options.max_chars_per_line = 42;

    options.max_lines_per_caption = 0;
    assert!(options.validate().is_err());
    options.max_lines_per_caption = 2;

    options.frame_rate = Some(-24.0);
    assert!(options.validate().is_err());
    options.frame_rate = Some(24.0);
    assert!(options.validate().is_ok());
}

/// Test partial JSON falls back to defaults
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{ "conversion": { "max_chars_per_line": 32, "export_avid": true }, "log_level": "debug" }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.conversion.max_chars_per_line, 32);
    assert!(config.conversion.export_avid);
    assert_eq!(config.conversion.max_lines_per_caption, 2);
    assert_eq!(config.conversion.output_suffix, "_converted");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
}

/// Test an empty document is the default config
#[test]
fn test_config_deserialize_withEmptyObject_shouldEqualDefault() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

/// Test serialization round trip keeps every option
#[test]
fn test_config_serialize_shouldRoundTrip() {
    let mut config = Config::default();
    config.conversion.frame_rate = Some(29.97);
    config.conversion.output_suffix = "_final".to_string();

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

/// Test render mode selection
#[test]
fn test_render_mode_withExportAvidFlag_shouldSelectMode() {
    let mut options = ConversionOptions::default();
    assert_eq!(
        options.render_mode(),
        RenderMode::Srt { suffix: "_converted".to_string() }
    );

    options.export_avid = true;
    assert_eq!(options.render_mode(), RenderMode::Avid);

    let limits = options.split_limits();
    assert_eq!(limits.max_chars_per_line, 42);
    assert_eq!(limits.max_lines_per_caption, 2);
}
