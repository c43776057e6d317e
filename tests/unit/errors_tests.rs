/*!
 * Tests for error types and conversions
 */

use capconv::errors::{AppError, ConversionError};

#[test]
fn test_conversionError_noTimecodes_shouldExplainExpectedFormat() {
    let display = format!("{}", ConversionError::NoTimecodesFound);
    assert!(display.contains("No valid timecodes found"));
    assert!(display.contains("[HH:MM:SS.xx] Text"));
}

#[test]
fn test_conversionError_decode_shouldWrapUtf8Error() {
    let bytes: [u8; 3] = [0x66, 0x6f, 0xff];
    let utf8_error = std::str::from_utf8(&bytes).unwrap_err();
    let error: ConversionError = utf8_error.into();
    let display = format!("{}", error);
    assert!(display.contains("UTF-8"));
}

#[test]
fn test_conversionError_format_shouldDisplayTimecodeAndReason() {
    let error = ConversionError::Format {
        timecode: "00:61:00.00".to_string(),
        reason: "time component out of range".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("00:61:00.00"));
    assert!(display.contains("out of range"));
}

#[test]
fn test_appError_fromConversionError_shouldWrapCorrectly() {
    let app_error: AppError = ConversionError::NoTimecodesFound.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Conversion error"));
    assert!(display.contains("No valid timecodes found"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromJsonError_shouldWrapAsConfigError() {
    let json_error = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
    let app_error: AppError = json_error.into();
    assert!(format!("{}", app_error).contains("Configuration error"));
}

#[test]
fn test_appError_fromAnyhowError_shouldKeepContextAsFileError() {
    let anyhow_error = anyhow::anyhow!("permission denied").context("Failed to read file: \"a.txt\"");
    let app_error: AppError = anyhow_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("Failed to read file"));
    assert!(display.contains("permission denied"));
}

#[test]
fn test_conversionError_debug_shouldBeImplemented() {
    let debug = format!("{:?}", ConversionError::InvalidOption("max_lines".to_string()));
    assert!(debug.contains("InvalidOption"));
}
