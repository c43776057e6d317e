/*!
 * Integration tests for reading a transcript file and writing captions
 */

use anyhow::Result;

use capconv::app_config::Config;
use capconv::converter::convert;
use capconv::file_utils::FileManager;
use crate::common;

/// Test the full read, convert and write cycle
#[test]
fn test_file_workflow_withTranscriptFile_shouldWriteSrtNextToInput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_transcript(temp_dir.path(), "interview_25.txt")?;

    let config = Config::default();
    let content = FileManager::read_bytes(&input)?;
    let file_name = FileManager::file_name_of(&input)?;
    let output = convert(&content, &file_name, &config.conversion)?;

    let output_path = FileManager::generate_output_path(&input, None, &output.file_name);
    FileManager::write_to_file(&output_path, &output.text)?;

    assert_eq!(output_path, temp_dir.path().join("interview_25_converted.srt"));
    assert!(FileManager::file_exists(&output_path));

    let written = String::from_utf8(FileManager::read_bytes(&output_path)?)?;
    assert_eq!(written, output.text);
    assert_eq!(common::srt_indices(&written), vec![1, 2, 3]);

    Ok(())
}

/// Test Avid output lands in a separate directory
#[test]
fn test_file_workflow_withAvidExport_shouldWriteIntoOutputDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_transcript(temp_dir.path(), "reel_29.97.txt")?;
    let out_dir = temp_dir.path().join("avid");

    let mut config = Config::default();
    config.conversion.export_avid = true;

    let content = FileManager::read_bytes(&input)?;
    let output = convert(&content, &FileManager::file_name_of(&input)?, &config.conversion)?;
    let output_path = FileManager::generate_output_path(&input, Some(&out_dir), &output.file_name);
    FileManager::write_to_file(&output_path, &output.text)?;

    assert_eq!(output.fps, 29.97);
    assert!(FileManager::dir_exists(&out_dir));
    assert!(FileManager::file_exists(out_dir.join("reel_29.97_avid.txt")));

    Ok(())
}

/// Test Avid timecodes carry the drop-frame correction past the first minute
#[test]
fn test_file_workflow_withAvidAtDropFrameRate_shouldCorrectTimecodes() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "reel_29.97.txt", "[00:01:05.00] x\n")?;

    let mut config = Config::default();
    config.conversion.export_avid = true;

    let content = FileManager::read_bytes(&input)?;
    let output = convert(&content, &FileManager::file_name_of(&input)?, &config.conversion)?;

    // 1948 frames less 2 dropped = 1946 frames = 64.93s; 68s end -> 2036 frames = 67.93s
    let caption_lines: Vec<&str> = output
        .text
        .lines()
        .filter(|line| line.ends_with(" x"))
        .collect();
    assert_eq!(caption_lines, vec!["00:01:04:28 00:01:07:28 x"]);

    Ok(())
}

/// Test a config file on disk drives the conversion
#[test]
fn test_file_workflow_withConfigFile_shouldApplyOptions() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(
        temp_dir.path(),
        "capconv.json",
        r#"{ "conversion": { "max_lines_per_caption": 1, "output_suffix": "_cc" } }"#,
    )?;

    let config: Config = serde_json::from_slice(&FileManager::read_bytes(&config_path)?)?;
    config.validate()?;

    let output = convert(common::sample_transcript().as_bytes(), "talk.txt", &config.conversion)?;

    assert_eq!(output.file_name, "talk_cc.srt");
    assert_eq!(output.caption_count, 4);

    Ok(())
}
