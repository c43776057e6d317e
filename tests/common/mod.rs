/*!
 * Common test utilities for the capconv test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A short interview transcript with a header line and a blank line
pub fn sample_transcript() -> &'static str {
    "Interview - reel 1\n\
     [00:00:01.00] Hello there\n\
     \n\
     [00:00:03.00] Thanks for having me on the show today, it is a real pleasure to be here\n\
     [00:00:09.50] Bye\n"
}

/// Creates a sample transcript file for testing
pub fn create_test_transcript(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, sample_transcript())
}

/// Count SRT blocks by their index lines
pub fn srt_indices(srt: &str) -> Vec<usize> {
    srt.split("\n\n")
        .filter_map(|block| block.lines().next())
        .filter_map(|line| line.trim().parse().ok())
        .collect()
}

/// Route library log records to the test harness output
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
