//! File-level frame counting with a size limit

use crate::config::{Config, DEFAULT_MAX_FILE_SIZE};
use crate::error::{Error, Result};
use crate::mp3::{scan, ScanOptions, ScanSummary, SideInfoLayout, VbrKind};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Frame count for a single file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountResult {
    pub file: String,
    pub file_name: String,
    pub frame_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vbr_summary: Option<VbrKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_frames: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CountResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Counts frames in files, enforcing a size limit before reading.
pub struct FrameCounter {
    pub options: ScanOptions,
    /// Files larger than this are rejected (default: 10 MiB)
    pub max_file_size: u64,
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self {
            options: ScanOptions::default(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_side_info(config.side_info)
            .with_max_file_size(config.max_file_size)
    }

    pub fn with_side_info(mut self, layout: SideInfoLayout) -> Self {
        self.options = self.options.with_side_info(layout);
        self
    }

    pub fn with_max_file_size(mut self, limit: u64) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Read the file, checking its size first, and count its frames.
    pub fn count_path<P: AsRef<Path>>(&self, path: P) -> Result<ScanSummary> {
        let path = path.as_ref();
        let size = std::fs::metadata(path)?.len();
        if size > self.max_file_size {
            return Err(Error::TooLarge {
                size,
                limit: self.max_file_size,
            });
        }

        let data = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = data.len(), "read file");
        Ok(scan(&data, &self.options))
    }

    /// Count a single file, folding any failure into the result
    pub fn count<P: AsRef<Path>>(&self, path: P) -> CountResult {
        let path = path.as_ref();
        let file = path.display().to_string();
        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| file.clone());

        match self.count_path(path) {
            Ok(summary) => CountResult {
                file,
                file_name,
                frame_count: summary.frames,
                vbr_summary: summary.vbr_summary,
                declared_frames: summary.declared_frames,
                error: None,
            },
            Err(e) => {
                warn!(path = %file, error = %e, "failed to count frames");
                CountResult {
                    file,
                    file_name,
                    frame_count: 0,
                    vbr_summary: None,
                    declared_frames: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cbr_frames(n: usize) -> Vec<u8> {
        let mut frame = vec![0u8; 417];
        frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x00]);
        frame.repeat(n)
    }

    fn temp_mp3(data: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".mp3").expect("Failed to create temp file");
        file.write_all(data).expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_count_file() {
        let file = temp_mp3(&cbr_frames(4));
        let result = FrameCounter::new().count(file.path());
        assert_eq!(result.frame_count, 4);
        assert!(!result.is_error());
        assert!(result.file_name.ends_with(".mp3"));
    }

    #[test]
    fn test_size_limit() {
        let file = temp_mp3(&cbr_frames(4));
        let counter = FrameCounter::new().with_max_file_size(1000);

        let err = counter.count_path(file.path()).unwrap_err();
        assert!(matches!(err, Error::TooLarge { size: 1668, limit: 1000 }));

        let result = counter.count(file.path());
        assert!(result.is_error());
        assert_eq!(result.frame_count, 0);
    }

    #[test]
    fn test_missing_file() {
        let result = FrameCounter::new().count("/nonexistent/file.mp3");
        assert!(result.is_error());
        assert_eq!(result.file_name, "file.mp3");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            max_file_size: 42,
            side_info: SideInfoLayout::ChannelAware,
            ..Config::default()
        };
        let counter = FrameCounter::from_config(&config);
        assert_eq!(counter.max_file_size, 42);
        assert_eq!(counter.options.side_info, SideInfoLayout::ChannelAware);
    }

    #[test]
    fn test_result_json_shape() {
        let file = temp_mp3(&cbr_frames(2));
        let result = FrameCounter::new().count(file.path());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["frameCount"], 2);
        assert!(json.get("error").is_none());
        assert!(json.get("vbrSummary").is_none());
    }
}
