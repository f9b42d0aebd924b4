//! Configuration
//!
//! Loaded from a TOML file. Every field is optional:
//!
//! ```toml
//! max_file_size = 10485760
//! side_info = "channel-aware"
//! log_level = "info"
//! ```

use crate::error::Result;
use crate::mp3::SideInfoLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest input accepted by default (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Inputs larger than this many bytes are rejected before reading.
    pub max_file_size: u64,
    /// Where to look for Xing/Info/VBRI signatures in the first frame.
    pub side_info: SideInfoLayout,
    /// `tracing` filter directive used by the binary.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            side_info: SideInfoLayout::Fixed,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_file_size, 10 * 1024 * 1024);
        assert_eq!(config.side_info, SideInfoLayout::Fixed);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str("side_info = \"channel-aware\"\n").unwrap();
        assert_eq!(config.side_info, SideInfoLayout::ChannelAware);
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml_str(
            "max_file_size = 2048\nside_info = \"fixed\"\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.max_file_size, 2048);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_toml_str("side_info = \"sideways\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_toml_str("max_size = 1").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/mp3count.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
