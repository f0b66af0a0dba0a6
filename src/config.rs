//! Configuration for recordbook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default file the record book is loaded from and saved to
pub const DEFAULT_DATA_FILE: &str = "student_records.txt";

/// Main configuration for a recordbook session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Text file holding one record per line.
    /// Loaded at startup, overwritten on "save and exit".
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Display Configuration
    // -------------------------------------------------------------------------
    /// Width of the `=` rule framing the record listing
    pub rule_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            rule_width: 60,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the width of the listing rule
    pub fn rule_width(mut self, width: usize) -> Self {
        self.config.rule_width = width;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
