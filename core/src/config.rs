//! Intake configuration.
//!
//! Limits applied by [`IntakeController`](crate::IntakeController) when files
//! are admitted, plus the timing constants of the simulated transfer.

use serde::{Deserialize, Serialize};

/// Default maximum number of live entries.
pub const DEFAULT_MAX_FILES: usize = 5;

/// Default per-file size limit, in megabytes.
pub const DEFAULT_MAX_SIZE_MB: f64 = 10.0;

/// Default chooser filter (everything).
pub const DEFAULT_ACCEPT: &str = "*";

/// Bytes per megabyte used by the size limit.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Interval between two simulated transfer ticks, in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 300;

/// Largest progress increment a single tick may apply.
pub const MAX_TICK_DELTA: f64 = 10.0;

/// Progress value of a finished transfer.
pub const COMPLETE_PROGRESS: f64 = 100.0;

/// Admission limits for one widget instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeConfig {
    /// Maximum number of entries tracked at once
    pub max_files: usize,
    /// Maximum size of a single file, in megabytes
    #[serde(rename = "maxSize")]
    pub max_size_mb: f64,
    /// MIME/extension filter handed to the file chooser.
    ///
    /// Advisory only: admission never looks at it.
    pub accept: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            accept: DEFAULT_ACCEPT.to_string(),
        }
    }
}

impl IntakeConfig {
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn with_max_size_mb(mut self, max_size_mb: f64) -> Self {
        self.max_size_mb = max_size_mb;
        self
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    /// Size limit in bytes. A file is admitted when `size <= max_size_bytes()`.
    pub fn max_size_bytes(&self) -> u64 {
        let bytes = self.max_size_mb * BYTES_PER_MB;
        if bytes.is_nan() || bytes <= 0.0 {
            0
        } else {
            bytes.floor() as u64
        }
    }
}
