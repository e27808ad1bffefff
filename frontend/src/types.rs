//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - Browser file handle adapter
//! - **Error Types** - Frontend error handling

use std::fmt;

use dropzone::FileSource;
use web_sys::File;

// =============================================================================
// File Types
// =============================================================================

/// A `File` from a chooser or a drop event, as seen by the intake.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(File);

impl BrowserFile {
    pub fn into_inner(self) -> File {
        self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl FileSource for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size_bytes(&self) -> u64 {
        // Blob sizes are whole numbers carried in an f64
        self.0.size() as u64
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// A DOM node the widget needs is missing.
    Dom(String),
    /// The intake controller is gone.
    Intake(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
            AppError::Intake(msg) => write!(f, "Intake error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Dom("file input is not mounted".into());
        assert_eq!(err.to_string(), "DOM error: file input is not mounted");

        let err = AppError::Intake("disposed".into());
        assert!(err.to_string().starts_with("Intake error"));
    }
}
