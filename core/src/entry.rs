//! Tracked file records.
//!
//! A [`FileEntry`] is created by admission and only mutated by the
//! [`IntakeController`](crate::IntakeController) that owns it.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Identity
// =============================================================================

/// Opaque entry identifier, unique among live entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(Uuid);

impl FileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Status
// =============================================================================

/// Lifecycle of an entry.
///
/// `Idle -> Uploading -> Success`, or `Uploading -> Error` on failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Admitted, transfer not started
    #[default]
    Idle,
    /// Transfer in progress
    Uploading,
    /// Transfer finished
    Success,
    /// Transfer failed
    Error,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Idle => "idle",
            FileStatus::Uploading => "uploading",
            FileStatus::Success => "success",
            FileStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FileStatus::Success | FileStatus::Error)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Raw handles
// =============================================================================

/// A file handle as delivered by a chooser or a drop event.
pub trait FileSource: Clone {
    fn name(&self) -> String;
    fn size_bytes(&self) -> u64;
    fn mime_type(&self) -> String;
}

/// In-memory file handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl RawFile {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

impl FileSource for RawFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

// =============================================================================
// Entry
// =============================================================================

/// One staged file and its transfer state.
#[derive(Clone, Debug, PartialEq)]
pub struct FileEntry<F> {
    id: FileId,
    file: F,
    name: String,
    size_bytes: u64,
    mime_type: String,
    pub(crate) progress: f64,
    pub(crate) status: FileStatus,
    pub(crate) error: Option<String>,
}

impl<F: FileSource> FileEntry<F> {
    pub(crate) fn new(id: FileId, file: F) -> Self {
        Self {
            id,
            name: file.name(),
            size_bytes: file.size_bytes(),
            mime_type: file.mime_type(),
            file,
            progress: 0.0,
            status: FileStatus::Idle,
            error: None,
        }
    }
}

impl<F> FileEntry<F> {
    pub fn id(&self) -> FileId {
        self.id
    }

    /// The raw handle this entry was admitted from.
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Transfer progress in `[0, 100]`. Only meaningful while uploading.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn status(&self) -> FileStatus {
        self.status
    }

    /// Failure message, set only in [`FileStatus::Error`].
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Top-level MIME type, e.g. `image` for `image/png`.
    pub fn mime_category(&self) -> Option<&str> {
        self.mime_type
            .split('/')
            .next()
            .filter(|category| !category.is_empty())
    }
}
