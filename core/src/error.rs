//! Error types for file intake.
//!
//! - [`RejectReason`] - why a candidate file did not become an entry
//! - [`IntakeError`] - failed operation on the live collection
//!
//! Nothing here is fatal: rejections are reported alongside the accepted
//! entries, and lifecycle errors leave the collection untouched.

use serde::Serialize;
use thiserror::Error;

use crate::entry::{FileId, FileStatus};

// =============================================================================
// Admission
// =============================================================================

/// Why a candidate file was not admitted.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RejectReason {
    /// File is larger than the configured limit.
    #[error("file is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    /// No slot left for this file.
    #[error("no slot left (max {max_files} files)")]
    CapacityExceeded { max_files: usize },
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Errors from operations on a tracked entry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// No live entry carries this id.
    #[error("No entry with id {0}")]
    NotFound(FileId),

    /// The entry is not in a state that allows the transition.
    #[error("Entry {id} cannot go from {from} to {to}")]
    InvalidTransition {
        id: FileId,
        from: FileStatus,
        to: FileStatus,
    },
}

/// Result type for intake operations.
pub type IntakeResult<T> = Result<T, IntakeError>;
