//! Dropzone - file intake and status tracking
//!
//! Runtime-agnostic core of the drag & drop upload widget. It decides which
//! selected files are staged, tracks each staged file through its status
//! lifecycle and drives a simulated transfer per file.
//!
//! # Flow
//!
//! ```text
//! drop / chooser ──► Dropzone::admit ──► IntakeController::admit
//!                                          │  size filter, slot cap, ids
//!                                          ▼
//!                        start_simulated_transfer (one task per entry)
//!                                          │  tick every 300 ms
//!                                          ▼
//!                         Idle ─► Uploading ─► Success
//!                                     └──────► Error
//! ```
//!
//! # Modules
//!
//! - [`config`] - Limits and timing constants
//! - [`entry`] - Entry records, ids, statuses, raw file handles
//! - [`intake`] - The controller owning the live collection
//! - [`progress`] - Injectable progress sources
//! - [`transfer`] - Cancellable transfer driver and runtime traits
//! - [`session`] - Selection glue used by the widget
//! - [`size`] - Human-readable byte counts
//! - [`error`] - Error types

pub mod config;
pub mod entry;
pub mod error;
pub mod intake;
pub mod progress;
pub mod session;
pub mod size;
pub mod transfer;

#[cfg(test)]
mod testing;

pub use config::{IntakeConfig, TICK_INTERVAL_MS};
pub use entry::{FileEntry, FileId, FileSource, FileStatus, RawFile};
pub use error::{IntakeError, IntakeResult, RejectReason};
pub use intake::{Admission, IntakeController, Rejection, TickOutcome, TransferTask};
pub use progress::{EntryView, FixedProgress, ProgressSource, RandomProgress, ScriptedProgress};
pub use session::Dropzone;
pub use size::format_size;
pub use transfer::{drive_transfer, IntakeHandle, TransferOutcome, TransferRuntime};
