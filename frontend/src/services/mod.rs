//! Browser services for the widget.
//!
//! # Services
//!
//! - [`files`] - Reading files from choosers and drop events
//! - [`transfer`] - Timers, task spawning and the shared intake handle

pub mod files;
pub mod transfer;

pub use files::*;
pub use transfer::*;
