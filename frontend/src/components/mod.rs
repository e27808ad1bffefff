//! UI Components for the upload widget.
//!
//! # Page Components
//! - [`Hero`] - Page title and description
//! - [`ImplementationNotes`] - Notes panel under the widget
//!
//! # Widget Components
//! - [`FileUpload`] - Drop zone, file chooser and staged file list
//! - [`FileItem`] - One staged file with its status
//! - [`ProgressBar`] - Transfer progress indicator

mod file_item;
mod file_upload;
mod hero;
mod notes;
mod progress;

pub use file_item::*;
pub use file_upload::*;
pub use hero::*;
pub use notes::*;
pub use progress::*;
