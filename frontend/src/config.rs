//! Application configuration.
//!
//! Settings of the demo page. Widget defaults live in
//! [`dropzone::config`].

/// Application name, used as the document title.
pub const APP_NAME: &str = "File Upload";

/// Maximum number of files on the demo page.
pub const DEMO_MAX_FILES: usize = 5;

/// Per-file size limit on the demo page, in megabytes.
pub const DEMO_MAX_SIZE_MB: f64 = 5.0;

/// Chooser filter on the demo page.
pub const DEMO_ACCEPT: &str = "image/*,.pdf,.docx";
