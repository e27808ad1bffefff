//! Dropzone - Frontend Rust/Leptos Application
//!
//! A WebAssembly drag & drop upload widget with per-file status tracking
//! and simulated upload progress.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage                                                  │
//! │  ├── Hero (title, description)                              │
//! │  ├── FileUpload                                              │
//! │  │   ├── drop zone + hidden file chooser                    │
//! │  │   └── FileItem per staged file (status, progress)        │
//! │  └── ImplementationNotes                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Browser file adapter and error types
//! - [`components`] - UI components (FileUpload, FileItem, etc.)
//! - [`services`] - Browser glue (file lists, timers, shared intake)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    BrowserFile,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    let on_files_selected = Callback::new(|files: Vec<File>| {
        let names: Vec<String> = files.iter().map(|file| file.name()).collect();
        log::info!("📁 Files selected: {:?}", names);
    });

    view! {
        <div class="container">
            <Hero/>

            <div class="card">
                <FileUpload
                    max_files=DEMO_MAX_FILES
                    max_size=DEMO_MAX_SIZE_MB
                    accept=DEMO_ACCEPT
                    on_files_selected=on_files_selected
                />
            </div>

            <ImplementationNotes/>
        </div>
    }
}
