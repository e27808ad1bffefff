//! Drag & drop upload widget.
//!
//! Stages files from drops and from the native chooser, shows them with
//! their simulated transfer state and lets the user remove them before the
//! (stubbed) upload.

use dropzone::config::{DEFAULT_ACCEPT, DEFAULT_MAX_FILES, DEFAULT_MAX_SIZE_MB};
use dropzone::{Dropzone, FileEntry, FileId, IntakeConfig, IntakeController};
use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement, MouseEvent};

use crate::services::{collect_files, dropped_files, open_file_chooser, BrowserRuntime, SharedIntake};
use crate::{AppError, BrowserFile, FileItem};

/// `"1 file"`, `"3 files"`.
pub fn file_count_label(count: usize) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}

/// Headline of the drop zone.
pub fn zone_headline(dragging: bool) -> &'static str {
    if dragging {
        "Drop files here"
    } else {
        "Drag & drop files here"
    }
}

/// CSS classes of the drop zone. A full zone never shows the drag state.
pub fn zone_class(dragging: bool, full: bool) -> String {
    let mut class = String::from("dropzone");
    if full {
        class.push_str(" disabled");
    } else if dragging {
        class.push_str(" dragging");
    }
    class
}

/// Limits line under the headline.
pub fn limits_hint(max_files: usize, max_size_mb: f64) -> String {
    format!("Max {} files, up to {}MB each", max_files, max_size_mb)
}

#[component]
pub fn FileUpload(
    #[prop(optional, into)] class: String,
    #[prop(default = DEFAULT_MAX_FILES)] max_files: usize,
    #[prop(default = DEFAULT_MAX_SIZE_MB)] max_size: f64,
    #[prop(default = DEFAULT_ACCEPT.to_string(), into)] accept: String,
    #[prop(optional)] on_files_selected: Option<Callback<Vec<File>>>,
) -> impl IntoView {
    let config = IntakeConfig::default()
        .with_max_files(max_files)
        .with_max_size_mb(max_size)
        .with_accept(accept);
    let accept = config.accept.clone();
    let intake = SharedIntake::new(IntakeController::new(config));
    let entries = intake.read_only();

    let mut zone = Dropzone::new(intake, BrowserRuntime);
    if let Some(callback) = on_files_selected {
        zone = zone.on_files_selected(move |files: Vec<BrowserFile>| {
            callback.call(files.into_iter().map(BrowserFile::into_inner).collect());
        });
    }
    let zone = store_value(zone);

    let (is_dragging, set_is_dragging) = create_signal(false);
    let count = create_memo(move |_| entries.with(|c| c.len()));
    let is_full = create_memo(move |_| entries.with(|c| c.is_full()));
    let file_input = create_node_ref::<html::Input>();

    let handle_files = move |files: Vec<BrowserFile>| {
        if files.is_empty() {
            return;
        }
        if zone.with_value(|zone| zone.admit(files)).is_none() {
            log::error!("{}", AppError::Intake("widget is no longer mounted".to_string()));
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_full.get_untracked() {
            set_is_dragging.set(true);
        }
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        if is_full.get_untracked() {
            return;
        }
        handle_files(dropped_files(&ev));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        handle_files(collect_files(input.files()));
        // Allow picking the same file again
        input.set_value("");
    };

    let browse_files = move |_| {
        if is_full.get_untracked() {
            return;
        }
        if let Err(e) = open_file_chooser(&file_input) {
            log::error!("{}", e);
        }
    };

    let on_remove = Callback::new(move |id: FileId| {
        zone.with_value(|zone| {
            zone.remove(id);
        });
    });

    let on_clear = move |_| {
        log::info!("🧹 Clearing {}", file_count_label(count.get_untracked()));
        zone.with_value(|zone| zone.clear());
    };

    let on_upload = move |_| {
        log::info!("📤 Upload requested for {}", file_count_label(count.get_untracked()));
    };

    view! {
        <div class=format!("file-upload {}", class)>
            <div
                class=move || zone_class(is_dragging.get(), is_full.get())
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=browse_files
            >
                <input
                    node_ref=file_input
                    type="file"
                    multiple=true
                    accept=accept
                    class="hidden"
                    on:change=on_file_change
                    on:click=|ev: MouseEvent| ev.stop_propagation()
                />

                <div class="dropzone-content">
                    <div class="upload-icon">"☁️"</div>
                    <div class="upload-text">{move || zone_headline(is_dragging.get())}</div>
                    <div class="upload-hint">"or click to browse files"</div>
                    <div class="upload-hint mt-20">{limits_hint(max_files, max_size)}</div>
                </div>
            </div>

            <Show
                when=move || { count.get() > 0 }
                fallback=|| view! { }
            >
                <div class="file-list">
                    <div class="file-count">
                        {move || format!("{} selected", file_count_label(count.get()))}
                    </div>

                    <div class="file-items">
                        <For
                            each=move || entries.with(|c| {
                                c.entries().iter().map(FileEntry::id).collect::<Vec<_>>()
                            })
                            key=|id| *id
                            children=move |id| {
                                view! { <FileItem entries=entries id=id on_remove=on_remove/> }
                            }
                        />
                    </div>

                    <div class="file-actions">
                        <button class="button-outline" type="button" on:click=on_clear>
                            "Clear All"
                        </button>
                        <button class="button-primary" type="button" on:click=on_upload>
                            {move || format!("Upload {}", file_count_label(count.get()))}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
