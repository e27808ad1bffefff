//! One staged file: icon, name, size, status and progress.
//!
//! Read-only view over the intake; removal goes back through `on_remove`.

use dropzone::{format_size, FileId, FileStatus, IntakeController};
use leptos::*;
use web_sys::MouseEvent;

use crate::{BrowserFile, ProgressBar};

/// Glyph and CSS class for a status. Idle shows nothing.
pub fn status_glyph(status: FileStatus) -> Option<(&'static str, &'static str)> {
    match status {
        FileStatus::Uploading => Some(("⏳", "status-icon spin")),
        FileStatus::Success => Some(("✅", "status-icon success")),
        FileStatus::Error => Some(("⚠️", "status-icon error")),
        FileStatus::Idle => None,
    }
}

/// Icon for a top-level MIME type.
pub fn file_icon(category: Option<&str>) -> &'static str {
    match category {
        Some("image") => "🖼️",
        Some("video") => "🎞️",
        Some("audio") => "🎵",
        Some("text") => "📝",
        _ => "📄",
    }
}

fn item_class(status: FileStatus) -> &'static str {
    if status == FileStatus::Error {
        "file-item file-item-error"
    } else {
        "file-item"
    }
}

#[component]
pub fn FileItem(
    entries: ReadSignal<IntakeController<BrowserFile>>,
    id: FileId,
    on_remove: Callback<FileId>,
) -> impl IntoView {
    let status = create_memo(move |_| {
        entries.with(|c| c.get(id).map(|e| e.status()).unwrap_or_default())
    });
    let progress = create_memo(move |_| {
        entries.with(|c| c.get(id).map(|e| e.progress()).unwrap_or_default())
    });
    let error = create_memo(move |_| {
        entries.with(|c| c.get(id).and_then(|e| e.error().map(str::to_string)))
    });

    // Name, size and type never change after admission
    let (name, size, icon) = entries.with_untracked(|c| {
        c.get(id)
            .map(|e| {
                (
                    e.name().to_string(),
                    format_size(e.size_bytes()),
                    file_icon(e.mime_category()),
                )
            })
            .unwrap_or_else(|| (String::new(), String::new(), file_icon(None)))
    });

    let on_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        on_remove.call(id);
    };

    view! {
        <div class=move || item_class(status.get())>
            <div class="file-icon">{icon}</div>

            <div class="file-body">
                <div class="file-title">
                    <p class="file-name">{name}</p>
                    {move || {
                        status_glyph(status.get())
                            .map(|(glyph, class)| view! { <span class=class>{glyph}</span> })
                    }}
                </div>

                <div class="file-meta">
                    <span>{size}</span>
                    {move || error.get().map(|msg| view! { <span class="file-error">{msg}</span> })}
                </div>

                <Show
                    when=move || status.get() == FileStatus::Uploading
                    fallback=|| view! { }
                >
                    <ProgressBar value=progress/>
                </Show>
            </div>

            <button class="file-remove" type="button" title="Remove file" on:click=on_click>
                "✕"
                <span class="sr-only">"Remove file"</span>
            </button>
        </div>
    }
}
