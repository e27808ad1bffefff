//! Implementation notes panel shown under the widget

use leptos::*;

const NOTES: [&str; 5] = [
    "Drag and drop files into the upload area or click to browse",
    "Supports multiple file selection with progress indicators",
    "File size validation with customizable limits",
    "Currently using simulated upload progress",
    "Ready for a real storage backend",
];

#[component]
pub fn ImplementationNotes() -> impl IntoView {
    view! {
        <div class="notes">
            <h3>"Implementation Notes:"</h3>
            <ul>
                {NOTES.iter().map(|note| view! { <li>{*note}</li> }).collect_view()}
            </ul>
        </div>
    }
}
