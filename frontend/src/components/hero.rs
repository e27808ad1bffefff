//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"File Upload"</h1>
            <p class="subtitle">
                "Upload files with drag and drop support, progress tracking, and multi-file capabilities."
            </p>
        </div>
    }
}
