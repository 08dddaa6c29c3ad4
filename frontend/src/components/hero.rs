//! Hero section component

use leptos::*;
use upload_portal::config::ALLOWED_EXTENSIONS;

#[component]
pub fn Hero() -> impl IntoView {
    let formats = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="hero">
            <h1>"File Upload Portal"</h1>
            <p class="subtitle">
                "Share log files with the team. Accepted formats: " {formats} ", up to 16 MB."
            </p>
        </div>
    }
}
