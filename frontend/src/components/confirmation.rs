//! Confirmation page shown after the server accepted an upload.
//!
//! Renders the confetti container; the burst itself is started by
//! [`crate::init_confetti`] at page initialization.

use leptos::*;
use leptos_router::*;
use upload_portal::config::CONFETTI_CONTAINER_ID;

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    let params = use_params_map();
    let file_id = move || params.with(|p| p.get("file_id").cloned().unwrap_or_default());

    view! {
        <section class="confirmation">
            <div id=CONFETTI_CONTAINER_ID class="confetti-container"></div>
            <div class="confirmation-icon">"✅"</div>
            <h2>"Upload successful"</h2>
            <p class="confirmation-ref">"Reference: " <code>{file_id}</code></p>
            <A href="/" class="upload-button">"Upload another file"</A>
        </section>
    }
}
