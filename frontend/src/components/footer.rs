//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"File Upload Portal • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
