//! Upload Portal - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that checks the log upload form before the
//! browser posts it, and celebrates a finished upload with confetti.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title)                                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /                        UploadPage → UploadForm            │
//! │  /confirmation/:file_id   ConfirmationPage (confetti)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`components`] - UI components (Hero, UploadForm, Confirmation, Footer)
//! - [`services`] - Browser bindings (confetti container, timers)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Initializes the page. Called once per page view, by the trunk binary or
/// by a host page loading the wasm-pack build.
#[wasm_bindgen]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Upload Portal - Starting Leptos App");

    mount_to_body(|| view! { <App/> });

    // Only fires on pages that rendered a confetti container
    init_confetti();
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="File Upload Portal"/>
        <Router>
            <div class="container">
                <Hero/>
                <main>
                    <Routes>
                        <Route path="/" view=UploadPage/>
                        <Route path="/confirmation/:file_id" view=ConfirmationPage/>
                    </Routes>
                </main>
            </div>
            <Footer/>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    view! {
        <section class="upload-card">
            <h2>"Upload a log file"</h2>
            <UploadForm/>
        </section>
    }
}
