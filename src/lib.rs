//! PolydisVae - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the PolydisVae demo: upload two MIDI
//! reference files and ask the generation API for a piece that mixes them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description, paper reference)             │
//! │  ├── AudioFilePicker (standalone, type warning only)        │
//! │  └── UploadForm (pitch + rhythm inputs, submit)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (FormValues, SubmitStatus, errors)
//! - [`validation`] - Pure client-side validation
//! - [`components`] - UI components (Header, UploadForm, etc.)
//! - [`services`] - Generation API communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Form
    FormValues, FieldErrors,
    // Submission
    SubmitStatus,
    // Errors
    AppError, AppResult,
};

// Validation
pub use validation::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 PolydisVae - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Title text=APP_NAME/>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <Header/>

        <div class="container">
            <Hero/>

            // Standalone picker; its selection never reaches the form below.
            <AudioFilePicker/>

            <UploadForm/>
        </div>

        <Footer/>
    }
}
