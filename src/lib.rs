//! SVG Live Preview WASM Module
//!
//! Validates SVG markup typed into a text field and renders it into a preview
//! pane on every keystroke. The validation policy lives in `preview`, behind
//! parser, storage and view capabilities, so it runs the same in the browser
//! (`web`) and headless (`api::validate_markup`, tests).

pub mod api;
pub mod config;
pub mod models;
pub mod parse;
pub mod preview;
pub mod storage;
pub mod web;

// Re-export commonly used types
pub use config::PreviewConfig;
pub use models::*;
pub use parse::{MarkupParser, ParseError, RoxmlParser, SvgElement};
pub use preview::{MemoryView, PreviewController, PreviewView, ViewError};
pub use storage::{KeyValueStore, MemoryStore, Persistence, StorageError};
pub use web::SvgPreviewApp;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_logging();

    log::info!("SVG preview WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    // A second init (module instantiated twice) keeps the first logger
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
