//! Browser bindings
//!
//! - `dom_parser`: `DOMParser`-backed `MarkupParser`
//! - `dom_view`: `PreviewView` over the page's elements
//! - `local_storage`: `KeyValueStore` over `window.localStorage`
//! - `app`: mounts a controller on the page and wires its events

pub mod app;
pub mod dom_parser;
pub mod dom_view;
pub mod local_storage;

pub use app::SvgPreviewApp;
pub use dom_parser::DomSvgParser;
pub use dom_view::DomView;
pub use local_storage::LocalStorageStore;
