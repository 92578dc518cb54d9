//! Preview controller and its output surfaces
//!
//! - `controller`: the validate-and-render cycle
//! - `view`: `PreviewView` trait implemented by every output backend
//! - `memory_view`: headless view over an owned element tree
//! - `clock`: transcript timestamps

pub mod clock;
pub mod controller;
pub mod memory_view;
pub mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::PreviewController;
pub use memory_view::MemoryView;
pub use view::{PreviewView, ViewError};

/// Class put on the element currently shown in the preview pane
pub const PREVIEW_CLASS: &str = "preview-svg";
