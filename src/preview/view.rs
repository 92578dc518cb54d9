//! Output surfaces driven by the controller

use thiserror::Error;

use crate::models::{DisplayScale, LogEntry, StatusMessage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Everything the controller writes to: preview pane, status region, debug
/// transcript, the input field (for actions) and the scale variable.
pub trait PreviewView {
    /// Element type handed over by the parser
    type Root;

    /// Remove everything from the preview pane
    fn clear_preview(&mut self) -> Result<(), ViewError>;

    /// Replace the pane's content with a deep copy of `root`, tagged as the
    /// active preview element
    fn show_preview(&mut self, root: Self::Root) -> Result<(), ViewError>;

    fn show_status(&mut self, status: &StatusMessage) -> Result<(), ViewError>;

    /// Put one new line on top of the debug transcript
    fn push_transcript(&mut self, entry: &LogEntry) -> Result<(), ViewError>;

    fn set_input(&mut self, text: &str) -> Result<(), ViewError>;

    /// Write the scale to whatever presentation consumes it
    fn apply_scale(&mut self, scale: DisplayScale) -> Result<(), ViewError>;

    /// Show the effective scale in the scale control itself
    fn sync_scale_control(&mut self, scale: DisplayScale) -> Result<(), ViewError>;
}
