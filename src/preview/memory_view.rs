//! Headless view
//!
//! Holds the preview as an owned `SvgElement`. Used for validation without a
//! DOM and by the controller tests.

use crate::models::{DisplayScale, LogEntry, StatusMessage};
use crate::parse::SvgElement;

use super::view::{PreviewView, ViewError};
use super::PREVIEW_CLASS;

#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub input: String,
    pub preview: Option<SvgElement>,
    pub status: Option<StatusMessage>,
    pub transcript: String,
    pub scale: Option<DisplayScale>,
    /// Value last written into the scale control
    pub scale_control: Option<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View whose input field already holds some text
    pub fn with_input(text: impl Into<String>) -> Self {
        Self {
            input: text.into(),
            ..Self::default()
        }
    }

    pub fn is_preview_empty(&self) -> bool {
        self.preview.is_none()
    }

    /// Preview pane content serialized back to markup
    pub fn preview_markup(&self) -> Option<String> {
        self.preview
            .as_ref()
            .and_then(|root| root.to_markup().ok())
    }
}

impl PreviewView for MemoryView {
    type Root = SvgElement;

    fn clear_preview(&mut self) -> Result<(), ViewError> {
        self.preview = None;
        Ok(())
    }

    fn show_preview(&mut self, root: SvgElement) -> Result<(), ViewError> {
        let mut copy = root;
        copy.add_class(PREVIEW_CLASS);
        self.preview = Some(copy);
        Ok(())
    }

    fn show_status(&mut self, status: &StatusMessage) -> Result<(), ViewError> {
        self.status = Some(status.clone());
        Ok(())
    }

    fn push_transcript(&mut self, entry: &LogEntry) -> Result<(), ViewError> {
        let line = entry.line();
        self.transcript = if self.transcript.is_empty() {
            line
        } else {
            format!("{}\n{}", line, self.transcript)
        };
        Ok(())
    }

    fn set_input(&mut self, text: &str) -> Result<(), ViewError> {
        self.input = text.to_string();
        Ok(())
    }

    fn apply_scale(&mut self, scale: DisplayScale) -> Result<(), ViewError> {
        self.scale = Some(scale);
        Ok(())
    }

    fn sync_scale_control(&mut self, scale: DisplayScale) -> Result<(), ViewError> {
        self.scale_control = Some(scale.to_string());
        Ok(())
    }
}
