//! Status message shown next to the preview
//!
//! A status is a single human-readable line plus a severity tone that the
//! page uses for styling (`data-tone="info|success|error"`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a status message
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Attribute value written to the status region
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing status line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

impl StatusMessage {
    pub const AWAITING_INPUT: &'static str = "Paste SVG markup to start the preview.";
    pub const PREVIEW_UPDATED: &'static str = "Preview updated.";

    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn awaiting_input() -> Self {
        Self::new(Severity::Info, Self::AWAITING_INPUT)
    }

    pub fn preview_updated() -> Self {
        Self::new(Severity::Success, Self::PREVIEW_UPDATED)
    }

    /// Validation failure, reason interpolated into a fixed format
    pub fn render_failed(reason: impl fmt::Display) -> Self {
        Self::new(Severity::Error, format!("Unable to render: {}", reason))
    }

    /// Fault caught at the page boundary rather than by the validation cycle
    pub fn unexpected(reason: impl fmt::Display) -> Self {
        Self::new(Severity::Error, format!("Unexpected error: {}", reason))
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::awaiting_input()
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
