//! Outcome of one validate-and-render cycle

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parse::ParseError;

/// Tag identifying which branch of validation failed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    CapabilityMissing,
    Malformed,
    WrongRoot,
}

/// Validation failures resolved inside the controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The host has no markup parser to offer
    #[error("{0} is not available in this environment")]
    CapabilityMissing(String),

    /// Parser reported a well-formedness violation (parser's own wording)
    #[error("{0}")]
    Malformed(String),

    /// Well-formed document whose root is something other than `<svg>`
    #[error("root element <{found}> is not an <svg> element")]
    WrongRoot { found: String },
}

impl RenderError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RenderError::CapabilityMissing(_) => FailureKind::CapabilityMissing,
            RenderError::Malformed(_) => FailureKind::Malformed,
            RenderError::WrongRoot { .. } => FailureKind::WrongRoot,
        }
    }
}

impl From<ParseError> for RenderError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::CapabilityMissing(name) => RenderError::CapabilityMissing(name),
            ParseError::Malformed(reason) => RenderError::Malformed(reason),
        }
    }
}

/// Result of rendering the current input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Input was blank after trimming
    Empty,
    /// Preview now shows the element with this tag name
    Rendered { root_tag: String },
    Failed(RenderError),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            RenderOutcome::Failed(err) => Some(err.kind()),
            _ => None,
        }
    }
}
