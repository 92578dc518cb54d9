//! Markup parsing capability
//!
//! The controller never talks to a concrete parser. It asks a `MarkupParser`
//! for a root element and applies its own validation policy on top, so the
//! browser's `DOMParser`, the pure-Rust `RoxmlParser` and test fakes are
//! interchangeable.

pub mod roxml;
pub mod svg_tree;

pub use roxml::RoxmlParser;
pub use svg_tree::{SvgElement, SvgNode};

use thiserror::Error;

/// Errors a parser can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The host offers no parser (names the missing capability)
    #[error("{0} is not available")]
    CapabilityMissing(String),

    /// Input is not well-formed; carries the parser's own error text
    #[error("{0}")]
    Malformed(String),
}

/// Root element of a freshly parsed document
pub trait RootElement {
    /// Qualified tag name as written (`svg`, `svg:svg`, `SVG`, ...)
    fn tag_name(&self) -> String;
}

/// Strict (well-formedness checking) markup parser
pub trait MarkupParser {
    type Root: RootElement;

    fn parse(&self, text: &str) -> Result<Self::Root, ParseError>;
}
