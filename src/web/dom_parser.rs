//! Strict SVG parsing through the browser's own `DOMParser`

use web_sys::{DomParser, Element, SupportedType};

use crate::api::helpers::js_error_message;
use crate::parse::{MarkupParser, ParseError, RootElement};

/// Marker element browsers put into documents that failed to parse
const PARSER_ERROR_TAG: &str = "parsererror";

#[derive(Debug, Clone, Copy, Default)]
pub struct DomSvgParser;

impl DomSvgParser {
    pub fn new() -> Self {
        Self
    }
}

impl RootElement for Element {
    fn tag_name(&self) -> String {
        self.node_name()
    }
}

impl MarkupParser for DomSvgParser {
    type Root = Element;

    fn parse(&self, text: &str) -> Result<Element, ParseError> {
        let parser = DomParser::new()
            .map_err(|_| ParseError::CapabilityMissing("DOMParser".to_string()))?;

        let doc = parser
            .parse_from_string(text, SupportedType::ImageSvgXml)
            .map_err(|e| ParseError::Malformed(js_error_message(&e)))?;

        let marker = doc
            .query_selector(PARSER_ERROR_TAG)
            .map_err(|e| ParseError::Malformed(js_error_message(&e)))?;
        if let Some(marker) = marker {
            return Err(ParseError::Malformed(parser_error_text(&marker)));
        }

        doc.document_element()
            .ok_or_else(|| ParseError::Malformed("document has no root element".to_string()))
    }
}

/// Browsers format the marker over several lines; the status line is one line
fn parser_error_text(marker: &Element) -> String {
    let text = marker
        .text_content()
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    if text.is_empty() {
        "parse failed".to_string()
    } else {
        text
    }
}
