//! Stateless validation API
//!
//! Runs the same validate-and-render policy as the mounted widget against the
//! pure Rust parser, without touching the page.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::api::helpers::serialize;
use crate::models::{DisplayScale, FailureKind, RenderOutcome, Severity, SAMPLE_SVG};
use crate::parse::RoxmlParser;
use crate::preview::{MemoryView, PreviewController};

/// Result of validating one piece of markup
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub ok: bool,
    pub severity: Severity,
    /// Failure branch, absent for success and empty input
    pub kind: Option<FailureKind>,
    /// Status line the widget would show
    pub message: String,
    pub root_tag: Option<String>,
    /// Normalized markup of the element the preview would show
    pub preview: Option<String>,
}

pub fn validate_markup(text: &str) -> ValidationReport {
    let mut controller = PreviewController::new(RoxmlParser::new(), MemoryView::new());
    let outcome = match controller.render(text) {
        Ok(outcome) => outcome,
        Err(e) => {
            controller.report_fault(&e.to_string());
            controller.outcome().clone()
        }
    };

    let status = controller.status().clone();
    let root_tag = match &outcome {
        RenderOutcome::Rendered { root_tag } => Some(root_tag.clone()),
        _ => None,
    };

    ValidationReport {
        ok: outcome.is_rendered(),
        severity: status.severity,
        kind: outcome.failure_kind(),
        message: status.text,
        root_tag,
        preview: controller.view().preview_markup(),
    }
}

/// Validate SVG markup, returning a `ValidationReport` object
#[wasm_bindgen(js_name = validateSvg)]
pub fn validate_svg(text: &str) -> Result<JsValue, JsValue> {
    let report = validate_markup(text);
    log::debug!("validateSvg: ok={} kind={:?}", report.ok, report.kind);
    serialize(&report, "Failed to serialize validation report")
}

/// Effective scale percent for a raw control value
#[wasm_bindgen(js_name = clampScale)]
pub fn clamp_scale(raw: Option<String>) -> f64 {
    DisplayScale::from_control(raw.as_deref()).percent()
}

#[wasm_bindgen(js_name = sampleSvg)]
pub fn sample_svg() -> String {
    SAMPLE_SVG.to_string()
}
