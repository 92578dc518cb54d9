// Controller behavior driven headlessly: roxmltree parser, in-memory view,
// in-memory store, fixed clock.

use svg_preview_wasm::models::sample::{SAMPLE_CHILD_TAGS, SAMPLE_SVG};
use svg_preview_wasm::models::{FailureKind, RenderError, RenderOutcome, Severity};
use svg_preview_wasm::parse::{MarkupParser, ParseError, RoxmlParser, SvgElement};
use svg_preview_wasm::preview::{FixedClock, MemoryView, PreviewController, PreviewView, ViewError};
use svg_preview_wasm::storage::{MemoryStore, Persistence};
use svg_preview_wasm::{DebugLog, DisplayScale, LogEntry, StatusMessage};

const KEY: &str = "svg-preview:last-input";

fn controller_with_store(
    store: &MemoryStore,
    view: MemoryView,
) -> PreviewController<RoxmlParser, MemoryView> {
    PreviewController::new(RoxmlParser::new(), view)
        .with_persistence(Persistence::new(Box::new(store.clone()), KEY))
        .with_clock(Box::new(FixedClock::new("09:30:00")))
}

fn controller(store: &MemoryStore) -> PreviewController<RoxmlParser, MemoryView> {
    controller_with_store(store, MemoryView::new())
}

#[test]
fn test_render_is_idempotent() {
    let inputs = [
        "",
        "   ",
        SAMPLE_SVG,
        "<svg><rect></svg>",
        "<g><rect/></g>",
        "  <svg xmlns=\"http://www.w3.org/2000/svg\"><circle r=\"4\"/></svg>\n",
    ];

    for text in inputs {
        let store = MemoryStore::new();
        let mut c = controller(&store);

        let first = c.render(text).unwrap();
        let first_status = c.status().clone();
        let first_preview = c.view().preview.clone();
        let first_persisted = store.value(KEY);

        let second = c.render(text).unwrap();
        assert_eq!(first, second, "outcome differs for {:?}", text);
        assert_eq!(&first_status, c.status(), "status differs for {:?}", text);
        assert_eq!(first_preview, c.view().preview, "preview differs for {:?}", text);
        assert_eq!(first_persisted, store.value(KEY), "persisted differs for {:?}", text);
    }
}

#[test]
fn test_empty_input_is_informational() {
    for text in ["", "   "] {
        let store = MemoryStore::new();
        let mut c = controller(&store);

        let outcome = c.render(text).unwrap();
        assert_eq!(outcome, RenderOutcome::Empty);
        assert!(c.view().is_preview_empty());
        assert_eq!(c.status().severity, Severity::Info);
        assert_eq!(c.view().status.as_ref(), Some(&StatusMessage::awaiting_input()));
        assert!(store.is_empty(), "empty input must not be persisted");
    }
}

#[test]
fn test_mismatched_tag_reports_parser_error() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    let outcome = c.render("<svg><rect></svg>").unwrap();
    let parser_text = match RoxmlParser::new().parse("<svg><rect></svg>") {
        Err(ParseError::Malformed(text)) => text,
        other => panic!("Expected Malformed, got {:?}", other),
    };

    assert_eq!(outcome.failure_kind(), Some(FailureKind::Malformed));
    assert!(c.view().is_preview_empty());
    assert_eq!(c.status().severity, Severity::Error);
    assert!(c.status().text.contains(&parser_text));
    assert!(c.status().text.starts_with("Unable to render: "));
    assert!(store.is_empty());
}

#[test]
fn test_wrong_root_is_rejected() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    let outcome = c.render("<g><rect/></g>").unwrap();
    assert_eq!(
        outcome,
        RenderOutcome::Failed(RenderError::WrongRoot { found: "g".into() })
    );
    assert!(c.view().is_preview_empty());
    assert_eq!(c.status().severity, Severity::Error);
    assert!(c.status().text.contains("is not an <svg> element"));
}

#[test]
fn test_sample_round_trip() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    let outcome = c.render(SAMPLE_SVG).unwrap();
    assert_eq!(outcome, RenderOutcome::Rendered { root_tag: "svg".into() });

    let preview = c.view().preview.as_ref().expect("preview should hold the svg");
    assert_eq!(preview.name, "svg");
    assert!(preview.has_class("preview-svg"));
    let tags: Vec<&str> = preview.child_elements().map(|el| el.name.as_str()).collect();
    assert_eq!(tags, SAMPLE_CHILD_TAGS);

    assert_eq!(c.status().severity, Severity::Success);
    assert_eq!(store.value(KEY).as_deref(), Some(SAMPLE_SVG.trim()));
}

#[test]
fn test_persisted_value_is_trimmed() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    c.on_input("\n  <svg/>  \n").unwrap();
    assert_eq!(c.input(), "\n  <svg/>  \n");
    assert_eq!(store.value(KEY).as_deref(), Some("<svg/>"));
}

#[test]
fn test_failure_clears_previous_preview() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    c.render(SAMPLE_SVG).unwrap();
    assert!(!c.view().is_preview_empty());

    c.render("<svg><rect></svg>").unwrap();
    assert!(c.view().is_preview_empty());
    // Last valid input survives a later failure
    assert_eq!(store.value(KEY).as_deref(), Some(SAMPLE_SVG.trim()));
}

#[test]
fn test_clear_after_success() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    c.load_sample().unwrap();
    assert!(store.value(KEY).is_some());

    let outcome = c.clear().unwrap();
    assert_eq!(outcome, RenderOutcome::Empty);
    assert_eq!(c.input(), "");
    assert_eq!(c.view().input, "");
    assert!(c.view().is_preview_empty());
    assert_eq!(store.value(KEY), None);
    assert_eq!(c.status().severity, Severity::Info);
}

#[test]
fn test_load_sample_overwrites_input() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    c.on_input("<g/>").unwrap();
    let outcome = c.load_sample().unwrap();
    assert!(outcome.is_rendered());
    assert_eq!(c.view().input, SAMPLE_SVG);
    assert_eq!(c.input(), SAMPLE_SVG);
}

#[test]
fn test_scale_clamp() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    assert_eq!(c.set_scale(Some("10")).unwrap().percent(), 50.0);
    assert_eq!(c.set_scale(Some("999")).unwrap().percent(), 140.0);
    assert_eq!(c.set_scale(Some("90")).unwrap().percent(), 90.0);
    assert_eq!(c.set_scale(Some("abc")).unwrap().percent(), 100.0);
    assert_eq!(c.set_scale(None).unwrap().percent(), 100.0);
    assert_eq!(c.view().scale, Some(DisplayScale::default()));
}

#[test]
fn test_initialize_prefers_persisted_input() {
    let store = MemoryStore::with_entry(KEY, "<svg id=\"saved\"/>");
    let mut c = controller_with_store(&store, MemoryView::with_input("<svg id=\"prior\"/>"));

    let outcome = c.initialize(Some("<svg id=\"prior\"/>")).unwrap();
    assert!(outcome.is_rendered());
    assert_eq!(c.view().input, "<svg id=\"saved\"/>");
    let preview = c.view().preview.as_ref().unwrap();
    assert_eq!(preview.attribute("id"), Some("saved"));
}

#[test]
fn test_initialize_falls_back_to_prior_then_sample() {
    let store = MemoryStore::new();
    let mut c = controller(&store);
    c.initialize(Some("<g/>")).unwrap();
    assert_eq!(c.view().input, "<g/>");
    assert_eq!(c.outcome().failure_kind(), Some(FailureKind::WrongRoot));

    let store = MemoryStore::new();
    let mut c = controller(&store);
    let outcome = c.initialize(Some("   ")).unwrap();
    assert!(outcome.is_rendered());
    assert_eq!(c.view().input, SAMPLE_SVG);
    assert_eq!(store.value(KEY).as_deref(), Some(SAMPLE_SVG.trim()));
}

#[test]
fn test_transcript_is_newest_first() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    c.render("").unwrap();
    c.render("<svg/>").unwrap();
    c.render("<g/>").unwrap();

    let log: &DebugLog = c.debug_log();
    let severities: Vec<Severity> = log.entries().iter().map(|e| e.severity).collect();
    assert_eq!(severities, vec![Severity::Info, Severity::Success, Severity::Error]);

    let lines: Vec<&str> = c.view().transcript.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("[09:30:00] error:"));
    assert!(lines[2].starts_with("[09:30:00] info:"));
    // The transcript mirrors the status line
    assert!(lines[0].ends_with(&c.status().text));
}

#[test]
fn test_fault_leaves_preview_in_place() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    c.render(SAMPLE_SVG).unwrap();
    c.report_fault("button handler exploded");

    assert!(!c.view().is_preview_empty());
    assert_eq!(c.status().severity, Severity::Error);
    assert_eq!(c.status().text, "Unexpected error: button handler exploded");
    assert_eq!(c.debug_log().len(), 2);

    // The next input runs a fresh cycle
    c.render(SAMPLE_SVG).unwrap();
    assert_eq!(c.status().severity, Severity::Success);
}

// ----------------------------------------------------------------------------
// Policy with a fake parser
// ----------------------------------------------------------------------------

/// Parser whose answers are fixed, independent of any parser's wording
struct ScriptedParser {
    answer: Result<SvgElement, ParseError>,
}

impl MarkupParser for ScriptedParser {
    type Root = SvgElement;

    fn parse(&self, _text: &str) -> Result<SvgElement, ParseError> {
        self.answer.clone()
    }
}

fn scripted(answer: Result<SvgElement, ParseError>) -> PreviewController<ScriptedParser, MemoryView> {
    PreviewController::new(ScriptedParser { answer }, MemoryView::new())
        .with_clock(Box::new(FixedClock::new("00:00:00")))
}

#[test]
fn test_capability_missing_is_reported() {
    let mut c = scripted(Err(ParseError::CapabilityMissing("DOMParser".into())));

    let outcome = c.render("<svg/>").unwrap();
    assert_eq!(outcome.failure_kind(), Some(FailureKind::CapabilityMissing));
    assert!(c.view().is_preview_empty());
    assert_eq!(
        c.status().text,
        "Unable to render: DOMParser is not available in this environment"
    );
}

#[test]
fn test_malformed_text_is_passed_through_verbatim() {
    let mut c = scripted(Err(ParseError::Malformed("line 1: tag mismatch".into())));

    c.render("anything").unwrap();
    assert_eq!(c.status().text, "Unable to render: line 1: tag mismatch");
}

#[test]
fn test_root_check_ignores_case() {
    let mut c = scripted(Ok(SvgElement::new("Svg")));
    assert!(c.render("x").unwrap().is_rendered());

    let mut c = scripted(Ok(SvgElement::new("svgx")));
    assert_eq!(c.render("x").unwrap().failure_kind(), Some(FailureKind::WrongRoot));
}

#[test]
fn test_blank_input_never_reaches_parser() {
    let mut c = scripted(Err(ParseError::Malformed("should not be called".into())));
    assert_eq!(c.render(" \t\n").unwrap(), RenderOutcome::Empty);
    assert_eq!(c.status().severity, Severity::Info);
}

// ----------------------------------------------------------------------------
// View failures surface as faults to the caller
// ----------------------------------------------------------------------------

#[derive(Default)]
struct BrokenPane {
    inner: MemoryView,
    cleared: usize,
}

impl PreviewView for BrokenPane {
    type Root = SvgElement;

    fn clear_preview(&mut self) -> Result<(), ViewError> {
        self.cleared += 1;
        self.inner.clear_preview()
    }

    fn show_preview(&mut self, _root: SvgElement) -> Result<(), ViewError> {
        Err(ViewError::Dom("appendChild refused".into()))
    }

    fn show_status(&mut self, status: &StatusMessage) -> Result<(), ViewError> {
        self.inner.show_status(status)
    }

    fn push_transcript(&mut self, entry: &LogEntry) -> Result<(), ViewError> {
        self.inner.push_transcript(entry)
    }

    fn set_input(&mut self, text: &str) -> Result<(), ViewError> {
        self.inner.set_input(text)
    }

    fn apply_scale(&mut self, scale: DisplayScale) -> Result<(), ViewError> {
        self.inner.apply_scale(scale)
    }

    fn sync_scale_control(&mut self, scale: DisplayScale) -> Result<(), ViewError> {
        self.inner.sync_scale_control(scale)
    }
}

#[test]
fn test_view_failure_is_returned_and_pane_cleared() {
    let store = MemoryStore::new();
    let mut c = PreviewController::new(RoxmlParser::new(), BrokenPane::default())
        .with_persistence(Persistence::new(Box::new(store.clone()), KEY))
        .with_clock(Box::new(FixedClock::new("00:00:00")));

    let err = c.render("<svg/>").unwrap_err();
    assert_eq!(err, ViewError::Dom("appendChild refused".into()));
    assert_eq!(c.view().cleared, 1);
    assert!(store.is_empty(), "nothing persisted when the preview could not be shown");

    c.report_fault(&err.to_string());
    assert_eq!(
        c.view().inner.status.as_ref().map(|s| s.severity),
        Some(Severity::Error)
    );
}
