//! Preview controller
//!
//! Owns the validate-and-render cycle. Every call recomputes the outcome from
//! the given text alone and fully replaces the preview pane and the status, so
//! the same text always produces the same result.

use crate::models::{
    DebugLog, DisplayScale, RenderError, RenderOutcome, StatusMessage, SAMPLE_SVG,
};
use crate::parse::{MarkupParser, RootElement};
use crate::storage::Persistence;

use super::clock::{Clock, SystemClock};
use super::view::{PreviewView, ViewError};

pub struct PreviewController<P, V> {
    parser: P,
    view: V,
    persistence: Option<Persistence>,
    clock: Box<dyn Clock>,
    input: String,
    status: StatusMessage,
    outcome: RenderOutcome,
    log: DebugLog,
    scale: DisplayScale,
}

impl<P, V> PreviewController<P, V>
where
    P: MarkupParser,
    V: PreviewView<Root = P::Root>,
{
    /// Controller without persistence, timestamping with the system clock
    pub fn new(parser: P, view: V) -> Self {
        Self {
            parser,
            view,
            persistence: None,
            clock: Box::new(SystemClock),
            input: String::new(),
            status: StatusMessage::awaiting_input(),
            outcome: RenderOutcome::Empty,
            log: DebugLog::new(),
            scale: DisplayScale::default(),
        }
    }

    pub fn with_persistence(mut self, persistence: Persistence) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn outcome(&self) -> &RenderOutcome {
        &self.outcome
    }

    pub fn debug_log(&self) -> &DebugLog {
        &self.log
    }

    pub fn scale(&self) -> DisplayScale {
        self.scale
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn persistence(&self) -> Option<&Persistence> {
        self.persistence.as_ref()
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Choose the starting text and render it before first paint.
    ///
    /// Precedence: persisted input, then `prior_content` (whatever the field
    /// already held), then the built-in sample.
    pub fn initialize(&mut self, prior_content: Option<&str>) -> Result<RenderOutcome, ViewError> {
        let persisted = self.load_persisted();
        let prior = prior_content
            .filter(|text| !text.trim().is_empty())
            .map(str::to_string);

        let start = match (persisted, prior) {
            (Some(text), _) => {
                log::debug!("Starting from persisted input ({} bytes)", text.len());
                text
            }
            (None, Some(text)) => {
                log::debug!("Starting from existing field content");
                text
            }
            (None, None) => {
                log::debug!("Starting from the sample document");
                SAMPLE_SVG.to_string()
            }
        };

        self.replace_input(&start)?;
        self.render_input()
    }

    /// Input field changed
    pub fn on_input(&mut self, text: &str) -> Result<RenderOutcome, ViewError> {
        self.input = text.to_string();
        self.render_input()
    }

    /// Overwrite the input with the sample document and render it
    pub fn load_sample(&mut self) -> Result<RenderOutcome, ViewError> {
        log::info!("Loading sample document");
        self.replace_input(SAMPLE_SVG)?;
        self.render_input()
    }

    /// Empty the input, forget the persisted value, render (always `Empty`)
    pub fn clear(&mut self) -> Result<RenderOutcome, ViewError> {
        log::info!("Clearing input");
        self.replace_input("")?;
        if let Some(persistence) = self.persistence.as_mut() {
            if let Err(e) = persistence.forget() {
                log::warn!("Could not remove persisted input: {}", e);
            }
        }
        self.render_input()
    }

    /// Apply the raw value of the scale control while it is being edited.
    ///
    /// The control itself is left alone so a partially typed value is not
    /// overwritten. Validation is unaffected.
    pub fn set_scale(&mut self, raw: Option<&str>) -> Result<DisplayScale, ViewError> {
        let scale = DisplayScale::from_control(raw);
        log::debug!("Display scale {:?} -> {}%", raw, scale);
        self.scale = scale;
        self.view.apply_scale(scale)?;
        Ok(scale)
    }

    /// Apply a settled scale value and write the effective percent back into
    /// the control (on `change` and at mount)
    pub fn commit_scale(&mut self, raw: Option<&str>) -> Result<DisplayScale, ViewError> {
        let scale = self.set_scale(raw)?;
        self.view.sync_scale_control(scale)?;
        Ok(scale)
    }

    /// Report a fault caught outside the validation cycle.
    ///
    /// The preview pane is left untouched. Failing to display the fault only
    /// goes to the console.
    pub fn report_fault(&mut self, message: &str) {
        log::error!("Unhandled fault: {}", message);
        let status = StatusMessage::unexpected(message);
        self.record_status(status);
        if let Err(e) = self.publish_status() {
            log::error!("Could not display fault: {}", e);
        }
    }

    /// One validate-and-render cycle over `text`
    pub fn render(&mut self, text: &str) -> Result<RenderOutcome, ViewError> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            self.view.clear_preview()?;
            return self.finish(RenderOutcome::Empty, StatusMessage::awaiting_input());
        }

        match self.validate(trimmed) {
            Ok(root) => {
                let root_tag = root.tag_name();
                if let Err(e) = self.view.show_preview(root) {
                    // Never leave a half-replaced pane behind
                    if let Err(clear_err) = self.view.clear_preview() {
                        log::warn!("Could not clear preview after failed update: {}", clear_err);
                    }
                    return Err(e);
                }
                self.persist(trimmed);
                self.finish(RenderOutcome::Rendered { root_tag }, StatusMessage::preview_updated())
            }
            Err(err) => {
                self.view.clear_preview()?;
                let status = StatusMessage::render_failed(&err);
                self.finish(RenderOutcome::Failed(err), status)
            }
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn validate(&self, text: &str) -> Result<P::Root, RenderError> {
        let root = self.parser.parse(text)?;
        let tag = root.tag_name();
        if !tag.eq_ignore_ascii_case("svg") {
            return Err(RenderError::WrongRoot { found: tag });
        }
        Ok(root)
    }

    fn render_input(&mut self) -> Result<RenderOutcome, ViewError> {
        let text = self.input.clone();
        self.render(&text)
    }

    fn replace_input(&mut self, text: &str) -> Result<(), ViewError> {
        self.view.set_input(text)?;
        self.input = text.to_string();
        Ok(())
    }

    fn load_persisted(&self) -> Option<String> {
        let persistence = self.persistence.as_ref()?;
        match persistence.load() {
            Ok(value) => value.filter(|text| !text.trim().is_empty()),
            Err(e) => {
                log::warn!("Could not read persisted input: {}", e);
                None
            }
        }
    }

    fn persist(&mut self, text: &str) {
        if let Some(persistence) = self.persistence.as_mut() {
            if let Err(e) = persistence.save(text) {
                log::warn!("Could not persist input: {}", e);
            }
        }
    }

    fn finish(
        &mut self,
        outcome: RenderOutcome,
        status: StatusMessage,
    ) -> Result<RenderOutcome, ViewError> {
        match &outcome {
            RenderOutcome::Empty => log::debug!("Render: empty input"),
            RenderOutcome::Rendered { root_tag } => log::info!("Render: <{}> ok", root_tag),
            RenderOutcome::Failed(err) => log::warn!("Render failed ({:?}): {}", err.kind(), err),
        }
        self.outcome = outcome.clone();
        self.record_status(status);
        self.publish_status()?;
        Ok(outcome)
    }

    fn record_status(&mut self, status: StatusMessage) {
        self.log.append(self.clock.timestamp(), &status);
        self.status = status;
    }

    fn publish_status(&mut self) -> Result<(), ViewError> {
        self.view.show_status(&self.status)?;
        match self.log.latest() {
            Some(entry) => self.view.push_transcript(entry),
            None => Ok(()),
        }
    }
}

impl<P, V> std::fmt::Debug for PreviewController<P, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewController")
            .field("input_len", &self.input.len())
            .field("status", &self.status)
            .field("outcome", &self.outcome)
            .field("log_entries", &self.log.len())
            .field("scale", &self.scale)
            .finish()
    }
}
