//! `PreviewView` over real page elements

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::api::helpers::js_error_message;
use crate::config::PreviewConfig;
use crate::models::{DisplayScale, LogEntry, StatusMessage};
use crate::preview::{PreviewView, ViewError};

/// CSS custom property consumed by the page stylesheet
pub const SCALE_PROPERTY: &str = "--preview-scale";

/// Attribute on the status region carrying the severity
pub const TONE_ATTRIBUTE: &str = "data-tone";

pub struct DomView {
    document: Document,
    input: HtmlTextAreaElement,
    preview: Element,
    status: Element,
    transcript: Option<Element>,
    scale_input: Option<HtmlInputElement>,
    preview_class: String,
}

impl DomView {
    /// Look up every surface named in `config`. Required surfaces must exist;
    /// optional ones that are missing are skipped with a warning.
    pub fn from_config(document: &Document, config: &PreviewConfig) -> Result<Self, ViewError> {
        let input = typed_element_by_id::<HtmlTextAreaElement>(document, &config.input_id, "textarea")?;
        let preview = element_by_id(document, &config.preview_id)?;
        let status = element_by_id(document, &config.status_id)?;

        let transcript = config
            .debug_log_id
            .as_deref()
            .and_then(|id| optional(element_by_id(document, id)));
        let scale_input = config
            .scale_id
            .as_deref()
            .and_then(|id| optional(typed_element_by_id::<HtmlInputElement>(document, id, "input")));

        Ok(Self {
            document: document.clone(),
            input,
            preview,
            status,
            transcript,
            scale_input,
            preview_class: config.preview_class.clone(),
        })
    }

    pub fn input_value(&self) -> String {
        self.input.value()
    }

    /// Raw scale control value, `None` when there is no control
    pub fn scale_value(&self) -> Option<String> {
        self.scale_input.as_ref().map(HtmlInputElement::value)
    }

    pub fn input_element(&self) -> &HtmlTextAreaElement {
        &self.input
    }

    pub fn scale_element(&self) -> Option<&HtmlInputElement> {
        self.scale_input.as_ref()
    }
}

impl PreviewView for DomView {
    type Root = Element;

    fn clear_preview(&mut self) -> Result<(), ViewError> {
        self.preview.set_text_content(None);
        Ok(())
    }

    fn show_preview(&mut self, root: Element) -> Result<(), ViewError> {
        // Import rather than adopt: the parsed document is thrown away
        let imported = self
            .document
            .import_node_with_deep(&root, true)
            .map_err(dom_error)?
            .dyn_into::<Element>()
            .map_err(|_| ViewError::Dom("imported node is not an element".to_string()))?;

        imported
            .class_list()
            .add_1(&self.preview_class)
            .map_err(dom_error)?;

        self.preview.set_text_content(None);
        self.preview.append_child(&imported).map_err(dom_error)?;
        Ok(())
    }

    fn show_status(&mut self, status: &StatusMessage) -> Result<(), ViewError> {
        self.status.set_text_content(Some(&status.text));
        self.status
            .set_attribute(TONE_ATTRIBUTE, status.severity.as_str())
            .map_err(dom_error)
    }

    fn push_transcript(&mut self, entry: &LogEntry) -> Result<(), ViewError> {
        let Some(transcript) = &self.transcript else {
            return Ok(());
        };
        let text = if transcript.has_child_nodes() {
            format!("{}\n", entry.line())
        } else {
            entry.line()
        };
        transcript
            .insert_adjacent_text("afterbegin", &text)
            .map_err(dom_error)
    }

    fn set_input(&mut self, text: &str) -> Result<(), ViewError> {
        self.input.set_value(text);
        Ok(())
    }

    fn apply_scale(&mut self, scale: DisplayScale) -> Result<(), ViewError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ViewError::MissingElement("documentElement".to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ViewError::Dom("documentElement is not an HTML element".to_string()))?;

        root.style()
            .set_property(SCALE_PROPERTY, &scale.css_factor())
            .map_err(dom_error)
    }

    fn sync_scale_control(&mut self, scale: DisplayScale) -> Result<(), ViewError> {
        if let Some(control) = &self.scale_input {
            control.set_value(&scale.to_string());
        }
        Ok(())
    }
}

fn dom_error(e: wasm_bindgen::JsValue) -> ViewError {
    ViewError::Dom(js_error_message(&e))
}

fn element_by_id(document: &Document, id: &str) -> Result<Element, ViewError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ViewError::MissingElement(id.to_string()))
}

fn typed_element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, ViewError> {
    element_by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| ViewError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

fn optional<T>(lookup: Result<T, ViewError>) -> Option<T> {
    match lookup {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("Optional surface skipped: {}", e);
            None
        }
    }
}
