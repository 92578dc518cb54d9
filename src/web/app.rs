//! Mounted preview widget
//!
//! Builds a `PreviewController` over the page's elements and wires the input,
//! action buttons, scale control and window-level error events to it. Call
//! `SvgPreviewApp.mount()` once the DOM is ready.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Error as JsError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, Event, EventTarget, PromiseRejectionEvent, Window};

use crate::api::helpers::{js_error_message, validation_error};
use crate::config::{ConfigError, PreviewConfig};
use crate::preview::{PreviewController, ViewError};
use crate::storage::Persistence;

use super::dom_parser::DomSvgParser;
use super::dom_view::DomView;
use super::local_storage::LocalStorageStore;

type DomController = PreviewController<DomSvgParser, DomView>;
type SharedController = Rc<RefCell<DomController>>;

#[wasm_bindgen]
pub struct SvgPreviewApp {
    controller: SharedController,
}

#[wasm_bindgen]
impl SvgPreviewApp {
    /// Mount on the current page. `config` may be omitted for the default
    /// element ids.
    pub fn mount(config: JsValue) -> Result<SvgPreviewApp, JsValue> {
        let config = read_config(config)?;
        config
            .validate()
            .map_err(|e| validation_error(e.to_string()))?;

        let window = web_sys::window().ok_or_else(|| validation_error("no window available"))?;
        let document = window
            .document()
            .ok_or_else(|| validation_error("no document available"))?;

        let view = DomView::from_config(&document, &config)
            .map_err(|e| validation_error(e.to_string()))?;
        let prior_content = view.input_value();
        let has_scale_control = view.scale_element().is_some();

        let mut controller = PreviewController::new(DomSvgParser::new(), view);
        if config.persist {
            match LocalStorageStore::from_window(&window) {
                Ok(store) => {
                    controller = controller
                        .with_persistence(Persistence::new(Box::new(store), &config.storage_key));
                }
                Err(e) => log::warn!("Persistence disabled: {}", e),
            }
        }

        let controller: SharedController = Rc::new(RefCell::new(controller));

        wire_input(&controller)?;
        if has_scale_control {
            wire_scale(&controller)?;
            dispatch(&controller, "initial scale", |c| {
                let raw = c.view().scale_value();
                c.commit_scale(raw.as_deref()).map(|_| ())
            });
        }
        wire_buttons(&controller, &document, &config)?;
        if config.capture_global_errors {
            wire_global_errors(&controller, &window)?;
        }

        dispatch(&controller, "initial render", |c| {
            c.initialize(Some(prior_content.as_str())).map(|_| ())
        });

        log::info!("SVG preview mounted on #{}", config.input_id);
        Ok(SvgPreviewApp { controller })
    }

    #[wasm_bindgen(js_name = loadSample)]
    pub fn load_sample(&self) {
        dispatch(&self.controller, "load sample", |c| c.load_sample().map(|_| ()));
    }

    pub fn clear(&self) {
        dispatch(&self.controller, "clear", |c| c.clear().map(|_| ()));
    }

    /// Re-render whatever the input field currently holds
    pub fn refresh(&self) {
        dispatch(&self.controller, "refresh", |c| {
            let text = c.view().input_value();
            c.on_input(&text).map(|_| ())
        });
    }

    #[wasm_bindgen(js_name = reportFault)]
    pub fn report_fault(&self, message: &str) {
        report(&self.controller, message);
    }

    #[wasm_bindgen(getter, js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.controller.borrow().status().text.clone()
    }

    #[wasm_bindgen(getter, js_name = statusTone)]
    pub fn status_tone(&self) -> String {
        self.controller.borrow().status().severity.as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = debugLog)]
    pub fn debug_log(&self) -> String {
        self.controller.borrow().debug_log().render()
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.controller.borrow().scale().percent()
    }
}

fn read_config(value: JsValue) -> Result<PreviewConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(PreviewConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| validation_error(ConfigError::Invalid(e.to_string()).to_string()))
}

/// Run `action` against the controller; a `ViewError` escaping it becomes a
/// reported fault. Events arriving while the controller is borrowed are
/// dropped.
fn dispatch<F>(controller: &SharedController, action: &str, f: F)
where
    F: FnOnce(&mut DomController) -> Result<(), ViewError>,
{
    match controller.try_borrow_mut() {
        Ok(mut c) => {
            if let Err(e) = f(&mut *c) {
                c.report_fault(&format!("{} failed: {}", action, e));
            }
        }
        Err(_) => log::warn!("Dropped '{}': controller busy", action),
    }
}

fn report(controller: &SharedController, message: &str) {
    match controller.try_borrow_mut() {
        Ok(mut c) => c.report_fault(message),
        Err(_) => log::error!("Fault while controller busy: {}", message),
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn wire_input(controller: &SharedController) -> Result<(), JsValue> {
    let target: EventTarget = controller.borrow().view().input_element().clone().into();
    let shared = Rc::clone(controller);
    listen(&target, "input", move |_| {
        dispatch(&shared, "input", |c| {
            let text = c.view().input_value();
            c.on_input(&text).map(|_| ())
        });
    })
}

fn wire_scale(controller: &SharedController) -> Result<(), JsValue> {
    let target: Option<EventTarget> = controller
        .borrow()
        .view()
        .scale_element()
        .map(|el| el.clone().into());
    let Some(target) = target else {
        return Ok(());
    };
    // While typing only the presentation follows; the control is rewritten
    // with the clamped value once the edit is committed
    let shared = Rc::clone(controller);
    listen(&target, "input", move |_| {
        dispatch(&shared, "scale", |c| {
            let raw = c.view().scale_value();
            c.set_scale(raw.as_deref()).map(|_| ())
        });
    })?;

    let shared = Rc::clone(controller);
    listen(&target, "change", move |_| {
        dispatch(&shared, "scale", |c| {
            let raw = c.view().scale_value();
            c.commit_scale(raw.as_deref()).map(|_| ())
        });
    })
}

fn wire_buttons(
    controller: &SharedController,
    document: &web_sys::Document,
    config: &PreviewConfig,
) -> Result<(), JsValue> {
    if let Some(id) = config.sample_button_id.as_deref() {
        match document.get_element_by_id(id) {
            Some(button) => {
                let shared = Rc::clone(controller);
                listen(&button, "click", move |_| {
                    dispatch(&shared, "load sample", |c| c.load_sample().map(|_| ()));
                })?;
            }
            None => log::warn!("Sample button #{} not found", id),
        }
    }

    if let Some(id) = config.clear_button_id.as_deref() {
        match document.get_element_by_id(id) {
            Some(button) => {
                let shared = Rc::clone(controller);
                listen(&button, "click", move |_| {
                    dispatch(&shared, "clear", |c| c.clear().map(|_| ()));
                })?;
            }
            None => log::warn!("Clear button #{} not found", id),
        }
    }
    Ok(())
}

fn wire_global_errors(controller: &SharedController, window: &Window) -> Result<(), JsValue> {
    let shared = Rc::clone(controller);
    listen(window, "error", move |event| {
        let message = event
            .dyn_ref::<ErrorEvent>()
            .map(ErrorEvent::message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "script error".to_string());
        report(&shared, &message);
    })?;

    let shared = Rc::clone(controller);
    listen(window, "unhandledrejection", move |event| {
        let message = event
            .dyn_ref::<PromiseRejectionEvent>()
            .map(|e| rejection_message(&e.reason()))
            .unwrap_or_else(|| "unhandled rejection".to_string());
        report(&shared, &message);
    })
}

fn rejection_message(reason: &JsValue) -> String {
    match reason.dyn_ref::<JsError>() {
        Some(err) => String::from(err.message()),
        None => js_error_message(reason),
    }
}
