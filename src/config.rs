//! Widget configuration
//!
//! Passed from JavaScript as a plain object; every field is optional.
//!
//! ```js
//! SvgPreviewApp.mount({ inputId: "markup", storageKey: "my-page:svg" });
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preview::PREVIEW_CLASS;
use crate::storage::Persistence;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid preview config: {0}")]
    Invalid(String),

    #[error("config field '{0}' must not be empty")]
    EmptyField(&'static str),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    /// `<textarea>` holding the markup
    pub input_id: String,
    /// Container for the rendered element
    pub preview_id: String,
    /// Status line (gets a `data-tone` attribute)
    pub status_id: String,
    /// Optional debug transcript
    pub debug_log_id: Option<String>,
    /// Optional `<input>` for the display scale
    pub scale_id: Option<String>,
    pub sample_button_id: Option<String>,
    pub clear_button_id: Option<String>,
    /// localStorage key for the last valid input
    pub storage_key: String,
    pub persist: bool,
    /// Route window `error` / `unhandledrejection` events to the status line
    pub capture_global_errors: bool,
    pub preview_class: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            input_id: "svg-input".to_string(),
            preview_id: "svg-preview".to_string(),
            status_id: "status".to_string(),
            debug_log_id: Some("debug-log".to_string()),
            scale_id: Some("scale".to_string()),
            sample_button_id: Some("load-sample".to_string()),
            clear_button_id: Some("clear".to_string()),
            storage_key: Persistence::DEFAULT_KEY.to_string(),
            persist: true,
            capture_global_errors: true,
            preview_class: PREVIEW_CLASS.to_string(),
        }
    }
}

impl PreviewConfig {
    /// Reject configs that would leave a required surface unaddressable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("inputId", &self.input_id),
            ("previewId", &self.preview_id),
            ("statusId", &self.status_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }
        if self.persist && self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyField("storageKey"));
        }
        Ok(())
    }
}
