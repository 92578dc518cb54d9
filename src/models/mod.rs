//! Data model for the preview widget
//!
//! - `status`: user-facing status line and its severity
//! - `outcome`: render outcome and failure kinds
//! - `debug_log`: timestamped transcript
//! - `scale`: clamped display scale
//! - `sample`: built-in sample document

pub mod debug_log;
pub mod outcome;
pub mod sample;
pub mod scale;
pub mod status;

pub use debug_log::{DebugLog, LogEntry};
pub use outcome::{FailureKind, RenderError, RenderOutcome};
pub use sample::SAMPLE_SVG;
pub use scale::DisplayScale;
pub use status::{Severity, StatusMessage};
