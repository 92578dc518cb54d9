//! JavaScript-facing API
//!
//! - `helpers`: serialization and error conversion at the JS boundary
//! - `validate`: stateless validation, scale clamping and the sample document
//!
//! The stateful widget lives in `crate::web::SvgPreviewApp`.

pub mod helpers;
pub mod validate;

pub use validate::{clamp_scale, sample_svg, validate_markup, validate_svg, ValidationReport};
