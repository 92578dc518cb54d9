//! Display scale for the preview pane
//!
//! Purely presentational: the scale never influences validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Preview scale in percent, always within [`DisplayScale::MIN`, `DisplayScale::MAX`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DisplayScale(f64);

impl DisplayScale {
    pub const MIN: f64 = 50.0;
    pub const MAX: f64 = 140.0;
    pub const DEFAULT: f64 = 100.0;

    /// Clamp a numeric percent; non-finite values fall back to the default
    pub fn clamped(percent: f64) -> Self {
        if !percent.is_finite() {
            return Self::default();
        }
        Self(percent.clamp(Self::MIN, Self::MAX))
    }

    /// Interpret the raw value of the scale control.
    ///
    /// Absent, blank and non-numeric values give the default of 100.
    pub fn from_control(raw: Option<&str>) -> Self {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<f64>().ok())
            .map(Self::clamped)
            .unwrap_or_default()
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Value of the `--preview-scale` CSS custom property (a plain factor)
    pub fn css_factor(self) -> String {
        format!("{}", self.0 / 100.0)
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for DisplayScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
