//! Accessibility semantics for the custom scrollbar
//!
//! The drawn thumb is not a native scrollbar, so the host exposes these
//! values on the keyboard-focusable scroll region instead.

use serde::Serialize;

use crate::axis::Axis;

/// Role, range and orientation for the scroll region
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollbarSemantics {
    pub role: &'static str,
    /// Current scroll percentage, rounded to a whole number
    pub value_now: f32,
    pub value_min: f32,
    pub value_max: f32,
    pub orientation: Axis,
    /// Only focusable (and announced) while there is something to scroll
    pub focusable: bool,
}

impl ScrollbarSemantics {
    pub fn new(percentage: f32, axis: Axis, scrollable: bool) -> Self {
        Self {
            role: "scrollbar",
            value_now: percentage.round(),
            value_min: 0.0,
            value_max: 100.0,
            orientation: axis,
            focusable: scrollable,
        }
    }
}
