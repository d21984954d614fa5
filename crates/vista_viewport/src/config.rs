//! Viewport configuration
//!
//! [`ViewportConfig`] is plain data: it deserializes from any serde format
//! with every field optional, and is checked once by
//! [`ViewportConfig::validate`] before a controller is built from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::axis::Axis;
use crate::geometry::MIN_THUMB_SIZE;
use crate::mask::{EdgeMaskPolicy, DEFAULT_FADE_LENGTH};

/// Fixed padding added to both track ends (and mask insets) by `include_margin`
pub const EDGE_MARGIN: f32 = 16.0;

/// Default arrow-key step in pixels
pub const DEFAULT_KEYBOARD_STEP: f32 = 100.0;

/// Overflow below which content is treated as fitting (sub-pixel layout noise)
pub const SCROLL_TOLERANCE: f32 = 2.0;

/// Content-drag movement before a press counts as a drag rather than a click
pub const DRAG_THRESHOLD: f32 = 5.0;

/// Errors from [`ViewportConfig::validate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

/// Configuration for one scrollable viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Scroll axis
    pub axis: Axis,
    /// Add [`EDGE_MARGIN`] to both ends of the track and mask
    pub include_margin: bool,
    /// Inset before the track start
    pub padding_leading: f32,
    /// Inset after the track end
    pub padding_trailing: f32,
    /// Inset across the scroll axis (presentation only)
    pub padding_cross: f32,
    /// Trailing-mask threshold: keep the trailing fade only while the
    /// viewport is at most this long. Caller-specific; no default.
    pub forced_min_extent: Option<f32>,
    /// Narrower fade on the leading edge
    pub reduce_leading_mask: bool,
    /// Whether dragging directly on the content scrolls it
    pub enable_content_drag: bool,
    /// Pixels per arrow key press
    pub keyboard_step: f32,
    /// Minimum thumb length
    pub min_thumb_size: f32,
    /// Overflow that must be exceeded before the viewport is scrollable
    pub scroll_tolerance: f32,
    /// Content-drag click/drag disambiguation distance
    pub drag_threshold: f32,
    /// Edge fade length
    pub fade_length: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            include_margin: false,
            padding_leading: 0.0,
            padding_trailing: 0.0,
            padding_cross: 0.0,
            forced_min_extent: None,
            reduce_leading_mask: false,
            enable_content_drag: false,
            keyboard_step: DEFAULT_KEYBOARD_STEP,
            min_thumb_size: MIN_THUMB_SIZE,
            scroll_tolerance: SCROLL_TOLERANCE,
            drag_threshold: DRAG_THRESHOLD,
            fade_length: DEFAULT_FADE_LENGTH,
        }
    }
}

impl ViewportConfig {
    /// Horizontal viewport with defaults
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Vertical viewport with defaults
    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            ..Default::default()
        }
    }

    pub fn with_margin(mut self, include_margin: bool) -> Self {
        self.include_margin = include_margin;
        self
    }

    pub fn with_padding(mut self, leading: f32, trailing: f32, cross: f32) -> Self {
        self.padding_leading = leading;
        self.padding_trailing = trailing;
        self.padding_cross = cross;
        self
    }

    pub fn with_forced_min_extent(mut self, extent: f32) -> Self {
        self.forced_min_extent = Some(extent);
        self
    }

    pub fn with_reduced_leading_mask(mut self) -> Self {
        self.reduce_leading_mask = true;
        self
    }

    pub fn with_content_drag(mut self, enabled: bool) -> Self {
        self.enable_content_drag = enabled;
        self
    }

    pub fn with_keyboard_step(mut self, step: f32) -> Self {
        self.keyboard_step = step;
        self
    }

    pub fn with_min_thumb_size(mut self, size: f32) -> Self {
        self.min_thumb_size = size;
        self
    }

    fn margin(&self) -> f32 {
        if self.include_margin {
            EDGE_MARGIN
        } else {
            0.0
        }
    }

    /// Inset from the measured track start to the usable track start
    pub fn track_leading_inset(&self) -> f32 {
        self.padding_leading + self.margin()
    }

    /// Inset from the usable track end to the measured track end
    pub fn track_trailing_inset(&self) -> f32 {
        self.padding_trailing + self.margin()
    }

    /// Usable track length for a measured track
    pub fn usable_track(&self, measured: f32) -> f32 {
        (measured - self.track_leading_inset() - self.track_trailing_inset()).max(0.0)
    }

    /// Mask shape derived from this configuration
    pub fn mask_policy(&self) -> EdgeMaskPolicy {
        EdgeMaskPolicy {
            forced_min_extent: self.forced_min_extent,
            fade_length: self.fade_length,
            reduce_leading: self.reduce_leading_mask,
            leading_inset: self.track_leading_inset(),
            trailing_inset: self.track_trailing_inset(),
        }
    }

    /// Check every numeric field
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("padding_leading", self.padding_leading)?;
        non_negative("padding_trailing", self.padding_trailing)?;
        non_negative("padding_cross", self.padding_cross)?;
        positive("keyboard_step", self.keyboard_step)?;
        non_negative("min_thumb_size", self.min_thumb_size)?;
        non_negative("scroll_tolerance", self.scroll_tolerance)?;
        non_negative("drag_threshold", self.drag_threshold)?;
        non_negative("fade_length", self.fade_length)?;
        if let Some(extent) = self.forced_min_extent {
            positive("forced_min_extent", extent)?;
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}
