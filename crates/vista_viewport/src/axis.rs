//! Axis adapter
//!
//! The horizontal and vertical viewports behave identically along their
//! main axis. Everything orientation-specific (which coordinate of a point
//! or size matters, which arrow keys step, how content is translated) goes
//! through [`Axis`] so the controller itself never branches on orientation.

use serde::{Deserialize, Serialize};
use vista_core::{KeyCode, Point, Size};

/// Scroll axis of a viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Scrolls along x (default)
    #[default]
    Horizontal,
    /// Scrolls along y
    Vertical,
}

impl Axis {
    /// Component of `point` along the scroll axis
    pub fn main(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Component of `point` across the scroll axis
    pub fn cross(self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.y,
            Axis::Vertical => point.x,
        }
    }

    /// Extent of `size` along the scroll axis
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across the scroll axis
    pub fn cross_extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Translation to apply to the content for a given scroll offset
    pub fn translation(self, offset: f32) -> Point {
        match self {
            Axis::Horizontal => Point::new(-offset, 0.0),
            Axis::Vertical => Point::new(0.0, -offset),
        }
    }

    /// Arrow key that steps toward the content start
    pub fn decrease_key(self) -> KeyCode {
        match self {
            Axis::Horizontal => KeyCode::LEFT,
            Axis::Vertical => KeyCode::UP,
        }
    }

    /// Arrow key that steps toward the content end
    pub fn increase_key(self) -> KeyCode {
        match self {
            Axis::Horizontal => KeyCode::RIGHT,
            Axis::Vertical => KeyCode::DOWN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}
