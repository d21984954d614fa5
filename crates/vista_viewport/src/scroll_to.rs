//! Scroll-into-view
//!
//! Alignment policies for bringing a content-relative box into the visible
//! window, and the [`TargetResolver`] seam through which the host turns an
//! opaque target identifier into such a box.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Where the target should land in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlign {
    /// Target start at viewport start
    Start,
    /// Target centered in the viewport
    Center,
    /// Target end at viewport end
    End,
    /// Scroll the minimum distance to make the target visible
    #[default]
    Nearest,
}

/// How the presentation layer should move to the committed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollTransition {
    /// Jump (no animation)
    #[default]
    Instant,
    /// Animated scroll
    Smooth,
}

/// A target's extent along the scroll axis, relative to the content start
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TargetBounds {
    pub start: f32,
    pub extent: f32,
}

impl TargetBounds {
    pub fn new(start: f32, extent: f32) -> Self {
        Self { start, extent }
    }

    pub fn end(&self) -> f32 {
        self.start + self.extent
    }
}

/// Imperative scroll request from the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Opaque identifier resolved by a [`TargetResolver`]
    pub target: String,
    #[serde(default)]
    pub align: ScrollAlign,
    #[serde(default)]
    pub transition: ScrollTransition,
}

impl ScrollRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            align: ScrollAlign::default(),
            transition: ScrollTransition::default(),
        }
    }

    pub fn align(mut self, align: ScrollAlign) -> Self {
        self.align = align;
        self
    }

    pub fn smooth(mut self) -> Self {
        self.transition = ScrollTransition::Smooth;
        self
    }
}

/// Resolves target identifiers to content-relative bounds
pub trait TargetResolver {
    /// `None` when the target does not exist (the request becomes a no-op)
    fn resolve(&self, target: &str) -> Option<TargetBounds>;
}

impl<F> TargetResolver for F
where
    F: Fn(&str) -> Option<TargetBounds>,
{
    fn resolve(&self, target: &str) -> Option<TargetBounds> {
        self(target)
    }
}

impl TargetResolver for FxHashMap<String, TargetBounds> {
    fn resolve(&self, target: &str) -> Option<TargetBounds> {
        self.get(target).copied()
    }
}

/// Offset that satisfies `align` for `target`, before clamping.
///
/// Returns `None` when no scroll is needed: a `Nearest` target that is
/// already fully visible, or one that already covers the whole viewport.
pub fn aligned_offset(
    target: TargetBounds,
    align: ScrollAlign,
    current_offset: f32,
    viewport_extent: f32,
) -> Option<f32> {
    match align {
        ScrollAlign::Start => Some(target.start),
        ScrollAlign::Center => Some(target.start - (viewport_extent - target.extent) / 2.0),
        ScrollAlign::End => Some(target.end() - viewport_extent),
        ScrollAlign::Nearest => {
            let window_start = current_offset;
            let window_end = current_offset + viewport_extent;
            let before = target.start < window_start;
            let after = target.end() > window_end;
            match (before, after) {
                (false, false) | (true, true) => None,
                (true, false) => Some(target.start),
                // Larger than the viewport: show its start rather than its end
                (false, true) if target.extent > viewport_extent => Some(target.start),
                (false, true) => Some(target.end() - viewport_extent),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let target = TargetBounds::new(300.0, 50.0);
        assert_eq!(aligned_offset(target, ScrollAlign::Center, 0.0, 200.0), Some(225.0));
    }

    #[test]
    fn test_start_and_end() {
        let target = TargetBounds::new(300.0, 50.0);
        assert_eq!(aligned_offset(target, ScrollAlign::Start, 0.0, 200.0), Some(300.0));
        assert_eq!(aligned_offset(target, ScrollAlign::End, 0.0, 200.0), Some(150.0));
    }

    #[test]
    fn test_nearest_noop_when_visible() {
        let target = TargetBounds::new(120.0, 50.0);
        assert_eq!(aligned_offset(target, ScrollAlign::Nearest, 100.0, 200.0), None);
        // Exactly touching both edges still counts as visible
        let target = TargetBounds::new(100.0, 200.0);
        assert_eq!(aligned_offset(target, ScrollAlign::Nearest, 100.0, 200.0), None);
    }

    #[test]
    fn test_nearest_aligns_violated_edge() {
        // Above the window: align start
        let target = TargetBounds::new(40.0, 50.0);
        assert_eq!(aligned_offset(target, ScrollAlign::Nearest, 100.0, 200.0), Some(40.0));

        // Below the window: align end
        let target = TargetBounds::new(280.0, 50.0);
        assert_eq!(aligned_offset(target, ScrollAlign::Nearest, 100.0, 200.0), Some(130.0));
    }

    #[test]
    fn test_nearest_oversized_target() {
        let target = TargetBounds::new(150.0, 500.0);
        assert_eq!(aligned_offset(target, ScrollAlign::Nearest, 100.0, 200.0), Some(150.0));

        let covering = TargetBounds::new(50.0, 500.0);
        assert_eq!(aligned_offset(covering, ScrollAlign::Nearest, 100.0, 200.0), None);
    }

    #[test]
    fn test_resolvers() {
        let mut map = FxHashMap::default();
        map.insert("row-42".to_string(), TargetBounds::new(420.0, 10.0));
        assert_eq!(map.resolve("row-42"), Some(TargetBounds::new(420.0, 10.0)));
        assert_eq!(map.resolve("row-43"), None);

        let closure = |id: &str| (id == "header").then(|| TargetBounds::new(0.0, 40.0));
        assert!(closure.resolve("header").is_some());
        assert!(closure.resolve("footer").is_none());
    }

    #[test]
    fn test_request_builder() {
        let request = ScrollRequest::new("row-7").align(ScrollAlign::Center).smooth();
        assert_eq!(request.target, "row-7");
        assert_eq!(request.align, ScrollAlign::Center);
        assert_eq!(request.transition, ScrollTransition::Smooth);
    }
}
