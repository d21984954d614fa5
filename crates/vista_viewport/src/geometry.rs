//! Thumb geometry
//!
//! Pure functions mapping viewport extents and a scroll offset to the
//! thumb's size and position along its track. Nothing here holds state;
//! the controller calls these on demand.

use serde::{Deserialize, Serialize};

/// Default minimum thumb length in pixels
pub const MIN_THUMB_SIZE: f32 = 20.0;

/// Pixel extents along the scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extents {
    /// Full length of the scrollable content
    pub content: f32,
    /// Visible window onto the content
    pub viewport: f32,
    /// Length of the rail the thumb moves along
    pub track: f32,
}

impl Extents {
    pub fn new(content: f32, viewport: f32, track: f32) -> Self {
        Self {
            content,
            viewport,
            track,
        }
    }

    /// Largest valid scroll offset (0 when the content fits)
    pub fn max_offset(&self) -> f32 {
        (self.content - self.viewport).max(0.0)
    }

    /// Clamp `offset` into `[0, max_offset]`
    pub fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }
}

/// Thumb size and position along the track
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThumbGeometry {
    /// Thumb length along the track
    pub width: f32,
    /// Distance from the track start to the thumb start
    pub offset: f32,
}

impl ThumbGeometry {
    /// Geometry used before the track has been measured
    pub const ZERO: ThumbGeometry = ThumbGeometry {
        width: 0.0,
        offset: 0.0,
    };

    /// Distance from the track start to the thumb end
    pub fn end(&self) -> f32 {
        self.offset + self.width
    }

    /// Whether a track-relative position falls on the thumb
    pub fn contains(&self, position: f32) -> bool {
        self.width > 0.0 && position >= self.offset && position <= self.end()
    }
}

/// Scroll progress in percent, `0` when there is nothing to scroll
pub fn scroll_percentage(offset: f32, max_offset: f32) -> f32 {
    if max_offset <= 0.0 {
        return 0.0;
    }
    (offset / max_offset * 100.0).clamp(0.0, 100.0)
}

/// Inverse of [`scroll_percentage`]
pub fn offset_for_percentage(percentage: f32, max_offset: f32) -> f32 {
    if max_offset <= 0.0 {
        return 0.0;
    }
    (percentage.clamp(0.0, 100.0) / 100.0) * max_offset
}

/// Thumb length for the visible proportion of the content.
///
/// Never shorter than `min_thumb` and never longer than the track.
pub fn thumb_width(extents: Extents, min_thumb: f32) -> f32 {
    if extents.track <= 0.0 {
        return 0.0;
    }
    let visible_ratio = if extents.content > 0.0 {
        (extents.viewport / extents.content).clamp(0.0, 1.0)
    } else {
        1.0
    };
    (visible_ratio * extents.track)
        .max(min_thumb)
        .min(extents.track)
}

/// Thumb start for a scroll percentage
pub fn thumb_offset_for_percentage(percentage: f32, track: f32, width: f32) -> f32 {
    let travel = (track - width).max(0.0);
    (percentage.clamp(0.0, 100.0) / 100.0) * travel
}

/// Scroll percentage implied by a thumb start position
pub fn percentage_for_thumb_offset(thumb_offset: f32, track: f32, width: f32) -> f32 {
    let travel = track - width;
    if travel <= 0.0 {
        return 0.0;
    }
    (thumb_offset / travel * 100.0).clamp(0.0, 100.0)
}

/// Compute the thumb for a scroll offset.
///
/// Returns [`ThumbGeometry::ZERO`] while the track is unmeasured.
pub fn thumb_geometry(extents: Extents, offset: f32, min_thumb: f32) -> ThumbGeometry {
    if extents.track <= 0.0 {
        return ThumbGeometry::ZERO;
    }
    let width = thumb_width(extents, min_thumb);
    let percentage = scroll_percentage(offset, extents.max_offset());
    ThumbGeometry {
        width,
        offset: thumb_offset_for_percentage(percentage, extents.track, width),
    }
}

/// Scroll offset for a click at a track-relative position.
///
/// The thumb is centered under the pointer where possible, so a click near
/// either end of the track reaches the matching content edge.
pub fn offset_for_track_position(position: f32, extents: Extents, min_thumb: f32) -> f32 {
    let width = thumb_width(extents, min_thumb);
    let travel = extents.track - width;
    if travel <= 0.0 {
        return 0.0;
    }
    let ratio = ((position - width / 2.0) / travel).clamp(0.0, 1.0);
    ratio * extents.max_offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumb_basic() {
        let extents = Extents::new(1000.0, 500.0, 200.0);
        let thumb = thumb_geometry(extents, 0.0, MIN_THUMB_SIZE);
        assert_eq!(thumb.width, 100.0);
        assert_eq!(thumb.offset, 0.0);

        let thumb = thumb_geometry(extents, 250.0, MIN_THUMB_SIZE);
        assert_eq!(scroll_percentage(250.0, extents.max_offset()), 50.0);
        assert_eq!(thumb.offset, 50.0);

        let thumb = thumb_geometry(extents, 500.0, MIN_THUMB_SIZE);
        assert_eq!(thumb.end(), 200.0);
    }

    #[test]
    fn test_thumb_respects_minimum() {
        let extents = Extents::new(100_000.0, 500.0, 200.0);
        let thumb = thumb_geometry(extents, 0.0, MIN_THUMB_SIZE);
        assert_eq!(thumb.width, MIN_THUMB_SIZE);

        let thumb = thumb_geometry(extents, extents.max_offset(), MIN_THUMB_SIZE);
        assert!((thumb.end() - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_thumb_never_exceeds_track() {
        // Minimum larger than the track itself
        let extents = Extents::new(1000.0, 500.0, 12.0);
        let thumb = thumb_geometry(extents, 250.0, MIN_THUMB_SIZE);
        assert_eq!(thumb.width, 12.0);
        assert_eq!(thumb.offset, 0.0);
    }

    #[test]
    fn test_unmeasured_track() {
        let extents = Extents::new(1000.0, 500.0, 0.0);
        assert_eq!(thumb_geometry(extents, 100.0, MIN_THUMB_SIZE), ThumbGeometry::ZERO);
    }

    #[test]
    fn test_percentage_when_content_fits() {
        assert_eq!(scroll_percentage(0.0, 0.0), 0.0);
        assert_eq!(scroll_percentage(10.0, 0.0), 0.0);
        assert_eq!(offset_for_percentage(50.0, 0.0), 0.0);
    }

    #[test]
    fn test_zero_content_is_fully_visible() {
        let extents = Extents::new(0.0, 0.0, 80.0);
        assert_eq!(thumb_width(extents, MIN_THUMB_SIZE), 80.0);
    }

    #[test]
    fn test_track_click_mapping() {
        let extents = Extents::new(1000.0, 500.0, 200.0);
        // Thumb is 100 wide; clicking at the middle centers it
        assert_eq!(offset_for_track_position(100.0, extents, MIN_THUMB_SIZE), 250.0);
        assert_eq!(offset_for_track_position(0.0, extents, MIN_THUMB_SIZE), 0.0);
        assert_eq!(offset_for_track_position(200.0, extents, MIN_THUMB_SIZE), 500.0);
    }

    #[test]
    fn test_thumb_contains() {
        let thumb = ThumbGeometry {
            width: 40.0,
            offset: 10.0,
        };
        assert!(thumb.contains(10.0));
        assert!(thumb.contains(50.0));
        assert!(!thumb.contains(51.0));
        assert!(!ThumbGeometry::ZERO.contains(0.0));
    }

    #[test]
    fn test_thumb_percentage_inverse() {
        let width = 60.0;
        for step in 0..=20 {
            let pct = step as f32 * 5.0;
            let thumb_offset = thumb_offset_for_percentage(pct, 300.0, width);
            let back = percentage_for_thumb_offset(thumb_offset, 300.0, width);
            assert!((back - pct).abs() < 1e-3, "pct {pct} came back as {back}");
        }
    }
}
