//! Edge masks
//!
//! A fade near a scroll boundary hints that more content lies beyond it.
//! [`edge_mask_state`] decides which edges fade; [`MaskDescriptor::compose`]
//! turns that into a single descriptor the renderer can apply as a linear
//! alpha gradient along the scroll axis.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default fade length in pixels
pub const DEFAULT_FADE_LENGTH: f32 = 48.0;

/// Which edges currently fade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeMaskState {
    pub leading_visible: bool,
    pub trailing_visible: bool,
}

/// Shape of the fades, independent of scroll position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeMaskPolicy {
    /// Keep the trailing fade only while the viewport is at most this long
    pub forced_min_extent: Option<f32>,
    /// Fade length for the trailing edge (and the leading edge unless reduced)
    pub fade_length: f32,
    /// Use half the fade length on the leading edge
    pub reduce_leading: bool,
    /// Distance from the viewport start where the leading fade begins
    pub leading_inset: f32,
    /// Distance from the viewport end where the trailing fade begins
    pub trailing_inset: f32,
}

impl Default for EdgeMaskPolicy {
    fn default() -> Self {
        Self {
            forced_min_extent: None,
            fade_length: DEFAULT_FADE_LENGTH,
            reduce_leading: false,
            leading_inset: 0.0,
            trailing_inset: 0.0,
        }
    }
}

impl EdgeMaskPolicy {
    fn leading_fade(&self) -> EdgeFade {
        let length = if self.reduce_leading {
            self.fade_length / 2.0
        } else {
            self.fade_length
        };
        EdgeFade {
            inset: self.leading_inset,
            length,
        }
    }

    fn trailing_fade(&self) -> EdgeFade {
        EdgeFade {
            inset: self.trailing_inset,
            length: self.fade_length,
        }
    }
}

/// One fading edge: transparent for `inset` pixels, then ramps to opaque
/// over `length` pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeFade {
    pub inset: f32,
    pub length: f32,
}

/// Composed mask applied to the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MaskDescriptor {
    /// Full opacity, unclipped
    #[default]
    None,
    /// Only the leading edge fades
    Leading(EdgeFade),
    /// Only the trailing edge fades
    Trailing(EdgeFade),
    /// Both edges fade
    Both { leading: EdgeFade, trailing: EdgeFade },
}

/// A stop of the alpha gradient along the scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position as a fraction of the viewport extent (0.0-1.0)
    pub position: f32,
    /// Content opacity at this position
    pub alpha: f32,
}

pub type GradientStops = SmallVec<[GradientStop; 6]>;

/// Decide which edges fade.
///
/// The leading edge fades once scrolled away from the start; the trailing
/// edge fades until the end is reached. With `forced_min_extent` set, the
/// trailing fade additionally requires the viewport to be no longer than
/// that threshold.
pub fn edge_mask_state(
    percentage: f32,
    scrollable: bool,
    viewport_extent: f32,
    forced_min_extent: Option<f32>,
) -> EdgeMaskState {
    let within_forced_extent = forced_min_extent.map_or(true, |min| viewport_extent <= min);
    EdgeMaskState {
        leading_visible: scrollable && percentage > 0.0,
        trailing_visible: scrollable && percentage < 100.0 && within_forced_extent,
    }
}

impl MaskDescriptor {
    /// Compose the descriptor for a mask state
    pub fn compose(state: EdgeMaskState, policy: &EdgeMaskPolicy) -> Self {
        match (state.leading_visible, state.trailing_visible) {
            (true, true) => MaskDescriptor::Both {
                leading: policy.leading_fade(),
                trailing: policy.trailing_fade(),
            },
            (true, false) => MaskDescriptor::Leading(policy.leading_fade()),
            (false, true) => MaskDescriptor::Trailing(policy.trailing_fade()),
            (false, false) => MaskDescriptor::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, MaskDescriptor::None)
    }

    pub fn leading(&self) -> Option<EdgeFade> {
        match self {
            MaskDescriptor::Leading(fade) => Some(*fade),
            MaskDescriptor::Both { leading, .. } => Some(*leading),
            _ => None,
        }
    }

    pub fn trailing(&self) -> Option<EdgeFade> {
        match self {
            MaskDescriptor::Trailing(fade) => Some(*fade),
            MaskDescriptor::Both { trailing, .. } => Some(*trailing),
            _ => None,
        }
    }

    /// Alpha gradient stops for a viewport of `extent` pixels.
    ///
    /// Empty for [`MaskDescriptor::None`] or an unmeasured viewport.
    pub fn gradient_stops(&self, extent: f32) -> GradientStops {
        let mut stops = GradientStops::new();
        if self.is_none() || extent <= 0.0 {
            return stops;
        }
        let frac = |px: f32| (px / extent).clamp(0.0, 1.0);

        match self.leading() {
            Some(fade) => {
                stops.push(GradientStop {
                    position: 0.0,
                    alpha: 0.0,
                });
                if fade.inset > 0.0 {
                    stops.push(GradientStop {
                        position: frac(fade.inset),
                        alpha: 0.0,
                    });
                }
                stops.push(GradientStop {
                    position: frac(fade.inset + fade.length),
                    alpha: 1.0,
                });
            }
            None => stops.push(GradientStop {
                position: 0.0,
                alpha: 1.0,
            }),
        }

        match self.trailing() {
            Some(fade) => {
                stops.push(GradientStop {
                    position: frac(extent - fade.inset - fade.length),
                    alpha: 1.0,
                });
                if fade.inset > 0.0 {
                    stops.push(GradientStop {
                        position: frac(extent - fade.inset),
                        alpha: 0.0,
                    });
                }
                stops.push(GradientStop {
                    position: 1.0,
                    alpha: 0.0,
                });
            }
            None => stops.push(GradientStop {
                position: 1.0,
                alpha: 1.0,
            }),
        }

        stops
    }
}
