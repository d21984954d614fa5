//! Vista Viewport
//!
//! A scrollable viewport with a custom-drawn thumb, kept in sync with the
//! content offset, plus edge fade masks that hint at off-screen content.
//!
//! # Features
//!
//! - **Thumb geometry**: proportional thumb with a minimum size, pure math
//! - **Drag scrolling**: thumb, track and (optionally) content drags, with
//!   click/drag disambiguation for content presses
//! - **Frame coalescing**: thumb follows the pointer every move, the rest
//!   of the view at most once per animation frame
//! - **Keyboard**: arrow, page and home/end keys along the scroll axis
//! - **Scroll-into-view**: start/center/end/nearest alignment
//! - **Edge masks**: leading/trailing alpha gradients
//!
//! Both axes share one implementation; [`Axis`] selects which coordinate of
//! a pointer or size is read.
//!
//! # Example
//!
//! ```
//! use vista_viewport::prelude::*;
//!
//! let mut viewport = ViewportController::new(ViewportConfig::vertical()).unwrap();
//! viewport.on_resize(2000.0, 400.0, 400.0);
//!
//! viewport.on_key_down(KeyCode::END);
//! assert_eq!(viewport.offset(), 1600.0);
//! assert!(viewport.mask().leading().is_some());
//! assert!(viewport.mask().trailing().is_none());
//! ```

pub mod a11y;
pub mod axis;
pub mod config;
pub mod controller;
pub mod drag;
pub mod geometry;
pub mod keyboard;
pub mod mask;
pub mod scroll_to;

pub use a11y::ScrollbarSemantics;
pub use axis::Axis;
pub use config::{ConfigError, ViewportConfig};
pub use controller::{PointerRelease, TrackLayout, ViewState, ViewportController};
pub use drag::{DragPhase, DragSession, DragState, DragTarget, InteractionMode, ListenerScope};
pub use geometry::{Extents, ThumbGeometry};
pub use keyboard::KeyCommand;
pub use mask::{EdgeFade, EdgeMaskPolicy, EdgeMaskState, GradientStop, MaskDescriptor};
pub use scroll_to::{ScrollAlign, ScrollRequest, ScrollTransition, TargetBounds, TargetResolver};

pub mod prelude {
    pub use crate::config::{ConfigError, ViewportConfig};
    pub use crate::controller::{PointerRelease, ViewState, ViewportController};
    pub use crate::drag::{DragTarget, InteractionMode, ListenerScope};
    pub use crate::geometry::{Extents, ThumbGeometry};
    pub use crate::mask::MaskDescriptor;
    pub use crate::scroll_to::{ScrollAlign, ScrollRequest, ScrollTransition, TargetBounds, TargetResolver};
    pub use crate::Axis;

    pub use vista_core::{KeyCode, Point, Size};
}
