//! Drag sessions
//!
//! One pointer press-to-release interaction on the thumb, the track or the
//! content. A session captures the pointer and scroll offset at press time
//! and maps later pointer positions to absolute offsets from that origin,
//! so offsets never accumulate rounding drift over a long drag.

use serde::{Deserialize, Serialize};
use vista_core::events::{event_types, EventType};
use vista_core::fsm::StateTransitions;

use crate::geometry::Extents;

/// What the pointer went down on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragTarget {
    Thumb,
    Track,
    Content,
}

/// Token for the window-level listeners a host registers for one session.
///
/// Handed out when a session starts and handed back when it ends so the
/// host can remove exactly those listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerScope(pub u64);

/// Coarse drag state, driven by pointer event ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

impl StateTransitions for DragPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use event_types::*;
        match (self, event) {
            (DragPhase::Idle, POINTER_DOWN) => Some(DragPhase::Dragging),
            (DragPhase::Dragging, POINTER_MOVE) => Some(DragPhase::Dragging),
            (DragPhase::Dragging, POINTER_UP) => Some(DragPhase::Idle),
            (DragPhase::Dragging, POINTER_CANCEL) => Some(DragPhase::Idle),
            (DragPhase::Dragging, UNMOUNT) => Some(DragPhase::Idle),
            _ => None,
        }
    }
}

/// Presentation-facing interaction mode.
///
/// Published by the controller instead of mutating global cursor or
/// text-selection state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    #[default]
    Idle,
    DraggingThumb,
    DraggingTrack,
    DraggingContent,
}

impl InteractionMode {
    pub fn for_target(target: DragTarget) -> Self {
        match target {
            DragTarget::Thumb => InteractionMode::DraggingThumb,
            DragTarget::Track => InteractionMode::DraggingTrack,
            DragTarget::Content => InteractionMode::DraggingContent,
        }
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self, InteractionMode::Idle)
    }

    /// CSS-style cursor name the presentation layer should show
    pub fn cursor(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "default",
            _ => "grabbing",
        }
    }

    /// Whether text selection should be suppressed
    pub fn suppress_selection(&self) -> bool {
        self.is_dragging()
    }
}

/// A single in-flight drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub target: DragTarget,
    /// Pointer position along the scroll axis at press time
    pub origin_pointer: f32,
    /// Scroll offset at press time (after any track jump)
    pub origin_offset: f32,
    /// Set once the pointer moved past the drag threshold; never reset
    pub has_crossed_move_threshold: bool,
    pub scope: ListenerScope,
}

impl DragSession {
    pub fn new(
        target: DragTarget,
        origin_pointer: f32,
        origin_offset: f32,
        scope: ListenerScope,
    ) -> Self {
        Self {
            target,
            origin_pointer,
            origin_offset,
            has_crossed_move_threshold: false,
            scope,
        }
    }

    /// Requested (unclamped) offset for a pointer position along the axis.
    ///
    /// `active_track` is the usable track length. Content drags stay put
    /// until the pointer has moved more than `threshold` pixels, then
    /// track the pointer from the original press position.
    pub fn requested_offset(
        &mut self,
        pointer: f32,
        extents: Extents,
        active_track: f32,
        threshold: f32,
    ) -> Option<f32> {
        let delta = pointer - self.origin_pointer;

        if self.target == DragTarget::Content && !self.has_crossed_move_threshold {
            if delta.abs() <= threshold {
                return None;
            }
            self.has_crossed_move_threshold = true;
        } else if delta != 0.0 {
            self.has_crossed_move_threshold = true;
        }

        let scaled = delta * drag_scale(self.target, extents, active_track);
        Some(self.origin_offset + scaled)
    }
}

/// Content pixels scrolled per pointer pixel.
///
/// Thumb and track drags map track space to content space
/// (`content / track`). The thumb stays under the pointer only while it is
/// proportional; once `min_thumb_size` widens it, the thumb lags. Content
/// drags map viewport space to content space with the sign inverted:
/// dragging content forward scrolls it backward.
pub fn drag_scale(target: DragTarget, extents: Extents, active_track: f32) -> f32 {
    match target {
        DragTarget::Thumb | DragTarget::Track => {
            if active_track <= 0.0 {
                0.0
            } else {
                extents.content / active_track
            }
        }
        DragTarget::Content => {
            if extents.viewport <= 0.0 {
                0.0
            } else {
                -(extents.content / extents.viewport)
            }
        }
    }
}

/// Drag state carried by the controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn phase(&self) -> DragPhase {
        match self {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging(_) => DragPhase::Dragging,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// End the session, if any, and return it
    pub fn release(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_types::*;

    #[test]
    fn test_phase_transitions() {
        let mut phase = DragPhase::Idle;
        assert!(!phase.apply(POINTER_MOVE));
        assert!(!phase.apply(POINTER_UP));
        assert!(phase.apply(POINTER_DOWN));
        assert_eq!(phase, DragPhase::Dragging);
        assert!(!phase.apply(POINTER_DOWN));
        assert!(phase.apply(POINTER_CANCEL));
        assert_eq!(phase, DragPhase::Idle);
    }

    #[test]
    fn test_thumb_drag_scale() {
        let extents = Extents::new(1000.0, 500.0, 200.0);
        let mut session = DragSession::new(DragTarget::Thumb, 10.0, 0.0, ListenerScope(1));
        assert_eq!(session.requested_offset(50.0, extents, 200.0, 5.0), Some(200.0));
        assert!(session.has_crossed_move_threshold);
    }

    #[test]
    fn test_minimum_thumb_lags_pointer() {
        use crate::geometry::{thumb_geometry, MIN_THUMB_SIZE};

        let extents = Extents::new(100_000.0, 500.0, 200.0);
        let mut session = DragSession::new(DragTarget::Thumb, 10.0, 0.0, ListenerScope(1));
        let offset = session.requested_offset(190.0, extents, 200.0, 5.0).unwrap();
        assert_eq!(offset, 90_000.0);

        let thumb = thumb_geometry(extents, offset, MIN_THUMB_SIZE);
        assert_eq!(thumb.width, MIN_THUMB_SIZE);
        assert!(thumb.offset > 162.0 && thumb.offset < 163.0, "thumb at {}", thumb.offset);
    }

    #[test]
    fn test_content_drag_is_inverted() {
        let extents = Extents::new(1000.0, 500.0, 200.0);
        let mut session = DragSession::new(DragTarget::Content, 300.0, 250.0, ListenerScope(1));

        // Within the threshold nothing moves yet
        assert_eq!(session.requested_offset(303.0, extents, 200.0, 5.0), None);
        assert!(!session.has_crossed_move_threshold);

        // Dragging content right by 10 scrolls it left by 20
        assert_eq!(session.requested_offset(310.0, extents, 200.0, 5.0), Some(230.0));
        assert!(session.has_crossed_move_threshold);

        // Coming back inside the threshold keeps the drag classification
        assert_eq!(session.requested_offset(301.0, extents, 200.0, 5.0), Some(248.0));
        assert!(session.has_crossed_move_threshold);
    }

    #[test]
    fn test_unmeasured_scale_is_zero() {
        let extents = Extents::new(1000.0, 0.0, 0.0);
        assert_eq!(drag_scale(DragTarget::Thumb, extents, 0.0), 0.0);
        assert_eq!(drag_scale(DragTarget::Content, extents, 0.0), 0.0);
    }

    #[test]
    fn test_release() {
        let session = DragSession::new(DragTarget::Track, 0.0, 0.0, ListenerScope(7));
        let mut state = DragState::Dragging(session);
        assert_eq!(state.phase(), DragPhase::Dragging);
        assert_eq!(state.release().map(|s| s.scope), Some(ListenerScope(7)));
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.release(), None);
    }

    #[test]
    fn test_interaction_mode() {
        let mode = InteractionMode::for_target(DragTarget::Content);
        assert_eq!(mode, InteractionMode::DraggingContent);
        assert_eq!(mode.cursor(), "grabbing");
        assert!(mode.suppress_selection());
        assert!(!InteractionMode::Idle.is_dragging());
    }
}
