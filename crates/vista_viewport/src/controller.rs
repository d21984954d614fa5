//! Viewport controller
//!
//! [`ViewportController`] owns the authoritative scroll offset for one
//! viewport and keeps every derived quantity (thumb geometry, edge mask,
//! scrollability) consistent with it. Three independent input streams feed
//! it: pointer drags, size changes reported by the host's size observer,
//! and imperative scroll calls. All of them funnel through the same clamp
//! and commit, so there is a single serialization point.
//!
//! The controller never renders. Hosts either read the derived state after
//! each call or register listeners:
//!
//! - the **thumb listener** fires on every thumb change, including every
//!   pointer move of a drag, so the thumb can track the pointer directly
//! - the **view listener** fires on full syncs only. During a drag those are
//!   coalesced to at most one per animation frame ([`on_animation_frame`]),
//!   and one is forced when the drag ends.
//!
//! # Example
//!
//! ```
//! use vista_viewport::prelude::*;
//!
//! let mut viewport = ViewportController::new(ViewportConfig::horizontal()).unwrap();
//! viewport.on_resize(1000.0, 500.0, 200.0);
//! assert!(viewport.is_scrollable());
//!
//! viewport.set_offset(250.0);
//! assert_eq!(viewport.percentage(), 50.0);
//! assert_eq!(viewport.thumb().offset, 50.0);
//! ```
//!
//! [`on_animation_frame`]: ViewportController::on_animation_frame

use serde::Serialize;
use vista_core::events::event_types;
use vista_core::{KeyCode, NextFrame, Point, Signal, Size, StateTransitions, SubscriptionId};

use crate::a11y::ScrollbarSemantics;
use crate::config::{ConfigError, ViewportConfig};
use crate::drag::{DragSession, DragState, DragTarget, InteractionMode, ListenerScope};
use crate::geometry::{
    offset_for_track_position, scroll_percentage, thumb_geometry, Extents, ThumbGeometry,
};
use crate::keyboard::{command_for_key, page_distance, KeyCommand};
use crate::mask::{edge_mask_state, EdgeMaskState, MaskDescriptor};
use crate::scroll_to::{aligned_offset, ScrollAlign, ScrollRequest, ScrollTransition, TargetBounds, TargetResolver};

/// Usable part of the measured track
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TrackLayout {
    /// Distance from the measured track start to the usable track start
    pub start: f32,
    /// Usable track length
    pub extent: f32,
}

/// Everything the presentation layer needs after a full sync
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ViewState {
    pub offset: f32,
    pub max_offset: f32,
    pub percentage: f32,
    pub scrollable: bool,
    pub thumb: ThumbGeometry,
    pub track: TrackLayout,
    pub mask_state: EdgeMaskState,
    pub mask: MaskDescriptor,
    /// How the host should move to `offset`
    pub transition: ScrollTransition,
}

/// Outcome of ending a drag session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointerRelease {
    /// Target of the session that ended, if one was active
    pub target: Option<DragTarget>,
    /// Listener scope the host must now release
    pub scope: Option<ListenerScope>,
    /// The press was a content drag, so the click that follows must be ignored
    pub suppress_click: bool,
}

type ThumbListener = Box<dyn FnMut(&ThumbGeometry)>;
type ViewListener = Box<dyn FnMut(&ViewState)>;

/// Orchestrates offset, thumb, mask and drag sessions for one viewport
pub struct ViewportController {
    config: ViewportConfig,
    /// Measured extents; `track` is the full measured track
    extents: Extents,
    offset: f32,
    scrollable: bool,
    mounted: bool,
    /// Client-space position of the measured track start
    track_origin: Point,
    drag: DragState,
    next_scope: u64,
    /// Full sync deferred to the next animation frame
    pending_sync: NextFrame<f32>,
    transition: ScrollTransition,
    /// Live thumb, updated on every offset change (including drag moves)
    thumb: ThumbGeometry,
    /// Last fully synced state
    view: ViewState,
    interaction: Signal<InteractionMode>,
    thumb_listener: Option<ThumbListener>,
    view_listener: Option<ViewListener>,
}

impl ViewportController {
    /// Mount a controller for a validated configuration.
    ///
    /// Extents start at zero (nothing to scroll) until the first
    /// [`on_resize`](Self::on_resize).
    pub fn new(config: ViewportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ViewportConfig) -> Self {
        let mut controller = Self {
            config,
            extents: Extents::default(),
            offset: 0.0,
            scrollable: false,
            mounted: true,
            track_origin: Point::ZERO,
            drag: DragState::Idle,
            next_scope: 0,
            pending_sync: NextFrame::new(),
            transition: ScrollTransition::Instant,
            thumb: ThumbGeometry::ZERO,
            view: ViewState::default(),
            interaction: Signal::new(InteractionMode::Idle),
            thumb_listener: None,
            view_listener: None,
        };
        controller.view = controller.compute_view();
        controller.thumb = controller.view.thumb;
        controller
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Called on every thumb change, including each drag move
    pub fn set_thumb_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ThumbGeometry) + 'static,
    {
        self.thumb_listener = Some(Box::new(listener));
    }

    /// Called after each full sync that changed the view (and after every
    /// drag end, changed or not)
    pub fn set_view_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewState) + 'static,
    {
        self.view_listener = Some(Box::new(listener));
    }

    /// Observe the interaction mode (cursor / selection suppression)
    pub fn subscribe_interaction<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&InteractionMode) + 'static,
    {
        self.interaction.subscribe(subscriber)
    }

    pub fn unsubscribe_interaction(&mut self, id: SubscriptionId) -> bool {
        self.interaction.unsubscribe(id)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Measured extents as last reported by the host
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Extents with the track reduced to its usable length
    pub fn usable_extents(&self) -> Extents {
        Extents {
            track: self.config.usable_track(self.extents.track),
            ..self.extents
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.extents.max_offset()
    }

    pub fn percentage(&self) -> f32 {
        scroll_percentage(self.offset, self.max_offset())
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Live thumb geometry
    pub fn thumb(&self) -> ThumbGeometry {
        self.thumb
    }

    /// Last fully synced view state (may trail the live offset by one
    /// frame during a drag)
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn mask(&self) -> MaskDescriptor {
        self.view.mask
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.session().is_some()
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        *self.interaction.get()
    }

    /// Whether a coalesced full sync is waiting for the next frame
    pub fn needs_frame(&self) -> bool {
        self.pending_sync.is_pending()
    }

    /// Translation the host applies to the content element
    pub fn content_translation(&self) -> Point {
        self.config.axis.translation(self.offset)
    }

    /// Accessible range semantics for the scroll region
    pub fn accessibility(&self) -> ScrollbarSemantics {
        ScrollbarSemantics::new(self.percentage(), self.config.axis, self.scrollable)
    }

    // =========================================================================
    // Offset
    // =========================================================================

    /// Clamp `requested` into `[0, max]` and commit it.
    ///
    /// No-op while unmounted or when there is nothing to scroll. Returns
    /// `true` if the offset changed.
    pub fn set_offset(&mut self, requested: f32) -> bool {
        self.set_offset_with(requested, ScrollTransition::Instant)
    }

    /// [`set_offset`](Self::set_offset) relative to the current offset
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        self.set_offset(self.offset + delta)
    }

    fn set_offset_with(&mut self, requested: f32, transition: ScrollTransition) -> bool {
        if !self.accepts_scroll() {
            return false;
        }
        if requested.is_nan() {
            tracing::warn!("Ignoring NaN scroll offset");
            return false;
        }
        self.transition = transition;
        let changed = self.commit_offset(requested);
        self.sync();
        changed
    }

    fn accepts_scroll(&self) -> bool {
        if !self.mounted {
            tracing::trace!("Viewport unmounted, ignoring scroll");
            return false;
        }
        if !self.scrollable {
            tracing::trace!("Viewport not scrollable, ignoring scroll");
            return false;
        }
        true
    }

    /// Clamp and store, without deriving anything
    fn commit_offset(&mut self, requested: f32) -> bool {
        let clamped = self.extents.clamp_offset(requested);
        let old = self.offset;
        self.offset = clamped;
        tracing::trace!(
            "Offset {:.1} -> {:.1} (requested {:.1}, max {:.1})",
            old,
            clamped,
            requested,
            self.max_offset()
        );
        clamped != old
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Record new measured extents, recompute scrollability and re-clamp
    /// the offset.
    ///
    /// An in-flight drag keeps the origin offset it captured at press time;
    /// its next move is clamped against the new bounds. Returns `true` if
    /// the synced view changed.
    pub fn on_resize(&mut self, content: f32, viewport: f32, track: f32) -> bool {
        if !self.mounted {
            return false;
        }
        self.extents = Extents::new(
            sanitize_extent("content", content),
            sanitize_extent("viewport", viewport),
            sanitize_extent("track", track),
        );
        self.scrollable = self.extents.viewport > 0.0
            && self.extents.content - self.extents.viewport > self.config.scroll_tolerance;
        // Overflow within tolerance must not leave a residual offset behind
        let offset = if self.scrollable { self.offset } else { 0.0 };
        self.commit_offset(offset);

        tracing::debug!(
            "Viewport resized: content={:.0}, viewport={:.0}, track={:.0}, scrollable={}",
            self.extents.content,
            self.extents.viewport,
            self.extents.track,
            self.scrollable
        );
        self.sync()
    }

    /// [`on_resize`](Self::on_resize) from observed boxes; the axis picks
    /// which dimension counts
    pub fn on_observed_sizes(&mut self, content: Size, viewport: Size, track: Size) -> bool {
        let axis = self.config.axis;
        self.on_resize(axis.extent(content), axis.extent(viewport), axis.extent(track))
    }

    /// Client-space position of the measured track start, used to map
    /// pointer positions onto the track
    pub fn set_track_origin(&mut self, origin: Point) {
        self.track_origin = origin;
    }

    fn track_position(&self, pointer: Point) -> f32 {
        let axis = self.config.axis;
        axis.main(pointer) - axis.main(self.track_origin) - self.config.track_leading_inset()
    }

    // =========================================================================
    // Derivations
    // =========================================================================

    fn compute_view(&self) -> ViewState {
        let usable = self.usable_extents();
        let max_offset = usable.max_offset();
        let percentage = scroll_percentage(self.offset, max_offset);
        let mask_state = edge_mask_state(
            percentage,
            self.scrollable,
            usable.viewport,
            self.config.forced_min_extent,
        );
        ViewState {
            offset: self.offset,
            max_offset,
            percentage,
            scrollable: self.scrollable,
            thumb: thumb_geometry(usable, self.offset, self.config.min_thumb_size),
            track: TrackLayout {
                start: self.config.track_leading_inset(),
                extent: usable.track,
            },
            mask_state,
            mask: MaskDescriptor::compose(mask_state, &self.config.mask_policy()),
            transition: self.transition,
        }
    }

    /// Recompute every derived quantity from the current offset and extents.
    ///
    /// Idempotent: a second call with no input in between changes nothing
    /// and notifies nobody. Returns `true` if the view changed.
    pub fn sync(&mut self) -> bool {
        self.sync_inner(false)
    }

    fn sync_inner(&mut self, force_notify: bool) -> bool {
        let view = self.compute_view();
        let changed = view != self.view;
        self.view = view;
        self.update_thumb(view.thumb);
        if changed || force_notify {
            if let Some(listener) = self.view_listener.as_mut() {
                listener(&self.view);
            }
        }
        changed
    }

    /// Fast path: thumb only, straight to the thumb listener
    fn update_thumb(&mut self, thumb: ThumbGeometry) {
        if thumb == self.thumb {
            return;
        }
        self.thumb = thumb;
        if let Some(listener) = self.thumb_listener.as_mut() {
            listener(&self.thumb);
        }
    }

    /// Run the full sync coalesced from pointer moves, if one is pending.
    ///
    /// Hosts call this once per animation frame while
    /// [`needs_frame`](Self::needs_frame) is true.
    pub fn on_animation_frame(&mut self) -> bool {
        match self.pending_sync.take() {
            Some(offset) => {
                tracing::trace!("Frame sync at offset {:.1}", offset);
                self.sync()
            }
            None => false,
        }
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Start a drag session.
    ///
    /// A press on the track away from the thumb first jumps the offset to
    /// the clicked position, then drags from there. A track press that lands
    /// on the thumb is treated as a thumb drag. Returns the listener scope
    /// for the session, or `None` if no session started.
    pub fn on_pointer_down(&mut self, target: DragTarget, position: Point) -> Option<ListenerScope> {
        if !self.mounted || !self.scrollable {
            return None;
        }
        if target == DragTarget::Content && !self.config.enable_content_drag {
            return None;
        }
        if target != DragTarget::Content && self.usable_extents().track <= 0.0 {
            tracing::trace!("Track not measured yet, ignoring press on {:?}", target);
            return None;
        }
        let mut phase = self.drag.phase();
        if !phase.apply(event_types::POINTER_DOWN) {
            tracing::warn!("Pointer down on {:?} while a drag is active", target);
            return None;
        }

        let mut target = target;
        if target == DragTarget::Track {
            let local = self.track_position(position);
            if self.thumb.contains(local) {
                target = DragTarget::Thumb;
            } else {
                let jump = offset_for_track_position(
                    local,
                    self.usable_extents(),
                    self.config.min_thumb_size,
                );
                self.transition = ScrollTransition::Instant;
                self.commit_offset(jump);
                self.sync();
            }
        }

        self.next_scope += 1;
        let scope = ListenerScope(self.next_scope);
        let session = DragSession::new(target, self.config.axis.main(position), self.offset, scope);
        self.drag = DragState::Dragging(session);
        self.interaction.set(InteractionMode::for_target(target));

        tracing::debug!(
            "Drag started on {:?} at offset {:.1} ({:?})",
            target,
            self.offset,
            scope
        );
        Some(scope)
    }

    /// Follow the pointer during a drag.
    ///
    /// Updates the offset and thumb immediately; the rest of the view is
    /// deferred to the next animation frame. Returns `true` if the offset
    /// changed.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        let usable = self.usable_extents();
        let pointer = self.config.axis.main(position);
        let threshold = self.config.drag_threshold;

        let Some(session) = self.drag.session_mut() else {
            return false;
        };
        let Some(requested) = session.requested_offset(pointer, usable, usable.track, threshold)
        else {
            return false;
        };

        let changed = self.commit_offset(requested);
        if changed {
            let thumb = thumb_geometry(usable, self.offset, self.config.min_thumb_size);
            self.update_thumb(thumb);
            self.pending_sync.schedule(self.offset);
        }
        changed
    }

    /// End the drag normally
    pub fn on_pointer_up(&mut self) -> PointerRelease {
        self.end_session(event_types::POINTER_UP)
    }

    /// End the drag because the platform aborted it
    pub fn on_pointer_cancel(&mut self) -> PointerRelease {
        self.end_session(event_types::POINTER_CANCEL)
    }

    fn end_session(&mut self, event: u32) -> PointerRelease {
        let mut phase = self.drag.phase();
        if !phase.apply(event) {
            tracing::trace!("Pointer release without an active drag");
            return PointerRelease::default();
        }
        let Some(session) = self.drag.release() else {
            return PointerRelease::default();
        };

        self.pending_sync.cancel();
        self.interaction.set(InteractionMode::Idle);
        self.sync_inner(true);

        let suppress_click = event == event_types::POINTER_UP
            && session.target == DragTarget::Content
            && session.has_crossed_move_threshold;
        tracing::debug!(
            "Drag on {:?} ended at offset {:.1} (suppress_click={})",
            session.target,
            self.offset,
            suppress_click
        );
        PointerRelease {
            target: Some(session.target),
            scope: Some(session.scope),
            suppress_click,
        }
    }

    /// Wheel input over the track or content
    pub fn on_wheel(&mut self, delta: f32) -> bool {
        self.scroll_by(delta)
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Handle a key press. Returns `true` if the key was consumed.
    pub fn on_key_down(&mut self, key: KeyCode) -> bool {
        let Some(command) = command_for_key(self.config.axis, key) else {
            return false;
        };
        if !self.accepts_scroll() {
            return false;
        }
        let step = self.config.keyboard_step;
        let page = page_distance(self.extents.viewport, step);
        match command {
            KeyCommand::StepBackward => self.scroll_by(-step),
            KeyCommand::StepForward => self.scroll_by(step),
            KeyCommand::PageBackward => self.scroll_by(-page),
            KeyCommand::PageForward => self.scroll_by(page),
            KeyCommand::ToStart => self.set_offset(0.0),
            KeyCommand::ToEnd => self.set_offset(self.max_offset()),
        };
        true
    }

    // =========================================================================
    // Scroll-to
    // =========================================================================

    /// Scroll so that `target` satisfies `align`.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_element_into_view(&mut self, target: TargetBounds, align: ScrollAlign) -> bool {
        self.scroll_into_view_with(target, align, ScrollTransition::Instant)
    }

    /// Resolve and apply a host scroll request. Unknown targets are ignored.
    pub fn scroll_to<R>(&mut self, request: &ScrollRequest, resolver: &R) -> bool
    where
        R: TargetResolver + ?Sized,
    {
        let Some(bounds) = resolver.resolve(&request.target) else {
            tracing::debug!("Scroll target {:?} not found", request.target);
            return false;
        };
        self.scroll_into_view_with(bounds, request.align, request.transition)
    }

    fn scroll_into_view_with(
        &mut self,
        target: TargetBounds,
        align: ScrollAlign,
        transition: ScrollTransition,
    ) -> bool {
        if !self.accepts_scroll() {
            return false;
        }
        if !target.start.is_finite() || !target.extent.is_finite() {
            tracing::warn!("Ignoring scroll target with non-finite bounds {:?}", target);
            return false;
        }
        match aligned_offset(target, align, self.offset, self.extents.viewport) {
            Some(offset) => self.set_offset_with(offset, transition),
            None => false,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Tear down: abandon any drag without committing further offsets, drop
    /// pending frame work and every listener.
    ///
    /// Returns the listener scope of an abandoned drag, which the host must
    /// release. Every later call is a no-op.
    pub fn unmount(&mut self) -> Option<ListenerScope> {
        if !self.mounted {
            return None;
        }
        self.mounted = false;
        let session = self.drag.release();
        self.pending_sync.cancel();
        self.interaction.set(InteractionMode::Idle);
        self.interaction.clear_subscribers();
        self.thumb_listener = None;
        self.view_listener = None;

        tracing::debug!(
            "Viewport unmounted (abandoned drag: {})",
            session.is_some()
        );
        session.map(|s| s.scope)
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::build(ViewportConfig::default())
    }
}

impl std::fmt::Debug for ViewportController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportController")
            .field("config", &self.config)
            .field("extents", &self.extents)
            .field("offset", &self.offset)
            .field("scrollable", &self.scrollable)
            .field("mounted", &self.mounted)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

/// Non-finite or negative extents are treated as unmeasured
fn sanitize_extent(name: &str, value: f32) -> f32 {
    if !value.is_finite() {
        tracing::warn!("Non-finite {} extent {}, treating as 0", name, value);
        return 0.0;
    }
    value.max(0.0)
}
