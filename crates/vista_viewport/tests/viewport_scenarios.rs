//! End-to-end behavior of the viewport controller
//!
//! Covers the clamping and derivation properties across input sweeps, and
//! interleavings of the three input streams (pointer, resize, imperative).

use std::cell::RefCell;
use std::rc::Rc;

use vista_viewport::geometry::{
    offset_for_percentage, scroll_percentage, thumb_width, MIN_THUMB_SIZE,
};
use vista_viewport::prelude::*;

fn viewport(config: ViewportConfig, content: f32, viewport: f32, track: f32) -> ViewportController {
    let mut controller = ViewportController::new(config).expect("valid config");
    controller.on_resize(content, viewport, track);
    controller
}

#[test]
fn set_offset_always_clamps() {
    let mut controller = viewport(ViewportConfig::horizontal(), 1000.0, 500.0, 200.0);
    for requested in [-1e6, -500.0, -0.5, 0.0, 1.0, 250.0, 499.9, 500.0, 500.1, 7000.0, 1e9] {
        controller.set_offset(requested);
        assert_eq!(
            controller.offset(),
            requested.clamp(0.0, 500.0),
            "requested {} was not clamped",
            requested
        );
    }
}

#[test]
fn thumb_width_is_monotonic_in_visible_ratio() {
    let mut previous = 0.0;
    for viewport in (0..=40).map(|i| i as f32 * 50.0) {
        let width = thumb_width(Extents::new(2000.0, viewport, 300.0), MIN_THUMB_SIZE);
        assert!(
            width >= previous,
            "thumb shrank from {} to {} at viewport {}",
            previous,
            width,
            viewport
        );
        previous = width;
    }
}

#[test]
fn offset_survives_percentage_round_trip() {
    let max_offset = 1234.5;
    for step in 0..=100 {
        let offset = max_offset * step as f32 / 100.0;
        let back = offset_for_percentage(scroll_percentage(offset, max_offset), max_offset);
        assert!((back - offset).abs() < 1e-2, "{} came back as {}", offset, back);
    }
}

#[test]
fn full_sync_is_idempotent() {
    let views = Rc::new(RefCell::new(Vec::new()));
    let views_clone = views.clone();

    let mut controller = viewport(ViewportConfig::vertical(), 3000.0, 600.0, 600.0);
    controller.set_view_listener(move |view| views_clone.borrow_mut().push(*view));
    controller.set_offset(900.0);

    let first = *controller.view();
    assert!(!controller.sync());
    assert_eq!(*controller.view(), first);
    assert_eq!(views.borrow().len(), 1);
}

#[test]
fn mask_tracks_scroll_position() {
    let mut controller = viewport(ViewportConfig::horizontal(), 1000.0, 500.0, 200.0);

    let state = controller.view().mask_state;
    assert!(!state.leading_visible && state.trailing_visible);

    controller.set_offset(200.0);
    let state = controller.view().mask_state;
    assert!(state.leading_visible && state.trailing_visible);
    assert!(matches!(controller.mask(), MaskDescriptor::Both { .. }));

    controller.set_offset(500.0);
    let state = controller.view().mask_state;
    assert!(state.leading_visible && !state.trailing_visible);

    let mut fixed = viewport(ViewportConfig::horizontal(), 500.0, 500.0, 200.0);
    fixed.set_offset(100.0);
    assert!(fixed.mask().is_none());
}

#[test]
fn scenario_thumb_follows_offset() {
    let mut controller = viewport(ViewportConfig::horizontal(), 1000.0, 500.0, 200.0);
    assert_eq!(controller.thumb(), ThumbGeometry { width: 100.0, offset: 0.0 });

    controller.set_offset(250.0);
    assert_eq!(controller.percentage(), 50.0);
    assert_eq!(controller.thumb().offset, 50.0);
}

#[test]
fn scenario_content_that_fits_never_scrolls() {
    let mut controller = viewport(ViewportConfig::horizontal(), 500.0, 500.0, 200.0);
    assert!(!controller.is_scrollable());

    assert!(!controller.set_offset(100.0));
    assert!(!controller.scroll_by(50.0));
    assert!(!controller.on_key_down(KeyCode::END));
    assert!(controller
        .on_pointer_down(DragTarget::Thumb, Point::ZERO)
        .is_none());
    assert_eq!(controller.offset(), 0.0);
    assert!(!controller.accessibility().focusable);
}

#[test]
fn scenario_thumb_drag_keeps_thumb_under_pointer() {
    let mut controller = viewport(ViewportConfig::horizontal(), 1000.0, 500.0, 200.0);
    controller.set_track_origin(Point::new(40.0, 300.0));

    controller.on_pointer_down(DragTarget::Thumb, Point::new(80.0, 310.0));
    controller.on_pointer_move(Point::new(120.0, 312.0));

    assert_eq!(controller.offset(), 200.0);
    assert_eq!(controller.thumb().offset, 40.0);

    // Past the end of the track the offset stays at max
    controller.on_pointer_move(Point::new(900.0, 312.0));
    assert_eq!(controller.offset(), 500.0);
    controller.on_pointer_up();
    assert_eq!(controller.view().percentage, 100.0);
}

#[test]
fn scenario_center_alignment() {
    let mut controller = viewport(ViewportConfig::horizontal(), 1000.0, 200.0, 100.0);
    controller.scroll_element_into_view(TargetBounds::new(300.0, 50.0), ScrollAlign::Center);
    assert_eq!(controller.offset(), 225.0);
}

#[test]
fn scenario_end_key_reaches_exact_max() {
    for start in [0.0, 1.0, 333.3, 1799.0, 1800.0] {
        let mut controller = viewport(ViewportConfig::vertical(), 2437.0, 637.0, 600.0);
        controller.set_offset(start);
        controller.on_key_down(KeyCode::END);
        assert_eq!(controller.offset(), controller.max_offset());
        assert_eq!(controller.offset(), 1800.0);
    }
}

#[test]
fn home_key_returns_to_start() {
    let mut controller = viewport(ViewportConfig::vertical(), 2000.0, 500.0, 500.0);
    controller.set_offset(1200.0);
    assert!(controller.on_key_down(KeyCode::HOME));
    assert_eq!(controller.offset(), 0.0);
}

#[test]
fn resize_mid_drag_keeps_origin_and_clamps_to_new_bounds() {
    let mut controller = viewport(ViewportConfig::horizontal(), 1000.0, 500.0, 200.0);
    controller.set_offset(100.0);
    controller.on_pointer_down(DragTarget::Thumb, Point::new(50.0, 0.0));

    // Content shrinks while the pointer is held
    controller.on_resize(700.0, 500.0, 200.0);
    let session = *controller.drag_state().session().expect("drag still active");
    assert_eq!(session.origin_offset, 100.0);

    // +40px at the new scale (700 / 200) asks for 240, clamped to 200
    controller.on_pointer_move(Point::new(90.0, 0.0));
    assert_eq!(controller.offset(), 200.0);
}

#[test]
fn pointer_moves_coalesce_into_one_frame() {
    let views = Rc::new(RefCell::new(0));
    let thumbs = Rc::new(RefCell::new(0));
    let views_clone = views.clone();
    let thumbs_clone = thumbs.clone();

    let mut controller = viewport(ViewportConfig::horizontal(), 5000.0, 500.0, 250.0);
    controller.set_view_listener(move |_| *views_clone.borrow_mut() += 1);
    controller.set_thumb_listener(move |_| *thumbs_clone.borrow_mut() += 1);

    controller.on_pointer_down(DragTarget::Thumb, Point::ZERO);
    for x in 1..=10 {
        controller.on_pointer_move(Point::new(x as f32, 0.0));
    }
    assert_eq!(*thumbs.borrow(), 10);
    assert_eq!(*views.borrow(), 0);

    assert!(controller.on_animation_frame());
    assert_eq!(*views.borrow(), 1);
    assert_eq!(controller.view().offset, controller.offset());

    // Nothing moved since the last frame
    assert!(!controller.on_animation_frame());
    assert_eq!(*views.borrow(), 1);

    // Release still forces one more sync
    controller.on_pointer_up();
    assert_eq!(*views.borrow(), 2);
}

#[test]
fn content_drag_suppresses_only_real_drags() {
    let config = ViewportConfig::horizontal().with_content_drag(true);
    let mut controller = viewport(config, 1000.0, 500.0, 200.0);
    controller.set_offset(250.0);

    // A press that jitters under the threshold is still a click
    controller.on_pointer_down(DragTarget::Content, Point::new(300.0, 0.0));
    controller.on_pointer_move(Point::new(304.0, 0.0));
    controller.on_pointer_move(Point::new(298.0, 0.0));
    let release = controller.on_pointer_up();
    assert!(!release.suppress_click);
    assert_eq!(controller.offset(), 250.0);

    // A real drag suppresses the click
    controller.on_pointer_down(DragTarget::Content, Point::new(300.0, 0.0));
    controller.on_pointer_move(Point::new(340.0, 0.0));
    let release = controller.on_pointer_up();
    assert!(release.suppress_click);
    assert_eq!(controller.offset(), 170.0);
}

#[test]
fn every_session_hands_back_its_scope() {
    let mut controller = viewport(ViewportConfig::horizontal(), 1000.0, 500.0, 200.0);

    let first = controller.on_pointer_down(DragTarget::Thumb, Point::ZERO);
    assert_eq!(controller.on_pointer_up().scope, first);

    let second = controller.on_pointer_down(DragTarget::Thumb, Point::ZERO);
    assert_ne!(first, second);
    assert_eq!(controller.on_pointer_cancel().scope, second);
}

#[test]
fn unmount_mid_drag_commits_nothing_further() {
    let views = Rc::new(RefCell::new(0));
    let views_clone = views.clone();

    let mut controller = viewport(ViewportConfig::horizontal(), 1000.0, 500.0, 200.0);
    controller.set_view_listener(move |_| *views_clone.borrow_mut() += 1);

    let scope = controller.on_pointer_down(DragTarget::Thumb, Point::ZERO);
    controller.on_pointer_move(Point::new(20.0, 0.0));
    let offset = controller.offset();

    assert_eq!(controller.unmount(), scope);
    assert!(!controller.on_animation_frame());
    assert_eq!(controller.on_pointer_up(), PointerRelease::default());
    assert_eq!(controller.offset(), offset);
    assert_eq!(*views.borrow(), 0);
}

#[test]
fn nearest_alignment_scrolls_minimally() {
    let mut controller = viewport(ViewportConfig::vertical(), 2000.0, 400.0, 400.0);
    let mut rows = rustc_hash::FxHashMap::default();
    for i in 0..40 {
        rows.insert(format!("row-{i}"), TargetBounds::new(i as f32 * 50.0, 50.0));
    }

    // Already visible
    assert!(!controller.scroll_to(&ScrollRequest::new("row-3"), &rows));
    assert_eq!(controller.offset(), 0.0);

    // Below: its end aligns with the viewport end
    assert!(controller.scroll_to(&ScrollRequest::new("row-10"), &rows));
    assert_eq!(controller.offset(), 150.0);

    // Above: its start aligns with the viewport start
    assert!(controller.scroll_to(&ScrollRequest::new("row-1"), &rows));
    assert_eq!(controller.offset(), 50.0);

    // Near the end the clamp wins
    let request = ScrollRequest::new("row-39").align(ScrollAlign::Start);
    assert!(controller.scroll_to(&request, &rows));
    assert_eq!(controller.offset(), 1600.0);
}

#[test]
fn forced_min_extent_hides_trailing_fade_on_wide_viewports() {
    let config = ViewportConfig::horizontal().with_forced_min_extent(650.0);

    let narrow = viewport(config, 2000.0, 600.0, 600.0);
    assert!(narrow.mask().trailing().is_some());

    let wide = viewport(config, 2000.0, 900.0, 900.0);
    assert!(wide.mask().is_none());
}

#[test]
fn vertical_axis_reads_y() {
    let mut controller = viewport(ViewportConfig::vertical(), 1000.0, 500.0, 200.0);
    controller.on_pointer_down(DragTarget::Thumb, Point::new(999.0, 10.0));
    controller.on_pointer_move(Point::new(-999.0, 30.0));
    assert_eq!(controller.offset(), 100.0);
    assert_eq!(controller.content_translation(), Point::new(0.0, -100.0));
    assert!(controller.on_key_down(KeyCode::DOWN));
    assert!(!controller.on_key_down(KeyCode::RIGHT));
}
