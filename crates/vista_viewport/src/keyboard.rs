//! Keyboard scrolling

use vista_core::KeyCode;

use crate::axis::Axis;

/// A scroll action triggered by a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    StepBackward,
    StepForward,
    PageBackward,
    PageForward,
    ToStart,
    ToEnd,
}

/// Map a key to a command for a viewport scrolling along `axis`.
///
/// Only the arrow pair matching the axis steps; the cross-axis arrows are
/// left to the host.
pub fn command_for_key(axis: Axis, key: KeyCode) -> Option<KeyCommand> {
    if key == axis.decrease_key() {
        return Some(KeyCommand::StepBackward);
    }
    if key == axis.increase_key() {
        return Some(KeyCommand::StepForward);
    }
    match key {
        KeyCode::HOME => Some(KeyCommand::ToStart),
        KeyCode::END => Some(KeyCommand::ToEnd),
        KeyCode::PAGE_UP => Some(KeyCommand::PageBackward),
        KeyCode::PAGE_DOWN => Some(KeyCommand::PageForward),
        _ => None,
    }
}

/// Distance scrolled by PageUp/PageDown: one viewport, keeping half a step
/// of overlap, but never less than a single step
pub fn page_distance(viewport_extent: f32, step: f32) -> f32 {
    (viewport_extent - step / 2.0).max(step)
}
