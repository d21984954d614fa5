//! Event-driven state enums
//!
//! Widgets model their interaction states as small `Copy` enums and map
//! incoming event type ids to transitions with a single `match`:
//!
//! ```
//! use vista_core::events::event_types::*;
//! use vista_core::fsm::StateTransitions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
//! enum Press {
//!     #[default]
//!     Up,
//!     Down,
//! }
//!
//! impl StateTransitions for Press {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Press::Up, POINTER_DOWN) => Some(Press::Down),
//!             (Press::Down, POINTER_UP) => Some(Press::Up),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut state = Press::default();
//! state.apply(POINTER_DOWN);
//! assert_eq!(state, Press::Down);
//! ```

use std::hash::Hash;

use crate::events::EventType;

/// Trait for state types that can handle event transitions
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;

    /// Apply an event in place, returning whether a transition happened
    fn apply(&mut self, event: EventType) -> bool {
        match self.on_event(event) {
            Some(next) => {
                tracing::trace!("{:?} --{}--> {:?}", self, event, next);
                *self = next;
                true
            }
            None => false,
        }
    }
}
