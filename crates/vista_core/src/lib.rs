//! Vista Core
//!
//! Foundational primitives shared by Vista widgets:
//!
//! - **Events**: platform-agnostic pointer, key and size vocabulary
//! - **State Machines**: `Copy` state enums driven by event ids
//! - **Signals**: observable values for presentation-facing state
//! - **Frame coalescing**: at-most-once-per-frame deferred work
//!
//! Everything here is single-threaded and event-loop driven.

pub mod events;
pub mod frame;
pub mod fsm;
pub mod signal;

pub use events::{EventType, KeyCode, Point, Size};
pub use frame::NextFrame;
pub use fsm::StateTransitions;
pub use signal::{Signal, SubscriptionId};
