//! Terminal input module (loop-facing).
//!
//! Maps `crossterm` events into [`crate::types::ClockEvent`] and provides the
//! timeout-bounded wait the clock loop uses as both its tick timer and its
//! input wait.

pub mod map;
pub mod source;

pub use sclock_types as types;

pub use map::{handle_key_event, map_event, should_quit};
pub use source::{EventSource, ScriptedEvents, TerminalEvents};
