//! Event sources: where the clock loop waits between frames.
//!
//! The wait is the loop's only suspension point. It returns early on a
//! relevant event and returns `None` once the timeout elapses.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use crate::map::map_event;
use crate::types::ClockEvent;

pub trait EventSource {
    /// Wait up to `timeout` for the next clock event.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<ClockEvent>>;
}

/// Reads keystrokes and resize notifications from the terminal.
///
/// Resize notifications come through crossterm's event queue, so they are
/// observed here, between frames, and never while a frame is being drawn.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<ClockEvent>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            // Unmapped events (ignored keys, mouse, focus) keep waiting
            // against the same deadline.
            if let Some(ev) = map_event(event::read()?) {
                return Ok(Some(ev));
            }
            if remaining.is_zero() {
                return Ok(None);
            }
        }
    }
}

/// Replays a fixed sequence of events, one per wait. Once drained every wait
/// yields `Quit`, so a scripted loop always terminates.
#[derive(Debug, Default, Clone)]
pub struct ScriptedEvents {
    events: VecDeque<Option<ClockEvent>>,
    waits: Vec<Duration>,
}

impl ScriptedEvents {
    /// `None` entries stand for a wait that timed out.
    pub fn new(events: impl IntoIterator<Item = Option<ClockEvent>>) -> Self {
        Self {
            events: events.into_iter().collect(),
            waits: Vec::new(),
        }
    }

    /// Timeouts requested so far.
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<ClockEvent>> {
        self.waits.push(timeout);
        Ok(self
            .events
            .pop_front()
            .unwrap_or(Some(ClockEvent::Action(crate::types::ClockAction::Quit))))
    }
}
