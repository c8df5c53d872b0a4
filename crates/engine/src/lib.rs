//! Clock engine: configuration and the event loop.
//!
//! Wires the core layout model, the terminal drawing layer and the input
//! layer together. Generic over the surface, time source and event source so
//! the full loop can run headless.
//!
//! # Example
//!
//! ```
//! use sclock_engine::{Clock, ClockConfig};
//! use sclock_engine::core::{ClockReading, FixedClock};
//! use sclock_engine::input::ScriptedEvents;
//! use sclock_engine::term::FrameBuffer;
//!
//! let reading = ClockReading { hour: 1, minute: 2, second: 3, day_of_year: 1, year: 2024, month: 1, day: 1 };
//! let mut clock = Clock::new(FrameBuffer::new(80, 24), FixedClock(reading), &ClockConfig::default());
//!
//! // No scripted events: the first wait yields `q`.
//! clock.run(&mut ScriptedEvents::default()).unwrap();
//! assert_eq!(clock.time_text(), "01:02:03");
//! ```

pub mod clock_loop;
pub mod config;

pub use sclock_core as core;
pub use sclock_input as input;
pub use sclock_term as term;
pub use sclock_types as types;

pub use clock_loop::{Clock, Flow};
pub use config::{locale_is_utf8, ClockConfig};
