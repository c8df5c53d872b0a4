//! sclock (workspace facade crate).
//!
//! Re-exports the `sclock::{core,engine,input,term,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use sclock_core as core;
pub use sclock_engine as engine;
pub use sclock_input as input;
pub use sclock_term as term;
pub use sclock_types as types;
