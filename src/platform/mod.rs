//! Platform abstraction layer
//!
//! Turns what the browser/native shell provides into simulation inputs:
//! - `clock`: variable frame times into a count of fixed ticks
//! - `input`: key and touch-button events into per-tick commands

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{Button, KeyboardState};
