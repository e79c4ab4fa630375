//! Frame runtime for Snapsheet.
//!
//! A deliberately small single-threaded runtime: widgets register one-shot
//! frame callbacks, and the host drains them once per frame with the frame
//! timestamp. Animations re-register from inside their callback to keep
//! running.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{DefaultScheduler, RuntimeScheduler};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
