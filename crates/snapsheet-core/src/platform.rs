//! Platform abstraction traits for runtime services.
//!
//! The host application implements these so the runtime can ask for frames
//! without knowing which windowing or event loop drives it.

/// Schedules work for the runtime.
///
/// Implementations are responsible for waking the host event loop so it
/// drains frame callbacks on its next tick. They must be safe to use from
/// multiple threads.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler for hosts that tick every frame anyway (tests, headless loops).
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}
