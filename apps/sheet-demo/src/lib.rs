//! Headless driver for the Snapsheet bottom sheet.
//!
//! Runs a real-time frame loop, replays a scripted list of gestures and
//! logs where the sheet ends up after each one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use snapsheet::{BottomSheet, BottomSheetConfig, PointerEvent, DEFAULT_SCREEN_SIZE};
use snapsheet_core::{Runtime, RuntimeHandle, RuntimeScheduler};
use snapsheet_graphics::Size;
use web_time::Instant;

/// Environment variable holding the simulated screen, as `WIDTHxHEIGHT`.
pub const SCREEN_ENV: &str = "SNAPSHEET_SCREEN";

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const SWIPE_STEPS: usize = 12;
/// Upper bound on frames spent waiting for one step to settle.
const MAX_SETTLE_FRAMES: usize = 1_200;

/// Parse `WIDTHxHEIGHT` (e.g. `1080x1920`).
pub fn parse_screen_size(spec: &str) -> anyhow::Result<Size> {
    let Some((width, height)) = spec.trim().split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got {spec:?}");
    };
    let width: f32 = width
        .trim()
        .parse()
        .with_context(|| format!("invalid screen width in {spec:?}"))?;
    let height: f32 = height
        .trim()
        .parse()
        .with_context(|| format!("invalid screen height in {spec:?}"))?;
    Ok(Size::new(width, height))
}

/// Screen size from [`SCREEN_ENV`], or the default phone-sized screen.
pub fn screen_size_from_env() -> anyhow::Result<Size> {
    match std::env::var(SCREEN_ENV) {
        Ok(value) => parse_screen_size(&value),
        Err(std::env::VarError::NotPresent) => Ok(DEFAULT_SCREEN_SIZE),
        Err(err) => Err(err).with_context(|| format!("reading {SCREEN_ENV}")),
    }
}

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Let the sheet animate until it comes to rest.
    Settle,
    /// Press 10px below the sheet's top edge and move vertically by `dy`.
    Swipe { dy: f32 },
    /// Command the sheet through its handle.
    ScrollTo(f32),
}

/// The interactions the demo replays by default.
pub fn default_script(min_position: f32) -> Vec<Step> {
    vec![
        Step::Settle,
        Step::Swipe { dy: -900.0 },
        Step::Settle,
        Step::Swipe { dy: min_position.abs() * 0.3 },
        Step::Settle,
        Step::ScrollTo(min_position / 3.0),
        Step::Settle,
        Step::Swipe { dy: 300.0 },
        Step::Settle,
    ]
}

/// Wakes the loop when the runtime asks for a frame.
#[derive(Default)]
struct LoopScheduler {
    frame_requested: AtomicBool,
}

impl LoopScheduler {
    fn take_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::AcqRel)
    }
}

impl RuntimeScheduler for LoopScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::Release);
    }
}

struct FrameLoop {
    handle: RuntimeHandle,
    scheduler: Arc<LoopScheduler>,
    started: Instant,
    /// Frames that actually drained callbacks.
    frames: u64,
}

impl FrameLoop {
    fn tick(&mut self) {
        std::thread::sleep(FRAME_INTERVAL);
        if !self.scheduler.take_request() {
            return;
        }
        let now = self.started.elapsed().as_nanos() as u64;
        self.handle.drain_frame_callbacks(now);
        self.frames += 1;
    }

    fn settle(&mut self, sheet: &BottomSheet) -> anyhow::Result<()> {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !sheet.is_animating() && !self.handle.has_frame_callbacks() {
                return Ok(());
            }
            self.tick();
        }
        bail!("sheet did not settle within {MAX_SETTLE_FRAMES} frames")
    }
}

/// Final state of one demo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub translate_y: f32,
    pub active: bool,
    pub frames: u64,
}

pub fn run(config: BottomSheetConfig, script: &[Step]) -> anyhow::Result<Outcome> {
    let scheduler = Arc::new(LoopScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let mut frame_loop = FrameLoop {
        handle: runtime.handle(),
        scheduler,
        started: Instant::now(),
        frames: 0,
    };

    let mut sheet = BottomSheet::new(config, runtime.handle()).context("building sheet")?;
    let handle = sheet.handle();
    sheet.mount();
    log::info!(
        "mounted {}x{} sheet, expanded stop at {:.1}",
        config.screen_size.width,
        config.screen_size.height,
        sheet.min_position()
    );

    for step in script {
        match *step {
            Step::Settle => frame_loop.settle(&sheet)?,
            Step::Swipe { dy } => {
                let x = config.screen_size.width / 2.0;
                let y = sheet.frame().bounds.y + 10.0;
                sheet.on_pointer_event(&PointerEvent::down(x, y));
                for i in 1..=SWIPE_STEPS {
                    let progress = i as f32 / SWIPE_STEPS as f32;
                    sheet.on_pointer_event(&PointerEvent::moved(x, y + dy * progress));
                    frame_loop.tick();
                }
                sheet.on_pointer_event(&PointerEvent::up(x, y + dy));
            }
            Step::ScrollTo(target) => handle.scroll_to(target),
        }
        let frame = sheet.frame();
        log::info!(
            "{:?}: y={:.1} active={} radius={:.1} visible={:.1}",
            step,
            sheet.translate_y(),
            handle.is_active(),
            sheet.corner_radius(),
            frame.visible_height(config.screen_size.height)
        );
    }

    Ok(Outcome {
        translate_y: sheet.translate_y(),
        active: handle.is_active(),
        frames: frame_loop.frames,
    })
}

#[cfg(test)]
#[path = "tests/demo_tests.rs"]
mod tests;
