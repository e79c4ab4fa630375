use super::*;

use std::cell::Cell;
use std::rc::Rc;

#[test]
fn parses_screen_sizes() {
    assert_eq!(parse_screen_size("1080x1920").unwrap(), Size::new(1080.0, 1920.0));
    assert_eq!(parse_screen_size(" 390 X 844 ").unwrap(), Size::new(390.0, 844.0));
}

#[test]
fn rejects_malformed_screen_sizes() {
    assert!(parse_screen_size("1080").is_err());
    assert!(parse_screen_size("widex1920").is_err());
    assert!(parse_screen_size("1080x").is_err());
}

#[test]
fn default_script_starts_by_settling() {
    let script = default_script(-1_870.0);
    assert_eq!(script.first(), Some(&Step::Settle));
    assert_eq!(script.last(), Some(&Step::Settle));
}

#[test]
fn short_run_expands_on_long_swipe() {
    let config = BottomSheetConfig::new(Size::new(400.0, 400.0));
    let min = config.min_position();
    let outcome = run(config, &[Step::Swipe { dy: -300.0 }, Step::Settle]).unwrap();

    assert_eq!(outcome.translate_y, min);
    assert!(outcome.active);
}

#[test]
fn invalid_config_is_reported() {
    let config = BottomSheetConfig::new(Size::new(400.0, 10.0));
    let err = run(config, &[]).unwrap_err();
    assert!(format!("{err:#}").contains("building sheet"));
}

#[test]
fn frame_loop_only_drains_requested_frames() {
    let scheduler = Arc::new(LoopScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let mut frame_loop = FrameLoop {
        handle: runtime.handle(),
        scheduler,
        started: Instant::now(),
        frames: 0,
    };

    frame_loop.tick();
    assert_eq!(frame_loop.frames, 0);

    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    runtime.handle().register_frame_callback(move |_| flag.set(true));
    frame_loop.tick();

    assert!(fired.get());
    assert_eq!(frame_loop.frames, 1);
    frame_loop.tick();
    assert_eq!(frame_loop.frames, 1);
}
