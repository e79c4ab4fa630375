use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct CountingScheduler {
    requests: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn frame_callbacks_receive_frame_time_in_registration_order() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    for tag in 0..3 {
        let seen = Rc::clone(&seen);
        handle.register_frame_callback(move |time| seen.borrow_mut().push((tag, time)));
    }
    assert!(runtime.needs_frame());

    handle.drain_frame_callbacks(16_000_000);

    assert_eq!(
        seen.borrow().as_slice(),
        &[(0, 16_000_000), (1, 16_000_000), (2, 16_000_000)]
    );
    assert!(!handle.has_frame_callbacks());
    assert!(!runtime.needs_frame());
}

#[test]
fn callbacks_registered_while_draining_run_next_frame() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));

    {
        let frames = Rc::clone(&frames);
        let nested_handle = handle.clone();
        handle.register_frame_callback(move |time| {
            frames.borrow_mut().push(time);
            let frames = Rc::clone(&frames);
            nested_handle.register_frame_callback(move |time| frames.borrow_mut().push(time));
        });
    }

    handle.drain_frame_callbacks(1);
    assert_eq!(frames.borrow().as_slice(), &[1]);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(2);
    assert_eq!(frames.borrow().as_slice(), &[1, 2]);
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        handle.frame_clock().with_frame_nanos(move |_| fired.set(true))
    };
    assert!(registration.is_active());
    drop(registration);

    handle.drain_frame_callbacks(16_000_000);
    assert!(!fired.get());
    assert!(!runtime.needs_frame());
}

#[test]
fn registering_requests_a_frame_from_scheduler() {
    let scheduler = Arc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let handle = runtime.handle();

    handle.register_frame_callback(|_| {});
    handle.register_frame_callback(|_| {});

    assert_eq!(scheduler.requests.load(Ordering::SeqCst), 2);
}

#[test]
fn handle_is_inert_after_runtime_drop() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    drop(runtime);

    assert!(handle.register_frame_callback(|_| {}).is_none());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    assert!(!handle.needs_frame());
    handle.drain_frame_callbacks(0);
}
