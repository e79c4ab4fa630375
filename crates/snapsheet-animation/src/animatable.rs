use std::cell::RefCell;
use std::rc::Rc;

use snapsheet_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};

use crate::SpringSpec;

/// A float value that can be driven toward a target by a spring.
///
/// The animatable is the single source of truth for its value: gestures
/// write through [`Animatable::snap_to`], animations through
/// [`Animatable::animate_to`]. Cloning shares the same value.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    clock: FrameClock,
    current: f32,
    velocity: f32,
    target: f32,
    spec: SpringSpec,
    last_frame_nanos: Option<u64>,
    running: bool,
    registration: Option<FrameCallbackRegistration>,
}

impl Animatable {
    /// Create a new animatable resting at `initial`.
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            clock: runtime.frame_clock(),
            current: initial,
            velocity: 0.0,
            target: initial,
            spec: SpringSpec::default(),
            last_frame_nanos: None,
            running: false,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    /// Return the current animation target.
    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn spec(&self) -> SpringSpec {
        self.inner.borrow().spec
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Spring toward `target`. An animation already in flight is retargeted
    /// and keeps its current value and velocity.
    pub fn animate_to(&self, target: f32, spec: SpringSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            log::debug!(
                "animate_to {:.2} from {:.2} (v={:.2})",
                target,
                inner.current,
                inner.velocity
            );
            inner.target = target;
            inner.spec = spec;
            if !inner.running {
                inner.running = true;
                inner.last_frame_nanos = None;
            }
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to `value` immediately, cancelling any running animation.
    pub fn snap_to(&self, value: f32) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.current = value;
        inner.target = value;
        inner.velocity = 0.0;
        inner.running = false;
        inner.last_frame_nanos = None;
    }

    /// Freeze a running animation at its current value.
    pub fn stop(&self) {
        let current = self.value();
        self.snap_to(current);
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            let last = inner.last_frame_nanos.replace(frame_time_nanos);
            match last {
                // First frame only anchors the clock.
                None => true,
                Some(last) => {
                    let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;
                    let spec = inner.spec;
                    let (value, velocity) =
                        spec.advance(inner.current, inner.velocity, inner.target, dt);
                    inner.current = value;
                    inner.velocity = velocity;
                    log::trace!("spring frame value={:.3} v={:.3}", value, velocity);

                    if spec.is_at_rest(value, velocity, inner.target) {
                        inner.current = inner.target;
                        inner.velocity = 0.0;
                        inner.running = false;
                        inner.last_frame_nanos = None;
                        false
                    } else {
                        true
                    }
                }
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
