//! The bottom sheet widget and the handle it hands to its owner.

use std::cell::Cell;
use std::rc::Rc;

use snapsheet_animation::Animatable;
use snapsheet_core::RuntimeHandle;
use snapsheet_foundation::{DragGestureDetector, DragHandler, PointerEvent, PointerEventKind};
use snapsheet_graphics::Point;

use crate::config::BottomSheetConfig;
use crate::frame::SheetFrame;
use crate::snap::{corner_radius, SnapDecision};
use crate::SheetConfigError;

/// State shared between the widget and its handles.
struct SheetState {
    config: BottomSheetConfig,
    min_position: f32,
    /// Vertical offset; 0 is hidden, `min_position` fully expanded.
    translate_y: Animatable,
    active: Cell<bool>,
    /// Position captured when the current drag started.
    drag_origin: Cell<Option<f32>>,
}

impl SheetState {
    fn scroll_to(&self, destination: f32) {
        self.active.set(destination != 0.0);
        self.translate_y.animate_to(destination, self.config.spring);
    }

    fn begin_drag(&self) {
        // The finger takes over from any spring still in flight.
        self.translate_y.stop();
        let origin = self.translate_y.value();
        log::debug!("sheet drag start at {:.1}", origin);
        self.drag_origin.set(Some(origin));
    }

    fn update_drag(&self, translation_y: f32) {
        let Some(origin) = self.drag_origin.get() else {
            log::debug!("sheet drag update without start ignored");
            return;
        };
        let position = (origin + translation_y).clamp(self.min_position, 0.0);
        self.translate_y.snap_to(position);
    }

    fn end_drag(&self) {
        if self.drag_origin.take().is_none() {
            return;
        }
        let position = self.translate_y.value();
        let decision = SnapDecision::at(position, self.min_position);
        log::debug!("sheet released at {:.1}: {:?}", position, decision);
        if let Some(target) = decision.target(self.min_position) {
            self.scroll_to(target);
        }
    }

    fn cancel_drag(&self) {
        if self.drag_origin.take().is_some() {
            log::debug!("sheet drag cancelled at {:.1}", self.translate_y.value());
        }
    }
}

impl DragHandler for &SheetState {
    fn on_drag_start(&mut self) {
        self.begin_drag();
    }

    fn on_drag_update(&mut self, translation: Point) {
        self.update_drag(translation.y);
    }

    fn on_drag_end(&mut self) {
        self.end_drag();
    }

    fn on_drag_cancel(&mut self) {
        self.cancel_drag();
    }
}

/// Imperative access to a sheet for its owner, e.g. to close it from a
/// button elsewhere on screen. Cheap to clone.
#[derive(Clone)]
pub struct BottomSheetHandle {
    state: Rc<SheetState>,
}

impl BottomSheetHandle {
    /// Spring the sheet to `destination` (0 hides it). Returns immediately.
    pub fn scroll_to(&self, destination: f32) {
        self.state.scroll_to(destination);
    }

    /// Whether the last commanded destination was anything but closed.
    pub fn is_active(&self) -> bool {
        self.state.active.get()
    }
}

/// A panel that slides up from the bottom of the screen, follows vertical
/// drags and snaps closed or fully open on release.
pub struct BottomSheet {
    state: Rc<SheetState>,
    detector: DragGestureDetector,
    mounted: bool,
}

impl BottomSheet {
    pub fn new(config: BottomSheetConfig, runtime: RuntimeHandle) -> Result<Self, SheetConfigError> {
        config.validate()?;
        let state = SheetState {
            min_position: config.min_position(),
            translate_y: Animatable::new(0.0, runtime),
            active: Cell::new(false),
            drag_origin: Cell::new(None),
            config,
        };
        Ok(Self {
            state: Rc::new(state),
            detector: DragGestureDetector::with_touch_slop(config.touch_slop),
            mounted: false,
        })
    }

    /// First attach to the screen: opens the sheet to its initial third.
    /// Later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let initial = self.initial_position();
        log::debug!("sheet mounted, opening to {:.1}", initial);
        self.state.scroll_to(initial);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn handle(&self) -> BottomSheetHandle {
        BottomSheetHandle {
            state: Rc::clone(&self.state),
        }
    }

    pub fn config(&self) -> &BottomSheetConfig {
        &self.state.config
    }

    /// Offset of the fully expanded stop.
    pub fn min_position(&self) -> f32 {
        self.state.min_position
    }

    /// Resting position the sheet opens to when mounted.
    pub fn initial_position(&self) -> f32 {
        self.state.min_position / 3.0
    }

    /// Current vertical offset.
    pub fn translate_y(&self) -> f32 {
        self.state.translate_y.value()
    }

    /// Whether a spring is still moving the sheet.
    pub fn is_animating(&self) -> bool {
        self.state.translate_y.is_running()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.drag_origin.get().is_some()
    }

    pub fn scroll_to(&self, destination: f32) {
        self.state.scroll_to(destination);
    }

    pub fn is_active(&self) -> bool {
        self.state.active.get()
    }

    /// Route a platform pointer event through the sheet's drag recogniser.
    /// Returns `true` when the sheet handled it.
    /// Presses outside the panel are left for whatever lies underneath.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let reads_position = matches!(event.kind, PointerEventKind::Down | PointerEventKind::Move);
        if reads_position && !event.position.is_finite() {
            log::warn!("dropping pointer event with non-finite position {:?}", event.position);
            return false;
        }
        if event.kind == PointerEventKind::Down && !self.frame().bounds.contains(event.position) {
            return false;
        }
        let mut handler: &SheetState = &self.state;
        self.detector.on_pointer_event(event, &mut handler)
    }

    /// Drag phases for hosts that recognise gestures themselves.
    pub fn drag_start(&self) {
        self.state.begin_drag();
    }

    /// `translation_y` is the total vertical travel since [`Self::drag_start`].
    pub fn drag_update(&self, translation_y: f32) {
        if !translation_y.is_finite() {
            log::warn!("dropping non-finite drag translation {}", translation_y);
            return;
        }
        self.state.update_drag(translation_y);
    }

    pub fn drag_end(&self) {
        self.state.end_drag();
    }

    pub fn drag_cancel(&self) {
        self.state.cancel_drag();
    }

    pub fn corner_radius(&self) -> f32 {
        corner_radius(
            self.translate_y(),
            self.state.min_position,
            &self.state.config.style,
        )
    }

    /// Geometry for the current position.
    pub fn frame(&self) -> SheetFrame {
        let config = &self.state.config;
        SheetFrame::layout(
            config.screen_size,
            self.translate_y(),
            self.corner_radius(),
            &config.style,
        )
    }
}
