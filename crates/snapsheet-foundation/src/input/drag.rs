//! Drag gesture recogniser.
//!
//! Turns a raw pointer stream into start/update/end callbacks. Translation
//! is always measured from the press position, so the slop distance is not
//! lost when the drag activates.

use snapsheet_graphics::Point;

use super::types::{PointerEvent, PointerEventKind, PointerId};
use crate::gesture_constants::DRAG_THRESHOLD;

/// Receiver for the phases of a drag gesture.
pub trait DragHandler {
    /// The pointer travelled past the touch slop.
    fn on_drag_start(&mut self);

    /// Fired for every move while dragging, with the total translation since
    /// the press.
    fn on_drag_update(&mut self, translation: Point);

    /// The pointer was lifted after the drag started.
    fn on_drag_end(&mut self);

    /// The platform cancelled the gesture after the drag started.
    fn on_drag_cancel(&mut self) {}
}

#[derive(Debug, Clone, Copy)]
struct TrackedPointer {
    id: PointerId,
    down_position: Point,
    dragging: bool,
}

#[derive(Debug, Clone)]
pub struct DragGestureDetector {
    touch_slop: f32,
    pointer: Option<TrackedPointer>,
}

impl Default for DragGestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DragGestureDetector {
    pub fn new() -> Self {
        Self::with_touch_slop(DRAG_THRESHOLD)
    }

    pub fn with_touch_slop(touch_slop: f32) -> Self {
        Self {
            touch_slop: touch_slop.max(0.0),
            pointer: None,
        }
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Whether a pointer has passed the slop and is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some_and(|pointer| pointer.dragging)
    }

    pub fn reset(&mut self) {
        self.pointer = None;
    }

    /// Feed one pointer event. Returns `true` when the event belonged to the
    /// tracked gesture.
    pub fn on_pointer_event(&mut self, event: &PointerEvent, handler: &mut dyn DragHandler) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() || self.pointer.is_some() {
                    return false;
                }
                self.pointer = Some(TrackedPointer {
                    id: event.id,
                    down_position: event.position,
                    dragging: false,
                });
                // Down stays unconsumed so taps still reach content.
                true
            }
            PointerEventKind::Move => {
                let Some(mut pointer) = self.tracked(event.id) else {
                    return false;
                };
                if event.is_consumed() {
                    return false;
                }
                let translation = Point::new(
                    event.position.x - pointer.down_position.x,
                    event.position.y - pointer.down_position.y,
                );
                if !pointer.dragging {
                    let distance = translation.x.hypot(translation.y);
                    if distance <= self.touch_slop {
                        return true;
                    }
                    pointer.dragging = true;
                    self.pointer = Some(pointer);
                    log::debug!("drag started for pointer {}", pointer.id);
                    handler.on_drag_start();
                }
                handler.on_drag_update(translation);
                event.consume();
                true
            }
            PointerEventKind::Up => {
                let Some(pointer) = self.tracked(event.id) else {
                    return false;
                };
                self.pointer = None;
                if pointer.dragging {
                    log::debug!("drag ended for pointer {}", pointer.id);
                    handler.on_drag_end();
                    event.consume();
                }
                true
            }
            PointerEventKind::Cancel => {
                let Some(pointer) = self.pointer.take() else {
                    return false;
                };
                if pointer.dragging {
                    log::debug!("drag cancelled for pointer {}", pointer.id);
                    handler.on_drag_cancel();
                }
                true
            }
        }
    }

    fn tracked(&self, id: PointerId) -> Option<TrackedPointer> {
        self.pointer.filter(|pointer| pointer.id == id)
    }
}
