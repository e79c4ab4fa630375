//! Pointer input and gesture recognition for Snapsheet.

pub mod gesture_constants;
pub mod input;

pub use gesture_constants::DRAG_THRESHOLD;
pub use input::{DragGestureDetector, DragHandler, PointerEvent, PointerEventKind, PointerId};
pub use snapsheet_graphics::Point;

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
