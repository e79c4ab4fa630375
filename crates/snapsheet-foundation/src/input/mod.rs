pub mod drag;
pub mod types;

pub use drag::{DragGestureDetector, DragHandler};
pub use types::{PointerEvent, PointerEventKind, PointerId};
