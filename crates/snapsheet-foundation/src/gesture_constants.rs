//! Shared gesture constants.
//!
//! Values are in logical pixels. For very high-density touch screens,
//! scale by the device's DPI factor before handing them to a detector.

/// Drag threshold (touch slop) in logical pixels.
///
/// A pointer has to travel further than this from its press position before
/// a drag starts. Matches common platform conventions (Android uses ~8dp
/// for ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;
