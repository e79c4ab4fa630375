//! Release rule and position-derived visuals.

use snapsheet_animation::{interpolate, Extrapolate};

use crate::config::SheetStyle;

/// What the sheet does when a drag is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDecision {
    /// Dragged up less than a third of the way: hide the sheet.
    Close,
    /// Dragged up more than two thirds of the way: expand fully.
    Expand,
    /// Released in between: stay where the finger left it.
    Stay,
}

impl SnapDecision {
    /// Decide from the position at release. Thresholds scale with
    /// `min_position`, so they hold for any screen height.
    pub fn at(position: f32, min_position: f32) -> Self {
        if position > min_position / 3.0 {
            SnapDecision::Close
        } else if position < min_position / 1.5 {
            SnapDecision::Expand
        } else {
            SnapDecision::Stay
        }
    }

    /// Resting position to animate to, if any.
    pub fn target(self, min_position: f32) -> Option<f32> {
        match self {
            SnapDecision::Close => Some(0.0),
            SnapDecision::Expand => Some(min_position),
            SnapDecision::Stay => None,
        }
    }
}

/// Corner radius for a sheet at `position`: rounded at rest, sharpening over
/// the last `corner_transition` pixels before the expanded stop.
pub fn corner_radius(position: f32, min_position: f32, style: &SheetStyle) -> f32 {
    interpolate(
        position,
        [min_position + style.corner_transition, min_position],
        [style.corner_radius, style.expanded_corner_radius],
        Extrapolate::Clamp,
    )
}
