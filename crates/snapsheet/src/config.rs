//! Sheet configuration and styling.

use snapsheet_animation::SpringSpec;
use snapsheet_foundation::DRAG_THRESHOLD;
use snapsheet_graphics::{Color, Size};

use crate::SheetConfigError;

/// Space left uncovered above the fully expanded sheet.
pub const DEFAULT_TOP_INSET: f32 = 50.0;

/// Damping coefficient of the snap spring.
pub const SHEET_SPRING_DAMPING: f32 = 50.0;

/// Default screen used when the host does not report one.
pub const DEFAULT_SCREEN_SIZE: Size = Size::new(1080.0, 1920.0);

/// Heavily over-damped spring: the sheet glides into place without bouncing.
pub fn sheet_spring() -> SpringSpec {
    SpringSpec::default_spring().with_damping(SHEET_SPRING_DAMPING)
}

/// Cosmetic parameters of the panel and its drag handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetStyle {
    pub background: Color,
    /// Corner radius while the sheet is away from the top.
    pub corner_radius: f32,
    /// Corner radius once fully expanded.
    pub expanded_corner_radius: f32,
    /// Distance above the expanded stop over which the corners sharpen.
    pub corner_transition: f32,
    pub handle_size: Size,
    pub handle_color: Color,
    pub handle_corner_radius: f32,
    /// Vertical margin above and below the handle.
    pub handle_margin: f32,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            corner_radius: 25.0,
            expanded_corner_radius: 5.0,
            corner_transition: 50.0,
            handle_size: Size::new(75.0, 4.0),
            handle_color: Color::GREY,
            handle_corner_radius: 2.0,
            handle_margin: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BottomSheetConfig {
    pub screen_size: Size,
    pub top_inset: f32,
    pub spring: SpringSpec,
    pub touch_slop: f32,
    pub style: SheetStyle,
}

impl Default for BottomSheetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_SIZE)
    }
}

impl BottomSheetConfig {
    pub fn new(screen_size: Size) -> Self {
        Self {
            screen_size,
            top_inset: DEFAULT_TOP_INSET,
            spring: sheet_spring(),
            touch_slop: DRAG_THRESHOLD,
            style: SheetStyle::default(),
        }
    }

    pub fn with_top_inset(mut self, top_inset: f32) -> Self {
        self.top_inset = top_inset;
        self
    }

    pub fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self
    }

    /// Offset of the fully expanded stop. Always negative for a valid config.
    pub fn min_position(&self) -> f32 {
        -self.screen_size.height + self.top_inset
    }

    pub fn validate(&self) -> Result<(), SheetConfigError> {
        if !self.top_inset.is_finite() || self.top_inset < 0.0 {
            return Err(SheetConfigError::InvalidTopInset(self.top_inset));
        }
        let Size { width, height } = self.screen_size;
        if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= self.top_inset {
            return Err(SheetConfigError::InvalidScreenSize {
                width,
                height,
                top_inset: self.top_inset,
            });
        }
        if !self.spring.is_valid() {
            return Err(SheetConfigError::InvalidSpring(self.spring));
        }
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(SheetConfigError::InvalidTouchSlop(self.touch_slop));
        }
        Ok(())
    }
}
