use snapsheet_graphics::{Color, Rect, RoundedCornerShape, Size};

use crate::config::SheetStyle;

/// Everything a renderer needs to draw the sheet for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetFrame {
    /// Full-height panel, pushed down by one screen and pulled up by the
    /// current position.
    pub bounds: Rect,
    pub shape: RoundedCornerShape,
    pub background: Color,
    pub handle: Rect,
    pub handle_shape: RoundedCornerShape,
    pub handle_color: Color,
    /// Area below the handle reserved for caller content.
    pub content: Rect,
}

impl SheetFrame {
    pub(crate) fn layout(
        screen: Size,
        translate_y: f32,
        corner_radius: f32,
        style: &SheetStyle,
    ) -> Self {
        let bounds = Rect::new(0.0, screen.height + translate_y, screen.width, screen.height);
        let handle = bounds.centered_child(style.handle_size, style.handle_margin);
        let content_top = handle.bottom() + style.handle_margin;
        let content = Rect::new(
            bounds.x,
            content_top,
            bounds.width,
            (bounds.bottom() - content_top).max(0.0),
        );
        Self {
            bounds,
            shape: RoundedCornerShape::uniform(corner_radius),
            background: style.background,
            handle,
            handle_shape: RoundedCornerShape::uniform(style.handle_corner_radius),
            handle_color: style.handle_color,
            content,
        }
    }

    /// Part of the panel visible on a screen of `screen_height`.
    pub fn visible_height(&self, screen_height: f32) -> f32 {
        (screen_height - self.bounds.y).clamp(0.0, self.bounds.height)
    }
}
