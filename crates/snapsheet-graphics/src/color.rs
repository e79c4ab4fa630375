//! Straight-alpha RGBA color.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    /// CSS `grey` (#808080).
    pub const GREY: Color = Color::from_rgb_u8(128, 128, 128);
}
