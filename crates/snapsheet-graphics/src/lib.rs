//! Pure geometry and color data for Snapsheet.
//!
//! Nothing here renders; these are the values a renderer needs to draw the
//! panel at its current position.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
