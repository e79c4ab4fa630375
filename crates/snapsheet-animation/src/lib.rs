//! Animation system for Snapsheet
//!
//! Provides a frame-driven spring [`Animatable`] and range interpolation.

mod animatable;
mod interpolation;
mod spring;

pub use animatable::Animatable;
pub use interpolation::{interpolate, Extrapolate};
pub use spring::SpringSpec;

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
