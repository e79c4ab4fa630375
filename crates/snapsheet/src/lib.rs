//! Draggable bottom sheet.
//!
//! A [`BottomSheet`] slides up from the bottom edge of the screen. It tracks
//! vertical drags one-to-one, and on release springs closed, springs fully
//! open, or stays put depending on how far it was pulled. Owners command it
//! through a [`BottomSheetHandle`].
//!
//! The sheet is driven by a [`snapsheet_core::Runtime`]: the host feeds it
//! pointer events and drains frame callbacks once per frame, then draws the
//! [`SheetFrame`] it reports.
//!
//! ```ignore
//! let runtime = Runtime::new(Arc::new(DefaultScheduler));
//! let mut sheet = BottomSheet::new(BottomSheetConfig::default(), runtime.handle())?;
//! let handle = sheet.handle();
//! sheet.mount();
//! // each frame:
//! runtime.handle().drain_frame_callbacks(frame_time_nanos);
//! draw(sheet.frame());
//! // elsewhere:
//! if handle.is_active() { handle.scroll_to(0.0); }
//! ```

mod config;
mod error;
mod frame;
mod sheet;
mod snap;

pub use config::{
    sheet_spring, BottomSheetConfig, SheetStyle, DEFAULT_SCREEN_SIZE, DEFAULT_TOP_INSET,
    SHEET_SPRING_DAMPING,
};
pub use error::SheetConfigError;
pub use frame::SheetFrame;
pub use sheet::{BottomSheet, BottomSheetHandle};
pub use snap::{corner_radius, SnapDecision};

pub use snapsheet_foundation::{PointerEvent, PointerEventKind};

#[cfg(test)]
#[path = "tests/sheet_tests.rs"]
mod tests;
