use snapsheet_animation::SpringSpec;

/// Rejected [`BottomSheetConfig`](crate::BottomSheetConfig) values.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetConfigError {
    InvalidScreenSize {
        width: f32,
        height: f32,
        top_inset: f32,
    },
    InvalidTopInset(f32),
    InvalidSpring(SpringSpec),
    InvalidTouchSlop(f32),
}

impl std::fmt::Display for SheetConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetConfigError::InvalidScreenSize {
                width,
                height,
                top_inset,
            } => write!(
                f,
                "screen {width}x{height} cannot host a sheet with a {top_inset}px top inset"
            ),
            SheetConfigError::InvalidTopInset(inset) => {
                write!(f, "top inset must be finite and non-negative, got {inset}")
            }
            SheetConfigError::InvalidSpring(spec) => write!(f, "invalid spring {spec:?}"),
            SheetConfigError::InvalidTouchSlop(slop) => {
                write!(f, "touch slop must be finite and non-negative, got {slop}")
            }
        }
    }
}

impl std::error::Error for SheetConfigError {}
