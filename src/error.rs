use alloc::string::String;
use enough::StopReason;

/// Errors from constructing or accessing pixel views.
///
/// Every variant is a caller-correctable input error. Failed calls never
/// leave a partial write behind.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PixelViewError {
    #[error("invalid {context}: expected between {min} and {max}, got {value}")]
    OutOfRange {
        context: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("invalid {context}: expected {expected}, got {value}")]
    NotOneOf {
        context: &'static str,
        value: String,
        expected: String,
    },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("view shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Source `(width, height, planes)`.
        expected: (u32, u32, u32),
        /// Destination `(width, height, planes)`.
        actual: (u32, u32, u32),
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl PixelViewError {
    /// Numeric value outside an allowed bound (coordinates, colors, sizes).
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::BufferTooSmall { .. }
                | Self::DimensionsTooLarge { .. }
                | Self::LimitExceeded(_)
        )
    }

    /// Value not in a closed set of accepted values.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::NotOneOf { .. })
    }

    /// Label of the offending argument, when the error names one.
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::OutOfRange { context, .. } | Self::NotOneOf { context, .. } => Some(*context),
            _ => None,
        }
    }
}

impl From<StopReason> for PixelViewError {
    fn from(r: StopReason) -> Self {
        PixelViewError::Cancelled(r)
    }
}
