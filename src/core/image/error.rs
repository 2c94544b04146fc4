//=========================================================================
// Image Errors
//=========================================================================
//
// Failure cases for pixel buffer construction and checked access.
//
//=========================================================================

use std::collections::TryReserveError;

//=== ImageError ==========================================================

/// Errors produced while building or adopting pixel storage.
///
/// Allocation errors are fatal to the operation that raised them; no
/// partially constructed buffer is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// `width * height * channels` does not fit in `usize`.
    SizeOverflow {
        width: u32,
        height: u32,
        channels: u32,
    },

    /// The allocator refused the request.
    Allocation(TryReserveError),

    /// Adopted sample vector does not match the declared dimensions.
    SizeMismatch { expected: usize, actual: usize },
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SizeOverflow { width, height, channels } => write!(
                f,
                "Image size overflows: {}x{} with {} channels",
                width, height, channels
            ),
            Self::Allocation(e) => write!(f, "Image allocation failed: {}", e),
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "Sample count mismatch: expected {}, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for ImageError {
    fn from(e: TryReserveError) -> Self {
        Self::Allocation(e)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
