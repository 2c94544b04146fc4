//=========================================================================
// Image Module
//=========================================================================
//
// In-memory pixel storage shared between image decoders and texture
// upload. Knows nothing about file formats or GPU state; it only owns
// and reorders samples.
//
// Components:
// - `buffer`: `ImageBuffer<T>` (owning, deep-copy, vertical flip)
// - `error`: construction failures
//
//=========================================================================

//=== Module Declarations =================================================

mod buffer;
mod error;

//=== Public API ==========================================================

pub use buffer::{ImageBuffer, ImageByte, ImageF};
pub use error::ImageError;
