//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use recon_viewer::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Viewer
pub use crate::viewer::{Viewer, ViewerBuilder};

// Pixel buffers
pub use crate::core::image::{ImageBuffer, ImageByte, ImageError, ImageF};

// Input
pub use crate::core::input::{
    ButtonAction, CursorPos, HandlerSlot, InputDispatcher, InputEvent, InputHandler, InputKind,
    KeyCode, Modifiers, MouseButton,
};

// Consumers
pub use crate::core::camera::{CameraConfig, CameraController};
pub use crate::core::gui::GuiInput;
