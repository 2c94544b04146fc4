//=========================================================================
// Core
//=========================================================================
//
// Window-independent building blocks of the viewer.
//
// Components:
// - `image`: owned pixel buffers (decoder ↔ texture row order)
// - `input`: normalized input events and synchronous dispatch
// - `camera`: fly camera consumer
// - `gui`: UI input consumer and frame statistics
// - `reconstruction`: plain reconstruction data
//
// Nothing here creates windows, touches GPU state, or reads files; the
// platform layer feeds events in and the renderer reads state out.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod gui;
pub mod image;
pub mod input;
pub mod reconstruction;

//=== Public API ==========================================================

pub use camera::{CameraConfig, CameraController};
pub use gui::{FrameStats, GuiInput};
pub use image::{ImageBuffer, ImageByte, ImageError, ImageF};
pub use input::{HandlerSlot, InputDispatcher, InputEvent, InputHandler, ViewerCommand};
