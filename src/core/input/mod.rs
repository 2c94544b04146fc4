//=========================================================================
// Input Module
//
// Normalized input events and their synchronous delivery to consumers.
//
// Event Flow:
// ```text
// Platform Layer (Winit callbacks)
//         ↓
//    InputEvent (event.rs)
//         ↓
//    InputDispatcher (dispatcher.rs)
//         ↓
//    Ui → Camera → App handlers (shortcuts.rs, ...)
// ```
//
// The module does not know about windows; it only defines the event
// record, the consumer contract, and the fan-out.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod dispatcher;
pub mod event;
pub mod shortcuts;

//=== Public API ==========================================================

pub use dispatcher::{HandlerSlot, InputDispatcher, InputHandler, SharedHandler};
pub use event::{ButtonAction, CursorPos, InputEvent, InputKind, KeyCode, Modifiers, MouseButton};
pub use shortcuts::{CloseOnEscape, ViewerCommand};
