//=========================================================================
// Recon Viewer — Library Root
//
// This crate defines the public API surface of the reconstruction viewer.
//
// Responsibilities:
// - Expose the viewer facade (`ViewerBuilder`, `Viewer`)
// - Expose the window-independent core (pixel buffers, input events,
//   dispatcher, consumers, reconstruction data)
// - Keep the Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use recon_viewer::ViewerBuilder;
//
// fn main() {
//     ViewerBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that does not know about windows: image
// buffers, input events and dispatch, camera/UI consumers, and plain
// reconstruction data.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the Winit window and event loop and is not part of the
// public API surface.
//
// `viewer` defines the builder, the runtime, and the per-loop session.
//
mod platform;
mod viewer;

//--- Public Exports ------------------------------------------------------

pub use platform::PlatformError;
pub use viewer::{Session, Viewer, ViewerBuilder};
