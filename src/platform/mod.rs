//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level window and events) with the viewer session.
//
// Architecture:
// ```text
//  Main Thread (single):
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop                            │
//  │   ↓                                          │
//  │  InputProcessor                              │
//  │   ├─ Converts Winit → InputEvent             │
//  │   └─ Tracks modifiers + cursor position      │
//  │   ↓                                          │
//  │  Session::handle_event()                     │
//  │   ├─ InputDispatcher: Ui → Camera → App      │
//  │   └─ drains ViewerCommands (Close → exit)    │
//  │   ↓                                          │
//  │  RedrawRequested = frame step                │
//  │   └─ Session::frame(), request next redraw   │
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **No queue**: each callback produces and dispatches exactly one event
//   (or one per typed or IME-committed character) before Winit delivers
//   the next one
// - **Lazy window**: created in `resumed()` as Winit requires
// - **Drop order**: the session (UI state) is dropped before the window
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{Ime, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::viewer::{Session, SessionControl};
use input_processor::InputProcessor;

//=== WindowConfig ========================================================

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "fast-depth-densification".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

//=== PlatformError =======================================================

/// Event loop errors.
///
/// These are fatal - if the event loop can't be created, the viewer
/// cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=== Platform ============================================================

/// Window owner and input normalizer.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(config, session)`
/// 2. **Execution**: `platform.run()` blocks in the Winit event loop
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: close button or Escape → `exit()` → `run()` returns
///
/// This type is NOT Send/Sync - it must remain on the main thread.
pub(crate) struct Platform {
    config: WindowConfig,

    /// Converts Winit events to InputEvents.
    input_processor: InputProcessor,

    /// Dispatcher and consumers. Declared before `window` so it drops first.
    session: Session,

    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub(crate) fn new(config: WindowConfig, session: Session) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            config,
            input_processor: InputProcessor::new(),
            session,
            window: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if event loop creation or execution fails.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Normalizes one window event into zero or more InputEvents.
    fn translate(&mut self, event: &WindowEvent) -> Vec<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                vec![self.input_processor.process_mouse_move(position.x as f32, position.y as f32)]
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                let mut events = Vec::with_capacity(2);

                match self.input_processor.process_key(
                    key_event.physical_key,
                    key_event.state,
                    key_event.repeat,
                ) {
                    Some(event) => events.push(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }

                if let Some(text) = &key_event.text {
                    events.extend(self.input_processor.process_text(text));
                }
                events
            }

            WindowEvent::MouseInput { state, button, .. } => {
                vec![self.input_processor.process_mouse_button(*button, *state)]
            }

            WindowEvent::Ime(Ime::Commit(text)) => self.input_processor.process_text(text),

            _ => Vec::new(),
        }
    }

    /// Dispatches `events` in order; returns `Exit` as soon as a consumer
    /// requests it.
    fn dispatch_all(&mut self, events: &[InputEvent]) -> SessionControl {
        for event in events {
            if self.session.handle_event(event) == SessionControl::Exit {
                return SessionControl::Exit;
            }
        }
        SessionControl::Continue
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.set_ime_allowed(true);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state);
                self.input_processor.update_modifiers(state.state());
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: every callback of this cycle is dispatched
                self.session.frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                let events = self.translate(&event);
                if self.dispatch_all(&events) == SessionControl::Exit {
                    info!(target: "platform", "Close requested by input handler");
                    event_loop.exit();
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
