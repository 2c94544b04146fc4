//=========================================================================
// Viewer
//
// Main entry point and top-level loop object.
//
// Architecture:
// ```text
//     ViewerBuilder  ──build()──>  Viewer  ──run()──>  [Event Loop]
//         │                          │
//         ├─ with_title()            ├─ Session (dispatcher + consumers)
//         ├─ with_size()             └─ Platform (window, winit loop)
//         └─ with_camera()
// ```
//
// Everything runs on the calling thread. Per poll cycle each window
// callback is normalized and dispatched before the frame step runs.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::camera::{CameraConfig, CameraController};
use crate::core::gui::{FrameStats, GuiInput};
use crate::core::input::{CloseOnEscape, HandlerSlot, InputDispatcher, InputEvent, ViewerCommand};
use crate::platform::{Platform, PlatformError, WindowConfig};

//=== ViewerBuilder =======================================================

/// Builder for configuring and constructing a [`Viewer`].
///
/// # Default Values
///
/// - **Title**: "fast-depth-densification"
/// - **Size**: 1280×720 logical pixels
/// - **Camera**: [`CameraConfig::default`]
///
/// # Examples
///
/// ```no_run
/// use recon_viewer::ViewerBuilder;
///
/// ViewerBuilder::new()
///     .with_title("sparse model")
///     .with_size(1600, 900)
///     .build()
///     .run()
///     .expect("viewer failed");
/// ```
pub struct ViewerBuilder {
    window: WindowConfig,
    camera: CameraConfig,
}

impl ViewerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Sets the initial camera parameters.
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    /// Builds the viewer. No window is created until [`Viewer::run`].
    pub fn build(self) -> Viewer {
        info!(
            target: "viewer",
            "Building viewer \"{}\" ({}x{})",
            self.window.title,
            self.window.width,
            self.window.height
        );

        Viewer {
            window: self.window,
            session: Session::new(self.camera),
        }
    }
}

impl Default for ViewerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Viewer ==============================================================

/// Interactive viewer runtime. Create via [`ViewerBuilder`].
pub struct Viewer {
    window: WindowConfig,
    session: Session,
}

impl Viewer {
    /// Read access to the input consumers before running.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Opens the window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// terminates abnormally.
    pub fn run(self) -> Result<(), PlatformError> {
        info!(target: "viewer", "Starting viewer");

        Platform::new(self.window, self.session).run()?;

        info!(target: "viewer", "Viewer shutdown complete");
        Ok(())
    }
}

//=== SessionControl ======================================================

/// Loop control signal returned after each dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionControl {
    Continue,
    Exit,
}

//=== Session =============================================================

/// Dispatcher, consumers and per-frame state owned by the loop.
///
/// Consumers are registered once at construction:
/// Ui → [`GuiInput`], Camera → [`CameraController`], App → [`CloseOnEscape`].
pub struct Session {
    dispatcher: InputDispatcher,
    gui: Rc<RefCell<GuiInput>>,
    camera: Rc<RefCell<CameraController>>,
    commands: Receiver<ViewerCommand>,
    stats: FrameStats,
    last_frame: Option<Instant>,
}

impl Session {
    /// Frames between frame-statistics log lines.
    const STATS_INTERVAL: u64 = 600;

    pub(crate) fn new(camera: CameraConfig) -> Self {
        let (tx, rx) = unbounded();

        let gui = Rc::new(RefCell::new(GuiInput::new()));
        let camera = Rc::new(RefCell::new(CameraController::new(camera)));

        let mut dispatcher = InputDispatcher::new();
        dispatcher.register(HandlerSlot::Ui, gui.clone());
        dispatcher.register(HandlerSlot::Camera, camera.clone());
        dispatcher.register(HandlerSlot::App, Rc::new(RefCell::new(CloseOnEscape::new(tx))));

        Self {
            dispatcher,
            gui,
            camera,
            commands: rx,
            stats: FrameStats::new(),
            last_frame: None,
        }
    }

    //--- Input ------------------------------------------------------------

    /// Dispatches one event, then applies any commands it produced.
    pub(crate) fn handle_event(&mut self, event: &InputEvent) -> SessionControl {
        self.dispatcher.dispatch(event);
        self.drain_commands()
    }

    fn drain_commands(&mut self) -> SessionControl {
        let mut control = SessionControl::Continue;
        while let Ok(command) = self.commands.try_recv() {
            debug!(target: "viewer", "Command: {:?}", command);
            match command {
                ViewerCommand::Close => control = SessionControl::Exit,
            }
        }
        control
    }

    //--- Frame ------------------------------------------------------------

    /// Advances one frame: timestep, camera motion, UI frame reset.
    pub(crate) fn frame(&mut self) {
        let now = Instant::now();
        let timestep = self
            .last_frame
            .map(|t| now.duration_since(t).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        self.advance(timestep);
    }

    fn advance(&mut self, timestep: f32) {
        self.camera.borrow_mut().update(timestep);
        self.stats.record(timestep);
        self.gui.borrow_mut().begin_frame();

        if self.stats.frames() > 0 && self.stats.frames() % Self::STATS_INTERVAL == 0 {
            info!(target: "viewer", "{}", self.stats);
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn camera(&self) -> Rc<RefCell<CameraController>> {
        self.camera.clone()
    }

    pub fn gui(&self) -> Rc<RefCell<GuiInput>> {
        self.gui.clone()
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn events_dispatched(&self) -> u64 {
        self.dispatcher.dispatched_count()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{ButtonAction, CursorPos, KeyCode, Modifiers, MouseButton};

    fn key(key: KeyCode, action: ButtonAction) -> InputEvent {
        InputEvent::key(CursorPos::new(1.0, 1.0), key.code(), action, Modifiers::NONE)
    }

    //=====================================================================
    // ViewerBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = ViewerBuilder::new();
        assert_eq!(builder.window.title, "fast-depth-densification");
        assert_eq!((builder.window.width, builder.window.height), (1280, 720));
        assert_eq!(builder.camera, CameraConfig::default());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let camera = CameraConfig { yfov: 0.9, ..CameraConfig::default() };
        let viewer = ViewerBuilder::new()
            .with_title("points")
            .with_size(640, 480)
            .with_camera(camera)
            .build();

        assert_eq!(viewer.window.title, "points");
        assert_eq!((viewer.window.width, viewer.window.height), (640, 480));
        assert_eq!(viewer.session().camera().borrow().yfov, 0.9);
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_size_panics_on_zero() {
        ViewerBuilder::new().with_size(0, 480);
    }

    //=====================================================================
    // Session Tests
    //=====================================================================

    #[test]
    fn events_reach_ui_and_camera() {
        let mut session = Session::new(CameraConfig::default());

        let press = InputEvent::mouse_button(
            CursorPos::new(3.0, 4.0),
            MouseButton::Right.id(),
            ButtonAction::Press,
            Modifiers::NONE,
        );
        assert_eq!(session.handle_event(&press), SessionControl::Continue);

        assert!(session.gui().borrow().is_button_down(MouseButton::Right));
        assert!(session.camera().borrow().is_looking());
        assert_eq!(session.events_dispatched(), 1);
    }

    #[test]
    fn escape_press_exits() {
        let mut session = Session::new(CameraConfig::default());

        assert_eq!(
            session.handle_event(&key(KeyCode::KeyW, ButtonAction::Press)),
            SessionControl::Continue
        );
        assert_eq!(
            session.handle_event(&key(KeyCode::Escape, ButtonAction::Press)),
            SessionControl::Exit
        );
    }

    #[test]
    fn frame_moves_camera_and_resets_gui_deltas() {
        let mut session = Session::new(CameraConfig::default());
        session.handle_event(&key(KeyCode::KeyE, ButtonAction::Press));
        session.handle_event(&InputEvent::char_typed(CursorPos::default(), 'e', Modifiers::NONE));

        session.advance(0.5);

        let y = session.camera().borrow().position[1];
        assert!(y > 2.0, "camera should rise, got {}", y);
        assert!(session.gui().borrow_mut().take_chars().is_empty());
        assert_eq!(session.stats().frames(), 1);
    }

    #[test]
    fn first_frame_has_zero_timestep() {
        let mut session = Session::new(CameraConfig::default());
        session.handle_event(&key(KeyCode::KeyE, ButtonAction::Press));

        session.frame();

        assert_eq!(session.camera().borrow().position, [0.0, 2.0, 5.0]);
        assert_eq!(session.stats().frames(), 0);
    }
}
