//=========================================================================
// GUI Input State
//=========================================================================
//
// Input side of the immediate-mode UI layer.
//
// Architecture:
//   InputEvent → handle_input() → held buttons/keys, cursor, text queue
//   begin_frame() clears per-frame deltas; the UI reads state while
//   building widgets and drains typed text with take_chars().
//
// The UI is the first consumer in dispatch order, so its state reflects
// an event before the camera reacts to it.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Imports ====================================================

use crate::core::input::{ButtonAction, CursorPos, InputEvent, InputHandler, InputKind, KeyCode, Modifiers, MouseButton};

//=== GuiInput ============================================================

/// Persistent and per-frame input state consumed by the UI.
#[derive(Debug, Default)]
pub struct GuiInput {
    //--- Persistent State ------------------------------------------------
    cursor: CursorPos,
    mods: Modifiers,
    buttons_down: HashSet<MouseButton>,
    keys_down: HashSet<KeyCode>,

    //--- Frame Deltas (reset by begin_frame) -----------------------------
    buttons_clicked: HashSet<MouseButton>,
    typed: Vec<char>,
}

impl GuiInput {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears per-frame deltas. Held state survives.
    pub fn begin_frame(&mut self) {
        self.buttons_clicked.clear();
        self.typed.clear();
    }

    /// Drains characters typed since the last call.
    pub fn take_chars(&mut self) -> Vec<char> {
        std::mem::take(&mut self.typed)
    }

    //--- Queries ----------------------------------------------------------

    pub fn cursor(&self) -> CursorPos {
        self.cursor
    }

    pub fn mods(&self) -> Modifiers {
        self.mods
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Pressed since the last `begin_frame()`.
    pub fn was_clicked(&self, button: MouseButton) -> bool {
        self.buttons_clicked.contains(&button)
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }
}

impl InputHandler for GuiInput {
    fn handle_input(&mut self, event: &InputEvent) {
        self.cursor = event.cursor();
        self.mods = event.mods();

        match event.kind() {
            InputKind::Char => {
                if let Some(c) = event.codepoint() {
                    self.typed.push(c);
                }
            }
            InputKind::Key => {
                let Some(key) = event.key_code() else { return };
                match event.button_action() {
                    Some(ButtonAction::Press | ButtonAction::Repeat) => {
                        self.keys_down.insert(key);
                    }
                    Some(ButtonAction::Release) => {
                        self.keys_down.remove(&key);
                    }
                    None => {}
                }
            }
            InputKind::Mouse => {
                let Some(button) = event.mouse() else { return };
                match event.button_action() {
                    Some(ButtonAction::Press) => {
                        if self.buttons_down.insert(button) {
                            self.buttons_clicked.insert(button);
                        }
                    }
                    Some(ButtonAction::Release) => {
                        self.buttons_down.remove(&button);
                    }
                    _ => {}
                }
            }
            InputKind::Cursor => {}
        }
    }
}

//=== FrameStats ==========================================================

/// Smoothed frame timing shown in the overlay ("x ms/frame (y FPS)").
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    framerate: f32,
    frames: u64,
}

impl FrameStats {
    /// Weight of the newest sample in the moving average.
    const SMOOTHING: f32 = 0.1;

    pub fn new() -> Self {
        Self { framerate: 0.0, frames: 0 }
    }

    /// Records one frame of `timestep` seconds. Non-positive steps are ignored.
    pub fn record(&mut self, timestep: f32) {
        if timestep <= 0.0 {
            return;
        }

        let instant = 1.0 / timestep;
        self.framerate = if self.frames == 0 {
            instant
        } else {
            self.framerate + (instant - self.framerate) * Self::SMOOTHING
        };
        self.frames += 1;
    }

    pub fn framerate(&self) -> f32 {
        self.framerate
    }

    pub fn frame_time_ms(&self) -> f32 {
        if self.framerate > 0.0 {
            1000.0 / self.framerate
        } else {
            0.0
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FrameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} ms/frame ({:.1} FPS)", self.frame_time_ms(), self.framerate)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> CursorPos {
        CursorPos::new(x, y)
    }

    fn mouse(button: MouseButton, action: ButtonAction) -> InputEvent {
        InputEvent::mouse_button(at(5.0, 6.0), button.id(), action, Modifiers::NONE)
    }

    //=====================================================================
    // GuiInput Tests
    //=====================================================================

    #[test]
    fn tracks_cursor_from_every_event() {
        let mut gui = GuiInput::new();
        gui.handle_input(&InputEvent::cursor_moved(at(10.0, 20.0), Modifiers::NONE));
        assert_eq!(gui.cursor(), at(10.0, 20.0));

        gui.handle_input(&InputEvent::char_typed(at(11.0, 21.0), 'x', Modifiers::SHIFT));
        assert_eq!(gui.cursor(), at(11.0, 21.0));
        assert_eq!(gui.mods(), Modifiers::SHIFT);
    }

    #[test]
    fn click_is_reported_once_per_frame() {
        let mut gui = GuiInput::new();
        gui.handle_input(&mouse(MouseButton::Left, ButtonAction::Press));

        assert!(gui.is_button_down(MouseButton::Left));
        assert!(gui.was_clicked(MouseButton::Left));

        gui.begin_frame();
        assert!(gui.is_button_down(MouseButton::Left), "Held state survives frame");
        assert!(!gui.was_clicked(MouseButton::Left));

        gui.handle_input(&mouse(MouseButton::Left, ButtonAction::Release));
        assert!(!gui.is_button_down(MouseButton::Left));
    }

    #[test]
    fn typed_characters_are_queued_in_order() {
        let mut gui = GuiInput::new();
        for c in ['h', 'i', '!'] {
            gui.handle_input(&InputEvent::char_typed(at(0.0, 0.0), c, Modifiers::NONE));
        }

        assert_eq!(gui.take_chars(), vec!['h', 'i', '!']);
        assert!(gui.take_chars().is_empty());
    }

    #[test]
    fn key_repeat_keeps_key_down() {
        let mut gui = GuiInput::new();
        let code = KeyCode::Backspace.code();

        gui.handle_input(&InputEvent::key(at(0.0, 0.0), code, ButtonAction::Press, Modifiers::NONE));
        gui.handle_input(&InputEvent::key(at(0.0, 0.0), code, ButtonAction::Repeat, Modifiers::NONE));
        assert!(gui.is_key_down(KeyCode::Backspace));

        gui.handle_input(&InputEvent::key(at(0.0, 0.0), code, ButtonAction::Release, Modifiers::NONE));
        assert!(!gui.is_key_down(KeyCode::Backspace));
    }

    //=====================================================================
    // FrameStats Tests
    //=====================================================================

    #[test]
    fn first_frame_sets_framerate() {
        let mut stats = FrameStats::new();
        stats.record(0.02);
        assert!((stats.framerate() - 50.0).abs() < 1e-3);
        assert!((stats.frame_time_ms() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn framerate_is_smoothed() {
        let mut stats = FrameStats::new();
        stats.record(0.01); // 100 FPS
        stats.record(0.02); // 50 FPS sample

        let fps = stats.framerate();
        assert!(fps < 100.0 && fps > 50.0, "got {}", fps);
        assert_eq!(stats.frames(), 2);
    }

    #[test]
    fn zero_timestep_is_ignored() {
        let mut stats = FrameStats::new();
        stats.record(0.0);
        assert_eq!(stats.frames(), 0);
        assert_eq!(stats.frame_time_ms(), 0.0);
    }

    #[test]
    fn display_matches_overlay_format() {
        let mut stats = FrameStats::new();
        stats.record(0.016);
        assert_eq!(stats.to_string(), "16.000 ms/frame (62.5 FPS)");
    }
}
