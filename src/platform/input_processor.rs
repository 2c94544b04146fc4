//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit window events into normalized InputEvents.
//
// Architecture:
//   Winit WindowEvent → InputProcessor → InputEvent → InputDispatcher
//
// Stateful tracking: caches the modifier state from ModifiersChanged and
// the last reported cursor position from CursorMoved. Winit has no
// "query cursor now" call, so the cached position is the cursor snapshot
// for key, char and mouse button events. Cursor events carry their own
// reported position.
//
// Unmapped keys (F13-F24, media keys) are filtered (returns None); any
// text they produce is still delivered as Char events.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{ButtonAction, CursorPos, InputEvent, KeyCode, Modifiers, MouseButton};

//=== InputProcessor ======================================================

/// Normalizes Winit events with cached modifier and cursor state.
pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
    cursor: CursorPos,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
            cursor: CursorPos::default(),
        }
    }

    //--- Cached State -----------------------------------------------------

    /// Updates cached modifier state (applied to subsequent events).
    pub(crate) fn update_modifiers(&mut self, modifiers_state: ModifiersState) {
        self.current_modifiers = Modifiers::from(modifiers_state);
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    /// Last reported cursor position.
    #[cfg(test)]
    pub(crate) fn cursor(&self) -> CursorPos {
        self.cursor
    }

    //--- Event Processing -------------------------------------------------

    /// Key press/release/repeat (filters unmapped keys).
    pub(crate) fn process_key(
        &self,
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        let key_code = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(key_code, KeyCode::Unidentified) {
            return None;
        }

        let action = match state {
            ElementState::Pressed if repeat => ButtonAction::Repeat,
            ElementState::Pressed => ButtonAction::Press,
            ElementState::Released => ButtonAction::Release,
        };

        Some(InputEvent::key(self.cursor, key_code.code(), action, self.current_modifiers))
    }

    /// One Char event per printable character of `text`.
    ///
    /// Control characters (Enter, Backspace, Escape, ...) are dropped; they
    /// are already reported as Key events.
    pub(crate) fn process_text(&self, text: &str) -> Vec<InputEvent> {
        text.chars()
            .filter(|c| !c.is_control())
            .map(|c| InputEvent::char_typed(self.cursor, c, self.current_modifiers))
            .collect()
    }

    /// Mouse button press or release at the cached cursor position.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let action = match state {
            ElementState::Pressed => ButtonAction::Press,
            ElementState::Released => ButtonAction::Release,
        };

        InputEvent::mouse_button(
            self.cursor,
            MouseButton::from(button).id(),
            action,
            self.current_modifiers,
        )
    }

    /// Cursor motion (screen space). Updates the cached position.
    pub(crate) fn process_mouse_move(&mut self, x: f32, y: f32) -> InputEvent {
        self.cursor = CursorPos::new(x, y);
        InputEvent::cursor_moved(self.cursor, self.current_modifiers)
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit ModifiersState to viewer Modifiers.
///
/// Winit normalizes platform keys (macOS Cmd → Ctrl, Option → Alt).
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

/// Converts Winit physical key codes to viewer key codes.
///
/// Maps A-Z, 0-9, arrows, shifts and common special keys. Everything
/// else returns `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Digits -------------------------------------------------------

            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Letters ------------------------------------------------------

            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,
            ShiftLeft => KeyCode::ShiftLeft,
            ShiftRight => KeyCode::ShiftRight,

            _ => KeyCode::Unidentified,
        }
    }
}

/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
