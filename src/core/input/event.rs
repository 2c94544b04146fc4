//=========================================================================
// Input Event Types
//
// Defines the normalized representation of window-system input.
//
// Every window-system callback (character typed, key, mouse button,
// cursor motion) becomes exactly one `InputEvent`. The event is a flat,
// copyable record: a discriminant, a cursor snapshot, an action code,
// the modifier state, and two integer payload slots whose meaning
// depends on the discriminant.
//
// Payload slots:
// ```text
//   kind     value[0]             value[1]
//   ───────  ───────────────────  ────────
//   Char     unicode codepoint    0
//   Key      KeyCode::code()      0
//   Mouse    MouseButton::id()    0
//   Cursor   0                    0
// ```
//
// Integer codes follow the GLFW numbering (printable keys use their
// ASCII value, `Escape == 256`, left mouse button == 0) so that
// consumers written against that convention keep working.
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, thumb buttons and anything
/// else the platform reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

impl MouseButton {
    /// Stable integer id stored in the event payload.
    pub const fn id(self) -> i32 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Middle => 2,
            Self::Other => 3,
        }
    }

    /// Inverse of [`MouseButton::id`]. Unknown ids map to `Other`.
    pub const fn from_id(id: i32) -> Self {
        match id {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Middle,
            _ => Self::Other,
        }
    }
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Characters arrive separately as [`InputKind::Char`] events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    ShiftLeft,
    ShiftRight,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//--- Code Tables ---------------------------------------------------------

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0, KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4,
    KeyCode::Digit5, KeyCode::Digit6, KeyCode::Digit7, KeyCode::Digit8, KeyCode::Digit9,
];

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA, KeyCode::KeyB, KeyCode::KeyC, KeyCode::KeyD, KeyCode::KeyE,
    KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyH, KeyCode::KeyI, KeyCode::KeyJ,
    KeyCode::KeyK, KeyCode::KeyL, KeyCode::KeyM, KeyCode::KeyN, KeyCode::KeyO,
    KeyCode::KeyP, KeyCode::KeyQ, KeyCode::KeyR, KeyCode::KeyS, KeyCode::KeyT,
    KeyCode::KeyU, KeyCode::KeyV, KeyCode::KeyW, KeyCode::KeyX, KeyCode::KeyY,
    KeyCode::KeyZ,
];

const SPECIAL: [(KeyCode, i32); 12] = [
    (KeyCode::Space, 32),
    (KeyCode::Escape, 256),
    (KeyCode::Enter, 257),
    (KeyCode::Tab, 258),
    (KeyCode::Backspace, 259),
    (KeyCode::Delete, 261),
    (KeyCode::ArrowRight, 262),
    (KeyCode::ArrowLeft, 263),
    (KeyCode::ArrowDown, 264),
    (KeyCode::ArrowUp, 265),
    (KeyCode::ShiftLeft, 340),
    (KeyCode::ShiftRight, 344),
];

impl KeyCode {
    /// Code reported for [`KeyCode::Unidentified`].
    pub const UNKNOWN_CODE: i32 = -1;

    /// Stable integer code stored in the event payload.
    pub fn code(self) -> i32 {
        if let Some(i) = DIGITS.iter().position(|&k| k == self) {
            return '0' as i32 + i as i32;
        }
        if let Some(i) = LETTERS.iter().position(|&k| k == self) {
            return 'A' as i32 + i as i32;
        }
        SPECIAL
            .iter()
            .find(|(k, _)| *k == self)
            .map(|&(_, code)| code)
            .unwrap_or(Self::UNKNOWN_CODE)
    }

    /// Inverse of [`KeyCode::code`]. Unknown codes map to `Unidentified`.
    pub fn from_code(code: i32) -> Self {
        match code {
            48..=57 => DIGITS[(code - 48) as usize],
            65..=90 => LETTERS[(code - 65) as usize],
            _ => SPECIAL
                .iter()
                .find(|&&(_, c)| c == code)
                .map(|&(k, _)| k)
                .unwrap_or(Self::Unidentified),
        }
    }
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// The system does not distinguish between left/right variants.
/// On macOS, Ctrl reflects Command and Alt reflects Option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    /// Returns `true` if no modifier is held.
    pub const fn is_empty(self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

//=== ButtonAction ========================================================

/// Press/release state of a key or mouse button.
///
/// Stored in [`InputEvent::action`] as its raw integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Release,
    Press,
    /// Key held long enough for the OS to auto-repeat.
    Repeat,
}

impl ButtonAction {
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Release => 0,
            Self::Press => 1,
            Self::Repeat => 2,
        }
    }

    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Release),
            1 => Some(Self::Press),
            2 => Some(Self::Repeat),
            _ => None,
        }
    }
}

//=== InputKind ===========================================================

/// Event discriminant: which window-system callback produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Char,
    Key,
    Mouse,
    Cursor,
}

//=== CursorPos ===========================================================

/// Cursor position in window pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPos {
    pub x: f32,
    pub y: f32,
}

impl CursorPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

//=== InputEvent ==========================================================

/// Normalized record produced from one window-system callback.
///
/// Built fresh per callback, immutable afterwards, handed to every
/// registered consumer by reference, then dropped.
///
/// # Normalization Rules
///
/// - `cursor`: pointer location at callback time. For `Cursor` events it
///   is the reported position itself.
/// - `action`: raw [`ButtonAction`] for `Key` and `Mouse`, `0` otherwise.
/// - `value[0]`: codepoint / key code / button id (see module table).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    kind: InputKind,
    cursor: CursorPos,
    action: i32,
    mods: Modifiers,
    value: [i32; 2],
}

impl InputEvent {
    //--- Construction -----------------------------------------------------

    fn new(kind: InputKind, cursor: CursorPos, action: i32, mods: Modifiers) -> Self {
        Self {
            kind,
            cursor,
            action,
            mods,
            value: [0; 2],
        }
    }

    /// Character input. `action` is always `0`.
    pub fn char_typed(cursor: CursorPos, codepoint: char, mods: Modifiers) -> Self {
        let mut event = Self::new(InputKind::Char, cursor, 0, mods);
        event.value[0] = codepoint as i32;
        event
    }

    /// Key press, release or repeat. `key` is a raw key code.
    pub fn key(cursor: CursorPos, key: i32, action: ButtonAction, mods: Modifiers) -> Self {
        let mut event = Self::new(InputKind::Key, cursor, action.as_raw(), mods);
        event.value[0] = key;
        event
    }

    /// Mouse button press or release. `button` is a raw button id.
    pub fn mouse_button(
        cursor: CursorPos,
        button: i32,
        action: ButtonAction,
        mods: Modifiers,
    ) -> Self {
        let mut event = Self::new(InputKind::Mouse, cursor, action.as_raw(), mods);
        event.value[0] = button;
        event
    }

    /// Cursor motion. The reported position becomes the cursor snapshot.
    pub fn cursor_moved(position: CursorPos, mods: Modifiers) -> Self {
        Self::new(InputKind::Cursor, position, 0, mods)
    }

    //--- Raw Fields -------------------------------------------------------

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn cursor(&self) -> CursorPos {
        self.cursor
    }

    /// Raw action code (`0` for `Char` and `Cursor`).
    pub fn action(&self) -> i32 {
        self.action
    }

    pub fn mods(&self) -> Modifiers {
        self.mods
    }

    /// Integer payload slots.
    pub fn value(&self) -> [i32; 2] {
        self.value
    }

    //--- Typed Views ------------------------------------------------------

    /// Decoded action for `Key` and `Mouse` events.
    pub fn button_action(&self) -> Option<ButtonAction> {
        match self.kind {
            InputKind::Key | InputKind::Mouse => ButtonAction::from_raw(self.action),
            _ => None,
        }
    }

    /// Returns `true` for `Key`/`Mouse` press events.
    pub fn is_press(&self) -> bool {
        self.button_action() == Some(ButtonAction::Press)
    }

    /// Key carried by a `Key` event.
    pub fn key_code(&self) -> Option<KeyCode> {
        match self.kind {
            InputKind::Key => Some(KeyCode::from_code(self.value[0])),
            _ => None,
        }
    }

    /// Button carried by a `Mouse` event.
    pub fn mouse(&self) -> Option<MouseButton> {
        match self.kind {
            InputKind::Mouse => Some(MouseButton::from_id(self.value[0])),
            _ => None,
        }
    }

    /// Character carried by a `Char` event.
    pub fn codepoint(&self) -> Option<char> {
        match self.kind {
            InputKind::Char => char::from_u32(self.value[0] as u32),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
