//=========================================================================
// Camera Controller
//=========================================================================
//
// Input-driven fly camera state.
//
// Controls:
//   W/S      forward / back
//   A/D      left / right
//   Q/E      down / up
//   Shift    4x speed
//   RMB drag look around (yaw/pitch)
//
// Input events only change held-key and look state; the position moves
// in `update(timestep)`, once per frame. Projection and view matrices
// are left to the renderer.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Imports ====================================================

use crate::core::input::{ButtonAction, CursorPos, InputEvent, InputHandler, InputKind, KeyCode, MouseButton};

//=== CameraConfig ========================================================

/// Initial camera parameters.
///
/// # Default Values
///
/// - **yfov**: 1.33 rad
/// - **near_clip**: 0.001
/// - **far_clip**: 256.0
/// - **position**: (0, 2, 5)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub yfov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            yfov: 1.33,
            near_clip: 0.001,
            far_clip: 256.0,
            position: [0.0, 2.0, 5.0],
        }
    }
}

//=== CameraController ====================================================

pub struct CameraController {
    pub yfov: f32,
    pub near_clip: f32,
    pub far_clip: f32,
    pub position: [f32; 3],

    /// Rotation about +Y, radians. Zero looks down -Z.
    pub yaw: f32,

    /// Rotation about the camera's X axis, radians.
    pub pitch: f32,

    /// Units per second.
    pub move_speed: f32,

    /// Radians per pixel of cursor motion.
    pub look_sensitivity: f32,

    held: HashSet<KeyCode>,
    looking: bool,
    last_cursor: Option<CursorPos>,
}

impl CameraController {
    const PITCH_LIMIT: f32 = 1.5;
    const BOOST: f32 = 4.0;

    pub fn new(config: CameraConfig) -> Self {
        Self {
            yfov: config.yfov,
            near_clip: config.near_clip,
            far_clip: config.far_clip,
            position: config.position,
            yaw: 0.0,
            pitch: 0.0,
            move_speed: 2.0,
            look_sensitivity: 0.005,
            held: HashSet::new(),
            looking: false,
            last_cursor: None,
        }
    }

    /// Advances the camera by `timestep` seconds using the held keys.
    pub fn update(&mut self, timestep: f32) {
        let axis = |pos: KeyCode, neg: KeyCode| {
            (self.held.contains(&pos) as i32 - self.held.contains(&neg) as i32) as f32
        };

        let forward = axis(KeyCode::KeyW, KeyCode::KeyS);
        let strafe = axis(KeyCode::KeyD, KeyCode::KeyA);
        let lift = axis(KeyCode::KeyE, KeyCode::KeyQ);

        if forward == 0.0 && strafe == 0.0 && lift == 0.0 {
            return;
        }

        let boost = if self.held.contains(&KeyCode::ShiftLeft) || self.held.contains(&KeyCode::ShiftRight) {
            Self::BOOST
        } else {
            1.0
        };
        let step = self.move_speed * boost * timestep;
        let (sin, cos) = self.yaw.sin_cos();

        // forward = (-sin, 0, -cos), right = (cos, 0, -sin)
        self.position[0] += (-sin * forward + cos * strafe) * step;
        self.position[1] += lift * step;
        self.position[2] += (-cos * forward - sin * strafe) * step;
    }

    pub fn is_looking(&self) -> bool {
        self.looking
    }

    fn look(&mut self, to: CursorPos) {
        if let Some(from) = self.last_cursor {
            self.yaw -= (to.x - from.x) * self.look_sensitivity;
            self.pitch = (self.pitch - (to.y - from.y) * self.look_sensitivity)
                .clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        }
        self.last_cursor = Some(to);
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl InputHandler for CameraController {
    fn handle_input(&mut self, event: &InputEvent) {
        match event.kind() {
            InputKind::Key => {
                let Some(key) = event.key_code() else { return };
                match event.button_action() {
                    Some(ButtonAction::Press) => {
                        self.held.insert(key);
                    }
                    Some(ButtonAction::Release) => {
                        self.held.remove(&key);
                    }
                    _ => {}
                }
            }
            InputKind::Mouse if event.mouse() == Some(MouseButton::Right) => {
                self.looking = event.is_press();
                self.last_cursor = self.looking.then(|| event.cursor());
            }
            InputKind::Cursor if self.looking => self.look(event.cursor()),
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Modifiers;

    fn key(key: KeyCode, action: ButtonAction) -> InputEvent {
        InputEvent::key(CursorPos::default(), key.code(), action, Modifiers::NONE)
    }

    fn right_button(action: ButtonAction, x: f32, y: f32) -> InputEvent {
        InputEvent::mouse_button(CursorPos::new(x, y), MouseButton::Right.id(), action, Modifiers::NONE)
    }

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::cursor_moved(CursorPos::new(x, y), Modifiers::NONE)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn default_config_matches_viewer_defaults() {
        let cam = CameraController::default();
        assert_eq!(cam.yfov, 1.33);
        assert_eq!(cam.near_clip, 0.001);
        assert_eq!(cam.far_clip, 256.0);
        assert_eq!(cam.position, [0.0, 2.0, 5.0]);
    }

    #[test]
    fn forward_key_moves_along_negative_z() {
        let mut cam = CameraController::default();
        cam.handle_input(&key(KeyCode::KeyW, ButtonAction::Press));
        cam.update(0.5);

        assert!(approx(cam.position[0], 0.0));
        assert!(approx(cam.position[2], 5.0 - cam.move_speed * 0.5));
    }

    #[test]
    fn release_stops_motion() {
        let mut cam = CameraController::default();
        cam.handle_input(&key(KeyCode::KeyE, ButtonAction::Press));
        cam.handle_input(&key(KeyCode::KeyE, ButtonAction::Release));
        cam.update(1.0);

        assert_eq!(cam.position, [0.0, 2.0, 5.0]);
    }

    #[test]
    fn shift_boosts_speed() {
        let mut cam = CameraController::default();
        cam.handle_input(&key(KeyCode::ShiftLeft, ButtonAction::Press));
        cam.handle_input(&key(KeyCode::KeyE, ButtonAction::Press));
        cam.update(1.0);

        assert!(approx(cam.position[1], 2.0 + cam.move_speed * 4.0));
    }

    #[test]
    fn cursor_motion_without_drag_is_ignored() {
        let mut cam = CameraController::default();
        cam.handle_input(&cursor(0.0, 0.0));
        cam.handle_input(&cursor(100.0, 50.0));

        assert_eq!(cam.yaw, 0.0);
        assert_eq!(cam.pitch, 0.0);
    }

    #[test]
    fn right_drag_rotates() {
        let mut cam = CameraController::default();
        cam.handle_input(&right_button(ButtonAction::Press, 10.0, 10.0));
        assert!(cam.is_looking());

        cam.handle_input(&cursor(20.0, 10.0));
        assert!(approx(cam.yaw, -10.0 * cam.look_sensitivity));

        cam.handle_input(&right_button(ButtonAction::Release, 20.0, 10.0));
        cam.handle_input(&cursor(500.0, 500.0));
        assert!(!cam.is_looking());
        assert!(approx(cam.yaw, -10.0 * cam.look_sensitivity));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = CameraController::default();
        cam.handle_input(&right_button(ButtonAction::Press, 0.0, 0.0));
        cam.handle_input(&cursor(0.0, -100_000.0));

        assert_eq!(cam.pitch, CameraController::PITCH_LIMIT);
    }
}
