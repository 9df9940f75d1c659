//! Keyboard, mouse and touch state collected from winit events
//!
//! Positions are stored in viewport pixels (800x600), so a scaled window and
//! HiDPI displays feed the joystick the same coordinates the scene draws in.

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase};
use winit::keyboard::KeyCode;

use crate::sim::{Directions, GameState, TickInput, VirtualJoystick};

/// Accumulated input between simulation ticks
#[derive(Debug, Clone)]
pub struct InputState {
    /// Arrow keys currently held
    held: Directions,
    /// Y pressed or play-again button tapped since the last tick
    confirm: bool,
    /// N pressed since the last tick
    quit: bool,
    /// Last cursor position in viewport pixels
    cursor: Vec2,
    mouse_down: bool,
    /// Finger that owns the pointer, if any
    touch: Option<(u64, Vec2)>,
    /// Physical pixels per viewport pixel
    scale: f32,
    pub joystick: VirtualJoystick,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl InputState {
    pub fn new(scale: f32) -> Self {
        Self {
            held: Directions::default(),
            confirm: false,
            quit: false,
            cursor: Vec2::ZERO,
            mouse_down: false,
            touch: None,
            scale: scale.max(f32::EPSILON),
            joystick: VirtualJoystick::default(),
        }
    }

    /// Update the physical-to-viewport ratio (window resize or DPI change)
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(f32::EPSILON);
    }

    fn to_viewport(&self, position: PhysicalPosition<f64>) -> Vec2 {
        Vec2::new(position.x as f32, position.y as f32) / self.scale
    }

    pub fn key(&mut self, code: KeyCode, state: ElementState) {
        let pressed = state.is_pressed();
        match code {
            KeyCode::ArrowUp => self.held.up = pressed,
            KeyCode::ArrowDown => self.held.down = pressed,
            KeyCode::ArrowLeft => self.held.left = pressed,
            KeyCode::ArrowRight => self.held.right = pressed,
            KeyCode::KeyY if pressed => self.confirm = true,
            KeyCode::KeyN if pressed => self.quit = true,
            _ => {}
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = self.to_viewport(position);
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.mouse_down = state.is_pressed();
            if self.mouse_down {
                self.press_at(self.cursor);
            }
        }
    }

    /// A fresh press on the play-again button confirms. The button is only
    /// drawn on the game-over screen and confirm is ignored elsewhere.
    fn press_at(&mut self, pos: Vec2) {
        if GameState::play_again_button().contains_point(pos.x, pos.y) {
            self.confirm = true;
        }
    }

    /// Only the first finger down drives the joystick
    pub fn touch(&mut self, id: u64, phase: TouchPhase, position: PhysicalPosition<f64>) {
        let pos = self.to_viewport(position);
        match phase {
            TouchPhase::Started => {
                self.press_at(pos);
                if self.touch.is_none() {
                    self.touch = Some((id, pos));
                }
            }
            TouchPhase::Moved => {
                if let Some((owner, p)) = self.touch.as_mut() {
                    if *owner == id {
                        *p = pos;
                    }
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.touch.is_some_and(|(owner, _)| owner == id) {
                    self.touch = None;
                }
            }
            _ => {}
        }
    }

    /// Window lost focus: nothing stays held
    pub fn release_all(&mut self) {
        self.held = Directions::default();
        self.mouse_down = false;
        self.touch = None;
        self.joystick.release();
    }

    /// Pressed pointer position, touch taking precedence over the mouse
    pub fn pointer(&self) -> Option<Vec2> {
        match self.touch {
            Some((_, pos)) => Some(pos),
            None if self.mouse_down => Some(self.cursor),
            None => None,
        }
    }

    /// Input for the next tick: keyboard and joystick directions combined
    pub fn tick_input(&mut self) -> TickInput {
        self.joystick.update(self.pointer());
        TickInput {
            dirs: self.held | self.joystick.directions(),
            confirm: self.confirm,
            quit: self.quit,
        }
    }

    /// Clear one-shot inputs after they have been processed
    pub fn clear_one_shots(&mut self) {
        self.confirm = false;
        self.quit = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x as f64, y as f64)
    }

    #[test]
    fn test_arrow_keys_held_until_released() {
        let mut input = InputState::default();
        input.key(KeyCode::ArrowUp, ElementState::Pressed);
        input.key(KeyCode::ArrowLeft, ElementState::Pressed);
        let dirs = input.tick_input().dirs;
        assert!(dirs.up && dirs.left && !dirs.down && !dirs.right);

        // Still held on the next tick
        assert!(input.tick_input().dirs.up);

        input.key(KeyCode::ArrowUp, ElementState::Released);
        assert!(!input.tick_input().dirs.up);
    }

    #[test]
    fn test_one_shots_clear_after_tick() {
        let mut input = InputState::default();
        input.key(KeyCode::KeyY, ElementState::Pressed);
        input.key(KeyCode::KeyY, ElementState::Released);
        assert!(input.tick_input().confirm);
        input.clear_one_shots();
        assert!(!input.tick_input().confirm);

        input.key(KeyCode::KeyN, ElementState::Pressed);
        let tick = input.tick_input();
        assert!(tick.quit && !tick.confirm);
    }

    #[test]
    fn test_mouse_drag_drives_joystick() {
        let mut input = InputState::new(2.0);
        let center = input.joystick.center;

        // Window is twice the viewport size
        input.cursor_moved(at(center.x * 2.0, center.y * 2.0));
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        input.cursor_moved(at((center.x + 50.0) * 2.0, center.y * 2.0));
        let dirs = input.tick_input().dirs;
        assert!(dirs.right && !dirs.left);

        input.mouse_button(MouseButton::Left, ElementState::Released);
        assert!(!input.tick_input().dirs.any());
        assert!(!input.joystick.active);
    }

    #[test]
    fn test_tap_on_play_again_confirms() {
        let button = GameState::play_again_button();
        let (cx, cy) = (
            (button.x + button.w / 2) as f32,
            (button.y + button.h / 2) as f32,
        );

        let mut input = InputState::default();
        input.touch(3, TouchPhase::Started, at(cx, cy));
        assert!(input.tick_input().confirm);
        input.clear_one_shots();
        input.touch(3, TouchPhase::Ended, at(cx, cy));
        assert!(!input.tick_input().confirm);

        // Mouse click on a scaled window
        let mut input = InputState::new(2.0);
        input.cursor_moved(at(cx * 2.0, cy * 2.0));
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        let tick = input.tick_input();
        assert!(tick.confirm && !tick.quit);
    }

    #[test]
    fn test_press_outside_button_does_not_confirm() {
        let button = GameState::play_again_button();
        let mut input = InputState::default();
        input.touch(1, TouchPhase::Started, at(button.x as f32 - 1.0, button.y as f32));
        input.cursor_moved(at(10.0, 10.0));
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(!input.tick_input().confirm);
    }

    #[test]
    fn test_keyboard_and_joystick_combine() {
        let mut input = InputState::default();
        let center = input.joystick.center;
        input.key(KeyCode::ArrowUp, ElementState::Pressed);
        input.touch(7, TouchPhase::Started, at(center.x, center.y));
        input.touch(7, TouchPhase::Moved, at(center.x - 60.0, center.y));
        let dirs = input.tick_input().dirs;
        assert!(dirs.up && dirs.left);
    }

    #[test]
    fn test_second_finger_ignored() {
        let mut input = InputState::default();
        let center = input.joystick.center;
        input.touch(1, TouchPhase::Started, at(center.x, center.y));
        input.touch(2, TouchPhase::Started, at(10.0, 10.0));
        input.touch(2, TouchPhase::Moved, at(20.0, 20.0));
        assert_eq!(input.pointer(), Some(center));

        input.touch(2, TouchPhase::Ended, at(20.0, 20.0));
        assert!(input.pointer().is_some());
        input.touch(1, TouchPhase::Ended, at(center.x, center.y));
        assert_eq!(input.pointer(), None);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::default();
        input.key(KeyCode::ArrowDown, ElementState::Pressed);
        input.mouse_button(MouseButton::Left, ElementState::Pressed);
        input.release_all();
        assert_eq!(input.pointer(), None);
        assert!(!input.tick_input().dirs.any());
    }
}
