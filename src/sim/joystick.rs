//! On-screen virtual joystick for pointer/touch control
//!
//! The stick is grabbed by pressing inside its base, follows the pointer
//! (clamped to the base radius) while held, and snaps back on release. Its
//! offset from the center maps to one of four directions by 90° sectors.

use std::f32::consts::FRAC_PI_4;

use glam::Vec2;

use super::tick::Directions;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq)]
pub struct VirtualJoystick {
    pub center: Vec2,
    /// Current stick position (equals `center` when idle)
    pub stick: Vec2,
    pub active: bool,
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        let center = Vec2::new(JOYSTICK_CENTER.0, JOYSTICK_CENTER.1);
        Self {
            center,
            stick: center,
            active: false,
        }
    }
}

impl VirtualJoystick {
    /// Feed this frame's pointer state (`Some(position)` while pressed)
    pub fn update(&mut self, pointer: Option<Vec2>) {
        let Some(pos) = pointer else {
            self.release();
            return;
        };

        if !self.active && pos.distance(self.center) < JOYSTICK_BASE_RADIUS {
            self.active = true;
        }
        if self.active {
            self.stick = self.center + (pos - self.center).clamp_length_max(JOYSTICK_BASE_RADIUS);
        }
    }

    pub fn release(&mut self) {
        self.active = false;
        self.stick = self.center;
    }

    /// Stick offset from center, y pointing down
    pub fn offset(&self) -> Vec2 {
        self.stick - self.center
    }

    /// Directions implied by the current stick position
    pub fn directions(&self) -> Directions {
        if !self.active {
            return Directions::default();
        }
        directions_for_offset(self.offset())
    }
}

/// Map a screen-space offset (y down) to a direction set.
///
/// Offsets shorter than the dead zone produce nothing. Exact diagonals fall
/// on a sector boundary and also produce nothing.
pub fn directions_for_offset(offset: Vec2) -> Directions {
    if offset.length() < JOYSTICK_STICK_RADIUS * JOYSTICK_DEAD_ZONE {
        return Directions::default();
    }

    let angle = (-offset.y).atan2(offset.x);
    const THREE_QUARTERS: f32 = 3.0 * FRAC_PI_4;

    Directions {
        right: -FRAC_PI_4 < angle && angle < FRAC_PI_4,
        up: FRAC_PI_4 < angle && angle < THREE_QUARTERS,
        left: angle > THREE_QUARTERS || angle < -THREE_QUARTERS,
        down: -THREE_QUARTERS < angle && angle < -FRAC_PI_4,
    }
}
