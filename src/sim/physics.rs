//! Shark movement: swimming, jumping, gravity and floor contact
//!
//! Vertical motion runs on a float velocity that is truncated to whole pixels
//! when applied; horizontal motion is a fixed step per frame.

use super::rect::Rect;
use super::state::{GameState, Shark};
use super::terrain::Terrain;
use super::tick::Directions;
use crate::consts::*;

/// Apply the up/down signals. Returns true if a jump impulse fired.
///
/// Zones are evaluated from the position before this frame's movement.
pub fn apply_vertical_input(shark: &mut Shark, dirs: Directions) -> bool {
    let in_water = shark.in_water();
    let at_surface = shark.at_surface();
    let mut jumped = false;

    if dirs.up && !shark.prev_up {
        // Rising edge only: a held key never re-triggers
        if in_water && at_surface && shark.can_jump {
            shark.velocity_y = -JUMP_FORCE;
            shark.can_jump = false;
            jumped = true;
        }
    } else if dirs.up {
        if in_water && !at_surface {
            shark.velocity_y -= SWIM_FORCE;
        }
    } else if at_surface {
        shark.can_jump = true;
    }
    shark.prev_up = dirs.up;

    if dirs.down && in_water {
        shark.velocity_y += SWIM_FORCE;
    }

    jumped
}

/// Gravity in air; reduced gravity plus drag in water
pub fn apply_forces(shark: &mut Shark) {
    if shark.in_water() {
        shark.velocity_y += GRAVITY_AIR * WATER_GRAVITY_FACTOR;
        shark.velocity_y *= 1.0 - DRAG_WATER;
    } else {
        shark.velocity_y += GRAVITY_AIR;
    }
    shark.velocity_y = shark.velocity_y.clamp(-MAX_RISE_SPEED, MAX_FALL_SPEED);
}

/// Move by the velocity truncated to whole pixels, then stop at the screen floor
pub fn integrate(shark: &mut Shark) {
    shark.rect.y += shark.velocity_y as i32;

    if shark.rect.bottom() > HEIGHT {
        shark.rect.set_bottom(HEIGHT);
        shark.velocity_y = 0.0;
    }
}

/// Any floor column under `rect` at or above its bottom edge
pub fn touches_terrain(rect: &Rect, terrain: &Terrain) -> bool {
    rect.columns()
        .filter_map(|x| terrain.height_at(x))
        .any(|h| h <= rect.bottom())
}

/// Push the shark up out of the floor. Returns the number of pixels moved.
///
/// Equivalent to nudging one pixel at a time until clear of every column,
/// capped at `MAX_TERRAIN_NUDGE` pixels per frame.
pub fn resolve_terrain(shark: &mut Shark, terrain: &Terrain) -> i32 {
    let Some(floor) = shark
        .rect
        .columns()
        .filter_map(|x| terrain.height_at(x))
        .min()
    else {
        return 0;
    };

    let overlap = shark.rect.bottom() - floor + 1;
    if overlap <= 0 {
        return 0;
    }

    let nudge = overlap.min(MAX_TERRAIN_NUDGE);
    shark.rect.y -= nudge;
    shark.velocity_y = 0.0;
    shark.can_jump = true;
    nudge
}

/// Fixed-step left/right movement
pub fn apply_horizontal_input(shark: &mut Shark, dirs: Directions) {
    if dirs.left {
        shark.rect.x -= SHARK_SPEED;
    }
    if dirs.right {
        shark.rect.x += SHARK_SPEED;
    }
}

/// Advance the shark by one frame
pub fn update_shark(state: &mut GameState, dirs: Directions) -> bool {
    let shark = &mut state.shark;

    let jumped = apply_vertical_input(shark, dirs);
    apply_forces(shark);
    integrate(shark);
    resolve_terrain(shark, &state.terrain);
    apply_horizontal_input(shark, dirs);
    shark.rect.clamp_within(&GameState::viewport());

    jumped
}
