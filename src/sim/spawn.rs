//! Scripted creature spawning
//!
//! Spawns are gated by the frame counter `GameState::spawn_frame`. The orca
//! check runs before the counter advances, so a fresh round opens with an orca
//! pass; fish, crabs and seagulls are tested after it advances.

use rand::Rng;

use super::state::{Creature, EntityKind, GameEvent, GameState, Orca};
use super::terrain::Terrain;
use crate::consts::*;

/// Upper water band, just below the surface
fn upper_band<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(SURFACE_Y + 10..=HEIGHT / 2 - 20)
}

/// Lower water band, above the deepest terrain
fn lower_band<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(HEIGHT / 2..=HEIGHT - 100)
}

/// Fish split evenly between the two water bands
pub fn fish_y<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if rng.random_bool(0.5) {
        lower_band(rng)
    } else {
        upper_band(rng)
    }
}

/// Crabs either sit on the floor at the spawn column or float in the upper band
pub fn crab_y<R: Rng + ?Sized>(rng: &mut R, terrain: &Terrain) -> i32 {
    if rng.random_bool(0.5) {
        terrain.last_height() - CRAB_SIZE.1
    } else {
        upper_band(rng)
    }
}

/// Seagulls fly above the surface
pub fn seagull_y<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.random_range(10..=SURFACE_Y - 50)
}

/// Send the orca across the screen from a random side
pub fn launch_orca<R: Rng + ?Sized>(orca: &mut Orca, rng: &mut R) {
    orca.active = true;
    orca.direction = if rng.random_bool(0.5) { 1 } else { -1 };
    orca.rect.x = if orca.direction > 0 {
        -ORCA_OFFSCREEN
    } else {
        WIDTH + ORCA_OFFSCREEN
    };
    orca.rect.y = if rng.random_bool(0.5) {
        rng.random_range(SURFACE_Y + 10..=HEIGHT / 2 - 60)
    } else {
        lower_band(rng)
    };
}

fn spawn_creature(state: &mut GameState, kind: EntityKind, y: i32) {
    let id = state.next_entity_id();
    state.creatures.push(Creature::new(id, kind, SPAWN_X, y));
}

/// Run this frame's spawn rules
pub fn run_spawner(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.orca.active && state.spawn_frame % ORCA_INTERVAL == 0 {
        launch_orca(&mut state.orca, &mut state.rng);
        log::debug!(
            "Orca launched heading {}",
            if state.orca.direction > 0 { "right" } else { "left" }
        );
        events.push(GameEvent::OrcaSpawned {
            direction: state.orca.direction,
        });
    }

    state.spawn_frame += 1;
    let t = state.spawn_frame;

    if t % FISH_INTERVAL == 0 {
        let y = fish_y(&mut state.rng);
        spawn_creature(state, EntityKind::Fish, y);
    }
    if t % CRAB_INTERVAL == 0 {
        let y = crab_y(&mut state.rng, &state.terrain);
        spawn_creature(state, EntityKind::Crab, y);
    }
    if t % SEAGULL_INTERVAL == 0 {
        let y = seagull_y(&mut state.rng);
        spawn_creature(state, EntityKind::Seagull, y);
    }
}
