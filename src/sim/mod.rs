//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod joystick;
pub mod physics;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod terrain;
pub mod tick;
pub mod timer;

pub use joystick::VirtualJoystick;
pub use rect::Rect;
pub use state::{
    Cloud, Creature, EntityKind, Flash, FlashKind, GameEvent, GamePhase, GameState, Orca, Shark,
};
pub use terrain::Terrain;
pub use tick::{Directions, TickInput, tick};
pub use timer::GameClock;
