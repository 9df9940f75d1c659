//! Shark Game - a side-scrolling ocean arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, spawning, physics, scoring, timer)
//! - `renderer`: Canvas abstraction, scene composition and the wgpu backend
//! - `assets`: Sprite loading and atlas packing
//! - `audio`: Synthesized sound effects
//! - `platform`: Native input handling (keyboard, mouse, touch)
//! - `settings`: User preferences loaded from JSON

pub mod assets;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, Sprite, SpriteAtlas};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one game frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Viewport dimensions (logical pixels)
    pub const WIDTH: i32 = 800;
    pub const HEIGHT: i32 = 600;
    /// Air/water boundary line
    pub const SURFACE_Y: i32 = HEIGHT / 3;

    /// Shark defaults
    pub const SHARK_START_X: i32 = 100;
    pub const SHARK_START_Y: i32 = HEIGHT / 2;
    pub const SHARK_SIZE: i32 = 83;
    pub const SHARK_SPEED: i32 = 7;

    /// Vertical forces
    pub const GRAVITY_AIR: f32 = 0.56;
    /// Fraction of air gravity that still applies underwater
    pub const WATER_GRAVITY_FACTOR: f32 = 0.15;
    pub const DRAG_WATER: f32 = 0.1;
    pub const SWIM_FORCE: f32 = 1.1;
    pub const JUMP_FORCE: f32 = 15.0;
    pub const MAX_FALL_SPEED: f32 = 10.0;
    pub const MAX_RISE_SPEED: f32 = 25.0;
    /// Distance from the surface line that still counts as "at surface"
    pub const SURFACE_TOLERANCE: i32 = 15;

    /// Terrain random walk
    pub const TERRAIN_START: i32 = HEIGHT - 100;
    pub const TERRAIN_MIN: i32 = HEIGHT / 2;
    pub const TERRAIN_MAX: i32 = HEIGHT - 40;
    pub const TERRAIN_STEP: i32 = 8;
    /// Columns scrolled per frame
    pub const TERRAIN_SCROLL: usize = 3;
    /// Upper bound on 1px terrain nudges per frame
    pub const MAX_TERRAIN_NUDGE: i32 = HEIGHT;

    /// Spawn intervals (frames)
    pub const FISH_INTERVAL: u64 = 45;
    pub const CRAB_INTERVAL: u64 = 150;
    pub const SEAGULL_INTERVAL: u64 = 200;
    pub const ORCA_INTERVAL: u64 = 180;
    /// Creatures enter just past the right edge
    pub const SPAWN_X: i32 = WIDTH + 20;
    pub const CREATURE_SPEED: i32 = 8;
    pub const ORCA_SPEED: i32 = 4;
    /// How far off-screen the orca starts
    pub const ORCA_OFFSCREEN: i32 = 200;

    /// Entity sizes
    pub const FISH_SIZE: (i32, i32) = (40, 40);
    pub const CRAB_SIZE: (i32, i32) = (40, 40);
    pub const SEAGULL_SIZE: (i32, i32) = (50, 40);
    pub const ORCA_SIZE: (i32, i32) = (160, 100);

    /// Timer
    pub const GAME_DURATION: f32 = 60.0;
    pub const BONUS_STEP: u32 = 30;
    pub const BONUS_SECONDS: f32 = 20.0;

    /// Virtual joystick (bottom-right corner)
    pub const JOYSTICK_CENTER: (f32, f32) = ((WIDTH - 100) as f32, (HEIGHT - 100) as f32);
    pub const JOYSTICK_STICK_RADIUS: f32 = 60.0;
    pub const JOYSTICK_BASE_RADIUS: f32 = 80.0;
    /// Fraction of the stick radius below which no direction registers
    pub const JOYSTICK_DEAD_ZONE: f32 = 0.3;

    /// "Play again" button on the game-over screen (x, y, w, h)
    pub const PLAY_AGAIN_BUTTON: (i32, i32, i32, i32) = (WIDTH / 2 - 110, HEIGHT / 2 + 80, 220, 56);

    /// Decorative clouds
    pub const CLOUD_COUNT: usize = 6;

    /// Flash durations (ticks)
    pub const STRIKE_FLASH_TICKS: u32 = 48;
    pub const PINCH_FLASH_TICKS: u32 = 5;
}
