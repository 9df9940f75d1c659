//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; there is no
//! process-wide mutable state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::terrain::Terrain;
use super::timer::GameClock;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Timer ran out, waiting for restart or quit
    GameOver,
}

/// Kinds of creature sharing the ocean with the shark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Fish,
    Crab,
    Seagull,
    Orca,
}

impl EntityKind {
    /// Score change when the shark touches this creature
    pub fn points(self) -> i32 {
        match self {
            EntityKind::Fish => 1,
            EntityKind::Crab => -1,
            EntityKind::Seagull => 4,
            // Orca strikes reset the score instead
            EntityKind::Orca => 0,
        }
    }

    /// Collision box size (width, height)
    pub fn size(self) -> (i32, i32) {
        match self {
            EntityKind::Fish => FISH_SIZE,
            EntityKind::Crab => CRAB_SIZE,
            EntityKind::Seagull => SEAGULL_SIZE,
            EntityKind::Orca => ORCA_SIZE,
        }
    }
}

/// A scrolling creature (fish, crab or seagull)
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub id: u32,
    pub kind: EntityKind,
    pub rect: Rect,
    /// Horizontal velocity in pixels per frame
    pub vel_x: i32,
}

impl Creature {
    /// Create a creature of `kind` with its top-left corner at (`x`, `y`)
    pub fn new(id: u32, kind: EntityKind, x: i32, y: i32) -> Self {
        let (w, h) = kind.size();
        Self {
            id,
            kind,
            rect: Rect::new(x, y, w, h),
            vel_x: -CREATURE_SPEED,
        }
    }

    /// Fully past the left edge of the viewport
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0
    }
}

/// The orca predator (singleton)
#[derive(Debug, Clone, PartialEq)]
pub struct Orca {
    pub rect: Rect,
    /// +1 swims left-to-right, -1 right-to-left
    pub direction: i32,
    pub active: bool,
}

impl Default for Orca {
    fn default() -> Self {
        let (w, h) = ORCA_SIZE;
        Self {
            rect: Rect::new(-ORCA_OFFSCREEN, 400, w, h),
            direction: 1,
            active: false,
        }
    }
}

impl Orca {
    /// Has left the screen on the side it was heading toward
    pub fn has_exited(&self) -> bool {
        (self.direction > 0 && self.rect.left() > WIDTH)
            || (self.direction < 0 && self.rect.right() < 0)
    }
}

/// The player's shark
#[derive(Debug, Clone, PartialEq)]
pub struct Shark {
    pub rect: Rect,
    /// Vertical velocity (pixels per frame, positive = down)
    pub velocity_y: f32,
    /// Armed when the shark may leap out of the water
    pub can_jump: bool,
    /// Up-signal from the previous frame, for rising-edge detection
    pub prev_up: bool,
}

impl Default for Shark {
    fn default() -> Self {
        Self {
            rect: Rect::new(SHARK_START_X, SHARK_START_Y, SHARK_SIZE, SHARK_SIZE),
            velocity_y: 0.0,
            can_jump: true,
            prev_up: false,
        }
    }
}

impl Shark {
    /// Top edge is at or below the surface line
    pub fn in_water(&self) -> bool {
        self.rect.top() >= SURFACE_Y
    }

    /// Top edge is within the tolerance band around the surface line
    pub fn at_surface(&self) -> bool {
        (self.rect.top() - SURFACE_Y).abs() < SURFACE_TOLERANCE
    }
}

/// A decorative cloud drifting across the sky
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub rect: Rect,
    /// Sub-pixel x position; `rect.x` is its truncation
    pub x: f32,
    pub speed: f32,
}

impl Cloud {
    /// Random cloud somewhere in the upper quarter of the sky
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.random_range(0..=WIDTH);
        let y = rng.random_range(10..=HEIGHT / 4);
        let w = rng.random_range(80..=160);
        let h = rng.random_range(30..=60);
        Self {
            rect: Rect::new(x, y, w, h),
            x: x as f32,
            speed: rng.random_range(0.14..0.42),
        }
    }

    /// Drift left; wrap to the right edge at a new height once fully gone
    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.x -= self.speed;
        if self.x + (self.rect.w as f32) < 0.0 {
            self.x = WIDTH as f32;
            self.rect.y = rng.random_range(10..=HEIGHT / 4);
        }
        self.rect.x = self.x as i32;
    }
}

/// Visual flash kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// Orca strike: pulsing full-screen white
    Strike,
    /// Crab pinch: brief translucent white
    Pinch,
}

/// Active screen flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub ticks_left: u32,
}

impl Flash {
    pub fn strike() -> Self {
        Self {
            kind: FlashKind::Strike,
            ticks_left: STRIKE_FLASH_TICKS,
        }
    }

    pub fn pinch() -> Self {
        Self {
            kind: FlashKind::Pinch,
            ticks_left: PINCH_FLASH_TICKS,
        }
    }

    /// Overlay opacity for the current tick (0 = invisible)
    pub fn opacity(&self) -> f32 {
        match self.kind {
            // 4 ticks white, 4 ticks clear
            FlashKind::Strike => {
                if (self.ticks_left / 4) % 2 == 0 {
                    1.0
                } else {
                    0.0
                }
            }
            FlashKind::Pinch => 0.4,
        }
    }
}

/// Events emitted by a simulation tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Shark caught a fish or seagull
    Ate { kind: EntityKind, score: u32 },
    /// Shark bumped a crab
    Pinched { score: u32 },
    /// Orca hit the shark; score reset
    OrcaStrike { lost: u32 },
    /// Orca entered the screen
    OrcaSpawned { direction: i32 },
    /// Score crossed a bonus threshold
    TimeBonus { seconds: f32, next_threshold: u32 },
    /// Timer ran out
    GameOver { score: u32 },
    /// New round started from the game-over screen
    Restarted,
    /// Player chose to quit from the game-over screen
    QuitRequested,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    pub clock: GameClock,
    /// Frame counter gating spawns
    pub spawn_frame: u64,
    pub shark: Shark,
    pub terrain: Terrain,
    /// Fish, crabs and seagulls (ordered by id)
    pub creatures: Vec<Creature>,
    pub orca: Orca,
    pub clouds: Vec<Cloud>,
    pub flash: Option<Flash>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let terrain = Terrain::generate(&mut rng);
        let clouds = (0..CLOUD_COUNT).map(|_| Cloud::random(&mut rng)).collect();

        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            clock: GameClock::default(),
            spawn_frame: 0,
            shark: Shark::default(),
            terrain,
            creatures: Vec::new(),
            orca: Orca::default(),
            clouds,
            flash: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start a new round, keeping the RNG stream and the sky
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.clock = GameClock::default();
        self.spawn_frame = 0;
        self.shark = Shark::default();
        self.terrain = Terrain::generate(&mut self.rng);
        self.creatures.clear();
        self.orca = Orca::default();
        self.flash = None;
    }

    /// Apply a signed score change, flooring at zero
    pub fn add_points(&mut self, delta: i32) {
        self.score = self.score.saturating_add_signed(delta);
    }

    /// The playable area
    pub fn viewport() -> Rect {
        Rect::new(0, 0, WIDTH, HEIGHT)
    }

    /// Tap target that restarts the round from the game-over screen
    pub fn play_again_button() -> Rect {
        let (x, y, w, h) = PLAY_AGAIN_BUTTON;
        Rect::new(x, y, w, h)
    }
}
