//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use std::ops::BitOr;

use super::collision::{resolve_creatures, update_orca};
use super::physics::update_shark;
use super::spawn::run_spawner;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::BONUS_SECONDS;

/// Held movement signals for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    pub fn any(self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Keyboard and joystick combine per direction
impl BitOr for Directions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            up: self.up || rhs.up,
            down: self.down || rhs.down,
            left: self.left || rhs.left,
            right: self.right || rhs.right,
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement (arrow keys OR virtual joystick)
    pub dirs: Directions,
    /// Play again (Y on the game-over screen)
    pub confirm: bool,
    /// Quit (N on the game-over screen)
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::GameOver => game_over_tick(state, input, &mut events),
        GamePhase::Playing => playing_tick(state, input, dt, &mut events),
    }

    events
}

/// Only Y and N are honored once the clock has run out
fn game_over_tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.confirm {
        state.restart();
        log::info!("New round started");
        events.push(GameEvent::Restarted);
    } else if input.quit {
        log::info!("Quit requested with final score {}", state.score);
        events.push(GameEvent::QuitRequested);
    }
}

fn playing_tick(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    // Age the flash first so one started this tick keeps its full length
    state.flash = state.flash.and_then(|mut flash| {
        flash.ticks_left = flash.ticks_left.saturating_sub(1);
        (flash.ticks_left > 0).then_some(flash)
    });

    update_shark(state, input.dirs);

    state.terrain.advance(&mut state.rng);

    run_spawner(state, events);

    resolve_creatures(state, events);
    update_orca(state, events);

    for cloud in &mut state.clouds {
        cloud.drift(&mut state.rng);
    }

    let update = state.clock.advance(dt, state.score);
    if update.bonuses > 0 {
        let seconds = update.bonuses as f32 * BONUS_SECONDS;
        log::info!(
            "Time bonus +{seconds}s at score {}, next at {}",
            state.score,
            state.clock.next_bonus
        );
        events.push(GameEvent::TimeBonus {
            seconds,
            next_threshold: state.clock.next_bonus,
        });
    }

    if update.expired {
        state.phase = GamePhase::GameOver;
        // Flashes only age while playing
        state.flash = None;
        log::info!("Game over, final score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Creature, EntityKind, FlashKind};
    use crate::sim::terrain::Terrain;
    use proptest::prelude::*;

    /// Flat deep floor and no orca for a while, so a test creature has the
    /// screen to itself
    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.terrain = Terrain::from_heights(vec![TERRAIN_MAX; WIDTH as usize]);
        state.spawn_frame = 1;
        state
    }

    fn expire(state: &mut GameState) -> Vec<GameEvent> {
        state.clock.time_left = SIM_DT / 2.0;
        tick(state, &TickInput::default(), SIM_DT)
    }

    #[test]
    fn test_fish_scrolls_and_leaves() {
        let mut state = quiet_state(42);
        let id = state.next_entity_id();
        state
            .creatures
            .push(Creature::new(id, EntityKind::Fish, 820, 200));

        tick(&mut state, &TickInput::default(), SIM_DT);
        let fish = state.creatures.iter().find(|c| c.id == id);
        assert_eq!(fish.map(|f| f.rect.x), Some(812));

        // 820 - 8 * 107 = -36: right edge still on screen
        for _ in 1..107 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        let fish = state.creatures.iter().find(|c| c.id == id);
        assert_eq!(fish.map(|f| f.rect.x), Some(-36));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.creatures.iter().all(|c| c.id != id));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_orca_strike_end_to_end() {
        let mut state = quiet_state(7);
        state.score = 25;
        state.orca.active = true;
        state.orca.direction = 1;
        state.orca.rect.x = state.shark.rect.x - ORCA_SIZE.0;
        state.orca.rect.y = state.shark.rect.y;

        let events = tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.score, 0);
        assert!(!state.orca.active);
        assert!(events.contains(&GameEvent::OrcaStrike { lost: 25 }));
        assert_eq!(state.flash.map(|f| f.kind), Some(FlashKind::Strike));
    }

    #[test]
    fn test_flash_expires() {
        let mut state = quiet_state(8);
        state.flash = Some(crate::sim::state::Flash::pinch());
        for _ in 0..PINCH_FLASH_TICKS {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.flash.is_none());
    }

    #[test]
    fn test_bonus_event() {
        let mut state = quiet_state(9);
        state.score = 61;
        let events = tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(events.contains(&GameEvent::TimeBonus {
            seconds: 2.0 * BONUS_SECONDS,
            next_threshold: 90,
        }));
    }

    #[test]
    fn test_timer_expiry_enters_game_over() {
        let mut state = quiet_state(10);
        state.score = 5;
        let events = expire(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.clock.time_left, 0.0);
        assert!(events.contains(&GameEvent::GameOver { score: 5 }));
    }

    #[test]
    fn test_score_past_threshold_delays_expiry() {
        let mut state = quiet_state(14);
        state.score = 40;
        let events = expire(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.clock.time_left > BONUS_SECONDS - 1.0);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })));
    }

    #[test]
    fn test_game_over_clears_flash() {
        let mut state = quiet_state(15);
        state.flash = Some(crate::sim::state::Flash::strike());
        expire(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.flash.is_none());
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = quiet_state(11);
        expire(&mut state);
        let shark = state.shark.clone();
        let terrain = state.terrain.clone();
        let frame = state.spawn_frame;

        let input = TickInput {
            dirs: Directions {
                up: true,
                left: true,
                ..Default::default()
            },
            ..Default::default()
        };
        for _ in 0..30 {
            assert!(tick(&mut state, &input, SIM_DT).is_empty());
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.shark, shark);
        assert_eq!(state.terrain, terrain);
        assert_eq!(state.spawn_frame, frame);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut state = quiet_state(12);
        for _ in 0..200 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        state.shark.rect.x = 500;
        state.shark.velocity_y = 3.0;
        expire(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        // Set after expiry so no time bonus keeps the round alive
        state.score = 40;

        let input = TickInput {
            confirm: true,
            ..Default::default()
        };
        let events = tick(&mut state, &input, SIM_DT);

        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.clock.time_left, GAME_DURATION);
        assert_eq!(state.clock.next_bonus, BONUS_STEP);
        assert_eq!(state.spawn_frame, 0);
        assert!(state.creatures.is_empty());
        assert!(!state.orca.active);
        assert_eq!(state.shark.rect.x, SHARK_START_X);
        assert_eq!(state.shark.rect.y, SHARK_START_Y);
        assert_eq!(state.shark.velocity_y, 0.0);
        assert!(state.shark.can_jump);
    }

    #[test]
    fn test_quit_only_from_game_over() {
        let mut state = quiet_state(13);
        let quit = TickInput {
            quit: true,
            ..Default::default()
        };
        assert!(!tick(&mut state, &quit, SIM_DT).contains(&GameEvent::QuitRequested));

        expire(&mut state);
        assert_eq!(tick(&mut state, &quit, SIM_DT), vec![GameEvent::QuitRequested]);
    }

    #[test]
    fn test_directions_combine() {
        let keys = Directions {
            up: true,
            ..Default::default()
        };
        let stick = Directions {
            right: true,
            ..Default::default()
        };
        let both = keys | stick;
        assert!(both.up && both.right && !both.down && !both.left);
        assert!(!Directions::default().any());
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        for i in 0..600u32 {
            let input = TickInput {
                dirs: Directions {
                    up: i % 40 < 3,
                    down: i % 90 > 70,
                    left: i % 50 < 10,
                    right: i % 30 < 12,
                },
                ..Default::default()
            };
            let e1 = tick(&mut state1, &input, SIM_DT);
            let e2 = tick(&mut state2, &input, SIM_DT);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.shark, state2.shark);
        assert_eq!(state1.terrain, state2.terrain);
        assert_eq!(state1.creatures, state2.creatures);
        assert_eq!(state1.orca, state2.orca);
    }

    proptest! {
        #[test]
        fn prop_shark_stays_in_viewport(
            seed in any::<u64>(),
            inputs in prop::collection::vec(any::<(bool, bool, bool, bool)>(), 1..300),
        ) {
            let mut state = GameState::new(seed);
            let viewport = GameState::viewport();
            for (up, down, left, right) in inputs {
                let input = TickInput {
                    dirs: Directions { up, down, left, right },
                    ..Default::default()
                };
                tick(&mut state, &input, SIM_DT);

                let r = state.shark.rect;
                prop_assert!(r.left() >= viewport.left() && r.right() <= viewport.right());
                prop_assert!(r.top() >= viewport.top() && r.bottom() <= viewport.bottom());
                prop_assert!(state.shark.velocity_y >= -MAX_RISE_SPEED);
                prop_assert!(state.shark.velocity_y <= MAX_FALL_SPEED);
            }
        }
    }
}
