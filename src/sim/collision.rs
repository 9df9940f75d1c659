//! Collision detection and scoring
//!
//! Creatures scroll left and are tested against the shark with strict AABB
//! overlap. The orca is handled separately since a hit resets the round's
//! score instead of adjusting it.

use super::rect::Rect;
use super::state::{Creature, EntityKind, Flash, FlashKind, GameEvent, GameState};
use crate::consts::*;

/// Move every creature, then rebuild the collection without the ones that
/// scrolled off or were caught. Returns the kinds caught, in id order.
pub fn advance_creatures(creatures: &mut Vec<Creature>, shark: &Rect) -> Vec<EntityKind> {
    let mut caught = Vec::new();

    *creatures = std::mem::take(creatures)
        .into_iter()
        .filter_map(|mut creature| {
            creature.rect.x += creature.vel_x;
            if creature.is_off_screen() {
                return None;
            }
            if creature.rect.intersects(shark) {
                caught.push(creature.kind);
                return None;
            }
            Some(creature)
        })
        .collect();

    caught
}

/// Apply the score change for touching a creature of `kind`
pub fn apply_catch(state: &mut GameState, kind: EntityKind, events: &mut Vec<GameEvent>) {
    state.add_points(kind.points());

    match kind {
        EntityKind::Crab => {
            // A strike flash outranks a pinch
            let striking = matches!(state.flash, Some(f) if f.kind == FlashKind::Strike);
            if !striking {
                state.flash = Some(Flash::pinch());
            }
            log::debug!("Crab pinch, score {}", state.score);
            events.push(GameEvent::Pinched { score: state.score });
        }
        EntityKind::Fish | EntityKind::Seagull => {
            log::debug!("Ate {:?}, score {}", kind, state.score);
            events.push(GameEvent::Ate {
                kind,
                score: state.score,
            });
        }
        EntityKind::Orca => {}
    }
}

/// Scroll creatures and score whatever the shark touched this frame
pub fn resolve_creatures(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let shark = state.shark.rect;
    for kind in advance_creatures(&mut state.creatures, &shark) {
        apply_catch(state, kind, events);
    }
}

/// Move the orca and resolve a strike on the shark
pub fn update_orca(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let orca = &mut state.orca;
    if !orca.active {
        return;
    }

    orca.rect.x += orca.direction * ORCA_SPEED;

    if orca.has_exited() {
        orca.active = false;
        return;
    }

    if orca.rect.intersects(&state.shark.rect) {
        orca.active = false;
        let lost = state.score;
        state.score = 0;
        state.shark.rect.y = HEIGHT / 2;
        state.flash = Some(Flash::strike());
        log::info!("Orca strike, lost {lost} points");
        events.push(GameEvent::OrcaStrike { lost });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn creature(state: &mut GameState, kind: EntityKind, x: i32, y: i32) -> u32 {
        let id = state.next_entity_id();
        state.creatures.push(Creature::new(id, kind, x, y));
        id
    }

    #[test]
    fn test_creatures_scroll_left() {
        let mut state = GameState::new(1);
        let id = creature(&mut state, EntityKind::Fish, SPAWN_X, 50);
        let mut events = Vec::new();
        resolve_creatures(&mut state, &mut events);
        assert_eq!(state.creatures[0].id, id);
        assert_eq!(state.creatures[0].rect.x, SPAWN_X - CREATURE_SPEED);
        assert!(events.is_empty());
    }

    #[test]
    fn test_off_screen_removed() {
        let mut state = GameState::new(1);
        // Right edge at 4, goes to -4 after moving
        creature(&mut state, EntityKind::Seagull, -46, 50);
        // Right edge exactly 0 after moving stays
        creature(&mut state, EntityKind::Fish, -32, 50);
        let mut events = Vec::new();
        resolve_creatures(&mut state, &mut events);
        assert_eq!(state.creatures.len(), 1);
        assert_eq!(state.creatures[0].kind, EntityKind::Fish);
        assert_eq!(state.creatures[0].rect.right(), 0);
    }

    #[test]
    fn test_scoring_by_kind() {
        let mut state = GameState::new(1);
        let shark = state.shark.rect;
        let x = shark.x + CREATURE_SPEED;
        creature(&mut state, EntityKind::Fish, x, shark.y);
        creature(&mut state, EntityKind::Seagull, x, shark.y + 10);
        creature(&mut state, EntityKind::Crab, x, shark.y + 20);

        let mut events = Vec::new();
        resolve_creatures(&mut state, &mut events);

        assert!(state.creatures.is_empty());
        assert_eq!(state.score, 4);
        assert_eq!(
            events,
            vec![
                GameEvent::Ate {
                    kind: EntityKind::Fish,
                    score: 1
                },
                GameEvent::Ate {
                    kind: EntityKind::Seagull,
                    score: 5
                },
                GameEvent::Pinched { score: 4 },
            ]
        );
        assert_eq!(state.flash.map(|f| f.kind), Some(FlashKind::Pinch));
    }

    #[test]
    fn test_crab_never_goes_negative() {
        let mut state = GameState::new(1);
        let shark = state.shark.rect;
        creature(&mut state, EntityKind::Crab, shark.x, shark.y);
        let mut events = Vec::new();
        resolve_creatures(&mut state, &mut events);
        assert_eq!(state.score, 0);
        assert_eq!(events, vec![GameEvent::Pinched { score: 0 }]);
    }

    #[test]
    fn test_touching_edge_is_not_a_catch() {
        let mut creatures = vec![Creature::new(1, EntityKind::Fish, 108, 0)];
        let shark = Rect::new(0, 0, 100, 100);
        let caught = advance_creatures(&mut creatures, &shark);
        assert!(caught.is_empty());
        assert_eq!(creatures[0].rect.left(), shark.right());
    }

    #[test]
    fn test_pinch_keeps_strike_flash() {
        let mut state = GameState::new(1);
        state.flash = Some(Flash::strike());
        let mut events = Vec::new();
        apply_catch(&mut state, EntityKind::Crab, &mut events);
        assert_eq!(state.flash.map(|f| f.kind), Some(FlashKind::Strike));
    }

    #[test]
    fn test_orca_strike_resets_score() {
        let mut state = GameState::new(1);
        state.score = 17;
        state.shark.rect.y = 450;
        state.orca.active = true;
        state.orca.direction = -1;
        state.orca.rect.x = state.shark.rect.right() + 2;
        state.orca.rect.y = 420;

        let mut events = Vec::new();
        update_orca(&mut state, &mut events);

        assert_eq!(state.score, 0);
        assert!(!state.orca.active);
        assert_eq!(state.shark.rect.y, HEIGHT / 2);
        assert_eq!(state.flash.map(|f| f.kind), Some(FlashKind::Strike));
        assert_eq!(events, vec![GameEvent::OrcaStrike { lost: 17 }]);
    }

    #[test]
    fn test_orca_exits_and_deactivates() {
        let mut state = GameState::new(1);
        state.orca.active = true;
        state.orca.direction = 1;
        state.orca.rect.x = WIDTH - 2;
        state.orca.rect.y = 10;

        let mut events = Vec::new();
        update_orca(&mut state, &mut events);
        assert!(!state.orca.active);
        assert!(events.is_empty());
    }

    #[test]
    fn test_inactive_orca_does_not_move() {
        let mut state = GameState::new(1);
        let before = state.orca.clone();
        update_orca(&mut state, &mut Vec::new());
        assert_eq!(state.orca, before);
    }

    proptest! {
        #[test]
        fn prop_score_matches_floored_sum(kinds in prop::collection::vec(0u8..3, 0..60)) {
            let mut state = GameState::new(3);
            let mut expected: i64 = 0;
            for k in kinds {
                let kind = match k {
                    0 => EntityKind::Fish,
                    1 => EntityKind::Crab,
                    _ => EntityKind::Seagull,
                };
                let before = state.score;
                apply_catch(&mut state, kind, &mut Vec::new());
                expected = (expected + kind.points() as i64).max(0);
                prop_assert_eq!(state.score as i64, expected);
                if kind != EntityKind::Crab {
                    prop_assert!(state.score > before);
                }
            }
        }
    }
}
