//! Countdown timer with score-based time bonuses

use crate::consts::*;

/// Outcome of advancing the clock by one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockUpdate {
    /// Bonuses granted this frame (one per threshold crossed)
    pub bonuses: u32,
    /// Timer hit zero this frame
    pub expired: bool,
}

/// Seconds remaining plus the next score threshold that earns extra time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameClock {
    pub time_left: f32,
    pub next_bonus: u32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            time_left: GAME_DURATION,
            next_bonus: BONUS_STEP,
        }
    }
}

impl GameClock {
    /// Consume `dt` seconds and award bonuses for the current score.
    ///
    /// Every threshold at or below `score` is paid out in the same call, so a
    /// score that jumps past several thresholds in one frame earns all of them.
    pub fn advance(&mut self, dt: f32, score: u32) -> ClockUpdate {
        let mut update = ClockUpdate::default();

        self.time_left -= dt;

        while score >= self.next_bonus {
            self.time_left += BONUS_SECONDS;
            self.next_bonus += BONUS_STEP;
            update.bonuses += 1;
        }

        if self.time_left <= 0.0 {
            self.time_left = 0.0;
            update.expired = true;
        }

        update
    }

    /// Whole seconds shown on the HUD
    pub fn display_seconds(&self) -> u32 {
        self.time_left.max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown() {
        let mut clock = GameClock::default();
        let update = clock.advance(1.5, 0);
        assert_eq!(update, ClockUpdate::default());
        assert!((clock.time_left - 58.5).abs() < 1e-4);
        assert_eq!(clock.display_seconds(), 58);
    }

    #[test]
    fn test_double_threshold_crossing() {
        let mut clock = GameClock::default();
        clock.advance(0.0, 29);
        assert_eq!(clock.next_bonus, 30);

        let update = clock.advance(0.0, 61);
        assert_eq!(update.bonuses, 2);
        assert_eq!(clock.next_bonus, 90);
        assert!((clock.time_left - (GAME_DURATION + 2.0 * BONUS_SECONDS)).abs() < 1e-4);
    }

    #[test]
    fn test_exact_threshold_counts() {
        let mut clock = GameClock::default();
        let update = clock.advance(0.0, 30);
        assert_eq!(update.bonuses, 1);
        assert_eq!(clock.next_bonus, 60);
    }

    #[test]
    fn test_expiry_clamps_to_zero() {
        let mut clock = GameClock {
            time_left: 0.01,
            next_bonus: BONUS_STEP,
        };
        let update = clock.advance(0.5, 0);
        assert!(update.expired);
        assert_eq!(clock.time_left, 0.0);
        assert_eq!(clock.display_seconds(), 0);
    }

    #[test]
    fn test_bonus_rescues_expiring_clock() {
        let mut clock = GameClock {
            time_left: 0.01,
            next_bonus: BONUS_STEP,
        };
        let update = clock.advance(0.5, 30);
        assert_eq!(update.bonuses, 1);
        assert!(!update.expired);
    }
}
