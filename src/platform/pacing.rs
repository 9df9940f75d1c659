//! Frame pacing and fixed-step scheduling
//!
//! The world advances in `SIM_DT` steps, at most `MAX_SUBSTEPS` per frame.
//! The countdown instead consumes the measured frame time: whatever wall time
//! passed since the last stepped frame is split evenly over this frame's steps,
//! so a stall that drops world steps still drains the clock.

use std::time::{Duration, Instant};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Target time between rendered frames (60 Hz)
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Longest frame delta accepted; anything beyond is treated as a pause
pub const MAX_FRAME_DT: f32 = 0.1;

/// What to run for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    /// Number of simulation ticks
    pub steps: u32,
    /// Clock time handed to each tick
    pub dt: f32,
}

/// Accumulator for the fixed-timestep loop
#[derive(Debug, Clone, Default)]
pub struct FixedStepper {
    /// World time not yet simulated
    accumulator: f32,
    /// Wall time not yet charged to the countdown
    unspent: f32,
}

impl FixedStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for `frame_dt` seconds of wall time and plan this frame's ticks
    pub fn plan(&mut self, frame_dt: f32) -> StepPlan {
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += frame_dt;
        self.unspent += frame_dt;

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }

        // Drop world time we could not catch up on
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        if steps == 0 {
            return StepPlan { steps: 0, dt: 0.0 };
        }

        let dt = self.unspent / steps as f32;
        self.unspent = 0.0;
        StepPlan { steps, dt }
    }
}

/// When the next frame is due, given when the last one ran
pub fn next_frame_deadline(last_frame: Option<Instant>, now: Instant) -> Instant {
    match last_frame {
        Some(last) => last + FRAME_INTERVAL,
        None => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_frames_wait_for_a_full_step() {
        let mut stepper = FixedStepper::new();
        let plan = stepper.plan(SIM_DT * 0.6);
        assert_eq!(plan.steps, 0);

        // The carried time is charged once a step runs
        let plan = stepper.plan(SIM_DT * 0.6);
        assert_eq!(plan.steps, 1);
        assert!((plan.dt - SIM_DT * 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_stall_drops_steps_but_not_clock_time() {
        let mut stepper = FixedStepper::new();
        let plan = stepper.plan(MAX_FRAME_DT);
        assert_eq!(plan.steps, MAX_SUBSTEPS);
        let charged = plan.dt * plan.steps as f32;
        assert!((charged - MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn test_huge_delta_is_clamped() {
        let mut stepper = FixedStepper::new();
        let plan = stepper.plan(5.0);
        assert!((plan.dt * plan.steps as f32 - MAX_FRAME_DT).abs() < 1e-6);
        assert_eq!(stepper.plan(-1.0).steps, 0);
    }

    #[test]
    fn test_clock_tracks_wall_time() {
        let mut stepper = FixedStepper::new();
        let mut wall = 0.0;
        let mut charged = 0.0;
        // Alternate smooth frames with stalls
        for i in 0..600 {
            let frame_dt = if i % 50 == 0 { 0.09 } else { 1.0 / 75.0 };
            wall += frame_dt;
            let plan = stepper.plan(frame_dt);
            charged += plan.dt * plan.steps as f32;
        }
        // Only the time waiting for the next step is outstanding
        assert!(wall - charged > -1e-3);
        assert!(wall - charged < SIM_DT + 1e-3);
    }

    #[test]
    fn test_frame_deadline() {
        let now = Instant::now();
        assert_eq!(next_frame_deadline(None, now), now);
        assert_eq!(next_frame_deadline(Some(now), now), now + FRAME_INTERVAL);
    }
}
