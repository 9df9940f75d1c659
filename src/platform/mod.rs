//! Platform layer
//!
//! Translates native window events (keyboard, mouse, touch) into the
//! simulation's per-tick input, and paces frames against the wall clock.

pub mod input;
pub mod pacing;

pub use input::InputState;
pub use pacing::{FixedStepper, StepPlan};
