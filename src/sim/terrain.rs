//! Scrolling ocean floor
//!
//! The floor is a heightmap with one entry per viewport column, produced by a
//! bounded random walk. Each frame the leftmost columns scroll away and the
//! walk continues from the last retained column, so the splice is seamless.

use rand::Rng;

use crate::consts::*;

/// Per-column floor heights (y of the floor surface, larger = deeper)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    heights: Vec<i32>,
}

impl Terrain {
    /// Generate a fresh floor spanning the viewport width
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::generate_with_width(WIDTH as usize, rng)
    }

    /// Generate a floor with an explicit column count
    pub fn generate_with_width<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Self {
        let mut last = TERRAIN_START;
        let heights = (0..width)
            .map(|_| {
                last = walk_step(last, rng);
                last
            })
            .collect();
        Self { heights }
    }

    /// Scroll left by `TERRAIN_SCROLL` columns, extending the walk on the right
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let scroll = TERRAIN_SCROLL.min(self.heights.len());
        if scroll == 0 {
            return;
        }
        self.heights.drain(..scroll);
        let mut last = self.heights.last().copied().unwrap_or(TERRAIN_START);
        for _ in 0..scroll {
            last = walk_step(last, rng);
            self.heights.push(last);
        }
    }

    /// Build a floor from explicit heights
    #[cfg(test)]
    pub(crate) fn from_heights(heights: Vec<i32>) -> Self {
        Self { heights }
    }

    /// All column heights, left to right
    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    /// Height of column `x`, if it exists
    pub fn height_at(&self, x: i32) -> Option<i32> {
        usize::try_from(x).ok().and_then(|i| self.heights.get(i).copied())
    }

    /// Height of the rightmost column (where creatures spawn)
    pub fn last_height(&self) -> i32 {
        self.heights.last().copied().unwrap_or(TERRAIN_START)
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

/// One bounded random-walk step
fn walk_step<R: Rng + ?Sized>(last: i32, rng: &mut R) -> i32 {
    let change = rng.random_range(-TERRAIN_STEP..=TERRAIN_STEP);
    (last + change).clamp(TERRAIN_MIN, TERRAIN_MAX)
}
