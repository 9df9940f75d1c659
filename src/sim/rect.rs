//! Integer axis-aligned rectangles
//!
//! Every gameplay body (shark, creatures, orca, clouds) is a pixel-aligned
//! rectangle with its origin at the top-left corner, y pointing down.

/// Axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move so that the bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// True if the interiors overlap (shared edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Shift the rectangle so it lies inside `bounds` on both axes.
    ///
    /// A rectangle larger than the bounds is pinned to the bounds' origin.
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.x = self.x.min(bounds.right() - self.w).max(bounds.x);
        self.y = self.y.min(bounds.bottom() - self.h).max(bounds.y);
    }

    /// True if the point lies inside (left/top edges inclusive)
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x as f32 && x < self.right() as f32 && y >= self.y as f32 && y < self.bottom() as f32
    }

    /// Horizontal pixel columns covered by the rectangle
    pub fn columns(&self) -> std::ops::Range<i32> {
        self.left()..self.right()
    }
}
