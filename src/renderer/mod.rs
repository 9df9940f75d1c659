//! Rendering module
//!
//! The scene is described against the [`Canvas`] trait. The GPU path records
//! every primitive into a [`VertexBatch`] (one textured triangle list over the
//! sprite atlas) and [`RenderState`] uploads and presents it with wgpu.

pub mod batch;
pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

#[cfg(test)]
mod recording;

use glam::{IVec2, Vec2};

use crate::assets::Sprite;
use crate::sim::Rect;

pub use batch::VertexBatch;
pub use pipeline::RenderState;
pub use scene::{SceneOptions, draw_frame};
pub use vertex::{Vertex, colors};

/// 8-bit sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha scaled by `opacity` (0..=1)
    pub fn faded(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Linear RGB plus alpha, for an sRGB render target
    pub fn to_linear(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a as f32 / 255.0,
        ]
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A 2D drawing surface in viewport pixels (origin top-left, y down)
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Filled simple polygon, points in order
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    /// Ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Draw a sprite at its native size with its top-left at `at`
    fn blit(&mut self, sprite: Sprite, at: IVec2, flip_x: bool);
}
