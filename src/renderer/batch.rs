//! CPU-side vertex batch implementing [`Canvas`]

use glam::{IVec2, Vec2};

use super::shapes;
use super::vertex::Vertex;
use super::{Canvas, Color};
use crate::assets::{AtlasLayout, Sprite};
use crate::sim::Rect;

const ELLIPSE_SEGMENTS: u32 = 32;

/// One frame's worth of triangles over the sprite atlas
#[derive(Debug, Clone)]
pub struct VertexBatch {
    layout: AtlasLayout,
    vertices: Vec<Vertex>,
    clear_color: Color,
}

impl VertexBatch {
    pub fn new(layout: AtlasLayout) -> Self {
        Self {
            layout,
            vertices: Vec::with_capacity(4096),
            clear_color: Color::rgb(0, 0, 0),
        }
    }

    /// Drop the previous frame's geometry, keeping the allocation
    pub fn begin(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }
}

impl Canvas for VertexBatch {
    fn clear(&mut self, color: Color) {
        // Anything drawn earlier would be covered anyway
        self.vertices.clear();
        self.clear_color = color;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.w <= 0 || rect.h <= 0 || color.a == 0 {
            return;
        }
        let uv = self.layout.white_uv();
        let min = Vec2::new(rect.x as f32, rect.y as f32);
        let max = Vec2::new(rect.right() as f32, rect.bottom() as f32);
        self.vertices
            .extend(shapes::quad(min, max, uv, uv, color.to_linear()));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if color.a == 0 {
            return;
        }
        let uv = self.layout.white_uv();
        self.vertices
            .extend(shapes::polygon(points, uv, color.to_linear()));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        if rect.w <= 0 || rect.h <= 0 || color.a == 0 {
            return;
        }
        let radii = Vec2::new(rect.w as f32, rect.h as f32) / 2.0;
        let center = Vec2::new(rect.x as f32, rect.y as f32) + radii;
        let uv = self.layout.white_uv();
        self.vertices.extend(shapes::ellipse(
            center,
            radii,
            uv,
            color.to_linear(),
            ELLIPSE_SEGMENTS,
        ));
    }

    fn blit(&mut self, sprite: Sprite, at: IVec2, flip_x: bool) {
        let (w, h) = sprite.size();
        let min = at.as_vec2();
        let max = min + Vec2::new(w as f32, h as f32);

        let (mut uv_min, mut uv_max) = self.layout.uv_rect(sprite);
        if flip_x {
            std::mem::swap(&mut uv_min[0], &mut uv_max[0]);
        }
        self.vertices
            .extend(shapes::quad(min, max, uv_min, uv_max, [1.0; 4]));
    }
}
