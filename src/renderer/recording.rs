//! Test double that records canvas calls

use glam::{IVec2, Vec2};

use super::{Canvas, Color};
use crate::assets::Sprite;
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Rect(Rect, Color),
    Polygon(Vec<Vec2>, Color),
    Ellipse(Rect, Color),
    Blit {
        sprite: Sprite,
        at: IVec2,
        flip_x: bool,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn blits(&self, sprite: Sprite) -> Vec<(IVec2, bool)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Blit { sprite: s, at, flip_x } if *s == sprite => Some((*at, *flip_x)),
                _ => None,
            })
            .collect()
    }

    pub fn rects_with(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect(_, col) if *col == color))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Rect(rect, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(DrawCall::Polygon(points.to_vec(), color));
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Ellipse(rect, color));
    }

    fn blit(&mut self, sprite: Sprite, at: IVec2, flip_x: bool) {
        self.calls.push(DrawCall::Blit { sprite, at, flip_x });
    }
}
