//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Two triangles covering the axis-aligned box `min..max`, with texture
/// coordinates spanning `uv_min..uv_max`
pub fn quad(min: Vec2, max: Vec2, uv_min: [f32; 2], uv_max: [f32; 2], color: [f32; 4]) -> [Vertex; 6] {
    let tl = Vertex::new(min.x, min.y, uv_min, color);
    let tr = Vertex::new(max.x, min.y, [uv_max[0], uv_min[1]], color);
    let bl = Vertex::new(min.x, max.y, [uv_min[0], uv_max[1]], color);
    let br = Vertex::new(max.x, max.y, uv_max, color);
    [tl, tr, bl, bl, tr, br]
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, uv: [f32; 2], color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, uv, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            uv,
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            uv,
            color,
        ));
    }

    vertices
}

/// Triangle fan from the first point (convex polygons only)
pub fn convex_fan(points: &[Vec2], uv: [f32; 2], color: [f32; 4]) -> Vec<Vertex> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut vertices = Vec::with_capacity(rest.len().saturating_sub(1) * 3);
    for pair in rest.windows(2) {
        vertices.push(Vertex::new(first.x, first.y, uv, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, uv, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, uv, color));
    }
    vertices
}

/// If `points` is an x-monotone profile closed by two corners on a common
/// baseline (the last two points), return the profile from the final corner
/// through every point to the other corner, plus the baseline y.
fn skyline_profile(points: &[Vec2]) -> Option<(Vec<Vec2>, f32)> {
    let n = points.len();
    if n < 4 {
        return None;
    }

    let mut profile = Vec::with_capacity(n);
    profile.push(points[n - 1]);
    profile.extend_from_slice(&points[..n - 1]);

    let base = points[n - 1].y;
    if points[n - 2].y != base {
        return None;
    }
    let monotone = profile.windows(2).all(|w| w[0].x <= w[1].x);
    let above = profile.iter().all(|p| p.y <= base);
    (monotone && above).then_some((profile, base))
}

/// Vertical strips under an x-monotone profile, down to its baseline
fn skyline_strips(profile: &[Vec2], base: f32, uv: [f32; 2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(profile.len() * 6);
    for w in profile.windows(2) {
        let (a, b) = (w[0], w[1]);
        if b.x == a.x {
            continue;
        }
        vertices.push(Vertex::new(a.x, a.y, uv, color));
        vertices.push(Vertex::new(b.x, b.y, uv, color));
        vertices.push(Vertex::new(b.x, base, uv, color));

        vertices.push(Vertex::new(a.x, a.y, uv, color));
        vertices.push(Vertex::new(b.x, base, uv, color));
        vertices.push(Vertex::new(a.x, base, uv, color));
    }
    vertices
}

/// Triangulate a filled polygon.
///
/// Terrain-like outlines (a height profile closed along a baseline) may be
/// concave and are split into vertical strips; anything else is fanned and
/// must be convex.
pub fn polygon(points: &[Vec2], uv: [f32; 2], color: [f32; 4]) -> Vec<Vertex> {
    match skyline_profile(points) {
        Some((profile, base)) => skyline_strips(&profile, base, uv, color),
        None => convex_fan(points, uv, color),
    }
}
