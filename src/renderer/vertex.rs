//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Textured, tinted 2D vertex
///
/// Positions are viewport pixels until `RenderState::render` maps them to
/// NDC. Flat shapes point `uv` at the atlas' white texel.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, uv: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv,
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB, as the classic palette was authored)
pub mod colors {
    use crate::renderer::Color;

    pub const AIR: Color = Color::rgb(135, 206, 235);
    pub const WATER: Color = Color::rgb(0, 105, 148);
    pub const TERRAIN: Color = Color::rgb(60, 40, 30);
    pub const CLOUD: Color = Color::rgb(255, 255, 255);
    pub const SCORE_TEXT: Color = Color::rgb(0, 0, 0);
    pub const TIME_TEXT: Color = Color::rgb(200, 0, 0);
    pub const FPS_TEXT: Color = Color::rgb(20, 20, 60);
    pub const JOYSTICK_BASE: Color = Color::rgba(180, 180, 180, 90);
    pub const JOYSTICK_STICK: Color = Color::rgba(120, 120, 120, 180);
    pub const FLASH: Color = Color::rgb(255, 255, 255);
    pub const GAME_OVER_SHADE: Color = Color::rgba(0, 0, 0, 150);
    pub const GAME_OVER_TEXT: Color = Color::rgb(255, 255, 255);
    pub const PROMPT_TEXT: Color = Color::rgb(255, 215, 0);
    pub const BUTTON: Color = Color::rgb(255, 140, 0);
    pub const BUTTON_TEXT: Color = Color::rgb(250, 250, 250);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_matches_struct() {
        let desc = Vertex::desc();
        assert_eq!(desc.array_stride as usize, std::mem::size_of::<Vertex>());
        assert_eq!(desc.attributes[1].offset, 8);
        assert_eq!(desc.attributes[2].offset, 16);
    }
}
