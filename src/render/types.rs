//! GPU-Layout der Kurven-Vertices.

use crate::shared::{CurveVertex, VertexTopology};

impl CurveVertex {
    /// Beschreibt das Vertex-Layout für wgpu (Position xyz + Farbe rgb).
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CurveVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

impl VertexTopology {
    /// Passende wgpu-Primitive für den Draw-Call.
    pub fn primitive_topology(self) -> wgpu::PrimitiveTopology {
        match self {
            VertexTopology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
            VertexTopology::LineList => wgpu::PrimitiveTopology::LineList,
        }
    }
}
