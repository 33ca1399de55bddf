//! Vertex-Format der Kurven-Geometrie.
//!
//! Layer-neutral: `core` erzeugt die Vertices, `render` beschreibt ihr GPU-Layout.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Z-Koordinate der flachen Zeichenebene.
pub const CURVE_PLANE_Z: f32 = 0.5;

/// Vertex für Kurven-Linien: Position (x, y, z) + Farbe (r, g, b), 24 Byte Stride.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CurveVertex {
    /// Position im NDC-Raum, z = [`CURVE_PLANE_Z`]
    pub position: [f32; 3],
    /// RGB-Farbe des zugehörigen Kontrollpunkts
    pub color: [f32; 3],
}

impl CurveVertex {
    /// Erstellt einen Vertex auf der Zeichenebene.
    pub fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            position: [x, y, CURVE_PLANE_Z],
            color,
        }
    }

    /// x-Koordinate
    pub fn x(&self) -> f32 {
        self.position[0]
    }

    /// y-Koordinate
    pub fn y(&self) -> f32 {
        self.position[1]
    }
}

/// Anordnung der Vertices im Buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexTopology {
    /// Zusammenhängender Linienzug: jeder Vertex genau einmal
    #[default]
    LineStrip,
    /// Einzelne 2-Punkt-Segmente: innere Vertices doppelt (Legacy-Buffer)
    LineList,
}
