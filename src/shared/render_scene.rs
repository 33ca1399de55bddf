//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::{CurveVertex, VertexTopology};

/// Read-only Daten für einen Render-Frame.
///
/// Enthält nur eigene Daten (kein Borrow auf die Session), damit ein
/// separater Render-Thread einen Snapshot übernehmen kann.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Vertices der Hilfslinien, eine Liste pro Linie
    pub guides: Vec<Vec<CurveVertex>>,
    /// Vertices der editierbaren Kurve
    pub curve: Vec<CurveVertex>,
    /// Anordnung aller Vertex-Listen dieser Szene
    pub topology: VertexTopology,
    /// Index des aktuell gezogenen Kontrollpunkts
    pub selected_point: Option<usize>,
}

impl RenderScene {
    /// Kurven-Vertices als Byte-Slice für den GPU-Upload.
    pub fn curve_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.curve)
    }

    /// Anzahl der zu zeichnenden Kurven-Vertices.
    pub fn curve_vertex_count(&self) -> u32 {
        self.curve.len() as u32
    }
}
