//! GPU-Vertrag für wgpu: Vertex-Layout und Primitive-Topologie.
//!
//! Pipeline, Shader und Buffer-Verwaltung liegen beim einbettenden Shell.

mod types;
