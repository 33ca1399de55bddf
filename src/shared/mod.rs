//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `core`, `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod vertex;

pub use options::EditorOptions;
pub use options::{PICK_MARGIN_SQ, REDRAW_INTERVAL_MS};
pub use render_scene::RenderScene;
pub use vertex::{CurveVertex, VertexTopology, CURVE_PLANE_Z};
