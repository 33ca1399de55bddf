//! Tonkurven-Editor Library.
//! Kurven-Datenmodell, Editier-Session und GPU-Vertrag für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{CurveIntent, CurveSession, PointHandle, Viewport};
pub use crate::core::{ControlPoint, Curve, CurveError, Rgb};
pub use shared::{CurveVertex, EditorOptions, RenderScene, VertexTopology};
