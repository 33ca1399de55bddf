//! Core-Domänentypen: Kontrollpunkte, Kurve, Geometrie-Helfer, Fehler.

pub mod control_point;
/// Kurven-Datenmodell
///
/// - Curve: x-sortierte Kontrollpunkte mit Sampling, Hit-Test und Vertex-Buffer
/// - ControlPoint: einzelner Stützpunkt mit Position und Farbe
pub mod curve;
pub mod error;
pub mod geometry;

pub use control_point::{ControlPoint, Rgb};
pub use curve::Curve;
pub use error::CurveError;
