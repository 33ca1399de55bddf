//! Fehlertypen der Kurven-Operationen.

use thiserror::Error;

/// Fehler, die beim Bearbeiten oder Abfragen einer [`Curve`](super::Curve) auftreten.
///
/// "Kein Treffer" beim Hit-Test ist kein Fehler, sondern `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Index liegt ausserhalb der aktuellen Punktanzahl
    #[error("Ungueltiger Punkt-Index {index} (Kurve hat {len} Punkte)")]
    InvalidIndex { index: usize, len: usize },
    /// Kurve ohne Punkte (nur beim Erzeugen ohne Seed-Punkte moeglich)
    #[error("Kurve benoetigt mindestens einen Kontrollpunkt")]
    EmptyCurve,
    /// Entfernen wuerde die Kurve leeren
    #[error("Der letzte Kontrollpunkt kann nicht entfernt werden")]
    LastPoint,
    /// Position nicht endlich oder ausserhalb von [-1, 1]
    #[error("Position ({x}, {y}) liegt ausserhalb von [-1, 1]")]
    PositionOutOfRange { x: f32, y: f32 },
    /// Farbkanal nicht endlich oder ausserhalb von [0, 1]
    #[error("Farbe {0:?} liegt ausserhalb von [0, 1]")]
    ColorOutOfRange([f32; 3]),
    /// Abfragewert ist NaN oder unendlich
    #[error("Abfragewert {0} ist nicht endlich")]
    NonFiniteInput(f32),
}
