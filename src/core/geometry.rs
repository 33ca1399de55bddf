//! Reine Geometrie-Helfer im normalisierten Geräte-Raum (NDC, beide Achsen in [-1, 1]).

use glam::Vec2;

/// Quadrierter euklidischer Abstand (ohne Wurzel, für Pick-Vergleiche).
#[inline]
pub fn distance_sq(a: Vec2, b: Vec2) -> f32 {
    a.distance_squared(b)
}

/// Bildet einen NDC-Wert aus [-1, 1] auf [0, 1] ab (`v * 0.5 + 0.5`).
#[inline]
pub fn ndc_to_unit(v: f32) -> f32 {
    v * 0.5 + 0.5
}

/// Bildet einen Wert aus [0, 1] auf [-1, 1] ab (`t * 2 - 1`).
#[inline]
pub fn unit_to_ndc(t: f32) -> f32 {
    t * 2.0 - 1.0
}

/// Begrenzt beide Achsen auf [-1, 1].
#[inline]
pub fn clamp_ndc(pos: Vec2) -> Vec2 {
    pos.clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
}

/// Prüft, ob beide Koordinaten endlich sind und in [-1, 1] liegen.
pub fn is_valid_ndc(pos: Vec2) -> bool {
    pos.is_finite() && pos.x.abs() <= 1.0 && pos.y.abs() <= 1.0
}
