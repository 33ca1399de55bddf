//! Einzelner Kontrollpunkt einer Kurve.

use glam::Vec2;

/// RGB-Farbe, jeder Kanal in [0, 1].
pub type Rgb = [f32; 3];

/// Vom Benutzer gesetzter Stützpunkt der stückweise linearen Kurve.
///
/// Die Farbe wird beim Erzeugen von der Kurve übernommen und ändert sich danach nicht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position im NDC-Raum
    pub position: Vec2,
    color: Rgb,
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt.
    pub fn new(position: Vec2, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Farbe des Punkts
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Verschiebt den Punkt (Drag).
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }
}
