//! Umrechnung von Widget-Pixeln in NDC-Koordinaten.

use crate::core::geometry::clamp_ndc;
use glam::Vec2;

/// Pixelgröße der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub size: [f32; 2],
}

impl Viewport {
    /// Erstellt einen Viewport mit der gegebenen Pixelgröße.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
        }
    }

    /// Konvertiert Pixel-Koordinaten (Ursprung oben links) in NDC.
    ///
    /// Die y-Achse wird gespiegelt: oben = +1, unten = -1.
    pub fn screen_to_ndc(&self, screen_pos: Vec2) -> Vec2 {
        let width = self.size[0].max(1.0);
        let height = self.size[1].max(1.0);
        Vec2::new(
            2.0 * screen_pos.x / width - 1.0,
            -(2.0 * screen_pos.y / height - 1.0),
        )
    }

    /// Wie [`screen_to_ndc`](Self::screen_to_ndc), aber auf [-1, 1] begrenzt (Drag außerhalb des Widgets).
    pub fn screen_to_ndc_clamped(&self, screen_pos: Vec2) -> Vec2 {
        clamp_ndc(self.screen_to_ndc(screen_pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_screen_to_ndc_corners_and_center() {
        let viewport = Viewport::new(800.0, 600.0);

        assert_eq!(viewport.screen_to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0));
        assert_eq!(viewport.screen_to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0));
        let center = viewport.screen_to_ndc(Vec2::new(400.0, 300.0));
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);
    }

    #[test]
    fn test_screen_to_ndc_clamped_outside_widget() {
        let viewport = Viewport::new(800.0, 600.0);
        let pos = viewport.screen_to_ndc_clamped(Vec2::new(-50.0, 900.0));
        assert_eq!(pos, Vec2::new(-1.0, -1.0));
    }
}
