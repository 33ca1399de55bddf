use glam::Vec2;

/// Eingaben aus dem Shell, bereits in NDC-Koordinaten umgerechnet.
/// Intents enthalten keine Mutationslogik; die Session setzt sie um.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveIntent {
    /// Maustaste gedrückt: nächsten Kontrollpunkt greifen
    PointerPressed { pos: Vec2 },
    /// Maus mit gedrückter Taste bewegt: gegriffenen Punkt verschieben
    PointerDragged { pos: Vec2 },
    /// Maustaste losgelassen: Griff lösen
    PointerReleased,
    /// Doppelklick: neuen Kontrollpunkt einfügen
    PointAddRequested { pos: Vec2 },
    /// Kontrollpunkt unter dem Cursor entfernen
    PointRemoveRequested { pos: Vec2 },
}
