//! Editier-Session: besitzt die Kurve, die Hilfslinien und den gegriffenen Punkt.

use super::CurveIntent;
use crate::core::geometry::clamp_ndc;
use crate::core::{Curve, CurveError};
use crate::shared::{EditorOptions, RenderScene};
use glam::Vec2;

/// Griff auf einen Kontrollpunkt während eines Drags.
///
/// Bleibt über Umsortierungen gültig, weil die Session ihn nach jedem
/// `reorder` mit dem zurückgegebenen Index ersetzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointHandle(usize);

impl PointHandle {
    /// Index des Punkts in der Kurve
    pub fn index(self) -> usize {
        self.0
    }
}

/// Orchestriert Eingabe-Intents auf einer editierbaren Kurve.
#[derive(Debug, Clone)]
pub struct CurveSession {
    curve: Curve,
    guides: Vec<Curve>,
    selected: Option<PointHandle>,
    options: EditorOptions,
}

impl CurveSession {
    /// Erstellt eine Session aus den Optionen (Seed-Punkte, Farben, Hilfslinien).
    pub fn new(options: EditorOptions) -> Result<Self, CurveError> {
        let curve = Curve::new(options.curve_color, &options.seed_points)?;
        let guides = options
            .guide_levels
            .iter()
            .map(|&y| {
                Curve::new(
                    options.guide_color,
                    &[Vec2::new(-1.0, y), Vec2::new(1.0, y)],
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "Kurven-Session mit {} Punkten und {} Hilfslinien erstellt",
            curve.len(),
            guides.len()
        );

        Ok(Self {
            curve,
            guides,
            selected: None,
            options,
        })
    }

    /// Die editierbare Kurve
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Die statischen Hilfslinien
    pub fn guides(&self) -> &[Curve] {
        &self.guides
    }

    /// Aktuell gegriffener Punkt
    pub fn selected(&self) -> Option<PointHandle> {
        self.selected
    }

    /// Laufzeit-Optionen der Session
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Verarbeitet einen Intent.
    ///
    /// Abgelehnte Bearbeitungen (Position außerhalb, letzter Punkt) werden
    /// protokolliert und ignoriert; nur inkonsistente Zustände liefern `Err`.
    pub fn handle_intent(&mut self, intent: CurveIntent) -> Result<(), CurveError> {
        match intent {
            CurveIntent::PointerPressed { pos } => {
                self.selected = self
                    .curve
                    .close_point(pos, self.options.pick_margin_sq)
                    .map(PointHandle);
                log::debug!("Pick bei {:?}: {:?}", pos, self.selected);
            }
            CurveIntent::PointerDragged { pos } => {
                let Some(handle) = self.selected else {
                    return Ok(());
                };
                self.curve.move_point(handle.index(), clamp_ndc(pos))?;
                self.selected = Some(PointHandle(self.curve.reorder(handle.index())));
            }
            CurveIntent::PointerReleased => {
                self.selected = None;
            }
            CurveIntent::PointAddRequested { pos } => match self.curve.insert_point(pos) {
                Ok(index) => {
                    log::debug!("Punkt {:?} an Index {} eingefügt", pos, index);
                    // Gegriffener Punkt rutscht nach hinten, wenn davor eingefügt wurde
                    if let Some(handle) = self.selected.filter(|h| h.index() >= index) {
                        self.selected = Some(PointHandle(handle.index() + 1));
                    }
                }
                Err(e) => log::warn!("Punkt nicht eingefügt: {}", e),
            },
            CurveIntent::PointRemoveRequested { pos } => self.remove_point_at(pos)?,
        }
        Ok(())
    }

    fn remove_point_at(&mut self, pos: Vec2) -> Result<(), CurveError> {
        let Some(index) = self.curve.close_point(pos, self.options.pick_margin_sq) else {
            return Ok(());
        };

        match self.curve.remove_point(index) {
            Ok(removed) => {
                log::debug!("Punkt {:?} an Index {} entfernt", removed.position, index);
                self.selected = match self.selected {
                    Some(handle) if handle.index() == index => None,
                    Some(handle) if handle.index() > index => Some(PointHandle(handle.index() - 1)),
                    other => other,
                };
                Ok(())
            }
            Err(CurveError::LastPoint) => {
                log::warn!("Letzter Kontrollpunkt bleibt erhalten");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Wertet die Kurve als Transferfunktion aus (`t` ∈ [0, 1]).
    pub fn sample(&self, t: f32) -> Result<f32, CurveError> {
        self.curve.sample(t)
    }

    /// Tastet die Kurve an `size` gleichverteilten Stellen in [0, 1] ab.
    pub fn lookup_table(&self, size: usize) -> Result<Vec<f32>, CurveError> {
        match size {
            0 => Ok(Vec::new()),
            1 => Ok(vec![self.curve.sample(0.0)?]),
            _ => (0..size)
                .map(|i| self.curve.sample(i as f32 / (size - 1) as f32))
                .collect(),
        }
    }

    /// Baut den Render-Snapshot für den nächsten Redraw-Tick.
    pub fn render_scene(&self) -> RenderScene {
        let topology = self.options.vertex_topology;
        RenderScene {
            guides: self
                .guides
                .iter()
                .map(|guide| guide.vertex_array(topology))
                .collect(),
            curve: self.curve.vertex_array(topology),
            topology,
            selected_point: self.selected.map(PointHandle::index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn session() -> CurveSession {
        CurveSession::new(EditorOptions::default()).expect("Standard-Optionen sind gültig")
    }

    #[test]
    fn test_new_builds_curve_and_guides() {
        let session = session();
        assert_eq!(session.curve().len(), 3);
        assert_eq!(session.guides().len(), 3);
        assert_eq!(session.guides()[1].first().position, Vec2::new(-1.0, 0.0));
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_new_rejects_empty_seeds() {
        let options = EditorOptions {
            seed_points: vec![],
            ..EditorOptions::default()
        };
        assert_eq!(
            CurveSession::new(options).unwrap_err(),
            CurveError::EmptyCurve
        );
    }

    #[test]
    fn test_drag_without_selection_is_noop() {
        let mut session = session();
        session
            .handle_intent(CurveIntent::PointerDragged {
                pos: Vec2::new(0.3, 0.3),
            })
            .unwrap();
        assert_eq!(session.curve().points()[1].position, Vec2::new(0.0, 0.5));
    }

    #[test]
    fn test_drag_is_clamped_to_viewport() {
        let mut session = session();
        session
            .handle_intent(CurveIntent::PointerPressed {
                pos: Vec2::new(0.0, 0.5),
            })
            .unwrap();
        session
            .handle_intent(CurveIntent::PointerDragged {
                pos: Vec2::new(0.2, 3.0),
            })
            .unwrap();
        assert_eq!(session.curve().points()[1].position, Vec2::new(0.2, 1.0));
    }

    #[test]
    fn test_add_outside_viewport_is_ignored() {
        let mut session = session();
        session
            .handle_intent(CurveIntent::PointAddRequested {
                pos: Vec2::new(1.5, 0.0),
            })
            .unwrap();
        assert_eq!(session.curve().len(), 3);
    }

    #[test]
    fn test_insert_before_grabbed_point_keeps_handle() {
        let mut session = session();
        session
            .handle_intent(CurveIntent::PointerPressed {
                pos: Vec2::new(0.0, 0.5),
            })
            .unwrap();
        session
            .handle_intent(CurveIntent::PointAddRequested {
                pos: Vec2::new(-0.5, 0.0),
            })
            .unwrap();

        let handle = session.selected().expect("Griff bleibt bestehen");
        assert_eq!(handle.index(), 2);
        assert_eq!(
            session.curve().points()[handle.index()].position,
            Vec2::new(0.0, 0.5)
        );
    }

    #[test]
    fn test_remove_shifts_selection_behind_removed_point() {
        let mut session = session();
        session
            .handle_intent(CurveIntent::PointerPressed {
                pos: Vec2::new(1.0, 1.0),
            })
            .unwrap();
        assert_eq!(session.selected().map(PointHandle::index), Some(2));

        session
            .handle_intent(CurveIntent::PointRemoveRequested {
                pos: Vec2::new(0.0, 0.5),
            })
            .unwrap();

        assert_eq!(session.curve().len(), 2);
        assert_eq!(session.selected().map(PointHandle::index), Some(1));
    }

    #[test]
    fn test_remove_grabbed_point_clears_selection() {
        let mut session = session();
        session
            .handle_intent(CurveIntent::PointerPressed {
                pos: Vec2::new(0.0, 0.5),
            })
            .unwrap();
        session
            .handle_intent(CurveIntent::PointRemoveRequested {
                pos: Vec2::new(0.0, 0.5),
            })
            .unwrap();

        assert_eq!(session.selected(), None);
        assert_eq!(session.curve().len(), 2);

        // ohne Griff bleibt ein folgender Drag wirkungslos
        session
            .handle_intent(CurveIntent::PointerDragged {
                pos: Vec2::new(0.5, 0.0),
            })
            .unwrap();
        assert_eq!(session.curve().points()[1].position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_remove_keeps_last_point() {
        let options = EditorOptions {
            seed_points: vec![Vec2::new(0.0, 0.0)],
            ..EditorOptions::default()
        };
        let mut session = CurveSession::new(options).unwrap();
        session
            .handle_intent(CurveIntent::PointRemoveRequested { pos: Vec2::ZERO })
            .unwrap();
        assert_eq!(session.curve().len(), 1);
    }

    #[test]
    fn test_lookup_table_endpoints() {
        let session = session();
        let lut = session.lookup_table(5).unwrap();

        assert_eq!(lut.len(), 5);
        assert_relative_eq!(lut[0], 0.0);
        assert_relative_eq!(lut[2], 0.75);
        assert_relative_eq!(lut[4], 1.0);
        assert!(session.lookup_table(0).unwrap().is_empty());
        assert_eq!(session.lookup_table(1).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_render_scene_uses_configured_topology() {
        let options = EditorOptions {
            vertex_topology: crate::shared::VertexTopology::LineList,
            ..EditorOptions::default()
        };
        let session = CurveSession::new(options).unwrap();
        let scene = session.render_scene();

        assert_eq!(scene.curve.len(), 8);
        assert!(scene.guides.iter().all(|g| g.len() == 6));
        assert_eq!(scene.curve_vertex_count(), 8);
        assert_eq!(scene.curve_bytes().len(), 8 * 24);
        assert_eq!(scene.selected_point, None);
    }
}
