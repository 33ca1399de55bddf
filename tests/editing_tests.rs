//! Integrationstests für den Editier-Ablauf:
//! - Pick + Drag + Release mit Anker-Verfolgung über Umsortierungen
//! - Doppelklick-Einfügen aus Pixel-Koordinaten
//! - Sampling und Render-Snapshot nach Bearbeitungen

use approx::assert_relative_eq;
use glam::Vec2;
use tone_curve_editor::{
    CurveIntent, CurveSession, EditorOptions, PointHandle, VertexTopology, Viewport,
};

fn session() -> CurveSession {
    CurveSession::new(EditorOptions::default()).expect("Standard-Optionen sind gültig")
}

fn press(session: &mut CurveSession, x: f32, y: f32) {
    session
        .handle_intent(CurveIntent::PointerPressed {
            pos: Vec2::new(x, y),
        })
        .expect("Press darf nicht fehlschlagen");
}

fn drag(session: &mut CurveSession, x: f32, y: f32) {
    session
        .handle_intent(CurveIntent::PointerDragged {
            pos: Vec2::new(x, y),
        })
        .expect("Drag darf nicht fehlschlagen");
}

// ─── Pick & Drag ─────────────────────────────────────────────────────────────

#[test]
fn test_press_on_point_selects_it() {
    let mut session = session();
    press(&mut session, 0.0, 0.5);
    assert_eq!(session.selected().map(PointHandle::index), Some(1));
}

#[test]
fn test_press_on_empty_area_selects_nothing() {
    let mut session = session();
    press(&mut session, 0.8, 0.8);
    assert_eq!(session.selected(), None);
}

#[test]
fn test_drag_middle_point_past_first_follows_point() {
    let options = EditorOptions {
        seed_points: vec![
            Vec2::new(-0.8, -1.0),
            Vec2::new(0.0, 0.5),
            Vec2::new(1.0, 1.0),
        ],
        ..EditorOptions::default()
    };
    let mut session = CurveSession::new(options).unwrap();

    press(&mut session, 0.0, 0.5);
    // schrittweise nach links, wie Maus-Move-Events
    for x in [-0.3, -0.6, -0.85, -0.95] {
        drag(&mut session, x, 0.2);
    }

    let curve = session.curve();
    assert_eq!(session.selected().map(PointHandle::index), Some(0));
    assert_eq!(curve.points()[0].position, Vec2::new(-0.95, 0.2));
    assert_eq!(curve.points()[1].position, Vec2::new(-0.8, -1.0));
    assert!(curve.is_sorted());
}

#[test]
fn test_release_clears_selection_and_stops_drag() {
    let mut session = session();
    press(&mut session, 1.0, 1.0);
    drag(&mut session, 0.9, 0.4);
    session.handle_intent(CurveIntent::PointerReleased).unwrap();
    drag(&mut session, -0.5, -0.5);

    assert_eq!(session.selected(), None);
    assert_eq!(session.curve().last().position, Vec2::new(0.9, 0.4));
}

// ─── Einfügen ────────────────────────────────────────────────────────────────

#[test]
fn test_double_click_inserts_sorted_point_from_pixels() {
    let mut session = session();
    let viewport = Viewport::new(400.0, 400.0);

    // Pixel (100, 200) → NDC (-0.5, 0.0)
    let pos = viewport.screen_to_ndc(Vec2::new(100.0, 200.0));
    session
        .handle_intent(CurveIntent::PointAddRequested { pos })
        .unwrap();

    let curve = session.curve();
    assert_eq!(curve.len(), 4);
    assert!(curve.is_sorted());
    assert_relative_eq!(curve.points()[1].position.x, -0.5);
    assert_eq!(curve.points()[1].color(), curve.color());
}

#[test]
fn test_inserted_point_can_be_dragged() {
    let mut session = session();
    session
        .handle_intent(CurveIntent::PointAddRequested {
            pos: Vec2::new(0.5, 0.0),
        })
        .unwrap();

    press(&mut session, 0.5, 0.0);
    assert_eq!(session.selected().map(PointHandle::index), Some(2));
    drag(&mut session, -0.5, 0.0);

    assert_eq!(session.selected().map(PointHandle::index), Some(1));
    assert!(session.curve().is_sorted());
}

// ─── Sampling & Render ───────────────────────────────────────────────────────

#[test]
fn test_sample_follows_edits() {
    let mut session = session();
    assert_relative_eq!(session.sample(0.5).unwrap(), 0.75);

    press(&mut session, 0.0, 0.5);
    drag(&mut session, 0.0, 0.0);
    session.handle_intent(CurveIntent::PointerReleased).unwrap();

    assert_relative_eq!(session.sample(0.5).unwrap(), 0.5);
    assert_relative_eq!(session.sample(0.0).unwrap(), 0.0);
    assert_relative_eq!(session.sample(1.0).unwrap(), 1.0);
}

#[test]
fn test_render_scene_extends_curve_to_edges() {
    let mut session = session();
    press(&mut session, -1.0, -1.0);
    drag(&mut session, -0.5, -0.25);

    let scene = session.render_scene();
    assert_eq!(scene.topology, VertexTopology::LineStrip);
    assert_eq!(scene.selected_point, Some(0));

    let first = scene.curve.first().unwrap();
    let last = scene.curve.last().unwrap();
    assert_eq!(first.position, [-1.0, -0.25, 0.5]);
    assert_eq!(last.position, [1.0, 1.0, 0.5]);
    assert_eq!(first.color, [1.0, 0.3, 0.3]);
    assert_eq!(scene.guides.len(), 3);
}
