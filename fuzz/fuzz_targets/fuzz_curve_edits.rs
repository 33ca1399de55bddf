#![no_main]

use glam::Vec2;
use libfuzzer_sys::fuzz_target;
use tone_curve_editor::{CurveIntent, CurveSession, EditorOptions};

// Jeder 9-Byte-Block: 1 Byte Intent-Art + 2 × f32 Position.
fuzz_target!(|data: &[u8]| {
    let Ok(mut session) = CurveSession::new(EditorOptions::default()) else {
        return;
    };

    for chunk in data.chunks_exact(9) {
        let x = f32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        let y = f32::from_le_bytes([chunk[5], chunk[6], chunk[7], chunk[8]]);
        let pos = Vec2::new(x, y);
        let intent = match chunk[0] % 5 {
            0 => CurveIntent::PointerPressed { pos },
            1 => CurveIntent::PointerDragged { pos },
            2 => CurveIntent::PointerReleased,
            3 => CurveIntent::PointAddRequested { pos },
            _ => CurveIntent::PointRemoveRequested { pos },
        };
        let _ = session.handle_intent(intent);

        assert!(session.curve().is_sorted());
        assert!(!session.curve().is_empty());
        let _ = session.sample(x);
    }

    let _ = session.render_scene();
});
