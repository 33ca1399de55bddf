//! Tonkurven-Editor (Headless-Frontend).
//!
//! Lädt die Optionen, baut die Kurve auf und gibt sie als
//! Lookup-Tabelle (`t wert` pro Zeile) auf stdout aus.

use std::io::Write;
use tone_curve_editor::{CurveSession, EditorOptions};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Tonkurven-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden: erstes Argument oder Datei neben der Binary
    let config_path = std::env::args_os()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&config_path);
    let lut_size = options.lut_size;

    let session = CurveSession::new(options)?;
    let lut = session.lookup_table(lut_size)?;

    let scene = session.render_scene();
    log::info!(
        "Render-Szene: {} Kurven-Vertices ({:?}, {} Bytes), Redraw alle {:?}",
        scene.curve_vertex_count(),
        scene.topology,
        scene.curve_bytes().len(),
        session.options().redraw_interval()
    );

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for (i, value) in lut.iter().enumerate() {
        let t = if lut.len() > 1 {
            i as f32 / (lut.len() - 1) as f32
        } else {
            0.0
        };
        writeln!(out, "{t:.6} {value:.6}")?;
    }
    out.flush()?;

    log::info!("{} Stützstellen ausgegeben", lut.len());
    Ok(())
}
