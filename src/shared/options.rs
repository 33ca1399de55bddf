//! Zentrale Konfiguration für den Tonkurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::VertexTopology;
use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Farbe der editierbaren Kurve (RGB: Hellrot).
pub const CURVE_COLOR: [f32; 3] = [1.0, 0.3, 0.3];
/// Start-Punkte der editierbaren Kurve.
pub const CURVE_SEED_POINTS: [[f32; 2]; 3] = [[-1.0, -1.0], [0.0, 0.5], [1.0, 1.0]];

// ── Hilfslinien ─────────────────────────────────────────────────────

/// Farbe der horizontalen Hilfslinien (RGB: Grau).
pub const GUIDE_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
/// y-Höhen der Hilfslinien im NDC-Raum.
pub const GUIDE_LEVELS: [f32; 3] = [0.5, 0.0, -0.5];

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Schwelle als quadrierter NDC-Abstand.
pub const PICK_MARGIN_SQ: f32 = 0.025;

// ── Darstellung / Export ────────────────────────────────────────────

/// Redraw-Intervall des Shells in Millisekunden (~30 fps).
pub const REDRAW_INTERVAL_MS: u64 = 33;
/// Anzahl der Stützstellen der exportierten Lookup-Tabelle.
pub const LUT_SIZE: usize = 256;
/// Dateiname der Kurven-Optionen.
pub const CONFIG_FILE_NAME: &str = "tone_curve_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `tone_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Farbe neuer Kontrollpunkte (RGB)
    pub curve_color: [f32; 3],
    /// Start-Punkte der Kurve (NDC)
    pub seed_points: Vec<Vec2>,

    // ── Hilfslinien ─────────────────────────────────────────────
    /// Farbe der Hilfslinien (RGB)
    pub guide_color: [f32; 3],
    /// y-Höhen der Hilfslinien (NDC)
    pub guide_levels: Vec<f32>,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Schwelle (quadrierter Abstand)
    pub pick_margin_sq: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Vertex-Anordnung des Kurven-Buffers
    pub vertex_topology: VertexTopology,
    /// Redraw-Intervall in Millisekunden
    pub redraw_interval_ms: u64,
    /// Stützstellen der Lookup-Tabelle
    pub lut_size: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            curve_color: CURVE_COLOR,
            seed_points: CURVE_SEED_POINTS.iter().map(|&p| Vec2::from(p)).collect(),
            guide_color: GUIDE_COLOR,
            guide_levels: GUIDE_LEVELS.to_vec(),
            pick_margin_sq: PICK_MARGIN_SQ,
            vertex_topology: VertexTopology::default(),
            redraw_interval_ms: REDRAW_INTERVAL_MS,
            lut_size: LUT_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Editor-Optionen (Seeds, Farben, Pick-Radius) aus einer TOML-Datei.
    ///
    /// Fehlt die Datei oder ist sie ungültig, startet der Editor mit der
    /// Standardkurve.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::info!(
                    "Keine Kurven-Optionen unter {} ({}), nutze Standardkurve",
                    path.display(),
                    e.kind()
                );
                return Self::default();
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(opts) => {
                log::info!(
                    "Kurven-Optionen aus {} geladen: {} Seed-Punkte, Topologie {:?}",
                    path.display(),
                    opts.seed_points.len(),
                    opts.vertex_topology
                );
                opts
            }
            Err(e) => {
                log::warn!(
                    "Kurven-Optionen in {} fehlerhaft, nutze Standardkurve: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Schreibt die aktuellen Editor-Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Kurven-Optionen lassen sich nicht serialisieren")?;
        std::fs::write(path, content)
            .with_context(|| format!("Kurven-Optionen nicht schreibbar: {}", path.display()))?;
        log::info!(
            "Kurven-Optionen ({} Seed-Punkte) geschrieben nach {}",
            self.seed_points.len(),
            path.display()
        );
        Ok(())
    }

    /// Standardpfad der Kurven-Optionen: `tone_curve_editor.toml` neben der Binary,
    /// sonst im Arbeitsverzeichnis.
    pub fn config_path() -> std::path::PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(std::path::Path::to_path_buf))
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        dir.join(CONFIG_FILE_NAME)
    }

    /// Redraw-Intervall als `Duration`.
    pub fn redraw_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.redraw_interval_ms)
    }
}
