//! Die zentrale Curve-Datenstruktur: x-sortierte Kontrollpunkte, Sampling, Hit-Test, Vertex-Buffer.

use super::geometry::{distance_sq, is_valid_ndc, ndc_to_unit, unit_to_ndc};
use super::{ControlPoint, CurveError, Rgb};
use crate::shared::{CurveVertex, VertexTopology};
use glam::Vec2;
use std::cmp::Ordering;

/// Stückweise lineare Kurve über dem NDC-Bereich [-1, 1].
///
/// Invarianten:
/// - mindestens ein Kontrollpunkt (nach der Konstruktion nie leer)
/// - nach [`reorder`](Self::reorder) sind die x-Koordinaten nicht-fallend
#[derive(Debug, Clone)]
pub struct Curve {
    points: Vec<ControlPoint>,
    color: Rgb,
}

impl Curve {
    /// Erstellt eine Kurve aus Seed-Punkten in der gegebenen Farbe.
    ///
    /// Die Seeds werden in Reihenfolge angehängt und anschließend sortiert.
    pub fn new(color: Rgb, seeds: &[Vec2]) -> Result<Self, CurveError> {
        if !color
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
        {
            return Err(CurveError::ColorOutOfRange(color));
        }
        if seeds.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        let mut curve = Self {
            points: Vec::with_capacity(seeds.len()),
            color,
        };
        for &seed in seeds {
            curve.add_point(seed)?;
        }
        curve.reorder(0);
        Ok(curve)
    }

    /// Farbe, die neue Punkte erhalten
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Alle Kontrollpunkte in Speicherreihenfolge
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Kontrollpunkt am Index, falls vorhanden
    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Anzahl der Kontrollpunkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`: eine Kurve hat mindestens einen Punkt.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt mit der kleinsten x-Koordinate (nach Sortierung)
    pub fn first(&self) -> &ControlPoint {
        &self.points[0]
    }

    /// Punkt mit der größten x-Koordinate (nach Sortierung)
    pub fn last(&self) -> &ControlPoint {
        &self.points[self.points.len() - 1]
    }

    /// Prüft die Sortier-Invariante (x nicht-fallend).
    pub fn is_sorted(&self) -> bool {
        is_sorted_by_x(&self.points)
    }

    /// Hängt einen Punkt in der Kurvenfarbe ans Ende an.
    ///
    /// Sortiert nicht; der Aufrufer muss danach [`reorder`](Self::reorder) aufrufen.
    pub fn add_point(&mut self, position: Vec2) -> Result<(), CurveError> {
        check_position(position)?;
        self.points.push(ControlPoint::new(position, self.color));
        Ok(())
    }

    /// Fügt einen Punkt ein und sortiert ihn direkt an seine Stelle.
    ///
    /// Gibt den endgültigen Index des neuen Punkts zurück.
    pub fn insert_point(&mut self, position: Vec2) -> Result<usize, CurveError> {
        self.add_point(position)?;
        Ok(self.reorder(self.points.len() - 1))
    }

    /// Setzt die Position des Punkts am Index (ohne Umsortierung).
    pub fn move_point(&mut self, index: usize, position: Vec2) -> Result<(), CurveError> {
        check_position(position)?;
        let len = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(CurveError::InvalidIndex { index, len })?;
        point.move_to(position);
        Ok(())
    }

    /// Entfernt den Punkt am Index. Der letzte verbleibende Punkt kann nicht entfernt werden.
    pub fn remove_point(&mut self, index: usize) -> Result<ControlPoint, CurveError> {
        let len = self.points.len();
        if index >= len {
            return Err(CurveError::InvalidIndex { index, len });
        }
        if len == 1 {
            return Err(CurveError::LastPoint);
        }
        Ok(self.points.remove(index))
    }

    /// Stellt die Sortierung nach x wieder her und verfolgt dabei den Anker-Punkt.
    ///
    /// Gibt den neuen Index des Punkts zurück, der vorher bei `anchor` lag.
    /// Ist nur der Anker verschoben (typischer Drag), wird er per Binärsuche
    /// an seine Stelle gesetzt; sonst wird stabil sortiert. Punkte mit gleichem x
    /// behalten ihre bisherige Reihenfolge.
    pub fn reorder(&mut self, anchor: usize) -> usize {
        let anchor = anchor.min(self.points.len() - 1);
        if self.is_sorted() {
            return anchor;
        }

        let moved = self.points.remove(anchor);
        if is_sorted_by_x(&self.points) {
            let x = moved.position.x;
            let lo = self.points.partition_point(|p| p.position.x < x);
            let hi = self.points.partition_point(|p| p.position.x <= x);
            let slot = anchor.clamp(lo, hi);
            self.points.insert(slot, moved);
            log::debug!("Punkt {} nach {} umsortiert", anchor, slot);
            return slot;
        }
        self.points.insert(anchor, moved);

        // Mehrere Punkte außer Reihenfolge: stabile Sortierung mit Anker-Verfolgung
        let mut tagged: Vec<(usize, ControlPoint)> = self.points.drain(..).enumerate().collect();
        tagged.sort_by(|a, b| {
            a.1.position
                .x
                .partial_cmp(&b.1.position.x)
                .unwrap_or(Ordering::Equal)
        });
        let new_anchor = tagged
            .iter()
            .position(|(original, _)| *original == anchor)
            .unwrap_or(anchor);
        self.points = tagged.into_iter().map(|(_, point)| point).collect();
        log::debug!(
            "Kurve vollständig neu sortiert ({} Punkte), Anker {} -> {}",
            self.points.len(),
            anchor,
            new_anchor
        );
        new_anchor
    }

    /// Findet den nächsten Punkt zu `query`.
    ///
    /// `margin_sq` ist eine Schwelle für den *quadrierten* Abstand: ein Treffer wird
    /// nur geliefert, wenn der nächste Punkt strikt darunter liegt. Bei gleichem
    /// Abstand gewinnt der erste Punkt in Sequenzreihenfolge.
    pub fn close_point(&self, query: Vec2, margin_sq: f32) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| (index, distance_sq(query, point.position)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .filter(|&(_, dist_sq)| dist_sq < margin_sq)
            .map(|(index, _)| index)
    }

    /// Wertet die Kurve als Transferfunktion aus: `t` ∈ [0, 1] → Wert ∈ [0, 1].
    ///
    /// Links vom ersten und rechts vom letzten Punkt wird flach extrapoliert.
    pub fn sample(&self, t: f32) -> Result<f32, CurveError> {
        if !t.is_finite() {
            return Err(CurveError::NonFiniteInput(t));
        }
        let x = unit_to_ndc(t);
        let first = self.first().position;
        let last = self.last().position;

        if x <= first.x {
            return Ok(ndc_to_unit(first.y));
        }
        if x >= last.x {
            return Ok(ndc_to_unit(last.y));
        }

        let Some(segment) = self.points.windows(2).find(|w| w[1].position.x > x) else {
            return Ok(ndc_to_unit(last.y));
        };
        let (a, b) = (segment[0].position, segment[1].position);
        let ratio = (x - a.x) / (b.x - a.x);
        Ok(ndc_to_unit(a.y * (1.0 - ratio) + b.y * ratio))
    }

    /// Baut den Vertex-Buffer der Kurve, verlängert bis zu den Viewport-Rändern x = ±1.
    ///
    /// Die Rand-Vertices tragen y und Farbe des jeweils nächsten echten Endpunkts.
    pub fn vertex_array(&self, topology: VertexTopology) -> Vec<CurveVertex> {
        let first = self.first();
        let last = self.last();

        let mut strip = Vec::with_capacity(self.points.len() + 2);
        strip.push(CurveVertex::new(-1.0, first.position.y, first.color()));
        strip.extend(
            self.points
                .iter()
                .map(|p| CurveVertex::new(p.position.x, p.position.y, p.color())),
        );
        strip.push(CurveVertex::new(1.0, last.position.y, last.color()));

        match topology {
            VertexTopology::LineStrip => strip,
            VertexTopology::LineList => strip.windows(2).flat_map(|w| [w[0], w[1]]).collect(),
        }
    }

    /// Vertex-Buffer als flache Float-Folge (x, y, z, r, g, b pro Vertex).
    pub fn flat_vertex_array(&self, topology: VertexTopology) -> Vec<f32> {
        bytemuck::cast_slice(&self.vertex_array(topology)).to_vec()
    }
}

fn is_sorted_by_x(points: &[ControlPoint]) -> bool {
    points
        .windows(2)
        .all(|w| w[0].position.x <= w[1].position.x)
}

fn check_position(position: Vec2) -> Result<(), CurveError> {
    if is_valid_ndc(position) {
        Ok(())
    } else {
        Err(CurveError::PositionOutOfRange {
            x: position.x,
            y: position.y,
        })
    }
}
