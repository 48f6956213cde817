/*!
 * Radar (spider) chart geometry.
 *
 * A [`RadarLayout`] places N labeled spokes evenly around the unit
 * circle and computes where the category labels and the filled value
 * polygon go. It produces coordinates only; drawing the spokes, labels
 * and polygon is the renderer's concern.
 */

use crate::geom::{Path, PathBuilder, Point, Rect};
use crate::Error;

const DEFAULT_LABEL_RADIUS: f32 = 1.2;

/// Spoke angles, spoke endpoints and label anchors of a radar chart.
///
/// The layout is computed once at construction and never mutated;
/// [`RadarLayout::polygon`] derives value polygons from it on demand.
#[derive(Debug, Clone)]
pub struct RadarLayout {
    angles: Vec<f64>,
    spokes: Vec<Point>,
    labels: Vec<Point>,
    label_radius: f32,
}

impl RadarLayout {
    /// Compute the layout for `n` categories.
    ///
    /// Angles are evenly spaced by `2π/n`, starting at `π/2` so the
    /// first spoke points up, and progressing counter-clockwise.
    /// Spoke endpoints are on the unit circle; label anchors sit on the
    /// same rays, scaled out by the label radius (1.2 by default).
    ///
    /// Returns `Error::EmptyRadar` for `n = 0`.
    pub fn new(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::EmptyRadar);
        }
        let angles: Vec<f64> = (0..n)
            .map(|i| std::f64::consts::FRAC_PI_2 + 2.0 * std::f64::consts::PI * i as f64 / n as f64)
            .collect();
        let spokes = angles
            .iter()
            .map(|a| Point {
                x: a.cos() as f32,
                y: a.sin() as f32,
            })
            .collect();
        let mut layout = RadarLayout {
            angles,
            spokes,
            labels: Vec::new(),
            label_radius: DEFAULT_LABEL_RADIUS,
        };
        layout.place_labels();
        Ok(layout)
    }

    /// Set the label radius and return self for chaining.
    ///
    /// Panics if `radius <= 1.0`: label anchors must sit strictly
    /// outside the spoke endpoints so text clears the polygon.
    pub fn with_label_radius(mut self, radius: f32) -> Self {
        assert!(radius > 1.0);
        self.label_radius = radius;
        self.place_labels();
        self
    }

    fn place_labels(&mut self) {
        self.labels = self
            .spokes
            .iter()
            .map(|p| Point {
                x: p.x * self.label_radius,
                y: p.y * self.label_radius,
            })
            .collect();
    }

    /// The number of categories
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Whether the layout is empty. Always false: construction rejects n = 0.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// The spoke angles in radians
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// The spoke endpoints on the unit circle.
    /// Spokes are drawn as segments from the origin to these points.
    pub fn spokes(&self) -> &[Point] {
        &self.spokes
    }

    /// The label anchor coordinates, outside the spoke endpoints
    pub fn labels(&self) -> &[Point] {
        &self.labels
    }

    /// The label radius
    pub fn label_radius(&self) -> f32 {
        self.label_radius
    }

    /// The closed polygon of per-category values.
    ///
    /// `values` are expected pre-normalized to `[0, 1]`; vertex `i` sits
    /// at `values[i]` along spoke `i`. The first vertex is repeated at
    /// the end so the polygon closes for the renderer's fill.
    ///
    /// Returns `Error::InconsistentData` if `values.len()` does not
    /// match the number of categories.
    pub fn polygon(&self, values: &[f64]) -> Result<Vec<Point>, Error> {
        if values.len() != self.len() {
            return Err(Error::InconsistentData(format!(
                "radar has {} categories but {} values were provided",
                self.len(),
                values.len()
            )));
        }
        let mut points: Vec<Point> = self
            .spokes
            .iter()
            .zip(values.iter())
            .map(|(p, v)| Point {
                x: p.x * *v as f32,
                y: p.y * *v as f32,
            })
            .collect();
        points.push(points[0]);
        Ok(points)
    }

    /// The value polygon as a fillable path
    pub fn polygon_path(&self, values: &[f64]) -> Result<Path, Error> {
        let points = self.polygon(values)?;
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x, points[0].y);
        for p in &points[1..points.len() - 1] {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        pb.finish().ok_or_else(|| {
            Error::InconsistentData("radar polygon produced an invalid path".to_string())
        })
    }

    /// The square data range that fits spokes and labels,
    /// with `margin` of extra clearance on all sides
    pub fn view_box(&self, margin: f32) -> Rect {
        let half = self.label_radius + margin;
        Rect::from_xywh(-half, -half, 2.0 * half, 2.0 * half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{assert_near, Near};
    use std::f64::consts::PI;

    #[test]
    fn rejects_zero_categories() {
        assert!(matches!(RadarLayout::new(0), Err(Error::EmptyRadar)));
    }

    #[test]
    fn angles_are_evenly_spaced() {
        for n in 1..=12 {
            let layout = RadarLayout::new(n).unwrap();
            let angles = layout.angles();
            assert_eq!(angles.len(), n);
            let step = 2.0 * PI / n as f64;
            let mut sum = 0.0;
            for i in 0..n {
                let next = angles[(i + 1) % n] + if i + 1 == n { 2.0 * PI } else { 0.0 };
                let diff = next - angles[i];
                assert_near!(abs, diff, step);
                sum += diff;
            }
            assert_near!(abs, sum, 2.0 * PI);
        }
    }

    #[test]
    fn eight_spokes_at_45_degrees() {
        let layout = RadarLayout::new(8).unwrap();
        for (i, a) in layout.angles().iter().enumerate() {
            assert_near!(abs, *a, PI / 2.0 + i as f64 * PI / 4.0);
        }
        // first spoke points up
        let up = layout.spokes()[0];
        assert_near!(abs, up.x, 0.0f32, 1e-6);
        assert_near!(abs, up.y, 1.0f32, 1e-6);
    }

    #[test]
    fn spokes_are_on_unit_circle() {
        let layout = RadarLayout::new(5).unwrap();
        for p in layout.spokes() {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert_near!(abs, r, 1.0f32, 1e-6);
        }
    }

    #[test]
    fn labels_are_strictly_outside_spokes() {
        let layout = RadarLayout::new(7).unwrap();
        for (s, l) in layout.spokes().iter().zip(layout.labels()) {
            let rs = (s.x * s.x + s.y * s.y).sqrt();
            let rl = (l.x * l.x + l.y * l.y).sqrt();
            assert!(rl > rs);
        }
    }

    #[test]
    fn label_radius_is_configurable() {
        let layout = RadarLayout::new(4).unwrap().with_label_radius(1.3);
        assert_eq!(layout.label_radius(), 1.3);
        let l = layout.labels()[0];
        let r = (l.x * l.x + l.y * l.y).sqrt();
        assert_near!(abs, r, 1.3f32, 1e-6);
    }

    #[test]
    #[should_panic]
    fn label_radius_must_exceed_spokes() {
        let _ = RadarLayout::new(4).unwrap().with_label_radius(1.0);
    }

    #[test]
    fn polygon_is_closed_and_scaled() {
        let layout = RadarLayout::new(4).unwrap();
        let values = [1.0, 0.5, 0.25, 0.0];
        let poly = layout.polygon(&values).unwrap();
        assert_eq!(poly.len(), 5);
        assert_eq!(poly[0].x, poly[4].x);
        assert_eq!(poly[0].y, poly[4].y);
        for (i, p) in poly[..4].iter().enumerate() {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert_near!(abs, r, values[i] as f32, 1e-6);
        }
    }

    #[test]
    fn polygon_length_mismatch_errors() {
        let layout = RadarLayout::new(4).unwrap();
        assert!(matches!(
            layout.polygon(&[0.5, 0.5]),
            Err(Error::InconsistentData(_))
        ));
    }

    #[test]
    fn polygon_path_is_built() {
        let layout = RadarLayout::new(3).unwrap();
        let path = layout.polygon_path(&[0.8, 0.6, 0.4]).unwrap();
        // move_to + 2 line_to + close
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn view_box_fits_labels() {
        let layout = RadarLayout::new(6).unwrap();
        let vb = layout.view_box(0.3);
        assert_near!(abs, vb.left(), -1.5f32, 1e-6);
        assert_near!(abs, vb.top(), 1.5f32, 1e-6);
        for l in layout.labels() {
            assert!(vb.contains_point(l));
        }
    }
}
