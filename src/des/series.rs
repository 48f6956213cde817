/*!
 * Series design module.
 *
 * Each variant of [`Series`] carries the data and the symbolic style of
 * one drawable layer of a plot.
 */

use crate::data::VecColumn;
use crate::des::Tooltips;
use crate::geom::Point;
use crate::style::{defaults, series};
use crate::ColorU8;

/// A data series of a plot
#[derive(Debug, Clone)]
pub enum Series {
    /// A scatter of markers
    Scatter(Scatter),
    /// Vertical bars
    Bars(Bars),
    /// A closed, filled polygon
    Polygon(Polygon),
    /// Disconnected line segments
    Segments(Segments),
}

impl From<Scatter> for Series {
    fn from(series: Scatter) -> Self {
        Series::Scatter(series)
    }
}

impl From<Bars> for Series {
    fn from(series: Bars) -> Self {
        Series::Bars(series)
    }
}

impl From<Polygon> for Series {
    fn from(series: Polygon) -> Self {
        Series::Polygon(series)
    }
}

impl From<Segments> for Series {
    fn from(series: Segments) -> Self {
        Series::Segments(series)
    }
}

/// A scatter series: one marker per data point
#[derive(Debug, Clone)]
pub struct Scatter {
    x: VecColumn,
    y: Vec<f64>,
    name: Option<String>,
    marker: series::Marker,
    tooltips: Option<Tooltips>,
}

impl Scatter {
    /// Create a new scatter series from X and Y data
    pub fn new(x: impl Into<VecColumn>, y: Vec<f64>) -> Self {
        Scatter {
            x: x.into(),
            y,
            name: None,
            marker: series::Marker::default(),
            tooltips: None,
        }
    }

    /// Set the series name and return self for chaining
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Set the marker style and return self for chaining
    pub fn with_marker(self, marker: series::Marker) -> Self {
        Self { marker, ..self }
    }

    /// Set the tooltip configuration and return self for chaining
    pub fn with_tooltips(self, tooltips: Tooltips) -> Self {
        Self {
            tooltips: Some(tooltips),
            ..self
        }
    }

    /// The X data
    pub fn x(&self) -> &VecColumn {
        &self.x
    }

    /// The Y data
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The series name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The marker style
    pub fn marker(&self) -> &series::Marker {
        &self.marker
    }

    /// The tooltip configuration, if any
    pub fn tooltips(&self) -> Option<&Tooltips> {
        self.tooltips.as_ref()
    }
}

/// A bar series: one vertical bar per data point
#[derive(Debug, Clone)]
pub struct Bars {
    x: Vec<f64>,
    heights: Vec<f64>,
    name: Option<String>,
    fill: series::Fill,
    bar_colors: Option<Vec<ColorU8>>,
    width: f32,
}

impl Bars {
    /// Create a new bar series. `x` are the bar centers and `heights`
    /// the bar heights, both in data space.
    pub fn new(x: Vec<f64>, heights: Vec<f64>) -> Self {
        Bars {
            x,
            heights,
            name: None,
            fill: series::Fill::default(),
            bar_colors: None,
            width: defaults::BAR_WIDTH,
        }
    }

    /// Set the series name and return self for chaining
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Set the fill for all bars and return self for chaining
    pub fn with_fill(self, fill: series::Fill) -> Self {
        Self { fill, ..self }
    }

    /// Give each bar its own color, e.g. from a time-of-day ramp, and
    /// return self for chaining. Overrides the series fill color; the
    /// fill opacity still applies.
    pub fn with_bar_colors(self, bar_colors: Vec<ColorU8>) -> Self {
        Self {
            bar_colors: Some(bar_colors),
            ..self
        }
    }

    /// Set the bar width as a fraction of the slot between bar centers
    /// and return self for chaining
    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    /// The bar centers
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The bar heights
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// The series name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The fill style
    pub fn fill(&self) -> &series::Fill {
        &self.fill
    }

    /// The per-bar colors, if set
    pub fn bar_colors(&self) -> Option<&[ColorU8]> {
        self.bar_colors.as_deref()
    }

    /// The bar width fraction
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// A closed polygon series, e.g. the value shape of a radar chart
#[derive(Debug, Clone)]
pub struct Polygon {
    points: Vec<Point>,
    fill: series::Fill,
    line: Option<series::Line>,
}

impl Polygon {
    /// Create a new polygon from its vertices. The polygon is closed
    /// implicitly if the last point does not repeat the first.
    pub fn new(points: Vec<Point>) -> Self {
        Polygon {
            points,
            fill: series::Fill::default(),
            line: None,
        }
    }

    /// Set the fill style and return self for chaining
    pub fn with_fill(self, fill: series::Fill) -> Self {
        Self { fill, ..self }
    }

    /// Set the outline style and return self for chaining
    pub fn with_line(self, line: series::Line) -> Self {
        Self {
            line: Some(line),
            ..self
        }
    }

    /// The vertices of the polygon
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The fill style
    pub fn fill(&self) -> &series::Fill {
        &self.fill
    }

    /// The outline style, if any
    pub fn line(&self) -> Option<&series::Line> {
        self.line.as_ref()
    }
}

/// Disconnected line segments, e.g. the spokes of a radar chart
#[derive(Debug, Clone)]
pub struct Segments {
    segments: Vec<(Point, Point)>,
    line: series::Line,
}

impl Segments {
    /// Create new segments, each a `(start, end)` pair in data space
    pub fn new(segments: Vec<(Point, Point)>) -> Self {
        Segments {
            segments,
            line: series::Line::default(),
        }
    }

    /// Set the line style and return self for chaining
    pub fn with_line(self, line: series::Line) -> Self {
        Self { line, ..self }
    }

    /// The segments
    pub fn segments(&self) -> &[(Point, Point)] {
        &self.segments
    }

    /// The line style
    pub fn line(&self) -> &series::Line {
        &self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn bars_builder() {
        let bars = Bars::new(vec![0.0, 1.0, 2.0], vec![3.0, 1.0, 4.0])
            .with_name("Counts")
            .with_bar_colors(vec![color::NAVY, color::BLUE, color::GRAY])
            .with_width(0.8);
        assert_eq!(bars.x().len(), 3);
        assert_eq!(bars.bar_colors().unwrap().len(), 3);
        assert_eq!(bars.width(), 0.8);
    }

    #[test]
    fn scatter_over_time() {
        use crate::time::DateTime;
        let times = vec![DateTime::epoch(), DateTime::epoch() + crate::time::TimeDelta::from_secs(60.0)];
        let scatter = Scatter::new(times, vec![0.5, -0.5])
            .with_tooltips(Tooltips::new().with_field("Time", "Time"));
        assert!(scatter.x().as_time().is_some());
        assert!(scatter.tooltips().is_some());
    }

    #[test]
    fn polygon_styles() {
        let poly = Polygon::new(vec![
            Point::from_xy(0.0, 1.0),
            Point::from_xy(1.0, 0.0),
            Point::from_xy(-1.0, 0.0),
        ])
        .with_fill(series::Fill::from(color::NAVY).with_opacity(0.5))
        .with_line(color::BLUE.into());
        assert_eq!(poly.points().len(), 3);
        assert!(poly.line().is_some());
    }

    #[test]
    fn series_from_variants() {
        let s: Series = Bars::new(vec![], vec![]).into();
        assert!(matches!(s, Series::Bars(_)));
        let s: Series = Segments::new(vec![]).into();
        assert!(matches!(s, Series::Segments(_)));
    }
}
