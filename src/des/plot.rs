use crate::des::{Axis, Series};
use crate::style::{defaults, theme, LinePattern};

/// A plot area: series drawn against an X and a Y axis
#[derive(Debug, Clone)]
pub struct Plot {
    series: Vec<Series>,
    x_axis: Axis,
    y_axis: Axis,
    aspect_ratio: Option<f32>,
    ref_lines: Vec<RefLine>,
    annotations: Vec<TextAnnot>,
}

impl Plot {
    /// Create a new plot with the given series and default axes
    pub fn new(series: Vec<Series>) -> Self {
        Plot {
            series,
            x_axis: Axis::new(),
            y_axis: Axis::new(),
            aspect_ratio: None,
            ref_lines: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Set the X axis and return self for chaining
    pub fn with_x_axis(self, x_axis: Axis) -> Self {
        Self { x_axis, ..self }
    }

    /// Set the Y axis and return self for chaining
    pub fn with_y_axis(self, y_axis: Axis) -> Self {
        Self { y_axis, ..self }
    }

    /// Constrain the plot area to a width over height ratio and return
    /// self for chaining. A ratio of 1.0 keeps the data space square,
    /// which radar charts require.
    pub fn with_aspect_ratio(self, aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio: Some(aspect_ratio),
            ..self
        }
    }

    /// Add a reference line and return self for chaining
    pub fn with_ref_line(mut self, ref_line: RefLine) -> Self {
        self.ref_lines.push(ref_line);
        self
    }

    /// Add a text annotation and return self for chaining
    pub fn with_annotation(mut self, annot: TextAnnot) -> Self {
        self.annotations.push(annot);
        self
    }

    /// The series of the plot
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The X axis
    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    /// The Y axis
    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    /// The aspect ratio constraint, if any
    pub fn aspect_ratio(&self) -> Option<f32> {
        self.aspect_ratio
    }

    /// The reference lines of the plot
    pub fn ref_lines(&self) -> &[RefLine] {
        &self.ref_lines
    }

    /// The text annotations of the plot
    pub fn annotations(&self) -> &[TextAnnot] {
        &self.annotations
    }
}

/// The direction of a reference line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    /// Horizontal line at a fixed Y value
    Horizontal,
    /// Vertical line at a fixed X value
    Vertical,
}

/// A reference line spanning the whole plot area,
/// e.g. the neutral line of an attribute scale
#[derive(Debug, Clone)]
pub struct RefLine {
    dir: Direction,
    pos: f64,
    line: theme::Line,
}

impl RefLine {
    /// A horizontal line at the given Y value
    pub fn horizontal(y: f64) -> Self {
        RefLine {
            dir: Direction::Horizontal,
            pos: y,
            line: theme::Col::Foreground.into(),
        }
    }

    /// A vertical line at the given X value
    pub fn vertical(x: f64) -> Self {
        RefLine {
            dir: Direction::Vertical,
            pos: x,
            line: theme::Col::Foreground.into(),
        }
    }

    /// Set the line style and return self for chaining
    pub fn with_line(self, line: theme::Line) -> Self {
        Self { line, ..self }
    }

    /// Set the line pattern, keeping color and width, and return self
    /// for chaining
    pub fn with_pattern(mut self, pattern: LinePattern) -> Self {
        self.line.pattern = pattern;
        self
    }

    /// The direction of the line
    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// The position of the line on the crossed axis
    pub fn pos(&self) -> f64 {
        self.pos
    }

    /// The line style
    pub fn line(&self) -> &theme::Line {
        &self.line
    }
}

/// A text annotation anchored in data space,
/// e.g. a spoke label of a radar chart
#[derive(Debug, Clone)]
pub struct TextAnnot {
    x: f64,
    y: f64,
    text: String,
    font_size: f32,
    color: theme::Color,
}

impl TextAnnot {
    /// Create a new annotation centered on the given data point
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        TextAnnot {
            x,
            y,
            text: text.into(),
            font_size: defaults::ANNOT_FONT_SIZE,
            color: theme::Col::Foreground.into(),
        }
    }

    /// Set the font size and return self for chaining
    pub fn with_font_size(self, font_size: f32) -> Self {
        Self { font_size, ..self }
    }

    /// Set the text color and return self for chaining
    pub fn with_color(self, color: theme::Color) -> Self {
        Self { color, ..self }
    }

    /// The X anchor in data space
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The Y anchor in data space
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The annotation text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The font size
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// The text color
    pub fn color(&self) -> &theme::Color {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_builder() {
        let plot = Plot::new(vec![])
            .with_x_axis(Axis::new().with_title("Date"))
            .with_aspect_ratio(1.0)
            .with_ref_line(RefLine::horizontal(0.0));
        assert_eq!(plot.x_axis().title(), Some("Date"));
        assert_eq!(plot.aspect_ratio(), Some(1.0));
        assert_eq!(plot.ref_lines().len(), 1);
    }

    #[test]
    fn ref_line_positions() {
        let h = RefLine::horizontal(0.0).with_pattern(LinePattern::Dash(Default::default()));
        let v = RefLine::vertical(2.5);
        assert_eq!(h.dir(), Direction::Horizontal);
        assert_eq!(h.pos(), 0.0);
        assert!(matches!(h.line().pattern, LinePattern::Dash(_)));
        assert_eq!(v.dir(), Direction::Vertical);
        assert_eq!(v.pos(), 2.5);
    }

    #[test]
    fn annotation_anchor() {
        let annot = TextAnnot::new(0.0, 1.2, "Nature").with_font_size(10.0);
        assert_eq!(annot.y(), 1.2);
        assert_eq!(annot.text(), "Nature");
        assert_eq!(annot.font_size(), 10.0);
    }
}
