//! Style definitions for lines, fills, markers, and themes.
pub(crate) mod defaults;
pub mod series;
pub mod theme;

pub use crate::style::theme::Theme;
use crate::{Color, ColorU8, ResolveColor};

/// Overall style definition for figures
///
/// The style gathers together two main components:
/// - The theme, which defines colors for the figure background, foreground and grid lines.
/// - The palette, which defines colors for data series.
///
/// Chart descriptions reference colors symbolically; a renderer resolves
/// them through the [`ResolveColor`] impls of this struct.
#[derive(Debug, Clone)]
pub struct Style {
    /// Theme used for the figure
    pub theme: Theme,
    /// Palette used for series colors
    pub palette: series::palette::Builtin,
}

impl Style {
    /// Create a new style from the given theme and palette
    pub fn new(theme: Theme, palette: series::palette::Builtin) -> Self {
        Style { theme, palette }
    }

    /// The light style, the dashboard default
    pub fn light() -> Self {
        Style {
            theme: Theme::Light,
            palette: series::palette::Builtin::Standard,
        }
    }

    /// The dark style
    pub fn dark() -> Self {
        Style {
            theme: Theme::Dark,
            palette: series::palette::Builtin::Pastel,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::light()
    }
}

impl ResolveColor<theme::Color> for Style {
    fn resolve_color(&self, col: &theme::Color) -> ColorU8 {
        match col {
            theme::Color::Theme(col) => self.theme.resolve_color(col),
            theme::Color::Fixed(c) => *c,
        }
    }
}

impl ResolveColor<series::IndexColor> for Style {
    fn resolve_color(&self, col: &series::IndexColor) -> ColorU8 {
        use series::Palette;
        self.palette.get(*col)
    }
}

/// Dash pattern for dashed lines
/// A dash pattern is a sequence of lengths that specify the lengths of
/// alternating dashes and gaps.
///
/// The lengths are relative to the line width.
/// So a pattern will scale with the line width and remain visually consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dash(pub Vec<f32>);

impl Default for Dash {
    fn default() -> Self {
        Dash(vec![5.0, 5.0])
    }
}

/// Line pattern defines how the line is drawn
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LinePattern {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line. The pattern is relative to the line width.
    Dash(Dash),
    /// Dotted line. Equivalent to Dash(1.0, 1.0)
    Dot,
}

impl From<Dash> for LinePattern {
    fn from(dash: Dash) -> Self {
        LinePattern::Dash(dash)
    }
}

/// Line style definition
///
/// The color is a generic parameter to support different color resolution
/// strategies, such as fixed colors, theme-based colors, or series-based colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<C: Color> {
    /// Line color
    pub color: C,
    /// Line width in figure units
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern,
    /// Line opacity (0.0 to 1.0)
    pub opacity: Option<f32>,
}

impl<C: Color> Line<C> {
    /// Set the line width in figure units, returning self for chaining
    pub fn with_width(self, width: f32) -> Self {
        Line { width, ..self }
    }

    /// Set the line opacity (0.0 to 1.0), returning self for chaining
    pub fn with_opacity(self, opacity: f32) -> Self {
        Line {
            opacity: Some(opacity),
            ..self
        }
    }

    /// Set the line pattern, returning self for chaining
    pub fn with_pattern(self, pattern: LinePattern) -> Self {
        Line { pattern, ..self }
    }

    /// Resolve the line color, applying opacity if set
    pub fn resolved_color<R>(&self, rc: &R) -> ColorU8
    where
        R: ResolveColor<C>,
    {
        let color = self.color.resolve(rc);
        match self.opacity {
            Some(opacity) => color.with_opacity(opacity),
            None => color,
        }
    }
}

impl<C: Color> From<C> for Line<C> {
    fn from(color: C) -> Self {
        Line {
            color,
            width: 1.0,
            pattern: LinePattern::default(),
            opacity: None,
        }
    }
}

impl<C: Color> From<(C, f32)> for Line<C> {
    fn from((color, width): (C, f32)) -> Self {
        Line {
            color,
            width,
            pattern: LinePattern::default(),
            opacity: None,
        }
    }
}

/// Fill style definition
/// The color is a generic parameter to support different color resolution
/// strategies, such as fixed colors, theme based colors, or series-based colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill<C: Color> {
    /// Solid fill
    Solid {
        /// Fill color
        color: C,
        /// Fill opacity (0.0 to 1.0)
        opacity: Option<f32>,
    },
}

impl<C> Default for Fill<C>
where
    C: Color + Default,
{
    fn default() -> Self {
        Fill::Solid {
            color: C::default(),
            opacity: None,
        }
    }
}

impl<C: Color> Fill<C> {
    /// Set the fill opacity (0.0 to 1.0), returning self for chaining
    pub fn with_opacity(self, opacity: f32) -> Self {
        match self {
            Fill::Solid { color, .. } => Fill::Solid {
                color,
                opacity: Some(opacity),
            },
        }
    }

    /// Resolve the fill color, applying opacity if set
    pub fn resolved_color<R>(&self, rc: &R) -> ColorU8
    where
        R: ResolveColor<C>,
    {
        match self {
            Fill::Solid {
                color,
                opacity: None,
            } => color.resolve(rc),
            Fill::Solid {
                color,
                opacity: Some(opacity),
            } => color.resolve(rc).with_opacity(*opacity),
        }
    }
}

impl<C: Color> From<C> for Fill<C> {
    fn from(color: C) -> Self {
        Fill::Solid {
            color,
            opacity: None,
        }
    }
}

/// Shape of a marker, used in scatter plots
#[derive(Debug, Clone, Copy, Default)]
pub enum MarkerShape {
    /// Circle marker (the default)
    #[default]
    Circle,
    /// Square marker
    Square,
    /// Diamond marker
    Diamond,
}

/// Marker style definition, used in scatter plots
#[derive(Debug, Clone)]
pub struct Marker<C: Color> {
    /// Marker size in figure units
    pub size: f32,
    /// Marker shape
    pub shape: MarkerShape,
    /// Marker fill style
    pub fill: Option<Fill<C>>,
    /// Marker stroke style
    pub stroke: Option<Line<C>>,
}

impl<C> Default for Marker<C>
where
    C: Color + Default,
{
    fn default() -> Self {
        Marker {
            size: defaults::MARKER_SIZE,
            shape: MarkerShape::default(),
            fill: Some(Fill::default()),
            stroke: None,
        }
    }
}

impl<C: Color> Marker<C> {
    /// Set the marker size, returning self for chaining
    pub fn with_size(self, size: f32) -> Self {
        Marker { size, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn resolve_theme_colors() {
        let style = Style::light();

        let grid_line: theme::Line = theme::Col::Grid.into();
        assert_eq!(
            grid_line.resolved_color(&style),
            Theme::Light.palette().grid
        );

        let fixed: theme::Line = (theme::Color::Fixed(color::GRAY), 1.0).into();
        assert_eq!(fixed.resolved_color(&style), color::GRAY);
    }

    #[test]
    fn resolve_series_colors() {
        let style = Style::light();
        let line: Line<series::IndexColor> = (series::IndexColor(2), 2.0).into();
        assert_eq!(line.resolved_color(&style), ColorU8::from_html(b"#2ca02c"));
    }

    #[test]
    fn opacity_applies_to_resolved_color() {
        let fill: Fill<ColorU8> = Fill::from(color::NAVY).with_opacity(0.5);
        let resolved = fill.resolved_color(&());
        assert_eq!(resolved.rgb(), color::NAVY.rgb());
        assert_eq!(resolved.alpha(), 127);
    }
}
