/*!
 * This module deals with colors and style of data series.
 */
use crate::style::{self, defaults};
use crate::ColorU8;

/// A trait for assigning colors to data series
pub trait Palette {
    /// Get the number of colors in the palette before repeating
    fn len(&self) -> usize;

    /// Get a color from the palette by its index
    fn get(&self, color: IndexColor) -> ColorU8;
}

/// A series color identified by its index in a palette
#[derive(Debug, Clone, Copy)]
pub struct IndexColor(pub usize);

impl crate::Color for IndexColor {}

/// A flexible color for data series
#[derive(Debug, Clone, Copy, Default)]
pub enum Color {
    /// Automatic color from the palette, based on the series index
    #[default]
    Auto,
    /// Color from the palette by index
    Index(IndexColor),
    /// Fixed RGB color
    Fixed(ColorU8),
}

impl From<IndexColor> for Color {
    fn from(color: IndexColor) -> Self {
        Color::Index(color)
    }
}

impl From<ColorU8> for Color {
    fn from(color: ColorU8) -> Self {
        Color::Fixed(color)
    }
}

impl crate::Color for Color {}

impl crate::ResolveColor<Color> for (&crate::Style, usize) {
    fn resolve_color(&self, col: &Color) -> ColorU8 {
        match col {
            Color::Auto => self.0.palette.get(IndexColor(self.1)),
            Color::Index(idx) => self.0.palette.get(*idx),
            Color::Fixed(c) => *c,
        }
    }
}

/// Line style for data series
pub type Line = style::Line<Color>;

impl Default for Line {
    fn default() -> Self {
        Line {
            color: Color::default(),
            width: defaults::SERIES_LINE_WIDTH,
            pattern: style::LinePattern::default(),
            opacity: None,
        }
    }
}

impl From<ColorU8> for Line {
    fn from(color: ColorU8) -> Self {
        Line {
            color: color.into(),
            width: defaults::SERIES_LINE_WIDTH,
            pattern: style::LinePattern::default(),
            opacity: None,
        }
    }
}

/// Fill style for data series
pub type Fill = style::Fill<Color>;

impl From<ColorU8> for Fill {
    fn from(color: ColorU8) -> Self {
        Fill::Solid {
            color: color.into(),
            opacity: None,
        }
    }
}

/// Marker style for data series
pub type Marker = style::Marker<Color>;

impl From<ColorU8> for Marker {
    fn from(color: ColorU8) -> Self {
        Marker {
            size: defaults::MARKER_SIZE,
            shape: Default::default(),
            fill: Some(color.into()),
            stroke: None,
        }
    }
}

/// Types for built-in and custom palettes
pub mod palette {

    use crate::style::series::Palette;
    use crate::ColorU8;

    /// Soundplot built-in palettes
    #[derive(Debug, Clone, Copy, Default)]
    pub enum Builtin {
        #[default]
        /// Standard palette, used for sound category bars
        Standard,
        /// Pastel palette, for dark themes
        Pastel,
    }

    impl Palette for Builtin {
        fn len(&self) -> usize {
            match self {
                Builtin::Standard => STANDARD.len(),
                Builtin::Pastel => PASTEL.len(),
            }
        }

        fn get(&self, color: super::IndexColor) -> ColorU8 {
            match self {
                Builtin::Standard => STANDARD[color.0 % STANDARD.len()],
                Builtin::Pastel => PASTEL[color.0 % PASTEL.len()],
            }
        }
    }

    /// A custom palette, e.g. a time-of-day color ramp
    #[derive(Debug, Clone)]
    pub struct Custom(pub Vec<ColorU8>);

    impl Palette for Custom {
        fn len(&self) -> usize {
            self.0.len()
        }

        fn get(&self, color: super::IndexColor) -> ColorU8 {
            self.0[color.0 % self.len()]
        }
    }

    const STANDARD: &[ColorU8] = &[
        ColorU8::from_html(b"#1f77b4"), // blue
        ColorU8::from_html(b"#ff7f0e"), // orange
        ColorU8::from_html(b"#2ca02c"), // green
        ColorU8::from_html(b"#d62728"), // red
        ColorU8::from_html(b"#9467bd"), // purple
        ColorU8::from_html(b"#8c564b"), // brown
        ColorU8::from_html(b"#e377c2"), // pink
        ColorU8::from_html(b"#7f7f7f"), // gray
    ];
    const PASTEL: &[ColorU8] = &[
        ColorU8::from_html(b"#aec7e8"), // light blue
        ColorU8::from_html(b"#ffbb78"), // light orange
        ColorU8::from_html(b"#98df8a"), // light green
        ColorU8::from_html(b"#ff9896"), // light red
        ColorU8::from_html(b"#c5b0d5"), // light purple
        ColorU8::from_html(b"#c49c94"), // light brown
        ColorU8::from_html(b"#f7b6d2"), // light pink
        ColorU8::from_html(b"#c7c7c7"), // light gray
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{self, Gradient};
    use crate::ResolveColor;

    #[test]
    fn builtin_palette_wraps_around() {
        let p = palette::Builtin::Standard;
        assert_eq!(p.get(IndexColor(0)), p.get(IndexColor(p.len())));
    }

    #[test]
    fn auto_color_follows_series_index() {
        let style = crate::Style::light();
        let c0 = (&style, 0usize).resolve_color(&Color::Auto);
        let c1 = (&style, 1usize).resolve_color(&Color::Auto);
        assert_eq!(c0, ColorU8::from_html(b"#1f77b4"));
        assert_eq!(c1, ColorU8::from_html(b"#ff7f0e"));
    }

    #[test]
    fn ramp_as_custom_palette() {
        let ramp = gradient::time_color_ramp(&Gradient::Plasma, 12).unwrap();
        let p = palette::Custom(ramp.clone());
        assert_eq!(p.len(), 22);
        assert_eq!(p.get(IndexColor(0)), ramp[0]);
        assert_eq!(p.get(IndexColor(22)), ramp[0]);
    }
}
