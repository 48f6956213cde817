//! Theme definitions and implementations

use crate::color::{self, ColorU8, ResolveColor};
use crate::style;

/// A theme, for styling figures
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    #[default]
    /// Light theme
    Light,
    /// Dark theme
    Dark,
    /// A custom theme
    Custom(ThemePalette),
}

impl Theme {
    /// Get the background color of the theme
    pub const fn background(&self) -> ColorU8 {
        self.palette().background
    }

    /// Get the foreground color of the theme
    pub const fn foreground(&self) -> ColorU8 {
        self.palette().foreground
    }

    /// Get the grid line color of the theme
    pub const fn grid(&self) -> ColorU8 {
        self.palette().grid
    }

    /// Get the theme palette
    pub const fn palette(&self) -> &ThemePalette {
        match self {
            Theme::Light => &ThemePalette::LIGHT,
            Theme::Dark => &ThemePalette::DARK,
            Theme::Custom(palette) => palette,
        }
    }

    /// Check whether the theme is dark or light.
    /// A theme is considered dark if its background color has a luminance < 0.5
    pub fn is_dark(&self) -> bool {
        self.background().luminance() < 0.5
    }
}

/// The colors used in a theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePalette {
    /// Background color
    pub background: ColorU8,
    /// Foreground color
    pub foreground: ColorU8,
    /// Grid line color
    pub grid: ColorU8,
}

impl ThemePalette {
    /// The light built-in theme palette
    pub const LIGHT: Self = Self {
        background: color::WHITE,
        foreground: color::BLACK,
        grid: ColorU8::from_html(b"#808080").with_opacity(0.6),
    };

    /// The dark built-in theme palette
    pub const DARK: Self = Self {
        background: ColorU8::from_html(b"#1e1e2e"),
        foreground: color::WHITE,
        grid: ColorU8::from_html(b"#c0c0c0").with_opacity(0.6),
    };
}

/// Predefined colors for theme elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Col {
    /// Background color
    Background,
    /// Foreground color
    Foreground,
    /// Grid line color
    Grid,
}

impl crate::Color for Col {}

impl ResolveColor<Col> for Theme {
    fn resolve_color(&self, col: &Col) -> ColorU8 {
        match col {
            Col::Background => self.background(),
            Col::Foreground => self.foreground(),
            Col::Grid => self.grid(),
        }
    }
}

/// A flexible color for theme elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// A color from the theme
    Theme(Col),
    /// A fixed RGB color
    Fixed(ColorU8),
}

impl From<Col> for Color {
    fn from(color: Col) -> Self {
        Color::Theme(color)
    }
}

impl From<ColorU8> for Color {
    fn from(color: ColorU8) -> Self {
        Color::Fixed(color)
    }
}

impl crate::Color for Color {}

impl ResolveColor<Color> for Theme {
    fn resolve_color(&self, col: &Color) -> ColorU8 {
        match col {
            Color::Theme(col) => self.resolve_color(col),
            Color::Fixed(c) => *c,
        }
    }
}

/// Line style for theme elements
pub type Line = style::Line<Color>;

impl From<Col> for Line {
    fn from(col: Col) -> Self {
        Line {
            color: col.into(),
            width: 1.0,
            pattern: style::LinePattern::default(),
            opacity: None,
        }
    }
}

/// Fill style for theme elements
pub type Fill = style::Fill<Color>;

impl From<Col> for Fill {
    fn from(col: Col) -> Self {
        Fill::Solid {
            color: col.into(),
            opacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark() {
        assert!(!Theme::Light.is_dark());
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::Light.foreground(), color::BLACK);
    }

    #[test]
    fn custom_palette_resolves() {
        let theme = Theme::Custom(ThemePalette {
            background: color::BLACK,
            foreground: color::WHITE,
            grid: color::GRAY,
        });
        assert_eq!(theme.resolve_color(&Col::Grid), color::GRAY);
        assert_eq!(
            theme.resolve_color(&Color::Fixed(color::NAVY)),
            color::NAVY
        );
        assert!(theme.is_dark());
    }
}
