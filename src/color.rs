//! Color types used throughout soundplot.
//!
//! Colors are plain 8-bit RGBA values. Description structs never resolve
//! theme or palette colors themselves; resolution happens through the
//! [`ResolveColor`] trait, implemented by [`crate::Style`].
use std::str::FromStr;
use std::{error, fmt};

/// A trait for resolving an abstract color into a concrete [`ColorU8`]
pub trait ResolveColor<Color> {
    /// Resolve the given color
    fn resolve_color(&self, color: &Color) -> ColorU8;
}

/// A color that can be resolved into a concrete [`ColorU8`]
pub trait Color: Clone + Copy {
    /// Resolve this color using the given resolver
    #[inline]
    fn resolve<R>(&self, rc: &R) -> ColorU8
    where
        R: ResolveColor<Self>,
        Self: Sized,
    {
        rc.resolve_color(self)
    }
}

impl Color for ColorU8 {}

impl ResolveColor<ColorU8> for () {
    fn resolve_color(&self, color: &ColorU8) -> ColorU8 {
        *color
    }
}

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorU8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl ColorU8 {
    /// Build an opaque color from RGB components
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8 { r, g, b, a: 255 }
    }

    /// Build a color from RGBA components
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        ColorU8 { r, g, b, a }
    }

    /// Build a color from an HTML hex string such as `#1f77b4`.
    ///
    /// Supports `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` forms.
    /// Panics on any other input, so it is meant for compile-time constants.
    /// Use [`FromStr`] for fallible parsing.
    pub const fn from_html(hex: &[u8]) -> Self {
        if hex[0] != b'#' {
            panic!("Invalid hex color");
        }
        match hex.len() {
            4 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                ColorU8::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b)
            }
            5 => {
                let r = hex_to_u8(hex[1]);
                let g = hex_to_u8(hex[2]);
                let b = hex_to_u8(hex[3]);
                let a = hex_to_u8(hex[4]);
                ColorU8::from_rgba(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)
            }
            7 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                ColorU8::from_rgb(r, g, b)
            }
            9 => {
                let r = hex_to_u8(hex[1]) << 4 | hex_to_u8(hex[2]);
                let g = hex_to_u8(hex[3]) << 4 | hex_to_u8(hex[4]);
                let b = hex_to_u8(hex[5]) << 4 | hex_to_u8(hex[6]);
                let a = hex_to_u8(hex[7]) << 4 | hex_to_u8(hex[8]);
                ColorU8::from_rgba(r, g, b, a)
            }
            _ => panic!("Invalid hex color"),
        }
    }

    /// The RGB components
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The RGBA components
    pub const fn rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The red component
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// The green component
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// The blue component
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// The alpha component
    pub const fn alpha(&self) -> u8 {
        self.a
    }

    /// The relative luminance of the color, between 0 and 1
    pub const fn luminance(&self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }

    /// Encode the RGB components as an HTML hex string (e.g. `#1f77b4`)
    pub fn html(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Build a copy with the alpha scaled by the given opacity.
    /// Panics if opacity is outside [0, 1].
    pub const fn with_opacity(self, opacity: f32) -> Self {
        assert!(0.0 <= opacity && opacity <= 1.0);
        ColorU8 {
            a: (self.a as f32 * opacity) as u8,
            ..self
        }
    }

    /// Linear interpolation between two colors, component-wise.
    /// `t` is clamped to [0, 1].
    pub fn lerp(self, other: ColorU8, t: f32) -> ColorU8 {
        let t = t.clamp(0.0, 1.0);
        let comp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        ColorU8 {
            r: comp(self.r, other.r),
            g: comp(self.g, other.g),
            b: comp(self.b, other.b),
            a: comp(self.a, other.a),
        }
    }
}

const fn hex_to_u8(hex: u8) -> u8 {
    match hex {
        b'0'..=b'9' => hex - b'0',
        b'a'..=b'f' => hex - b'a' + 10,
        b'A'..=b'F' => hex - b'A' + 10,
        _ => panic!("Invalid hex character"),
    }
}

/// White
pub const WHITE: ColorU8 = ColorU8::from_html(b"#ffffff");
/// Black
pub const BLACK: ColorU8 = ColorU8::from_html(b"#000000");
/// Navy, the fill color of the dashboard's scatter points and radar polygons
pub const NAVY: ColorU8 = ColorU8::from_html(b"#000080");
/// Blue
pub const BLUE: ColorU8 = ColorU8::from_html(b"#0000ff");
/// Gray, used for zero reference lines
pub const GRAY: ColorU8 = ColorU8::from_html(b"#808080");
/// Light gray, used for radar spokes
pub const LIGHTGRAY: ColorU8 = ColorU8::from_html(b"#d3d3d3");

fn lookup_name(name: &str) -> Option<ColorU8> {
    match name.to_ascii_lowercase().as_str() {
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "navy" => Some(NAVY),
        "blue" => Some(BLUE),
        "gray" | "grey" => Some(GRAY),
        "lightgray" | "lightgrey" => Some(LIGHTGRAY),
        _ => None,
    }
}

/// Parse error for [`ColorU8`]
#[derive(Debug, Clone, Copy)]
pub enum ParseError {
    /// The string is not a recognized color format
    InvalidFormat,
    /// The hex string has an invalid length or digit
    InvalidHex,
    /// The color name is unknown
    UnknownName,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFormat => write!(f, "invalid color format"),
            ParseError::InvalidHex => write!(f, "invalid hex color"),
            ParseError::UnknownName => write!(f, "unknown color name"),
        }
    }
}

impl error::Error for ParseError {}

impl FromStr for ColorU8 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ParseError::InvalidFormat);
        }
        if raw.starts_with('#') {
            let bytes = raw.as_bytes();
            if !matches!(bytes.len(), 4 | 5 | 7 | 9) {
                return Err(ParseError::InvalidHex);
            }
            if bytes[1..].iter().any(|b| !b.is_ascii_hexdigit()) {
                return Err(ParseError::InvalidHex);
            }
            Ok(ColorU8::from_html(bytes))
        } else {
            lookup_name(raw).ok_or(ParseError::UnknownName)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_html_hex() {
        assert_eq!("#000080".parse::<ColorU8>().unwrap(), NAVY);
        assert_eq!("#00f".parse::<ColorU8>().unwrap(), BLUE);

        let c = "#00008080".parse::<ColorU8>().unwrap();
        assert_eq!(c.rgba(), [0, 0, 128, 128]);
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!("navy".parse::<ColorU8>().unwrap(), NAVY);
        assert_eq!("LightGray".parse::<ColorU8>().unwrap(), LIGHTGRAY);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "".parse::<ColorU8>(),
            Err(ParseError::InvalidFormat)
        ));
        assert!(matches!(
            "#12345".parse::<ColorU8>(),
            Err(ParseError::InvalidHex)
        ));
        assert!(matches!(
            "#zzzzzz".parse::<ColorU8>(),
            Err(ParseError::InvalidHex)
        ));
        assert!(matches!(
            "notacolor".parse::<ColorU8>(),
            Err(ParseError::UnknownName)
        ));
    }

    #[test]
    fn html_round_trip() {
        assert_eq!(NAVY.html(), "#000080");
        assert_eq!("#1f77b4".parse::<ColorU8>().unwrap().html(), "#1f77b4");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = ColorU8::from_rgb(0, 0, 0);
        let b = ColorU8::from_rgb(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), ColorU8::from_rgb(100, 50, 25));
        // out of range t clamps
        assert_eq!(a.lerp(b, 2.0), b);
    }
}
