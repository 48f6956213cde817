#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]
/*!
 * # soundplot
 * _declarative charts for soundscape dashboards_.
 *
 * Soundplot builds the figures of a soundscape-perception visualization
 * dashboard as plain data: colors, coordinates, axis and series
 * descriptions. It knows nothing about rendering surfaces; a renderer
 * consumes the [`des::Figure`] values this crate produces.
 *
 * ## Supported figure types
 *  - Bar charts (observations per hour of day, sound category composition)
 *  - Radar charts (wellbeing, noise sensitivity and trait profiles)
 *  - Time-series scatter plots
 *  - Relation scatter plots
 *
 * ## Get started
 *
 * The ready-made dashboard figures live in the [`charts`] module:
 *
 * ```
 * use soundplot::charts;
 *
 * // Mean presence score per sound category, pre-aggregated upstream.
 * let labels = ["Nature", "Human", "Traffic", "Music"];
 * let means = [0.62, 0.45, 0.71, 0.18];
 *
 * let fig = charts::sound_category_bars(&labels, &means).unwrap();
 * assert_eq!(fig.plot().series().len(), 1);
 * ```
 *
 * The two computational cores are available on their own:
 *  - [`gradient`] maps the cyclical 0-24h range onto a perceptual
 *    color gradient that wraps back on itself,
 *  - [`radar`] computes spoke angles, label anchors and the filled
 *    polygon of a radar chart.
 *
 * ## Notes about soundplot's design
 *
 * The figure design lies in the [`des`] module, describing figures in a
 * declarative way that ignores everything about rendering surfaces.
 * Theme and palette colors are symbolic ([`style::theme::Color`],
 * [`style::series::Color`]) and are resolved to concrete [`ColorU8`]
 * values only when a renderer applies a [`Style`].
 */

pub mod charts;
pub mod color;
pub mod data;
pub mod des;
pub mod geom;
pub mod gradient;
pub mod radar;
pub mod style;
pub mod time;

pub use color::{Color, ColorU8, ResolveColor};
pub use gradient::Gradient;
pub use radar::RadarLayout;
pub use style::Style;

use std::fmt;

/// Errors that can occur while building chart descriptions
#[derive(Debug, Clone)]
pub enum Error {
    /// The bucket count of a color ramp is too small to normalize over.
    /// Ramps are defined for 2 buckets or more.
    InvalidBucketCount(usize),
    /// A radar layout was requested with zero categories
    EmptyRadar,
    /// Data is inconsistent.
    /// For example, labels and values have different lengths.
    InconsistentData(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBucketCount(h) => {
                write!(f, "Invalid bucket count: {} (must be 2 or more)", h)
            }
            Error::EmptyRadar => write!(f, "Radar layout requires at least one category"),
            Error::InconsistentData(reason) => write!(f, "Inconsistent data: {}", reason),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub(crate) mod tests {
    pub trait Near {
        fn near_abs(&self, other: &Self, tol: f64) -> bool;
        fn near_rel(&self, other: &Self, err: f64) -> bool;
    }

    impl Near for f64 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() <= tol
        }

        fn near_rel(&self, other: &Self, err: f64) -> bool {
            let diff = (self - other).abs();
            let largest = self.abs().max(other.abs());
            diff <= largest * err
        }
    }

    impl Near for f32 {
        fn near_abs(&self, other: &Self, tol: f64) -> bool {
            (self - other).abs() as f64 <= tol
        }

        fn near_rel(&self, other: &Self, err: f64) -> bool {
            let diff = (self - other).abs() as f64;
            let largest = self.abs().max(other.abs()) as f64;
            diff <= largest * err
        }
    }

    macro_rules! assert_near {
        (abs, $a:expr, $b:expr, $tol:expr) => {
            assert!($a.near_abs(&$b, $tol), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nTolerance: {}", $a, $b, $tol);
        };
        (abs, $a:expr, $b:expr) => {
            assert_near!(abs, $a, $b, 1e-8);
        };
        (rel, $a:expr, $b:expr, $err:expr) => {
            assert!($a.near_rel(&$b, $err), "Assertion failed: Values are not close enough.\nValue 1: {:?}\nValue 2: {:?}\nRelative error: {}", $a, $b, $err);
        };
        (rel, $a:expr, $b:expr) => {
            assert_near!(rel, $a, $b, 1e-8);
        };
    }

    pub(crate) use assert_near;
}
