/*!
 * Continuous color gradients and the time-of-day color ramp.
 *
 * A [`Gradient`] maps a normalized scalar in `[0, 1]` to a color.
 * The built-in gradients are perceptually continuous colormaps stored as
 * anchor-color lookup tables with linear interpolation in between.
 *
 * [`time_color_ramp`] builds the "there-and-back" ramp used to color
 * hour-of-day bars: the gradient is traversed forward to the midpoint of
 * the day and backward to the end, so midnight and 23h get near-equal
 * colors and the ramp wraps smoothly around the clock.
 */

use crate::color::{self, ColorU8};
use crate::Error;

// Matplotlib anchor values at t = 0, 0.25, 0.5, 0.75, 1.
const PLASMA: &[ColorU8] = &[
    ColorU8::from_html(b"#0d0887"), // deep blue
    ColorU8::from_html(b"#7e03a8"), // purple
    ColorU8::from_html(b"#cc4778"), // magenta
    ColorU8::from_html(b"#f89540"), // orange
    ColorU8::from_html(b"#f0f921"), // yellow
];
const VIRIDIS: &[ColorU8] = &[
    ColorU8::from_html(b"#440154"), // dark purple
    ColorU8::from_html(b"#3b528b"), // blue
    ColorU8::from_html(b"#21918c"), // teal
    ColorU8::from_html(b"#5ec962"), // green
    ColorU8::from_html(b"#fde725"), // yellow
];

/// A continuous mapping from a normalized scalar to a color
#[derive(Debug, Clone)]
pub enum Gradient {
    /// The plasma perceptual colormap (deep blue to yellow).
    /// This is the dashboard default for time-of-day coloring.
    Plasma,
    /// The viridis perceptual colormap (dark purple to yellow)
    Viridis,
    /// A custom gradient from evenly spaced anchor colors.
    /// At least two anchors are required for sampling to be meaningful;
    /// a single anchor yields a constant gradient and no anchors
    /// sample to black.
    Custom(Vec<ColorU8>),
}

impl Default for Gradient {
    fn default() -> Self {
        Gradient::Plasma
    }
}

impl Gradient {
    /// Sample the gradient at `t`.
    ///
    /// `t` is clamped to `[0, 1]`. A custom gradient without anchors
    /// samples to black. NaN input is not defended against: it clamps
    /// according to `f32::clamp` semantics and the resulting color is
    /// unspecified.
    pub fn sample(&self, t: f32) -> ColorU8 {
        sample_anchors(self.anchors(), t)
    }

    fn anchors(&self) -> &[ColorU8] {
        match self {
            Gradient::Plasma => PLASMA,
            Gradient::Viridis => VIRIDIS,
            Gradient::Custom(anchors) => anchors.as_slice(),
        }
    }
}

fn sample_anchors(anchors: &[ColorU8], t: f32) -> ColorU8 {
    match anchors {
        [] => color::BLACK,
        [single] => *single,
        _ => {
            let t = t.clamp(0.0, 1.0);
            let pos = t * (anchors.len() - 1) as f32;
            let idx = (pos.floor() as usize).min(anchors.len() - 2);
            anchors[idx].lerp(anchors[idx + 1], pos - idx as f32)
        }
    }
}

/// Build the there-and-back color ramp over `hours` discrete buckets.
///
/// The index sequence rises `0..=H-1` and falls back `H-2..=1`, is
/// normalized by its maximum `H-1` and mapped through the gradient,
/// yielding exactly `2H-2` colors. Both gradient extremes appear exactly
/// once (at index `0` and `H-1`) and the ramp is symmetric about index
/// `H-1`, so consecutive buckets never jump, including across the wrap
/// from the last bucket back to the first.
///
/// `hours` must be 2 or more, otherwise there is no maximum to normalize
/// by and `Error::InvalidBucketCount` is returned. A custom gradient
/// without anchors is rejected with `Error::InconsistentData`.
pub fn time_color_ramp(gradient: &Gradient, hours: usize) -> Result<Vec<ColorU8>, Error> {
    if hours < 2 {
        return Err(Error::InvalidBucketCount(hours));
    }
    if gradient.anchors().is_empty() {
        return Err(Error::InconsistentData(
            "gradient has no anchor colors".to_string(),
        ));
    }
    let max = (hours - 1) as f32;
    let forward = 0..hours;
    let back = (1..hours - 1).rev();
    Ok(forward
        .chain(back)
        .map(|i| gradient.sample(i as f32 / max))
        .collect())
}

/// Same as [`time_color_ramp`], with colors encoded as HTML hex strings
pub fn time_color_ramp_hex(gradient: &Gradient, hours: usize) -> Result<Vec<String>, Error> {
    Ok(time_color_ramp(gradient, hours)?
        .iter()
        .map(|c| c.html())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_len_is_2h_minus_2() {
        for hours in 2..=32 {
            let ramp = time_color_ramp(&Gradient::Plasma, hours).unwrap();
            assert_eq!(ramp.len(), 2 * hours - 2);
        }
        // the dashboard scenario
        let ramp = time_color_ramp(&Gradient::Plasma, 12).unwrap();
        assert_eq!(ramp.len(), 22);
    }

    #[test]
    fn ramp_rejects_degenerate_bucket_counts() {
        assert!(matches!(
            time_color_ramp(&Gradient::Plasma, 0),
            Err(Error::InvalidBucketCount(0))
        ));
        assert!(matches!(
            time_color_ramp(&Gradient::Plasma, 1),
            Err(Error::InvalidBucketCount(1))
        ));
    }

    #[test]
    fn ramp_hits_both_extremes() {
        let g = Gradient::Plasma;
        let ramp = time_color_ramp(&g, 12).unwrap();
        assert_eq!(ramp[0], g.sample(0.0));
        assert_eq!(ramp[11], g.sample(1.0));
    }

    #[test]
    fn ramp_is_symmetric_about_midpoint() {
        let hours = 12;
        let ramp = time_color_ramp(&Gradient::Viridis, hours).unwrap();
        let mid = hours - 1;
        for k in 1..hours - 1 {
            assert_eq!(ramp[mid + k], ramp[mid - k]);
        }
    }

    #[test]
    fn ramp_wraps_smoothly() {
        // last color maps the same normalized value as the second one
        let g = Gradient::Plasma;
        let ramp = time_color_ramp(&g, 12).unwrap();
        assert_eq!(*ramp.last().unwrap(), ramp[1]);
    }

    #[test]
    fn sample_endpoints_are_anchor_ends() {
        assert_eq!(Gradient::Plasma.sample(0.0), ColorU8::from_html(b"#0d0887"));
        assert_eq!(Gradient::Plasma.sample(1.0), ColorU8::from_html(b"#f0f921"));
        assert_eq!(
            Gradient::Viridis.sample(0.5),
            ColorU8::from_html(b"#21918c")
        );
    }

    #[test]
    fn sample_clamps_out_of_range() {
        let g = Gradient::Viridis;
        assert_eq!(g.sample(-1.0), g.sample(0.0));
        assert_eq!(g.sample(2.0), g.sample(1.0));
    }

    #[test]
    fn custom_gradient_interpolates() {
        let g = Gradient::Custom(vec![
            ColorU8::from_rgb(0, 0, 0),
            ColorU8::from_rgb(200, 100, 50),
        ]);
        assert_eq!(g.sample(0.5), ColorU8::from_rgb(100, 50, 25));

        let constant = Gradient::Custom(vec![ColorU8::from_rgb(10, 20, 30)]);
        assert_eq!(constant.sample(0.0), constant.sample(1.0));
    }

    #[test]
    fn empty_custom_gradient_samples_black() {
        let g = Gradient::Custom(vec![]);
        assert_eq!(g.sample(0.0), color::BLACK);
        assert_eq!(g.sample(0.5), color::BLACK);
    }

    #[test]
    fn ramp_rejects_empty_custom_gradient() {
        assert!(matches!(
            time_color_ramp(&Gradient::Custom(vec![]), 12),
            Err(Error::InconsistentData(_))
        ));
    }

    #[test]
    fn hex_ramp_encodes_html() {
        let hex = time_color_ramp_hex(&Gradient::Plasma, 2).unwrap();
        assert_eq!(hex, vec!["#0d0887".to_string(), "#f0f921".to_string()]);
    }
}
