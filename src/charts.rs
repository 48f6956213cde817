/*!
 * Ready-made dashboard figures.
 *
 * Each function of this module builds one figure of the
 * soundscape-perception dashboard from pre-aggregated data. The figures
 * are returned as [`crate::des::Figure`] values; callers hand them to a
 * rendering surface together with a [`crate::Style`].
 */

use crate::color;
use crate::data::VecColumn;
use crate::des::{Axis, Figure, Plot, RefLine, TextAnnot, Tooltips};
use crate::des::axis::{Kind, Ticks};
use crate::des::series::{Bars, Polygon, Scatter, Segments};
use crate::geom::Point;
use crate::gradient::{self, Gradient};
use crate::radar::RadarLayout;
use crate::style::series::{palette, IndexColor, Palette};
use crate::style::{defaults, series, theme, LinePattern};
use crate::time::DateTime;
use crate::Error;

/// Number of hourly bins in the daily observation chart
pub const HOURS_PER_DAY: usize = 24;

/// Bar chart of observation counts per hour of the day.
///
/// `counts` holds one value per hourly bin, midnight first. Bars are
/// colored by the time-of-day ramp so midnight wraps around through
/// noon and back. The Y axis starts at zero with integer ticks.
///
/// Returns `Error::InconsistentData` unless exactly
/// [`HOURS_PER_DAY`] counts are provided.
pub fn daily_observations_bars(counts: &[f64]) -> Result<Figure, Error> {
    if counts.len() != HOURS_PER_DAY {
        return Err(Error::InconsistentData(format!(
            "expected {} hourly counts, got {}",
            HOURS_PER_DAY,
            counts.len()
        )));
    }
    // H buckets spanning midnight to noon; the back leg of the ramp
    // covers the afternoon, one color per hour bin.
    let ramp = gradient::time_color_ramp(&Gradient::default(), HOURS_PER_DAY / 2 + 1)?;
    debug_assert_eq!(ramp.len(), HOURS_PER_DAY);

    let x: Vec<f64> = (0..HOURS_PER_DAY).map(|h| h as f64).collect();
    let bars = Bars::new(x, counts.to_vec())
        .with_fill(series::Fill::default().with_opacity(defaults::BAR_OPACITY))
        .with_bar_colors(ramp);

    let plot = Plot::new(vec![bars.into()])
        .with_x_axis(
            Axis::new()
                .with_title("Hours of the day")
                .with_ticks(Ticks::new().with_step(1.0))
                .with_grid(None),
        )
        .with_y_axis(
            Axis::new()
                .with_title("Total observations in the study period")
                .with_min(0.0)
                .with_ticks(Ticks::new().with_step(1.0)),
        );

    Ok(Figure::new(plot)
        .with_title("When does the participant make observations?")
        .with_size(defaults::BAR_FIG_SIZE))
}

/// Bar chart of mean presence scores per sound category.
///
/// One bar per category, colored from the series palette by index.
///
/// Returns `Error::InconsistentData` when `labels` and `means` differ
/// in length or are empty.
pub fn sound_category_bars(labels: &[&str], means: &[f64]) -> Result<Figure, Error> {
    if labels.len() != means.len() {
        return Err(Error::InconsistentData(format!(
            "{} labels but {} mean scores",
            labels.len(),
            means.len()
        )));
    }
    if labels.is_empty() {
        return Err(Error::InconsistentData(
            "sound category chart requires at least one category".to_string(),
        ));
    }

    let p = palette::Builtin::default();
    let bar_colors = (0..labels.len()).map(|i| p.get(IndexColor(i))).collect();
    let x: Vec<f64> = (0..labels.len()).map(|i| i as f64).collect();
    let bars = Bars::new(x, means.to_vec())
        .with_fill(series::Fill::default().with_opacity(defaults::BAR_OPACITY))
        .with_bar_colors(bar_colors);

    let categories = labels.iter().map(|l| l.to_string()).collect();
    let plot = Plot::new(vec![bars.into()])
        .with_x_axis(
            Axis::new()
                .with_title("Sound categories")
                .with_kind(Kind::Category(categories))
                .with_grid(None),
        )
        .with_y_axis(
            Axis::new()
                .with_title("Mean presence scores for soundscape composition")
                .with_min(0.0),
        );

    Ok(Figure::new(plot)
        .with_title("How is a typical soundscape composed?")
        .with_size(defaults::BAR_FIG_SIZE))
}

/// Radar figure of per-category values.
///
/// `values` are expected normalized to `[0, 1]`, e.g. through
/// [`crate::data::min_max_scale`]. Spokes are light gray segments,
/// category labels sit outside the unit circle, and the value polygon
/// is filled navy at half opacity with a blue outline. Axes and grid
/// are hidden; the square view box leaves room for the labels.
///
/// Returns `Error::EmptyRadar` for zero categories and
/// `Error::InconsistentData` when `labels` and `values` differ in length.
pub fn radar_chart(title: &str, labels: &[&str], values: &[f64]) -> Result<Figure, Error> {
    let layout = RadarLayout::new(labels.len())?;
    let poly_points = layout.polygon(values)?;

    let origin = Point::from_xy(0.0, 0.0);
    let spokes = Segments::new(layout.spokes().iter().map(|p| (origin, *p)).collect())
        .with_line(
            series::Line::from(color::LIGHTGRAY).with_width(defaults::SPOKE_LINE_WIDTH),
        );
    let polygon = Polygon::new(poly_points)
        .with_fill(series::Fill::from(color::NAVY).with_opacity(defaults::RADAR_POLY_OPACITY))
        .with_line(color::BLUE.into());

    let vb = layout.view_box(defaults::RADAR_VIEW_MARGIN);
    let mut plot = Plot::new(vec![spokes.into(), polygon.into()])
        .with_x_axis(
            Axis::new()
                .hidden()
                .with_min(vb.left() as f64)
                .with_max(vb.right() as f64)
                .with_grid(None),
        )
        .with_y_axis(
            Axis::new()
                .hidden()
                .with_min(vb.bottom() as f64)
                .with_max(vb.top() as f64)
                .with_grid(None),
        )
        .with_aspect_ratio(1.0);
    for (anchor, label) in layout.labels().iter().zip(labels) {
        plot = plot.with_annotation(
            TextAnnot::new(anchor.x as f64, anchor.y as f64, *label)
                .with_font_size(defaults::RADAR_LABEL_FONT_SIZE),
        );
    }

    Ok(Figure::new(plot)
        .with_title(title)
        .with_size(defaults::RADAR_FIG_SIZE))
}

/// Date-time scatter of one observation column.
///
/// `column` is the raw column name; it is prettified for the Y axis
/// label and the figure title. A dashed gray zero line marks the
/// neutral value of the attribute scales.
///
/// Returns `Error::InconsistentData` when `times` and `values` differ
/// in length.
pub fn timeseries_chart(
    column: &str,
    times: &[DateTime],
    values: &[f64],
    tooltips: Option<Tooltips>,
) -> Result<Figure, Error> {
    if times.len() != values.len() {
        return Err(Error::InconsistentData(format!(
            "{} timestamps but {} values for column {}",
            times.len(),
            values.len(),
            column
        )));
    }
    let label = pretty_label(column);

    let mut scatter = Scatter::new(times.to_vec(), values.to_vec()).with_marker(
        series::Marker::from(color::NAVY.with_opacity(defaults::SCATTER_OPACITY))
            .with_size(defaults::MARKER_SIZE),
    );
    if let Some(tooltips) = tooltips {
        scatter = scatter.with_tooltips(tooltips);
    }

    let plot = Plot::new(vec![scatter.into()])
        .with_x_axis(Axis::new().with_title("Date").with_kind(Kind::Time))
        .with_y_axis(Axis::new().with_title(label.clone()))
        .with_ref_line(zero_line(RefLine::horizontal(0.0)));

    Ok(Figure::new(plot)
        .with_title(label)
        .with_size(defaults::TIMESERIES_FIG_SIZE))
}

/// Scatter of two observation columns against each other.
///
/// Axis labels are prettified from the column names; the title reads
/// "X vs Y". Dashed gray zero lines mark the neutral value on both
/// axes.
///
/// Returns `Error::InconsistentData` when `xs` and `ys` differ in
/// length.
pub fn relation_chart(
    x_col: &str,
    y_col: &str,
    xs: &[f64],
    ys: &[f64],
    tooltips: Option<Tooltips>,
) -> Result<Figure, Error> {
    if xs.len() != ys.len() {
        return Err(Error::InconsistentData(format!(
            "{} values for {} but {} values for {}",
            xs.len(),
            x_col,
            ys.len(),
            y_col
        )));
    }
    let x_label = pretty_label(x_col);
    let y_label = pretty_label(y_col);
    let title = format!("{} vs {}", x_label, y_label);

    let mut scatter = Scatter::new(VecColumn::from(xs), ys.to_vec()).with_marker(
        series::Marker::from(color::NAVY.with_opacity(defaults::SCATTER_OPACITY))
            .with_size(defaults::MARKER_SIZE),
    );
    if let Some(tooltips) = tooltips {
        scatter = scatter.with_tooltips(tooltips);
    }

    let plot = Plot::new(vec![scatter.into()])
        .with_x_axis(Axis::new().with_title(x_label))
        .with_y_axis(Axis::new().with_title(y_label))
        .with_ref_line(zero_line(RefLine::horizontal(0.0)))
        .with_ref_line(zero_line(RefLine::vertical(0.0)));

    Ok(Figure::new(plot)
        .with_title(title)
        .with_size(defaults::RELATION_FIG_SIZE))
}

fn zero_line(ref_line: RefLine) -> RefLine {
    ref_line
        .with_line(theme::Line::from(theme::Color::Fixed(color::GRAY)))
        .with_pattern(LinePattern::Dash(Default::default()))
}

/// Turn an underscore-separated column name into capitalized words.
///
/// "Soundscape_pleasantness" becomes "Soundscape Pleasantness".
pub fn pretty_label(column: &str) -> String {
    column
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
