/*!
 * Axis design module.
 *
 * The structures of this module describe the properties of an axis in a
 * plot. They are not tied to a specific orientation (X or Y), that is
 * handled at the plot level.
 */

use crate::style::theme;

/// The kind of data an axis carries
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Kind {
    /// A linear numeric axis (the default)
    #[default]
    Linear,
    /// A date-time axis
    Time,
    /// A categorical axis. Tick `i` is labeled with `labels[i]`.
    Category(Vec<String>),
}

/// Tick placement on an axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ticks {
    step: Option<f64>,
}

impl Ticks {
    /// Automatic tick placement
    pub fn new() -> Self {
        Default::default()
    }

    /// Place ticks at multiples of `step` and return self for chaining.
    /// A step of 1.0 yields integer ticks, e.g. for count axes.
    pub fn with_step(self, step: f64) -> Self {
        Self { step: Some(step) }
    }

    /// The tick step, if fixed
    pub fn step(&self) -> Option<f64> {
        self.step
    }
}

/// Grid lines attached to an axis' ticks
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    line: theme::Line,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            line: theme::Col::Grid.into(),
        }
    }
}

impl Grid {
    /// Set the grid line style and return self for chaining
    pub fn with_line(self, line: theme::Line) -> Self {
        Self { line }
    }

    /// The grid line style
    pub fn line(&self) -> &theme::Line {
        &self.line
    }
}

/// Axis definition
#[derive(Debug, Clone)]
pub struct Axis {
    title: Option<String>,
    kind: Kind,
    min: Option<f64>,
    max: Option<f64>,
    ticks: Option<Ticks>,
    grid: Option<Grid>,
    visible: bool,
}

impl Default for Axis {
    /// Create a new axis with default parameters:
    /// linear kind, automatic bounds and ticks, default grid, visible.
    fn default() -> Self {
        Axis {
            title: None,
            kind: Kind::default(),
            min: None,
            max: None,
            ticks: None,
            grid: Some(Grid::default()),
            visible: true,
        }
    }
}

impl Axis {
    /// Effectively the same as `Axis::default()`.
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the axis title and return self for chaining
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Set the axis kind and return self for chaining
    pub fn with_kind(self, kind: Kind) -> Self {
        Self { kind, ..self }
    }

    /// Set the lower bound and return self for chaining
    pub fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    /// Set the upper bound and return self for chaining
    pub fn with_max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    /// Set the tick placement and return self for chaining
    pub fn with_ticks(self, ticks: Ticks) -> Self {
        Self {
            ticks: Some(ticks),
            ..self
        }
    }

    /// Set the grid and return self for chaining
    pub fn with_grid(self, grid: Option<Grid>) -> Self {
        Self { grid, ..self }
    }

    /// Hide the axis line, ticks and labels and return self for chaining.
    /// Used by radar charts, where spokes replace the axes.
    pub fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    /// The axis title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The axis kind
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// The lower bound, if fixed
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// The upper bound, if fixed
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// The tick placement, if fixed
    pub fn ticks(&self) -> Option<&Ticks> {
        self.ticks.as_ref()
    }

    /// The grid, if any
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Whether the axis is visible
    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let axis = Axis::new()
            .with_title("Hours of the day")
            .with_min(0.0)
            .with_ticks(Ticks::new().with_step(1.0))
            .with_grid(None);
        assert_eq!(axis.title(), Some("Hours of the day"));
        assert_eq!(axis.min(), Some(0.0));
        assert_eq!(axis.ticks().unwrap().step(), Some(1.0));
        assert!(axis.grid().is_none());
        assert!(axis.visible());
    }

    #[test]
    fn hidden_axis() {
        let axis = Axis::new().hidden();
        assert!(!axis.visible());
        // default axis carries a grid until explicitly removed
        assert!(axis.grid().is_some());
    }

    #[test]
    fn category_kind() {
        let axis = Axis::new().with_kind(Kind::Category(vec![
            "Nature".to_string(),
            "Music".to_string(),
        ]));
        match axis.kind() {
            Kind::Category(labels) => assert_eq!(labels.len(), 2),
            _ => panic!("expected category axis"),
        }
    }
}
