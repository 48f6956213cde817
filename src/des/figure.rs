use crate::des::Plot;
use crate::geom;
use crate::style::{defaults, theme};

/// The figure: a plot together with figure-level decoration.
///
/// A figure is plain data. Colors are symbolic until resolved against a
/// [`crate::Style`], and sizes are in abstract figure units interpreted
/// by the rendering surface.
#[derive(Debug, Clone)]
pub struct Figure {
    plot: Plot,
    title: Option<String>,
    size: geom::Size,
    padding: geom::Padding,
    fill: Option<theme::Fill>,
}

impl Figure {
    /// Create a new figure with the given plot
    pub fn new(plot: Plot) -> Self {
        Figure {
            plot,
            title: None,
            size: defaults::BAR_FIG_SIZE,
            padding: defaults::FIG_PADDING,
            fill: Some(theme::Col::Background.into()),
        }
    }

    /// Set the figure title and return self for chaining
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..self
        }
    }

    /// Set the figure size and return self for chaining
    pub fn with_size(self, size: geom::Size) -> Self {
        Self { size, ..self }
    }

    /// Set the figure padding and return self for chaining
    pub fn with_padding(self, padding: impl Into<geom::Padding>) -> Self {
        Self {
            padding: padding.into(),
            ..self
        }
    }

    /// Set the figure background fill and return self for chaining
    pub fn with_fill(self, fill: Option<theme::Fill>) -> Self {
        Self { fill, ..self }
    }

    /// The plot of the figure
    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    /// The figure title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The figure size
    pub fn size(&self) -> geom::Size {
        self.size
    }

    /// The figure padding
    pub fn padding(&self) -> geom::Padding {
        self.padding
    }

    /// The figure background fill
    pub fn fill(&self) -> Option<&theme::Fill> {
        self.fill.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_defaults() {
        let fig = Figure::new(Plot::new(vec![]));
        assert!(fig.title().is_none());
        assert_eq!(fig.size().width(), 800.0);
        assert!(fig.fill().is_some());
    }

    #[test]
    fn figure_builder() {
        let fig = Figure::new(Plot::new(vec![]))
            .with_title("When does the participant make observations?")
            .with_size(geom::Size::new(400.0, 400.0))
            .with_padding(10.0)
            .with_fill(None);
        assert_eq!(
            fig.title(),
            Some("When does the participant make observations?")
        );
        assert_eq!(fig.size().height(), 400.0);
        assert_eq!(fig.padding().sum_ver(), 20.0);
        assert!(fig.fill().is_none());
    }
}
