/*!
 * # Declarative design module for soundplot
 *
 * This module contains all data structures for the design of dashboard
 * figures. A [`Figure`] is plain data: it references colors symbolically
 * and carries coordinates and labels, leaving rendering entirely to an
 * external surface.
 */
pub mod axis;
pub mod figure;
pub mod plot;
pub mod series;

pub use axis::Axis;
pub use figure::Figure;
pub use plot::{Plot, RefLine, TextAnnot};
pub use series::Series;

/// Tooltip configuration for hoverable series.
///
/// A list of `(label, field)` pairs naming which data fields the
/// rendering glue should surface on hover. This is an explicit
/// configuration value, not process-wide state; the dashboard passes
/// its field list to each chart builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltips(Vec<(String, String)>);

impl Tooltips {
    /// Create an empty tooltip configuration
    pub fn new() -> Self {
        Tooltips(Vec::new())
    }

    /// Add a `(label, field)` pair and return self for chaining
    pub fn with_field(mut self, label: impl Into<String>, field: impl Into<String>) -> Self {
        self.0.push((label.into(), field.into()));
        self
    }

    /// The configured `(label, field)` pairs
    pub fn fields(&self) -> &[(String, String)] {
        &self.0
    }

    /// Whether any field is configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<L, F> FromIterator<(L, F)> for Tooltips
where
    L: Into<String>,
    F: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (L, F)>>(iter: T) -> Self {
        Tooltips(
            iter.into_iter()
                .map(|(l, f)| (l.into(), f.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltips_builder() {
        let tt = Tooltips::new()
            .with_field("Time", "Form_finish_time")
            .with_field("Pleasantness", "Soundscape_pleasantness");
        assert_eq!(tt.fields().len(), 2);
        assert_eq!(tt.fields()[0].1, "Form_finish_time");
        assert!(!tt.is_empty());
    }

    #[test]
    fn tooltips_from_iter() {
        let tt: Tooltips = [("Time", "Time")].into_iter().collect();
        assert_eq!(tt.fields(), &[("Time".to_string(), "Time".to_string())]);
    }
}
