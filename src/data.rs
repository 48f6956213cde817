//! Pre-aggregated tabular data handed to chart builders.
//!
//! The dashboard's data-preparation layer aggregates observations
//! upstream; this module only carries the resulting columns and offers
//! the normalization helper radar charts need.

use crate::time::DateTime;

/// A column of pre-aggregated data
#[derive(Debug, Clone, PartialEq)]
pub enum VecColumn {
    /// Numeric values
    F64(Vec<f64>),
    /// Categorical values
    Str(Vec<String>),
    /// Time values
    Time(Vec<DateTime>),
}

impl VecColumn {
    /// The number of samples in the column
    pub fn len(&self) -> usize {
        match self {
            VecColumn::F64(v) => v.len(),
            VecColumn::Str(v) => v.len(),
            VecColumn::Time(v) => v.len(),
        }
    }

    /// Whether the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The numeric values, if this is a numeric column
    pub fn as_f64(&self) -> Option<&[f64]> {
        match self {
            VecColumn::F64(v) => Some(v),
            _ => None,
        }
    }

    /// The categorical values, if this is a categorical column
    pub fn as_str(&self) -> Option<&[String]> {
        match self {
            VecColumn::Str(v) => Some(v),
            _ => None,
        }
    }

    /// The time values, if this is a time column
    pub fn as_time(&self) -> Option<&[DateTime]> {
        match self {
            VecColumn::Time(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Vec<f64>> for VecColumn {
    fn from(col: Vec<f64>) -> Self {
        VecColumn::F64(col)
    }
}

impl From<Vec<String>> for VecColumn {
    fn from(col: Vec<String>) -> Self {
        VecColumn::Str(col)
    }
}

impl From<Vec<DateTime>> for VecColumn {
    fn from(col: Vec<DateTime>) -> Self {
        VecColumn::Time(col)
    }
}

impl From<&[f64]> for VecColumn {
    fn from(col: &[f64]) -> Self {
        VecColumn::F64(col.to_vec())
    }
}

/// Scale values linearly so the minimum maps to 0 and the maximum to 1.
///
/// Radar charts plot each category value along its spoke in `[0, 1]`;
/// scale profile scores with this before handing them to
/// [`crate::charts::radar_chart`].
/// A constant column (max equals min) maps every value to 0.5.
/// Values are assumed finite; NaN input is not defended against.
pub fn min_max_scale(values: &[f64]) -> Vec<f64> {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 || values.is_empty() {
        return vec![0.5; values.len()];
    }
    values.iter().map(|v| (v - min) / range).collect()
}
