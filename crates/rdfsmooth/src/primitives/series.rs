//! Dataset and series containers.
//!
//! ## Purpose
//!
//! This module defines the loaded two-column dataset and the masked series
//! produced by smoothers that cannot produce a value at every position.
//!
//! ## Invariants
//!
//! * `x` and `y` of a [`Dataset`] always have the same length.
//! * A [`Dataset`] holds at least one row.

// Internal dependencies
use crate::primitives::errors::SmoothError;

/// A series where some positions carry no value.
pub type MaskedSeries<T> = Vec<Option<T>>;

/// An ordered sequence of `(x, y)` pairs, typically `(r, g(r))`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from aligned columns.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SmoothError> {
        if x.len() != y.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(SmoothError::EmptyInput);
        }
        Ok(Self { x, y })
    }

    /// Distance column.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Intensity column.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Count the positions of a masked series that carry a value.
pub fn count_present<T>(series: &[Option<T>]) -> usize {
    series.iter().filter(|v| v.is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let ds = Dataset::new(vec![0.0, 1.0], vec![2.0, 3.0]).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());

        assert!(matches!(Dataset::new(vec![], vec![]), Err(SmoothError::EmptyInput)));
        assert!(matches!(
            Dataset::new(vec![0.0], vec![]),
            Err(SmoothError::MismatchedInputs { x_len: 1, y_len: 0 })
        ));
    }

    #[test]
    fn test_count_present() {
        assert_eq!(count_present(&[None, Some(1.0), Some(2.0), None]), 2);
    }
}
