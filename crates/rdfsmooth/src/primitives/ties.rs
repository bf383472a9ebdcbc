//! Grouping of tied x-values for spline fitting.
//!
//! ## Purpose
//!
//! A cubic spline needs strictly increasing knots. This module collapses runs
//! of equal x-values into a single knot carrying the mean y and a weight
//! equal to the run length, and keeps a mapping back to the original rows.
//!
//! ## Key concepts
//!
//! For a run of k tied points with mean m:
//! `sum (g - y_j)^2 = k * (g - m)^2 + sum (y_j - m)^2`.
//! The second term does not depend on the fit, so it is reported as
//! `within_ss` and deducted from the residual budget by the caller.
//!
//! ## Invariants
//!
//! * `x` is strictly increasing.
//! * `weights[j]` equals the number of original points merged into knot `j`.
//! * `group_of` has one entry per original point.
//!
//! ## Non-goals
//!
//! * This module does not sort; input must already be non-decreasing.

// External dependencies
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Knots obtained by merging tied x-values.
#[derive(Debug, Clone)]
pub struct TiedGroups<T> {
    /// Distinct x-values (strictly increasing).
    pub x: Vec<T>,

    /// Mean y-value for each distinct x.
    pub y: Vec<T>,

    /// Number of original points per distinct x.
    pub weights: Vec<T>,

    /// Index mapping where `group_of[original_pos] = knot_index`.
    pub group_of: Vec<usize>,

    /// Sum of squared deviations of y within each tied group.
    pub within_ss: T,
}

impl<T: Float> TiedGroups<T> {
    /// Number of distinct knots.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check whether there are no knots.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Map per-knot values back to the original rows in O(n) time.
    pub fn expand(&self, per_knot: &[T]) -> Vec<T> {
        self.group_of.iter().map(|&g| per_knot[g]).collect()
    }
}

// ============================================================================
// Grouping Function
// ============================================================================

/// Collapse runs of equal x-values. `x` must be non-decreasing.
pub fn group_ties<T: Float>(x: &[T], y: &[T]) -> TiedGroups<T> {
    let n = x.len();
    let mut gx = Vec::with_capacity(n);
    let mut gy = Vec::with_capacity(n);
    let mut gw = Vec::with_capacity(n);
    let mut group_of = Vec::with_capacity(n);
    let mut within_ss = T::zero();

    let mut start = 0;
    while start < n {
        let mut end = start + 1;
        while end < n && x[end] == x[start] {
            end += 1;
        }

        let count = T::from(end - start).unwrap();
        let mean = y[start..end]
            .iter()
            .fold(T::zero(), |acc, &v| acc + v)
            / count;
        within_ss = y[start..end]
            .iter()
            .fold(within_ss, |acc, &v| acc + (v - mean) * (v - mean));

        let knot = gx.len();
        gx.push(x[start]);
        gy.push(mean);
        gw.push(count);
        group_of.extend(core::iter::repeat(knot).take(end - start));

        start = end;
    }

    TiedGroups {
        x: gx,
        y: gy,
        weights: gw,
        group_of,
        within_ss,
    }
}
