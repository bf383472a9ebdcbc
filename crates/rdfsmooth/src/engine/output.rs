//! Output types for the smoothing comparison.
//!
//! ## Purpose
//!
//! This module defines `SmoothingResult`, which holds the original curve and
//! the three smoothed variants side by side.
//!
//! ## Design notes
//!
//! * **Aligned**: Every series is positionally aligned with `x`.
//! * **Masked**: The moving average uses `Option<T>`; `None` marks positions
//!   where the window did not fit.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * All vectors have the same length as the input data.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic (see the I/O layer).

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::SmoothingConfig;
use crate::primitives::series::{count_present, MaskedSeries};

// ============================================================================
// Result Structure
// ============================================================================

/// The original curve together with its three smoothed variants.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingResult<T> {
    /// Distance values.
    pub x: Vec<T>,

    /// Original intensities.
    pub y: Vec<T>,

    /// Centered moving average (`None` where the window does not fit).
    pub moving_average: MaskedSeries<T>,

    /// Smoothing spline evaluated at `x`.
    pub spline: Vec<T>,

    /// Gaussian-filtered intensities.
    pub gaussian: Vec<T>,

    /// Parameters that produced this result.
    pub config: SmoothingConfig<T>,
}

impl<T: Float> SmoothingResult<T> {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the result holds no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Number of missing moving-average positions.
    pub fn missing_moving_average(&self) -> usize {
        self.moving_average.len() - count_present(&self.moving_average)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SmoothingResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:    {}", self.len())?;
        writeln!(f, "  Window:         {}", self.config.window)?;
        writeln!(f, "  Spline s:       {}", self.config.spline_s)?;
        writeln!(
            f,
            "  Gaussian sigma: {} ({})",
            self.config.gauss_sigma, self.config.gauss_mode
        )?;
        writeln!(f, "  MA missing:     {}", self.missing_moving_average())?;
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12} {:>12}",
            "X", "Y", "Moving_Avg", "Spline", "Gaussian"
        )?;
        writeln!(f, "{:-<width$}", "", width = 60)?;

        // Show first 10 and last 10 rows if more than 20 points
        let n = self.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
            match self.moving_average[idx] {
                Some(v) => write!(f, " {:>12.6}", v)?,
                None => write!(f, " {:>12}", "-")?,
            }
            writeln!(f, " {:>12.6} {:>12.6}", self.spline[idx], self.gaussian[idx])?;
        }

        Ok(())
    }
}
