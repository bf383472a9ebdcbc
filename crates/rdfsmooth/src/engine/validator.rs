//! Input validation for smoothing parameters and data.
//!
//! ## Purpose
//!
//! This module checks tuning parameters and the shape of input data before
//! any smoothing is attempted.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Float parameters are validated generically over `Float`.
//!
//! ## Invariants
//!
//! * Window sizes are at least 1.
//! * Smoothing factors are finite and non-negative.
//! * Sigma and truncation are finite and strictly positive.
//! * The Gaussian kernel radius fits in memory.
//! * Spline abscissae are finite and non-decreasing.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not perform the smoothing itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::kernel_radius;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing configuration and input data.
///
/// All methods fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that x and y are non-empty and of equal length.
    pub fn validate_lengths(x_len: usize, y_len: usize) -> Result<(), SmoothError> {
        if x_len != y_len {
            return Err(SmoothError::MismatchedInputs { x_len, y_len });
        }
        if x_len == 0 {
            return Err(SmoothError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that spline abscissae are finite and non-decreasing.
    pub fn validate_abscissae<T: Float>(x: &[T]) -> Result<(), SmoothError> {
        if let Some(i) = x.iter().position(|v| !v.is_finite()) {
            return Err(SmoothError::Fit(format!(
                "x[{}]={} is not finite",
                i,
                x[i].to_f64().unwrap_or(f64::NAN)
            )));
        }

        if let Some(i) = x.windows(2).position(|w| w[1] < w[0]) {
            return Err(SmoothError::Fit(format!(
                "x must be non-decreasing, but x[{}]={} > x[{}]={}",
                i,
                x[i].to_f64().unwrap_or(f64::NAN),
                i + 1,
                x[i + 1].to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the moving-average window size.
    pub fn validate_window(window: usize) -> Result<(), SmoothError> {
        if window == 0 {
            return Err(SmoothError::invalid_parameter(
                "window",
                window,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Validate the spline smoothing factor.
    pub fn validate_smoothing<T: Float>(s: T) -> Result<(), SmoothError> {
        if !s.is_finite() || s < T::zero() {
            return Err(SmoothError::invalid_parameter(
                "spline-s",
                s.to_f64().unwrap_or(f64::NAN),
                "must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Validate the Gaussian standard deviation.
    pub fn validate_sigma<T: Float>(sigma: T) -> Result<(), SmoothError> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(SmoothError::invalid_parameter(
                "gauss-sigma",
                sigma.to_f64().unwrap_or(f64::NAN),
                "must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Validate the Gaussian truncation radius (in standard deviations).
    pub fn validate_truncate<T: Float>(truncate: T) -> Result<(), SmoothError> {
        if !truncate.is_finite() || truncate <= T::zero() {
            return Err(SmoothError::invalid_parameter(
                "gauss-truncate",
                truncate.to_f64().unwrap_or(f64::NAN),
                "must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Validate that `sigma` and `truncate` give an allocatable kernel.
    pub fn validate_kernel_radius<T: Float>(sigma: T, truncate: T) -> Result<(), SmoothError> {
        if kernel_radius(sigma, truncate).is_none() {
            return Err(SmoothError::invalid_parameter(
                "gauss-sigma",
                sigma.to_f64().unwrap_or(f64::NAN),
                "kernel radius exceeds 4194304 samples",
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SmoothError> {
        if let Some(param) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
