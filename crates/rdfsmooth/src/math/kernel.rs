//! Discrete Gaussian kernel for convolution smoothing.
//!
//! ## Purpose
//!
//! This module samples a Gaussian of a given standard deviation on the
//! integer offsets `-r..=r` and normalises the samples to unit sum, giving
//! the weights used by the Gaussian filter.
//!
//! ## Design notes
//!
//! * **Truncation**: The radius is `floor(truncate * sigma + 0.5)`; beyond it
//!   the kernel is treated as zero.
//! * **Limit**: Radii above [`MAX_KERNEL_RADIUS`], or ones that do not fit
//!   in `usize`, are rejected rather than allocated.
//! * **Normalisation**: Weights always sum to one, so constant signals are
//!   preserved exactly up to rounding.
//!
//! ## Invariants
//!
//! * The kernel has odd length `2r + 1` and is symmetric about its center.
//! * All weights are positive.
//! * A radius of zero yields the single weight `[1]` (identity filter).
//!
//! ## Non-goals
//!
//! * This module does not perform the convolution or boundary handling.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

// ============================================================================
// Constants
// ============================================================================

/// Default truncation of the Gaussian kernel, in standard deviations.
pub const DEFAULT_TRUNCATE: f64 = 4.0;

/// Largest supported kernel radius, in samples.
pub const MAX_KERNEL_RADIUS: usize = 1 << 22;

/// Radius `floor(truncate * sigma + 0.5)`, or `None` if it is not finite or
/// exceeds [`MAX_KERNEL_RADIUS`].
pub fn kernel_radius<T: Float>(sigma: T, truncate: T) -> Option<usize> {
    let half = T::from(0.5).unwrap();
    (truncate * sigma + half)
        .floor()
        .to_usize()
        .filter(|&r| r <= MAX_KERNEL_RADIUS)
}

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Normalised, symmetric Gaussian weights.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel<T> {
    weights: Vec<T>,
    radius: usize,
}

impl<T: Float> GaussianKernel<T> {
    /// Sample a Gaussian with standard deviation `sigma`, truncated at
    /// `truncate` standard deviations.
    ///
    /// Both arguments must be positive and finite; callers validate first.
    /// Fails with `InvalidParameter` on `gauss-sigma` if the radius is too
    /// large to allocate.
    pub fn new(sigma: T, truncate: T) -> Result<Self, SmoothError> {
        let half = T::from(0.5).unwrap();
        let radius = kernel_radius(sigma, truncate).ok_or_else(|| {
            SmoothError::invalid_parameter(
                "gauss-sigma",
                sigma.to_f64().unwrap_or(f64::NAN),
                "kernel radius exceeds 4194304 samples",
            )
        })?;

        let neg_half_inv_var = -half / (sigma * sigma);
        let mut weights: Vec<T> = (0..=2 * radius)
            .map(|k| {
                let offset = T::from(k).unwrap() - T::from(radius).unwrap();
                (neg_half_inv_var * offset * offset).exp()
            })
            .collect();

        let total = weights.iter().fold(T::zero(), |acc, &w| acc + w);
        for w in &mut weights {
            *w = *w / total;
        }

        Ok(Self { weights, radius })
    }

    /// Kernel radius `r`; the kernel spans offsets `-r..=r`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Weights ordered from offset `-r` to `+r`.
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Weight at a signed offset from the center (zero outside the support).
    #[inline]
    pub fn weight_at(&self, offset: isize) -> T {
        let idx = offset + self.radius as isize;
        if idx < 0 || idx as usize >= self.weights.len() {
            return T::zero();
        }
        self.weights[idx as usize]
    }
}
