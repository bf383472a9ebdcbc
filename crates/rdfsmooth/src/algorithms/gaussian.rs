//! One-dimensional Gaussian filter.
//!
//! ## Purpose
//!
//! This module convolves a sequence with a truncated, normalised Gaussian
//! kernel. Values beyond the sequence ends are supplied by a
//! [`BoundaryMode`] (reflect by default).
//!
//! ## Design notes
//!
//! * **Periodic modes**: When the kernel is longer than one period of the
//!   extension it is first folded modulo the period, so the cost per sample
//!   is bounded by the period.
//! * **Nearest**: The clamped tails contribute the edge sample times a
//!   prefix sum of weights.
//! * **Constant**: Only the part of the kernel over the data is summed.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * A kernel of radius zero reproduces the input exactly.
//! * A constant input is returned unchanged (up to rounding) for every mode
//!   except `Constant`.
//!
//! ## Non-goals
//!
//! * No derivative-of-Gaussian orders.

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::boundary::BoundaryMode;
use crate::math::kernel::GaussianKernel;
use crate::primitives::errors::SmoothError;

/// Smooth `y` with a Gaussian of standard deviation `sigma` (in samples).
pub fn gaussian_filter<T: Float>(
    y: &[T],
    sigma: T,
    mode: BoundaryMode,
    truncate: T,
) -> Result<Vec<T>, SmoothError> {
    Validator::validate_sigma(sigma)?;
    Validator::validate_truncate(truncate)?;

    let kernel = GaussianKernel::new(sigma, truncate)?;
    debug!(radius = kernel.radius(), mode = %mode, "gaussian kernel built");

    Ok(convolve(y, &kernel, mode))
}

/// Correlate `y` with a symmetric kernel under the given boundary mode.
pub fn convolve<T: Float>(y: &[T], kernel: &GaussianKernel<T>, mode: BoundaryMode) -> Vec<T> {
    let n = y.len();
    if n == 0 {
        return Vec::new();
    }

    match mode.period(n) {
        Some(period) if kernel.weights().len() > period => convolve_folded(y, kernel, mode, period),
        Some(_) => convolve_direct(y, kernel, mode),
        None => convolve_clipped(y, kernel, mode),
    }
}

// Every kernel tap resolved through the boundary mode.
fn convolve_direct<T: Float>(y: &[T], kernel: &GaussianKernel<T>, mode: BoundaryMode) -> Vec<T> {
    let n = y.len();
    let radius = kernel.radius() as isize;
    let weights = kernel.weights();

    (0..n as isize)
        .map(|i| {
            let mut acc = T::zero();
            for (k, &w) in weights.iter().enumerate() {
                if let Some(idx) = mode.resolve(i + k as isize - radius, n) {
                    acc = acc + w * y[idx];
                }
            }
            acc
        })
        .collect()
}

// Kernel folded onto one period of a periodic extension.
fn convolve_folded<T: Float>(
    y: &[T],
    kernel: &GaussianKernel<T>,
    mode: BoundaryMode,
    period: usize,
) -> Vec<T> {
    let n = y.len();
    let radius = kernel.radius() as isize;
    let span = period as isize;

    let mut folded = vec![T::zero(); period];
    for (k, &w) in kernel.weights().iter().enumerate() {
        let d = (k as isize - radius).rem_euclid(span) as usize;
        folded[d] = folded[d] + w;
    }

    (0..n as isize)
        .map(|i| {
            folded
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (d, &w)| match mode.resolve(i + d as isize, n) {
                    Some(idx) => acc + w * y[idx],
                    None => acc,
                })
        })
        .collect()
}

// Taps over the data summed directly; taps beyond the ends are zero
// (`Constant`) or the edge sample (`Nearest`).
fn convolve_clipped<T: Float>(y: &[T], kernel: &GaussianKernel<T>, mode: BoundaryMode) -> Vec<T> {
    let n = y.len();
    let radius = kernel.radius();
    let weights = kernel.weights();

    // prefix[k] = weights[0] + .. + weights[k - 1]
    let mut prefix = Vec::with_capacity(weights.len() + 1);
    prefix.push(T::zero());
    for &w in weights {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + w);
    }
    let total = prefix[weights.len()];

    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(radius);
            let hi = (i + radius).min(n - 1);
            let mut acc = T::zero();
            for (j, &v) in y.iter().enumerate().take(hi + 1).skip(lo) {
                acc = acc + kernel.weight_at(j as isize - i as isize) * v;
            }

            if mode == BoundaryMode::Nearest {
                let left = prefix[radius.saturating_sub(i)];
                let right = total - prefix[(radius + n - i).min(weights.len())];
                acc = acc + left * y[0] + right * y[n - 1];
            }
            acc
        })
        .collect()
}
