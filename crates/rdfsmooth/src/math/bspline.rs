//! Cubic B-spline basis evaluation.
//!
//! ## Purpose
//!
//! This module evaluates the four cubic B-splines that are non-zero on a
//! knot interval, and the jumps of their third derivative at interior knots.
//! Both are needed to fit and evaluate a spline in B-spline form.
//!
//! ## Key concepts
//!
//! * **Knot vector**: `t` holds `DEGREE + 1` copies of each boundary followed
//!   by interior knots; a spline with `n` knots has `n - DEGREE - 1`
//!   coefficients.
//! * **Interval**: `l` with `t[l] <= x < t[l + 1]`; the non-zero B-splines on
//!   it are `B[l - 3] ..= B[l]`.
//! * **Jumps**: The third derivative of a cubic spline is piecewise constant;
//!   its jump at interior knot `t[l]` is a linear form in the five
//!   coefficients `c[l - 4] ..= c[l]`.
//!
//! ## Invariants
//!
//! * Basis values on an interval are non-negative and sum to one.

// External dependencies
use num_traits::Float;

/// Spline degree.
pub const DEGREE: usize = 3;

/// Number of B-splines non-zero on one knot interval.
pub const ORDER: usize = DEGREE + 1;

/// Find `l` with `t[l] <= x < t[l + 1]`, clamped to the valid intervals.
pub fn find_interval<T: Float>(t: &[T], x: T) -> usize {
    let last = t.len() - ORDER - 1;
    let upper = t[..=last].partition_point(|&k| k <= x);
    upper.saturating_sub(1).clamp(DEGREE, last)
}

/// Values of `B[l - 3] ..= B[l]` at `x` (de Boor-Cox recursion).
pub fn basis<T: Float>(t: &[T], x: T, l: usize) -> [T; ORDER] {
    let mut h = [T::zero(); ORDER];
    let mut hh = [T::zero(); ORDER];
    h[0] = T::one();

    for j in 1..=DEGREE {
        hh[..j].copy_from_slice(&h[..j]);
        h[0] = T::zero();
        for i in 1..=j {
            let li = l + i;
            let lj = li - j;
            if t[li] == t[lj] {
                h[i] = T::zero();
                continue;
            }
            let f = hh[i - 1] / (t[li] - t[lj]);
            h[i - 1] = h[i - 1] + f * (t[li] - x);
            h[i] = f * (x - t[lj]);
        }
    }

    h
}

/// Third-derivative jump rows, one per interior knot.
///
/// Row `r` holds the weights of `c[r] ..= c[r + 4]`, scaled so that rows are
/// comparable across knot spacings.
pub fn third_derivative_jumps<T: Float>(t: &[T]) -> Vec<[T; ORDER + 1]> {
    let n = t.len();
    let coefficients = n - ORDER;
    let intervals = coefficients - DEGREE;
    let fac = T::from(intervals).unwrap() / (t[coefficients] - t[DEGREE]);

    (ORDER..coefficients)
        .map(|l| {
            let mut h = [T::zero(); 2 * ORDER];
            for j in 0..ORDER {
                h[j] = t[l] - t[l + j - ORDER];
                h[j + ORDER] = t[l] - t[l + j + 1];
            }

            let row = l - ORDER;
            let mut out = [T::zero(); ORDER + 1];
            for (j, slot) in out.iter_mut().enumerate() {
                let prod = (1..=DEGREE).fold(h[j], |acc, i| acc * h[j + i] * fac);
                let lp = row + j;
                *slot = (t[lp + ORDER] - t[lp]) / prod;
            }
            out
        })
        .collect()
}
