//! Banded least-squares systems reduced by Givens rotations.
//!
//! ## Purpose
//!
//! B-spline fitting produces an observation matrix where each row has at
//! most `width` consecutive non-zeros. This module rotates such rows one by
//! one into an upper triangular band `R` with right-hand side `z`, so that
//! `R c = z` is the least-squares solution of all rows seen so far.
//!
//! ## Key concepts
//!
//! * **Storage**: `band[i][j] = R[i][i + j]` for `j < width`.
//! * **Residual**: Each rotated row leaves a scalar behind; its square is the
//!   row's contribution to the residual sum of squares.
//! * **Reuse**: A reduced system can be cloned and extended with extra
//!   penalty rows without repeating the observation pass.
//!
//! ## Invariants
//!
//! * Rows never reach past the last column.
//!
//! ## Non-goals
//!
//! * No column pivoting; rank deficiency is reported, not repaired.

// External dependencies
use num_traits::Float;

// ============================================================================
// Rotations
// ============================================================================

/// Givens rotation `(cos, sin)` annihilating `piv` against `ww`; `ww`
/// becomes the rotated diagonal.
#[inline]
fn givens<T: Float>(piv: T, ww: &mut T) -> (T, T) {
    let store = piv.abs();
    let dd = if store >= *ww {
        store * (T::one() + (*ww / piv).powi(2)).sqrt()
    } else {
        *ww * (T::one() + (piv / *ww).powi(2)).sqrt()
    };
    let rotation = (*ww / dd, piv / dd);
    *ww = dd;
    rotation
}

/// Apply a rotation to the pair `(a, b)`.
#[inline]
fn rotate<T: Float>(cos: T, sin: T, a: &mut T, b: &mut T) {
    let (s1, s2) = (*a, *b);
    *b = cos * s2 + sin * s1;
    *a = cos * s1 - sin * s2;
}

// ============================================================================
// Banded QR
// ============================================================================

/// Upper triangular band built by rotating in rows.
#[derive(Debug, Clone)]
pub struct BandedQr<T> {
    band: Vec<Vec<T>>,
    rhs: Vec<T>,
    width: usize,
}

impl<T: Float> BandedQr<T> {
    /// An empty system with `columns` unknowns and band `width`.
    pub fn new(columns: usize, width: usize) -> Self {
        Self {
            band: vec![vec![T::zero(); width]; columns],
            rhs: vec![T::zero(); columns],
            width,
        }
    }

    /// Number of unknowns.
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    /// Check whether the system has no unknowns.
    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Sum of the diagonal of `R`.
    pub fn diagonal_sum(&self) -> T {
        self.band.iter().fold(T::zero(), |acc, row| acc + row[0])
    }

    /// Rotate the row whose first non-zero sits in column `start` into the
    /// band. Returns the part of `value` the band cannot absorb.
    pub fn add_row(&mut self, start: usize, row: &[T], value: T) -> T {
        debug_assert!(row.len() <= self.width, "add_row: row wider than band");

        let n = self.len();
        let mut h = vec![T::zero(); self.width];
        h[..row.len()].copy_from_slice(row);
        let mut leftover = value;

        for j in start..n {
            let piv = h[0];
            if piv != T::zero() {
                let (cos, sin) = givens(piv, &mut self.band[j][0]);
                rotate(cos, sin, &mut leftover, &mut self.rhs[j]);
                for i in 1..self.width {
                    rotate(cos, sin, &mut h[i], &mut self.band[j][i]);
                }
            }

            h.rotate_left(1);
            h[self.width - 1] = T::zero();
            if h.iter().all(|v| *v == T::zero()) {
                break;
            }
        }

        leftover
    }

    /// Back-substitute `R c = z`. Returns `None` if a diagonal entry is zero.
    pub fn solve(&self) -> Option<Vec<T>> {
        let n = self.len();
        let mut c = vec![T::zero(); n];

        for i in (0..n).rev() {
            let diag = self.band[i][0];
            if diag == T::zero() {
                return None;
            }
            let mut store = self.rhs[i];
            for l in 1..self.width.min(n - i) {
                store = store - c[i + l] * self.band[i][l];
            }
            c[i] = store / diag;
        }

        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_system_is_solved_exactly() {
        // 2a + b = 3, a + 3b = 4, b + c = 2, 4c = 4 is consistent at (1, 1, 1).
        let mut qr = BandedQr::new(3, 2);
        assert_eq!(qr.add_row(0, &[2.0, 1.0], 3.0), 0.0);
        assert!(qr.add_row(0, &[1.0, 3.0], 4.0).abs() < 1e-12);
        qr.add_row(1, &[1.0, 1.0], 2.0);
        qr.add_row(2, &[4.0], 4.0);

        let c = qr.solve().unwrap();
        for v in c {
            assert!((v - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_overdetermined_mean() {
        // Least squares of c = 1, c = 2, c = 6 is the mean 3 with residual 14.
        let mut qr = BandedQr::new(1, 1);
        let mut rss = 0.0;
        for v in [1.0, 2.0, 6.0] {
            let r = qr.add_row(0, &[1.0], v);
            rss += r * r;
        }

        assert!((qr.solve().unwrap()[0] - 3.0).abs() < 1e-12);
        assert!((rss - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_rank_deficient() {
        let mut qr = BandedQr::new(2, 2);
        qr.add_row(0, &[1.0], 1.0);
        assert!(qr.solve().is_none());
    }
}
