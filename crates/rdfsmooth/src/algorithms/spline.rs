//! Cubic smoothing spline with automatic knot selection.
//!
//! ## Purpose
//!
//! This module fits a cubic spline `g` in B-spline form whose residual sum
//! of squares is bounded by a smoothing factor `S`:
//!
//! ```text
//! sum_i (g(x_i) - y_i)^2 <= S
//! ```
//!
//! Among the splines meeting the bound, the one with the smallest jumps of
//! the third derivative at its interior knots is chosen. `S = 0` gives an
//! interpolating spline; an `S` at least as large as the residual of the
//! least-squares cubic polynomial gives that polynomial.
//!
//! ## Design notes
//!
//! * **Knot selection**: Starting from no interior knots, least-squares
//!   splines are fitted and knots are added at data points inside the
//!   intervals with the largest residual, until the least-squares residual
//!   drops below `S`.
//! * **Smoothing**: On the final knots, jump rows weighted by `1 / p` are
//!   rotated into the observation system. `p -> infinity` is the
//!   least-squares spline, `p = 0` the cubic polynomial. `p` is found by
//!   rational interpolation of `F(p) - S`.
//! * **Ties**: Equal x-values are merged into one weighted point (see
//!   [`group_ties`]); their internal scatter is subtracted from `S`.
//! * **Banded**: Every least-squares solve is a Givens QR of a band of width
//!   five.
//!
//! ## Invariants
//!
//! * At least four distinct x-values.
//! * x-values are non-decreasing.
//! * Interior knots coincide with data points.
//! * On convergence the residual is within 0.1% of `S`.
//!
//! ## Non-goals
//!
//! * Spline degrees other than cubic.
//! * User-supplied knots.

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::banded::BandedQr;
use crate::math::bspline::{basis, find_interval, third_derivative_jumps, DEGREE, ORDER};
use crate::primitives::errors::SmoothError;
use crate::primitives::ties::group_ties;

// ============================================================================
// Constants
// ============================================================================

/// Minimum number of distinct x-values for a cubic smoothing spline.
pub const MIN_DISTINCT_X: usize = 4;

/// Upper bound on iterations for the smoothing parameter.
const MAX_SMOOTHING_ITERATIONS: usize = 20;

/// Relative tolerance on `|F(p) - S| / S`.
const RELATIVE_TOLERANCE: f64 = 1e-3;

/// Step factors used while the root of `F(p) - S` is not yet bracketed.
const SHRINK: f64 = 0.04;
const NEAR: f64 = 0.9;
const FAR: f64 = 0.1;

// ============================================================================
// Smoothing Spline
// ============================================================================

/// A fitted cubic smoothing spline.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingSpline<T> {
    /// Full knot vector with four-fold boundary knots.
    knots: Vec<T>,

    /// B-spline coefficients.
    coefficients: Vec<T>,

    /// Spline values at every original x, ties included.
    fitted: Vec<T>,

    /// Residual sum of squares over the original points.
    residual: T,

    /// Smoothing parameter `p`; `None` for a plain least-squares spline.
    multiplier: Option<T>,

    /// Iterations spent on the smoothing parameter.
    iterations: usize,
}

impl<T: Float> SmoothingSpline<T> {
    /// Fit a smoothing spline through `(x, y)` with residual bound `s`.
    pub fn fit(x: &[T], y: &[T], s: T) -> Result<Self, SmoothError> {
        Validator::validate_lengths(x.len(), y.len())?;
        Validator::validate_smoothing(s)?;
        Validator::validate_abscissae(x)?;

        let groups = group_ties(x, y);
        if groups.len() < MIN_DISTINCT_X {
            return Err(SmoothError::Fit(format!(
                "need at least {MIN_DISTINCT_X} distinct x values, got {}",
                groups.len()
            )));
        }

        let weights: Vec<T> = groups.weights.iter().map(|w| w.sqrt()).collect();
        let fitter = CurveFitter {
            x: &groups.x,
            y: &groups.y,
            w: &weights,
        };

        let budget = s - groups.within_ss;
        let fit = if budget <= T::zero() {
            fitter.interpolate()?
        } else {
            fitter.smooth(budget)?
        };

        let mut spline = SmoothingSpline {
            knots: fit.knots,
            coefficients: fit.coefficients,
            fitted: Vec::new(),
            residual: fit.residual + groups.within_ss,
            multiplier: fit.multiplier,
            iterations: fit.iterations,
        };
        let at_knots = spline.evaluate_many(&groups.x);
        spline.fitted = groups.expand(&at_knots);

        debug!(
            interior_knots = spline.knots.len() - 2 * ORDER,
            residual = spline.residual.to_f64().unwrap_or(f64::NAN),
            multiplier = spline.multiplier.and_then(|p| p.to_f64()),
            iterations = spline.iterations,
            "smoothing spline fitted"
        );

        Ok(spline)
    }

    /// Distinct knots: both boundaries and every interior knot.
    pub fn knots(&self) -> &[T] {
        &self.knots[DEGREE..self.knots.len() - DEGREE]
    }

    /// B-spline coefficients.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Values at the original x positions, in input order.
    pub fn fitted(&self) -> &[T] {
        &self.fitted
    }

    /// Residual sum of squares over the points used for fitting.
    pub fn residual(&self) -> T {
        self.residual
    }

    /// Smoothing parameter, `None` when the least-squares spline on the
    /// selected knots already satisfies the bound.
    pub fn multiplier(&self) -> Option<T> {
        self.multiplier
    }

    /// Iterations used to locate the smoothing parameter.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Evaluate the spline at `t`.
    ///
    /// Outside the data range the end polynomial pieces are extended.
    pub fn evaluate(&self, t: T) -> T {
        let l = find_interval(&self.knots, t);
        let b = basis(&self.knots, t, l);
        b.iter()
            .zip(&self.coefficients[l - DEGREE..=l])
            .fold(T::zero(), |acc, (&bi, &ci)| acc + bi * ci)
    }

    /// Evaluate the spline at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&t| self.evaluate(t)).collect()
    }
}

/// Fit a smoothing spline and return its values at the original `x`.
pub fn spline_smooth<T: Float>(x: &[T], y: &[T], s: T) -> Result<Vec<T>, SmoothError> {
    let spline = SmoothingSpline::fit(x, y, s)?;
    Ok(spline.fitted)
}

// ============================================================================
// Least Squares on Fixed Knots
// ============================================================================

// Outcome of one fitting stage.
struct SplineFit<T> {
    knots: Vec<T>,
    coefficients: Vec<T>,
    residual: T,
    multiplier: Option<T>,
    iterations: usize,
}

// Least-squares spline on a fixed knot vector, kept for the smoothing stage.
struct LeastSquares<T> {
    knots: Vec<T>,
    qr: BandedQr<T>,
    coefficients: Vec<T>,
    residual: T,
}

impl<T: Float> LeastSquares<T> {
    fn into_fit(self) -> SplineFit<T> {
        SplineFit {
            knots: self.knots,
            coefficients: self.coefficients,
            residual: self.residual,
            multiplier: None,
            iterations: 0,
        }
    }
}

// Distinct, weighted data points.
struct CurveFitter<'a, T> {
    x: &'a [T],
    y: &'a [T],
    w: &'a [T],
}

impl<'a, T: Float> CurveFitter<'a, T> {
    fn len(&self) -> usize {
        self.x.len()
    }

    // Interior knots of the interpolating spline: x[2] ..= x[m - 3].
    fn interpolation_knots(&self) -> Vec<T> {
        self.x[2..self.len() - 2].to_vec()
    }

    fn full_knots(&self, interior: &[T]) -> Vec<T> {
        let xb = self.x[0];
        let xe = self.x[self.len() - 1];
        let mut t = Vec::with_capacity(interior.len() + 2 * ORDER);
        t.extend(std::iter::repeat(xb).take(ORDER));
        t.extend_from_slice(interior);
        t.extend(std::iter::repeat(xe).take(ORDER));
        t
    }

    fn least_squares(&self, interior: &[T]) -> Result<LeastSquares<T>, SmoothError> {
        let knots = self.full_knots(interior);
        let mut qr = BandedQr::new(knots.len() - ORDER, ORDER + 1);

        let mut residual = T::zero();
        for ((&xi, &yi), &wi) in self.x.iter().zip(self.y).zip(self.w) {
            let l = find_interval(&knots, xi);
            let row = basis(&knots, xi, l).map(|b| b * wi);
            let leftover = qr.add_row(l - DEGREE, &row, yi * wi);
            residual = residual + leftover * leftover;
        }

        let coefficients = qr
            .solve()
            .ok_or_else(|| SmoothError::Fit("least-squares spline system is singular".into()))?;

        Ok(LeastSquares {
            knots,
            qr,
            coefficients,
            residual,
        })
    }

    // Weighted squared residual of every point.
    fn residual_terms(&self, knots: &[T], coefficients: &[T]) -> Vec<T> {
        self.x
            .iter()
            .zip(self.y)
            .zip(self.w)
            .map(|((&xi, &yi), &wi)| {
                let l = find_interval(knots, xi);
                let value = basis(knots, xi, l)
                    .iter()
                    .zip(&coefficients[l - DEGREE..=l])
                    .fold(T::zero(), |acc, (&b, &c)| acc + b * c);
                let r = wi * (yi - value);
                r * r
            })
            .collect()
    }

    // Residual per knot interval; a point on a knot counts half to each side.
    fn interval_residuals(&self, interior: &[T], terms: &[T]) -> Vec<T> {
        let half = T::from(0.5).unwrap();
        let mut fpint = vec![T::zero(); interior.len() + 1];
        let mut fpart = T::zero();
        let mut interval = 0;
        let mut next = 0;

        for (&xi, &term) in self.x.iter().zip(terms) {
            let crossed = next < interior.len() && xi >= interior[next];
            if crossed {
                next += 1;
            }
            fpart = fpart + term;
            if crossed {
                let store = term * half;
                fpint[interval] = fpart - store;
                interval += 1;
                fpart = store;
            }
        }
        fpint[interior.len()] = fpart;

        fpint
    }

    fn interpolate(&self) -> Result<SplineFit<T>, SmoothError> {
        Ok(self.least_squares(&self.interpolation_knots())?.into_fit())
    }

    fn smooth(&self, budget: T) -> Result<SplineFit<T>, SmoothError> {
        let m = self.len();
        let max_interior = m - ORDER;
        let acc = T::from(RELATIVE_TOLERANCE).unwrap() * budget;

        let mut interior: Vec<T> = Vec::new();
        let mut placement = KnotPlacement::new(m);
        let mut polynomial_residual = T::zero();
        let mut previous_residual = T::zero();
        let mut additions = 0usize;

        let ls = loop {
            let ls = self.least_squares(&interior)?;
            let fp = ls.residual;
            if interior.is_empty() {
                polynomial_residual = fp;
            }

            let excess = fp - budget;
            if excess.abs() < acc {
                return Ok(ls.into_fit());
            }
            if excess < T::zero() {
                if interior.is_empty() {
                    // The least-squares cubic polynomial already fits.
                    return Ok(ls.into_fit());
                }
                break ls;
            }
            if interior.len() == max_interior {
                return Ok(ls.into_fit());
            }

            additions = if additions == 0 {
                1
            } else {
                let mut proposed = additions * 2;
                if previous_residual - fp > acc {
                    let rate = T::from(additions).unwrap() * excess / (previous_residual - fp);
                    proposed = rate.to_usize().unwrap_or(proposed);
                }
                (additions * 2).min(proposed.max(additions / 2).max(1))
            };
            previous_residual = fp;

            let terms = self.residual_terms(&ls.knots, &ls.coefficients);
            let mut fpint = self.interval_residuals(&interior, &terms);
            for _ in 0..additions {
                let added = placement.add_knot(self.x, &mut interior, &mut fpint);
                if !added || interior.len() == max_interior {
                    interior = self.interpolation_knots();
                    break;
                }
            }
            debug!(interior_knots = interior.len(), residual = fp.to_f64(), "knots added");
        };

        self.search_parameter(ls, polynomial_residual, budget, acc)
    }

    // Find p with F(p) = budget on the knots of `ls`.
    fn search_parameter(
        &self,
        ls: LeastSquares<T>,
        polynomial_residual: T,
        budget: T,
        acc: T,
    ) -> Result<SplineFit<T>, SmoothError> {
        let shrink = T::from(SHRINK).unwrap();
        let near = T::from(NEAR).unwrap();
        let far = T::from(FAR).unwrap();

        let jumps = third_derivative_jumps(&ls.knots);
        let columns = ls.qr.len();

        let mut p1 = T::zero();
        let mut f1 = polynomial_residual - budget;
        let mut p3: Option<T> = None;
        let mut f3 = ls.residual - budget;
        let mut p = T::from(columns).unwrap() / ls.qr.diagonal_sum();
        let mut bracketed_above = false;
        let mut bracketed_below = false;

        let mut iterations = 0;
        loop {
            iterations += 1;

            let mut system = ls.qr.clone();
            let pinv = p.recip();
            for (r, row) in jumps.iter().enumerate() {
                system.add_row(r, &row.map(|v| v * pinv), T::zero());
            }
            let coefficients = system
                .solve()
                .ok_or_else(|| SmoothError::Fit("smoothing spline system is singular".into()))?;
            let fp = self
                .residual_terms(&ls.knots, &coefficients)
                .into_iter()
                .fold(T::zero(), |acc, v| acc + v);

            let fit = SplineFit {
                knots: ls.knots.clone(),
                coefficients,
                residual: fp,
                multiplier: Some(p),
                iterations,
            };

            let excess = fp - budget;
            if excess.abs() < acc {
                return Ok(fit);
            }
            if iterations == MAX_SMOOTHING_ITERATIONS {
                warn!(
                    iterations,
                    residual = fp.to_f64().unwrap_or(f64::NAN),
                    target = budget.to_f64().unwrap_or(f64::NAN),
                    "smoothing parameter did not converge; using last iterate"
                );
                return Ok(fit);
            }

            let (p2, f2) = (p, excess);

            if !bracketed_above {
                if f2 - f3 <= acc {
                    // p is too large.
                    p3 = Some(p2);
                    f3 = f2;
                    p = p * shrink;
                    if p <= p1 {
                        p = p1 * near + p2 * far;
                    }
                    continue;
                }
                if f2 < T::zero() {
                    bracketed_above = true;
                }
            }

            if !bracketed_below {
                if f1 - f2 <= acc {
                    // p is too small.
                    p1 = p2;
                    f1 = f2;
                    p = p / shrink;
                    if let Some(upper) = p3 {
                        if p >= upper {
                            p = p2 * far + upper * near;
                        }
                    }
                    continue;
                }
                if f2 > T::zero() {
                    bracketed_below = true;
                }
            }

            if f2 >= f1 || f2 <= f3 {
                warn!(
                    residual = fp.to_f64().unwrap_or(f64::NAN),
                    target = budget.to_f64().unwrap_or(f64::NAN),
                    "smoothing parameter search stalled; using last iterate"
                );
                return Ok(fit);
            }

            p = rational_root(&mut p1, &mut f1, p2, f2, &mut p3, &mut f3);
        }
    }
}

// Root of the rational function through (p1, f1), (p2, f2), (p3, f3), with
// `p3 = None` standing for infinity. Updates the bracket so that f1 > 0 > f3.
fn rational_root<T: Float>(
    p1: &mut T,
    f1: &mut T,
    p2: T,
    f2: T,
    p3: &mut Option<T>,
    f3: &mut T,
) -> T {
    let p = match *p3 {
        None => (*p1 * (*f1 - *f3) * f2 - p2 * (f2 - *f3) * *f1) / ((*f1 - f2) * *f3),
        Some(p3v) => {
            let h1 = *f1 * (f2 - *f3);
            let h2 = f2 * (*f3 - *f1);
            let h3 = *f3 * (*f1 - f2);
            -(*p1 * p2 * h3 + p2 * p3v * h1 + p3v * *p1 * h2) / (*p1 * h1 + p2 * h2 + p3v * h3)
        }
    };

    if f2 < T::zero() {
        *p3 = Some(p2);
        *f3 = f2;
    } else {
        *p1 = p2;
        *f1 = f2;
    }
    p
}

// ============================================================================
// Knot Placement
// ============================================================================

// Number of data points strictly inside each knot interval.
struct KnotPlacement {
    inside: Vec<usize>,
}

impl KnotPlacement {
    fn new(points: usize) -> Self {
        Self {
            inside: vec![points - 2],
        }
    }

    // Split the interval with the largest residual at its middle data point.
    // Returns false if no interval has a data point left to use.
    fn add_knot<T: Float>(&mut self, x: &[T], interior: &mut Vec<T>, fpint: &mut Vec<T>) -> bool {
        let mut best: Option<(usize, usize, usize)> = None;
        let mut fpmax = T::zero();
        let mut begin = 0;
        for (j, &count) in self.inside.iter().enumerate() {
            if count != 0 && fpint[j] > fpmax {
                fpmax = fpint[j];
                best = Some((j, count, begin));
            }
            begin += count + 1;
        }

        let Some((number, count, begin)) = best else {
            return false;
        };

        let half = count / 2 + 1;
        let total = T::from(count).unwrap();
        let left = half - 1;
        let right = count - half;

        self.inside[number] = left;
        self.inside.insert(number + 1, right);
        fpint[number] = fpmax * T::from(left).unwrap() / total;
        fpint.insert(number + 1, fpmax * T::from(right).unwrap() / total);
        interior.insert(number, x[begin + half]);

        true
    }
}
