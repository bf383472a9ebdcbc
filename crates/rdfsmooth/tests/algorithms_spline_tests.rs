//! Tests for the cubic smoothing spline.
//!
//! These tests verify:
//! - Interpolation when the smoothing factor is zero
//! - Reduction to the least-squares cubic for a large smoothing factor
//! - The residual bound at convergence
//! - Tie handling and fit preconditions
//!
//! ## Test Organization
//!
//! 1. **Interpolation** - s = 0 behaviour
//! 2. **Smoothing** - Intermediate and large s
//! 3. **Ties** - Repeated x-values
//! 4. **Errors** - Preconditions

use approx::assert_relative_eq;

use rdfsmooth::algorithms::spline::{spline_smooth, SmoothingSpline};
use rdfsmooth::primitives::errors::SmoothError;

// ============================================================================
// Helper Functions
// ============================================================================

fn wavy(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x
        .iter()
        .map(|&v| (v / 3.0).sin() + 0.1 * (v * 1.7).cos())
        .collect();
    (x, y)
}

/// Least-squares cubic polynomial, returned as its values at `x`.
fn least_squares_cubic(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len() as f64;
    let center = x.iter().sum::<f64>() / n;
    let scale = x.iter().map(|v| (v - center).abs()).fold(0.0, f64::max);
    let u: Vec<f64> = x.iter().map(|v| (v - center) / scale).collect();

    // Normal equations for the powers 1, u, u^2, u^3.
    let mut a = [[0.0f64; 5]; 4];
    for (&ui, &yi) in u.iter().zip(y) {
        let powers = [1.0, ui, ui * ui, ui * ui * ui];
        for r in 0..4 {
            for c in 0..4 {
                a[r][c] += powers[r] * powers[c];
            }
            a[r][4] += powers[r] * yi;
        }
    }
    for k in 0..4 {
        for r in k + 1..4 {
            let f = a[r][k] / a[k][k];
            for c in k..5 {
                a[r][c] -= f * a[k][c];
            }
        }
    }
    let mut coef = [0.0f64; 4];
    for k in (0..4).rev() {
        let tail: f64 = (k + 1..4).map(|c| a[k][c] * coef[c]).sum();
        coef[k] = (a[k][4] - tail) / a[k][k];
    }

    u.iter()
        .map(|&ui| coef[0] + ui * (coef[1] + ui * (coef[2] + ui * coef[3])))
        .collect()
}

fn residual(y: &[f64], fitted: &[f64]) -> f64 {
    y.iter().zip(fitted).map(|(a, b)| (a - b) * (a - b)).sum()
}

// ============================================================================
// Interpolation Tests
// ============================================================================

/// Test that s = 0 reproduces every input value.
#[test]
fn test_zero_smoothing_interpolates() {
    let (x, y) = wavy(30);
    let fitted = spline_smooth(&x, &y, 0.0).unwrap();

    assert_eq!(fitted.len(), y.len());
    for (f, v) in fitted.iter().zip(&y) {
        assert_relative_eq!(*f, *v, epsilon = 1e-12);
    }
}

/// Test that the interpolant of linear data is that line everywhere.
#[test]
fn test_interpolating_linear_data() {
    let x: Vec<f64> = (0..8).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    let spline = SmoothingSpline::fit(&x, &y, 0.0).unwrap();

    assert!(spline.multiplier().is_none());
    assert_relative_eq!(spline.evaluate(2.5), 6.0, epsilon = 1e-10);
    assert_relative_eq!(spline.evaluate(6.25), 13.5, epsilon = 1e-10);
}

/// Test that the interpolant is smooth between knots on non-uniform spacing.
#[test]
fn test_interpolation_non_uniform_knots() {
    let x = vec![0.0, 0.3, 1.1, 1.5, 2.8, 3.0];
    let y: Vec<f64> = x.iter().map(|v: &f64| v.sin()).collect();
    let spline = SmoothingSpline::fit(&x, &y, 0.0).unwrap();

    for (&xi, &yi) in x.iter().zip(&y) {
        assert_relative_eq!(spline.evaluate(xi), yi, epsilon = 1e-12);
    }
    // The interpolant through sin on [0, 3] stays close to sin.
    assert!((spline.evaluate(2.0) - 2.0f64.sin()).abs() < 0.05);
}

// ============================================================================
// Smoothing Tests
// ============================================================================

/// Test that a large smoothing factor gives the least-squares cubic.
#[test]
fn test_large_smoothing_gives_least_squares_cubic() {
    let (x, y) = wavy(25);
    let cubic = least_squares_cubic(&x, &y);

    let spline = SmoothingSpline::fit(&x, &y, 1e6).unwrap();
    assert!(spline.multiplier().is_none());
    assert_eq!(spline.knots(), &[0.0, 24.0]);

    for (&xi, &ci) in x.iter().zip(&cubic) {
        assert_relative_eq!(spline.evaluate(xi), ci, epsilon = 1e-9);
    }
    assert_relative_eq!(spline.residual(), residual(&y, &cubic), epsilon = 1e-9);
}

/// Test the default run: sin(r / 10) on 100 points with S = 110 is already
/// met by the cubic polynomial, whose residual is about 33.31.
#[test]
fn test_default_scenario_is_cubic_polynomial() {
    let x: Vec<f64> = (0..100).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|v| (v / 10.0).sin()).collect();
    let cubic = least_squares_cubic(&x, &y);

    let spline = SmoothingSpline::fit(&x, &y, 110.0).unwrap();
    assert!(spline.multiplier().is_none());
    assert_eq!(spline.iterations(), 0);
    assert_relative_eq!(spline.residual(), 33.308, epsilon = 1e-3);

    for (f, c) in spline.fitted().iter().zip(&cubic) {
        assert_relative_eq!(*f, *c, epsilon = 1e-9);
    }
}

/// Test that an intermediate smoothing factor is met within tolerance.
#[test]
fn test_residual_matches_smoothing_factor() {
    let (x, y) = wavy(50);
    let s = 1.0;

    let spline = SmoothingSpline::fit(&x, &y, s).unwrap();
    let fitted = spline.evaluate_many(&x);
    let rss = residual(&y, &fitted);

    assert!(spline.knots().len() > 2);
    assert!((rss - s).abs() <= 1.5e-3 * s, "rss = {rss}");
    assert_relative_eq!(spline.residual(), rss, epsilon = 1e-9);
}

/// Test that larger smoothing factors give larger residuals.
#[test]
fn test_smoothing_is_monotone_in_s() {
    let (x, y) = wavy(40);
    let rss_small = residual(&y, &spline_smooth(&x, &y, 0.5).unwrap());
    let rss_large = residual(&y, &spline_smooth(&x, &y, 3.0).unwrap());
    assert!(rss_small < rss_large);
}

/// Test that the output length equals the input length.
#[test]
fn test_output_length() {
    let (x, y) = wavy(100);
    assert_eq!(spline_smooth(&x, &y, 110.0).unwrap().len(), 100);
}

// ============================================================================
// Tie Handling Tests
// ============================================================================

/// Test that tied x-values interpolate their mean.
#[test]
fn test_tied_x_interpolates_mean() {
    let x = vec![0.0, 1.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 1.0, 3.0, 2.0, 1.0, 0.0];
    let fitted = spline_smooth(&x, &y, 0.0).unwrap();

    assert_eq!(fitted.len(), 6);
    assert_relative_eq!(fitted[1], 2.0, epsilon = 1e-12);
    assert_relative_eq!(fitted[2], 2.0, epsilon = 1e-12);
    assert_relative_eq!(fitted[3], 2.0, epsilon = 1e-12);
}

/// Test that the tie scatter counts towards the residual.
#[test]
fn test_tied_x_residual_includes_scatter() {
    let x = vec![0.0, 1.0, 1.0, 2.0, 3.0, 4.0];
    let y = vec![0.0, 1.0, 3.0, 2.0, 1.0, 0.0];
    let spline = SmoothingSpline::fit(&x, &y, 0.0).unwrap();
    assert_relative_eq!(spline.residual(), 2.0, epsilon = 1e-12);
    assert_eq!(spline.knots(), &[0.0, 2.0, 4.0]);
    assert_eq!(spline.fitted().len(), 6);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that fewer than four distinct x-values is a fit error.
#[test]
fn test_too_few_distinct_x() {
    let x = vec![0.0, 1.0, 1.0, 2.0, 2.0];
    let y = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert!(matches!(spline_smooth(&x, &y, 0.0), Err(SmoothError::Fit(_))));
}

/// Test that decreasing x is a fit error.
#[test]
fn test_decreasing_x() {
    let x = vec![0.0, 1.0, 3.0, 2.0, 4.0];
    let y = vec![1.0; 5];
    assert!(matches!(spline_smooth(&x, &y, 1.0), Err(SmoothError::Fit(_))));
}

/// Test that a negative smoothing factor is rejected.
#[test]
fn test_negative_smoothing_factor() {
    let (x, y) = wavy(10);
    assert!(matches!(
        spline_smooth(&x, &y, -1.0),
        Err(SmoothError::InvalidParameter { name: "spline-s", .. })
    ));
}

/// Test that mismatched lengths are rejected.
#[test]
fn test_mismatched_lengths() {
    let x = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![0.0, 1.0, 2.0];
    assert!(matches!(
        spline_smooth(&x, &y, 0.0),
        Err(SmoothError::MismatchedInputs { x_len: 4, y_len: 3 })
    ));
}
