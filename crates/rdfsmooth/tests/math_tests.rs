//! Tests for the math layer: Gaussian kernel and boundary extension.
//!
//! ## Test Organization
//!
//! 1. **Kernel** - Radius, radius limit, normalisation, symmetry
//! 2. **Boundary** - Index mapping per mode, parsing

use approx::assert_relative_eq;

use rdfsmooth::math::boundary::BoundaryMode;
use rdfsmooth::math::kernel::{kernel_radius, GaussianKernel, MAX_KERNEL_RADIUS};
use rdfsmooth::primitives::errors::SmoothError;

// ============================================================================
// Kernel Tests
// ============================================================================

/// Test the truncation radius `floor(truncate * sigma + 0.5)`.
#[test]
fn test_kernel_radius() {
    assert_eq!(GaussianKernel::new(9.0f64, 4.0).unwrap().radius(), 36);
    assert_eq!(GaussianKernel::new(1.0f64, 4.0).unwrap().radius(), 4);
    assert_eq!(GaussianKernel::new(0.1f64, 4.0).unwrap().radius(), 0);
    assert_eq!(GaussianKernel::new(0.125f64, 4.0).unwrap().radius(), 1);
}

/// Test that radii beyond the limit, or beyond `usize`, are rejected.
#[test]
fn test_kernel_radius_limit() {
    assert_eq!(kernel_radius(1e6f64, 4.0), Some(4_000_000));
    assert_eq!(kernel_radius(1.1e6f64, 4.0), None);
    assert_eq!(kernel_radius(1e30f64, 4.0), None);
    assert_eq!(kernel_radius(f64::MAX, 4.0), None);
    assert!(kernel_radius(MAX_KERNEL_RADIUS as f64 / 4.0, 4.0).is_some());

    assert!(matches!(
        GaussianKernel::new(1e30f64, 4.0),
        Err(SmoothError::InvalidParameter { name: "gauss-sigma", .. })
    ));
}

/// Test the period of each boundary extension.
#[test]
fn test_boundary_period() {
    assert_eq!(BoundaryMode::Reflect.period(4), Some(8));
    assert_eq!(BoundaryMode::Mirror.period(4), Some(6));
    assert_eq!(BoundaryMode::Mirror.period(1), Some(1));
    assert_eq!(BoundaryMode::Wrap.period(4), Some(4));
    assert_eq!(BoundaryMode::Nearest.period(4), None);
    assert_eq!(BoundaryMode::Constant.period(4), None);
}

/// Test that weights sum to one and are symmetric.
#[test]
fn test_kernel_normalised_and_symmetric() {
    let k = GaussianKernel::new(2.5f64, 4.0).unwrap();
    let w = k.weights();

    assert_eq!(w.len(), 2 * k.radius() + 1);
    assert_relative_eq!(w.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    for i in 0..w.len() / 2 {
        assert_relative_eq!(w[i], w[w.len() - 1 - i], epsilon = 1e-15);
    }
    assert!(w.windows(2).take(k.radius()).all(|p| p[0] < p[1]));
}

/// Test the ratio between neighbouring weights.
#[test]
fn test_kernel_shape() {
    let k = GaussianKernel::new(2.0f64, 4.0).unwrap();
    let ratio = k.weight_at(1) / k.weight_at(0);
    assert_relative_eq!(ratio, (-1.0f64 / 8.0).exp(), epsilon = 1e-12);
    assert_eq!(k.weight_at(100), 0.0);
}

// ============================================================================
// Boundary Tests
// ============================================================================

fn extended(mode: BoundaryMode, n: usize, from: isize, to: isize) -> Vec<Option<usize>> {
    (from..to).map(|p| mode.resolve(p, n)).collect()
}

/// Test reflect: `d c b a | a b c d | d c b a`.
#[test]
fn test_reflect_mapping() {
    let got = extended(BoundaryMode::Reflect, 4, -4, 8);
    let want = [3, 2, 1, 0, 0, 1, 2, 3, 3, 2, 1, 0];
    assert_eq!(got, want.iter().map(|&i| Some(i)).collect::<Vec<_>>());
}

/// Test mirror: `d c b | a b c d | c b a`.
#[test]
fn test_mirror_mapping() {
    let got = extended(BoundaryMode::Mirror, 4, -3, 7);
    let want = [3, 2, 1, 0, 1, 2, 3, 2, 1, 0];
    assert_eq!(got, want.iter().map(|&i| Some(i)).collect::<Vec<_>>());
}

/// Test nearest and wrap mappings.
#[test]
fn test_nearest_and_wrap_mapping() {
    let nearest = extended(BoundaryMode::Nearest, 3, -2, 5);
    assert_eq!(
        nearest,
        vec![Some(0), Some(0), Some(0), Some(1), Some(2), Some(2), Some(2)]
    );

    let wrap = extended(BoundaryMode::Wrap, 3, -2, 5);
    assert_eq!(
        wrap,
        vec![Some(1), Some(2), Some(0), Some(1), Some(2), Some(0), Some(1)]
    );
}

/// Test constant mode marks outside positions as fill.
#[test]
fn test_constant_mapping() {
    let got = extended(BoundaryMode::Constant, 2, -1, 3);
    assert_eq!(got, vec![None, Some(0), Some(1), None]);
}

/// Test single-element sequences under every periodic mode.
#[test]
fn test_single_element() {
    for mode in [BoundaryMode::Reflect, BoundaryMode::Mirror, BoundaryMode::Wrap] {
        assert_eq!(mode.resolve(-5, 1), Some(0));
        assert_eq!(mode.resolve(7, 1), Some(0));
    }
}

/// Test parsing and display of mode names.
#[test]
fn test_mode_parsing() {
    assert_eq!("reflect".parse::<BoundaryMode>(), Ok(BoundaryMode::Reflect));
    assert_eq!("Mirror".parse::<BoundaryMode>(), Ok(BoundaryMode::Mirror));
    assert!("zero".parse::<BoundaryMode>().is_err());
    assert_eq!(BoundaryMode::default().to_string(), "reflect");
}
