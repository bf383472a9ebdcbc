//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - Discrete Gaussian kernel
//! - Boundary extension for convolution
//! - Cubic B-spline basis and banded least-squares solves for spline fitting
//!
//! These carry no smoothing-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Report
//!   ↓
//! Layer 5: I/O
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Discrete Gaussian kernel.
pub mod kernel;

/// Boundary extension modes.
pub mod boundary;

/// Banded least squares by Givens rotations.
pub mod banded;

/// Cubic B-spline basis.
pub mod bspline;
