//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! The three independent smoothers. Each takes a y-series (and x for the
//! spline) plus one tuning parameter and returns a series of the same length.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Centered moving average.
pub mod moving_average;

/// Cubic smoothing spline.
pub mod spline;

/// Gaussian filter.
pub mod gaussian;
