//! Layer 6: Report
//!
//! # Purpose
//!
//! Visual comparison of the original and smoothed curves.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Report ← You are here
//!   ↓
//! Layer 5: I/O
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// SVG overlay chart.
pub mod plot;
