//! Layer 5: I/O
//!
//! # Purpose
//!
//! Reading the two-column input and writing one tab-delimited file per
//! smoothed series.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Report
//!   ↓
//! Layer 5: I/O ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Whitespace-delimited input.
pub mod loader;

/// Tab-delimited output and output naming.
pub mod writer;
