//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates configuration and orchestrates the three smoothers
//! over one dataset, producing a single aligned result.
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
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for the smoothing comparison.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types.
pub mod output;
