//! Error types for RDF smoothing operations.
//!
//! ## Purpose
//!
//! This module defines every error condition the smoothing pipeline can
//! report: reading and writing files, parsing input rows, spline fitting
//! preconditions, and parameter constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value, line number or path.
//! * **Fatal**: No variant is recoverable; callers report and stop.
//! * **Derived**: `Display` and `std::error::Error` come from `thiserror`.
//!
//! ## Key concepts
//!
//! 1. **I/O**: Unreadable input or unwritable output files.
//! 2. **Parsing**: Rows that are not exactly two numeric fields.
//! 3. **Fitting**: Spline preconditions on the x-values.
//! 4. **Parameters**: Window, smoothing factor, sigma and truncation bounds.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for RDF smoothing operations.
#[derive(Debug, Error)]
pub enum SmoothError {
    /// A file could not be opened, read, or written.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An input row is malformed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input file.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// Spline fitting preconditions are violated.
    #[error("Fit error: {0}")]
    Fit(String),

    /// A tuning parameter is outside its valid range.
    #[error("Invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        /// Parameter name as exposed on the command line.
        name: &'static str,
        /// The rejected value, formatted.
        value: String,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// The input contains no data rows.
    #[error("Input contains no data rows")]
    EmptyInput,

    /// `x` and `y` have a different number of elements.
    #[error("Length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedInputs {
        /// Number of elements in `x`.
        x_len: usize,
        /// Number of elements in `y`.
        y_len: usize,
    },

    /// Parameter was set multiple times in the builder.
    #[error("Parameter '{parameter}' was set multiple times. Each parameter can only be configured once.")]
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The plotting backend failed to render the comparison chart.
    #[error("Plot error: {0}")]
    Plot(String),
}

impl SmoothError {
    /// Build an `Io` error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an `InvalidParameter` error.
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
