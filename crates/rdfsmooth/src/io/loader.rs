//! Whitespace-delimited two-column input.
//!
//! ## Purpose
//!
//! This module reads `(x, y)` rows from text such as an RDF `.dat` file:
//! two numeric fields per line separated by any amount of whitespace, with
//! no header.
//!
//! ## Design notes
//!
//! * **Strict rows**: Every non-blank line must hold exactly two fields.
//! * **Finite values**: `nan` and `inf` are rejected as parse errors.
//! * **Order-preserving**: Rows are returned as read; no sorting.
//!
//! ## Non-goals
//!
//! * No header detection, comments, or delimiter sniffing.

// External dependencies
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

// Internal dependencies
use crate::primitives::errors::SmoothError;
use crate::primitives::series::Dataset;

/// Read a dataset from `path`.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset, SmoothError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SmoothError::io(path, e))?;
    let dataset = parse_dataset(BufReader::new(file)).map_err(|e| match e {
        SmoothError::Io { source, .. } => SmoothError::io(path, source),
        other => other,
    })?;

    debug!(path = %path.display(), rows = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Parse a dataset from any buffered reader.
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<Dataset, SmoothError> {
    let mut x = Vec::new();
    let mut y = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => SmoothError::Parse {
                line: line_no,
                message: "line is not valid UTF-8".into(),
            },
            _ => SmoothError::io("<input>", e),
        })?;

        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let second = fields.next().ok_or_else(|| SmoothError::Parse {
            line: line_no,
            message: "expected 2 columns, found 1".into(),
        })?;
        let extra = fields.count();
        if extra > 0 {
            return Err(SmoothError::Parse {
                line: line_no,
                message: format!("expected 2 columns, found {}", 2 + extra),
            });
        }

        x.push(parse_field(first, line_no)?);
        y.push(parse_field(second, line_no)?);
    }

    Dataset::new(x, y)
}

// Parse one numeric token, rejecting non-finite values.
fn parse_field(token: &str, line: usize) -> Result<f64, SmoothError> {
    let value: f64 = token.parse().map_err(|_| SmoothError::Parse {
        line,
        message: format!("'{token}' is not a number"),
    })?;

    if !value.is_finite() {
        return Err(SmoothError::Parse {
            line,
            message: format!("'{token}' is not a finite number"),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_whitespace() {
        let text = "0.0 1.0\n  0.5\t\t2.0  \n\n1.0   3.0\n";
        let ds = parse_dataset(text.as_bytes()).unwrap();
        assert_eq!(ds.x(), &[0.0, 0.5, 1.0]);
        assert_eq!(ds.y(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let text = "0.0 1.0\n0.5 abc\n";
        match parse_dataset(text.as_bytes()) {
            Err(SmoothError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_utf8_is_parse_error() {
        let bytes: &[u8] = b"0.0 1.0\n\xff 2.0\n";
        match parse_dataset(bytes) {
            Err(SmoothError::Parse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("UTF-8"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
