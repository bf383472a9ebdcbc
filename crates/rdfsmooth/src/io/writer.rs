//! Tab-delimited output of smoothed series.
//!
//! ## Purpose
//!
//! This module names, writes and reads back the per-algorithm output files.
//! Each file holds `x<TAB>y` rows in full-precision scientific notation.
//!
//! ## Key concepts
//!
//! * **Naming**: `<base>_smoothed_ma.dat`, `<base>_smoothed_spline.dat`,
//!   `<base>_smoothed_gaussian.dat`, where `<base>` is the input path with
//!   the file name's final extension removed.
//! * **Missing values**: A position without a value is written as the
//!   literal `nan`, so it never reads back as a real zero.
//! * **Format**: Rows go through `csv` with a tab delimiter and no header.
//!
//! ## Non-goals
//!
//! * Files are written independently; there is no all-or-nothing guarantee.

// External dependencies
use csv::{ReaderBuilder, WriterBuilder};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

// Internal dependencies
use crate::engine::output::SmoothingResult;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Constants
// ============================================================================

/// Token written for a missing value.
pub const MISSING_TOKEN: &str = "nan";

/// Suffix of the moving-average output.
pub const MA_SUFFIX: &str = "_smoothed_ma";

/// Suffix of the spline output.
pub const SPLINE_SUFFIX: &str = "_smoothed_spline";

/// Suffix of the Gaussian output.
pub const GAUSSIAN_SUFFIX: &str = "_smoothed_gaussian";

/// Extension of every data output.
pub const OUTPUT_EXTENSION: &str = "dat";

// ============================================================================
// Output Paths
// ============================================================================

/// Paths of the three smoothed-series files derived from one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Input path without its final extension.
    pub base: PathBuf,

    /// Moving-average output.
    pub moving_average: PathBuf,

    /// Spline output.
    pub spline: PathBuf,

    /// Gaussian output.
    pub gaussian: PathBuf,
}

impl OutputPaths {
    /// Derive output paths from the input file path.
    pub fn for_input(input: impl AsRef<Path>) -> Self {
        let base = strip_extension(input.as_ref());
        Self {
            moving_average: with_suffix(&base, MA_SUFFIX, OUTPUT_EXTENSION),
            spline: with_suffix(&base, SPLINE_SUFFIX, OUTPUT_EXTENSION),
            gaussian: with_suffix(&base, GAUSSIAN_SUFFIX, OUTPUT_EXTENSION),
            base,
        }
    }

    /// Path for a sibling artifact, e.g. the comparison plot.
    pub fn sibling(&self, suffix: &str, extension: &str) -> PathBuf {
        with_suffix(&self.base, suffix, extension)
    }

    /// The three data outputs in moving-average, spline, Gaussian order.
    pub fn all(&self) -> [&Path; 3] {
        [
            self.moving_average.as_path(),
            self.spline.as_path(),
            self.gaussian.as_path(),
        ]
    }
}

fn strip_extension(path: &Path) -> PathBuf {
    match path.file_stem() {
        Some(stem) => path.with_file_name(stem),
        None => path.to_path_buf(),
    }
}

fn with_suffix(base: &Path, suffix: &str, extension: &str) -> PathBuf {
    let mut name = base.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    name.push(".");
    name.push(extension);
    base.with_file_name(name)
}

// ============================================================================
// Writing
// ============================================================================

/// Write a fully populated series.
pub fn write_series(path: impl AsRef<Path>, x: &[f64], y: &[f64]) -> Result<(), SmoothError> {
    write_rows(path.as_ref(), x.iter().copied().zip(y.iter().copied().map(Some)))
}

/// Write a series that may contain missing values.
pub fn write_masked_series(
    path: impl AsRef<Path>,
    x: &[f64],
    y: &[Option<f64>],
) -> Result<(), SmoothError> {
    write_rows(path.as_ref(), x.iter().copied().zip(y.iter().copied()))
}

fn write_rows(
    path: &Path,
    rows: impl Iterator<Item = (f64, Option<f64>)>,
) -> Result<(), SmoothError> {
    let io_error = |e: csv::Error| SmoothError::io(path, io::Error::from(e));
    let mut out = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)
        .map_err(io_error)?;

    let mut count = 0usize;
    for (x, y) in rows {
        let value = match y {
            Some(v) => format!("{v:.18e}"),
            None => MISSING_TOKEN.to_string(),
        };
        out.write_record([format!("{x:.18e}"), value]).map_err(io_error)?;
        count += 1;
    }
    out.flush().map_err(|e| SmoothError::io(path, e))?;

    info!(path = %path.display(), rows = count, "series written");
    Ok(())
}

// ============================================================================
// Reading
// ============================================================================

/// Read a series written by this module; `nan` entries become `None`.
pub fn read_series(path: impl AsRef<Path>) -> Result<(Vec<f64>, Vec<Option<f64>>), SmoothError> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| SmoothError::io(path, io::Error::from(e)))?;

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            if matches!(e.kind(), csv::ErrorKind::Io(_)) {
                return SmoothError::io(path, io::Error::from(e));
            }
            SmoothError::Parse {
                line: e.position().map_or(0, |p| p.line() as usize),
                message: e.to_string(),
            }
        })?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        if record.len() != 2 {
            return Err(SmoothError::Parse {
                line,
                message: format!("expected 2 tab-separated columns, found {}", record.len()),
            });
        }

        let parse = |token: &str| {
            token.parse::<f64>().map_err(|_| SmoothError::Parse {
                line,
                message: format!("'{token}' is not a number"),
            })
        };
        xs.push(parse(&record[0])?);
        let y = parse(&record[1])?;
        ys.push(if y.is_nan() { None } else { Some(y) });
    }

    Ok((xs, ys))
}

// ============================================================================
// Result Export
// ============================================================================

/// Write all three smoothed series of `result` to `paths`.
///
/// Files are written in moving-average, spline, Gaussian order; a failure
/// part-way leaves the earlier files in place.
pub fn write_outputs(result: &SmoothingResult<f64>, paths: &OutputPaths) -> Result<(), SmoothError> {
    write_masked_series(&paths.moving_average, &result.x, &result.moving_average)?;
    write_series(&paths.spline, &result.x, &result.spline)?;
    write_series(&paths.gaussian, &result.x, &result.gaussian)?;
    Ok(())
}
