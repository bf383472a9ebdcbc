//! Overlay plot of the original and smoothed curves.
//!
//! ## Purpose
//!
//! This module renders one chart with four traces: the original curve drawn
//! half-transparent and the three smoothed curves drawn opaque, with axes
//! labelled `r` and `g(r)`.
//!
//! ## Design notes
//!
//! * **Backend**: SVG via `plotters`, viewable in any browser.
//! * **Gaps**: Missing moving-average positions split that trace into
//!   separate segments instead of dropping to zero.
//!
//! ## Non-goals
//!
//! * No interactive widgets; the SVG is a static rendering.

// External dependencies
use core::fmt::Display;
use core::ops::Range;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

// Internal dependencies
use crate::engine::output::SmoothingResult;
use crate::primitives::errors::SmoothError;

// ============================================================================
// Options
// ============================================================================

/// Default chart title.
pub const DEFAULT_TITLE: &str = "RDF Smoothing Comparison";

/// Chart layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotOptions {
    /// Chart title.
    pub title: String,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: 1024,
            height: 640,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the comparison chart to an SVG file at `path`.
pub fn render_overlay(
    path: impl AsRef<Path>,
    result: &SmoothingResult<f64>,
    options: &PlotOptions,
) -> Result<(), SmoothError> {
    let path = path.as_ref();
    let (x_range, y_range) = plot_ranges(result);

    let root = SVGBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.title, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("r")
        .y_desc("g(r)")
        .draw()
        .map_err(plot_error)?;

    let original = BLUE.mix(0.5);
    chart
        .draw_series(LineSeries::new(
            result.x.iter().copied().zip(result.y.iter().copied()),
            original.stroke_width(1),
        ))
        .map_err(plot_error)?
        .label("Original")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], original));

    for (i, segment) in present_segments(&result.x, &result.moving_average)
        .into_iter()
        .enumerate()
    {
        let anno = chart
            .draw_series(LineSeries::new(segment, RED.stroke_width(2)))
            .map_err(plot_error)?;
        if i == 0 {
            anno.label("Moving Average")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
        }
    }

    let spline_color = GREEN;
    chart
        .draw_series(LineSeries::new(
            result.x.iter().copied().zip(result.spline.iter().copied()),
            spline_color.stroke_width(2),
        ))
        .map_err(plot_error)?
        .label("Spline")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], spline_color));

    let gaussian_color = MAGENTA;
    chart
        .draw_series(LineSeries::new(
            result.x.iter().copied().zip(result.gaussian.iter().copied()),
            gaussian_color.stroke_width(2),
        ))
        .map_err(plot_error)?
        .label("Gaussian")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], gaussian_color));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;

    info!(path = %path.display(), "comparison plot written");
    Ok(())
}

/// Split a masked series into runs of consecutive present points.
pub fn present_segments(x: &[f64], y: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (&xi, yi) in x.iter().zip(y) {
        match yi {
            Some(v) => current.push((xi, *v)),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

// Axis ranges covering every finite value, padded by 5%.
fn plot_ranges(result: &SmoothingResult<f64>) -> (Range<f64>, Range<f64>) {
    let x_range = padded_range(result.x.iter().copied());
    let ys = result
        .y
        .iter()
        .chain(result.spline.iter())
        .chain(result.gaussian.iter())
        .copied()
        .chain(result.moving_average.iter().flatten().copied());
    (x_range, padded_range(ys))
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (lo - pad)..(hi + pad)
}

fn plot_error(e: impl Display) -> SmoothError {
    SmoothError::Plot(e.to_string())
}
