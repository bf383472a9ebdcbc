//! Execution engine for the three-way smoothing comparison.
//!
//! ## Purpose
//!
//! This module runs the moving-average, spline and Gaussian smoothers over
//! one dataset with a shared configuration and collects their outputs.
//!
//! ## Design notes
//!
//! * **Validate first**: Every parameter is checked before any smoother runs,
//!   so a bad sigma is reported even when the spline would also fail.
//! * **Independent**: Each smoother reads the input slices and returns a fresh
//!   vector; no smoother sees another's output.
//! * **Sequential**: Stages run in a fixed order (moving average, spline,
//!   Gaussian) and the first failure aborts the run.
//!
//! ## Invariants
//!
//! * Every series in the result has the input length.
//!
//! ## Non-goals
//!
//! * This module does not read or write files.

// External dependencies
use num_traits::Float;
use tracing::info;

// Internal dependencies
use crate::algorithms::gaussian::gaussian_filter;
use crate::algorithms::moving_average::moving_average;
use crate::algorithms::spline::spline_smooth;
use crate::engine::output::SmoothingResult;
use crate::engine::validator::Validator;
use crate::math::boundary::BoundaryMode;
use crate::primitives::errors::SmoothError;
use crate::primitives::series::count_present;

// ============================================================================
// Configuration
// ============================================================================

/// Default moving-average window, in samples.
pub const DEFAULT_WINDOW: usize = 50;

/// Default spline residual bound.
pub const DEFAULT_SPLINE_S: f64 = 110.0;

/// Default Gaussian standard deviation, in samples.
pub const DEFAULT_GAUSS_SIGMA: f64 = 9.0;

/// Resolved smoothing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingConfig<T> {
    /// Moving-average window size.
    pub window: usize,

    /// Spline residual bound `S`.
    pub spline_s: T,

    /// Gaussian standard deviation.
    pub gauss_sigma: T,

    /// Boundary extension for the Gaussian filter.
    pub gauss_mode: BoundaryMode,

    /// Gaussian truncation radius, in standard deviations.
    pub gauss_truncate: T,
}

impl<T: Float> Default for SmoothingConfig<T> {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            spline_s: T::from(DEFAULT_SPLINE_S).unwrap(),
            gauss_sigma: T::from(DEFAULT_GAUSS_SIGMA).unwrap(),
            gauss_mode: BoundaryMode::default(),
            gauss_truncate: T::from(crate::math::kernel::DEFAULT_TRUNCATE).unwrap(),
        }
    }
}

impl<T: Float> SmoothingConfig<T> {
    /// Check every parameter.
    pub fn validate(&self) -> Result<(), SmoothError> {
        Validator::validate_window(self.window)?;
        Validator::validate_smoothing(self.spline_s)?;
        Validator::validate_sigma(self.gauss_sigma)?;
        Validator::validate_truncate(self.gauss_truncate)?;
        Validator::validate_kernel_radius(self.gauss_sigma, self.gauss_truncate)?;
        Ok(())
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs all three smoothers over a dataset.
#[derive(Debug, Clone)]
pub struct SmoothingExecutor<T> {
    config: SmoothingConfig<T>,
}

impl<T: Float> SmoothingExecutor<T> {
    /// Create an executor for a validated configuration.
    pub fn new(config: SmoothingConfig<T>) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &SmoothingConfig<T> {
        &self.config
    }

    /// Smooth `y` (sampled at `x`) with every algorithm.
    pub fn run(&self, x: &[T], y: &[T]) -> Result<SmoothingResult<T>, SmoothError> {
        Validator::validate_lengths(x.len(), y.len())?;
        self.config.validate()?;

        let cfg = &self.config;

        let ma = moving_average(y, cfg.window)?;
        info!(
            window = cfg.window,
            present = count_present(&ma),
            "moving average done"
        );

        let spline = spline_smooth(x, y, cfg.spline_s)?;
        info!(
            s = cfg.spline_s.to_f64().unwrap_or(f64::NAN),
            "spline done"
        );

        let gaussian = gaussian_filter(y, cfg.gauss_sigma, cfg.gauss_mode, cfg.gauss_truncate)?;
        info!(
            sigma = cfg.gauss_sigma.to_f64().unwrap_or(f64::NAN),
            mode = %cfg.gauss_mode,
            "gaussian filter done"
        );

        Ok(SmoothingResult {
            x: x.to_vec(),
            y: y.to_vec(),
            moving_average: ma,
            spline,
            gaussian,
            config: *cfg,
        })
    }
}
