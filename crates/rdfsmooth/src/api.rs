//! High-level API for RDF smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the three smoothing parameters and produces a model
//! that smooths any `(x, y)` curve with all three algorithms at once.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: Parameters are checked when `.build()` is called.
//! * **Strict**: Setting a parameter twice is reported as an error.
//! * **Type-Safe**: Generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RdfSmootherBuilder`] via `RdfSmoother::new()`.
//! 2. Chain configuration methods (`.window()`, `.spline_s()`, ...).
//! 3. Call `.build()` to get a validated [`RdfSmootherModel`].
//! 4. Call `.smooth(&x, &y)` to get a [`SmoothingResult`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{SmoothingConfig, SmoothingExecutor};
use crate::engine::validator::Validator;
use crate::primitives::series::Dataset;

// Publicly re-exported types
pub use crate::algorithms::spline::SmoothingSpline;
pub use crate::engine::output::SmoothingResult;
pub use crate::math::boundary::BoundaryMode;
pub use crate::primitives::errors::SmoothError;

/// Fluent builder for configuring the smoothing comparison.
#[derive(Debug, Clone)]
pub struct RdfSmootherBuilder<T> {
    /// Moving-average window size (default 50).
    pub window: Option<usize>,

    /// Spline residual bound (default 110).
    pub spline_s: Option<T>,

    /// Gaussian standard deviation (default 9).
    pub gauss_sigma: Option<T>,

    /// Gaussian boundary mode (default Reflect).
    pub gauss_mode: Option<BoundaryMode>,

    /// Gaussian truncation radius in standard deviations (default 4).
    pub gauss_truncate: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RdfSmootherBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RdfSmootherBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            window: None,
            spline_s: None,
            gauss_sigma: None,
            gauss_mode: None,
            gauss_truncate: None,
            duplicate_param: None,
        }
    }

    /// Set the moving-average window size.
    pub fn window(mut self, window: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(window);
        self
    }

    /// Set the spline smoothing factor (residual bound).
    pub fn spline_s(mut self, s: T) -> Self {
        if self.spline_s.is_some() {
            self.duplicate_param = Some("spline_s");
        }
        self.spline_s = Some(s);
        self
    }

    /// Set the Gaussian standard deviation.
    pub fn gauss_sigma(mut self, sigma: T) -> Self {
        if self.gauss_sigma.is_some() {
            self.duplicate_param = Some("gauss_sigma");
        }
        self.gauss_sigma = Some(sigma);
        self
    }

    /// Set the Gaussian boundary mode.
    pub fn gauss_mode(mut self, mode: BoundaryMode) -> Self {
        if self.gauss_mode.is_some() {
            self.duplicate_param = Some("gauss_mode");
        }
        self.gauss_mode = Some(mode);
        self
    }

    /// Set the Gaussian truncation radius, in standard deviations.
    pub fn gauss_truncate(mut self, truncate: T) -> Self {
        if self.gauss_truncate.is_some() {
            self.duplicate_param = Some("gauss_truncate");
        }
        self.gauss_truncate = Some(truncate);
        self
    }

    /// Resolve defaults, validate, and produce a model.
    pub fn build(self) -> Result<RdfSmootherModel<T>, SmoothError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = SmoothingConfig::<T>::default();
        let config = SmoothingConfig {
            window: self.window.unwrap_or(defaults.window),
            spline_s: self.spline_s.unwrap_or(defaults.spline_s),
            gauss_sigma: self.gauss_sigma.unwrap_or(defaults.gauss_sigma),
            gauss_mode: self.gauss_mode.unwrap_or(defaults.gauss_mode),
            gauss_truncate: self.gauss_truncate.unwrap_or(defaults.gauss_truncate),
        };
        config.validate()?;

        Ok(RdfSmootherModel {
            executor: SmoothingExecutor::new(config),
        })
    }
}

/// A validated smoothing configuration ready to run.
#[derive(Debug, Clone)]
pub struct RdfSmootherModel<T> {
    executor: SmoothingExecutor<T>,
}

impl<T: Float> RdfSmootherModel<T> {
    /// Parameters this model runs with.
    pub fn config(&self) -> &SmoothingConfig<T> {
        self.executor.config()
    }

    /// Smooth `y` sampled at `x` with all three algorithms.
    pub fn smooth(&self, x: &[T], y: &[T]) -> Result<SmoothingResult<T>, SmoothError> {
        self.executor.run(x, y)
    }
}

impl RdfSmootherModel<f64> {
    /// Smooth a loaded dataset.
    pub fn smooth_dataset(&self, data: &Dataset) -> Result<SmoothingResult<f64>, SmoothError> {
        self.executor.run(data.x(), data.y())
    }
}
