//! # rdfsmooth — smoothing comparison for radial distribution functions
//!
//! Smooths a two-column `(r, g(r))` curve with three independent methods and
//! puts the results side by side:
//!
//! - **Moving average**: centered window, missing where the window does not fit.
//! - **Smoothing spline**: cubic B-spline whose residual sum of squares
//!   is bounded by a smoothing factor `s` (`s = 0` interpolates).
//! - **Gaussian filter**: convolution with a truncated Gaussian, reflecting at
//!   the boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use rdfsmooth::prelude::*;
//!
//! let x: Vec<f64> = (0..100).map(f64::from).collect();
//! let y: Vec<f64> = x.iter().map(|v| (v / 10.0).sin()).collect();
//!
//! let model = RdfSmoother::new()
//!     .window(50)
//!     .spline_s(110.0)
//!     .gauss_sigma(9.0)
//!     .build()?;
//!
//! let result = model.smooth(&x, &y)?;
//! assert_eq!(result.spline.len(), 100);
//! assert_eq!(result.moving_average.iter().filter(|v| v.is_none()).count(), 49);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Files
//!
//! ```rust,no_run
//! use rdfsmooth::prelude::*;
//!
//! let data = read_dataset("rdf.dat")?;
//! let result = RdfSmoother::<f64>::new().build()?.smooth_dataset(&data)?;
//!
//! let paths = OutputPaths::for_input("rdf.dat");
//! write_outputs(&result, &paths)?; // rdf_smoothed_{ma,spline,gaussian}.dat
//! render_overlay("rdf_smoothed.svg", &result, &PlotOptions::default())?;
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, SmoothError>`. Errors are
//! fatal: I/O, malformed input rows, spline preconditions, and out-of-range
//! parameters each have their own variant.

// Layer 1: Primitives - data structures and basic utilities.
pub mod primitives;

// Layer 2: Math - pure mathematical functions.
pub mod math;

// Layer 3: Algorithms - the three smoothers.
pub mod algorithms;

// Layer 4: Engine - validation and orchestration.
pub mod engine;

// Layer 5: I/O - input parsing and output files.
pub mod io;

// Layer 6: Report - comparison chart.
pub mod report;

// High-level fluent API.
pub mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        BoundaryMode, RdfSmootherBuilder as RdfSmoother, RdfSmootherModel, SmoothError,
        SmoothingResult, SmoothingSpline,
    };
    pub use crate::engine::executor::SmoothingConfig;
    pub use crate::io::loader::read_dataset;
    pub use crate::io::writer::{read_series, write_outputs, OutputPaths};
    pub use crate::primitives::series::Dataset;
    pub use crate::report::plot::{render_overlay, PlotOptions};
}
