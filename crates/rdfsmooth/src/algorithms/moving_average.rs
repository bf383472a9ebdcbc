//! Centered moving average.
//!
//! ## Purpose
//!
//! This module averages each point with its neighbours inside a fixed-size
//! window centered on it.
//!
//! ## Design notes
//!
//! * **Running sum**: The window sum is updated incrementally, O(n) overall.
//! * **No padding**: Positions whose window leaves the data are missing
//!   (`None`), never a fabricated number.
//!
//! ## Key concepts
//!
//! The window for index `i` with size `w` is `[i - w/2, i + (w-1)/2]`.
//! Leading `w/2` and trailing `(w-1)/2` positions are therefore missing.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Every present value is the mean of exactly `w` inputs.
//!
//! ## Non-goals
//!
//! * No partial windows (no minimum-period relaxation).

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SmoothError;
use crate::primitives::series::MaskedSeries;
use crate::primitives::window::Window;

/// Centered moving average of `y` over `window` points.
///
/// A window larger than the data yields an all-missing series rather than an
/// error.
pub fn moving_average<T: Float>(y: &[T], window: usize) -> Result<MaskedSeries<T>, SmoothError> {
    Validator::validate_window(window)?;

    let n = y.len();
    let mut out: MaskedSeries<T> = vec![None; n];
    let centers = Window::valid_centers(window, n);
    if centers.is_empty() {
        warn!(window, n, "moving-average window does not fit the data; all values missing");
        return Ok(out);
    }

    let scale = T::from(window).unwrap().recip();
    let first = Window::centered(centers.start, window, n)
        .ok_or_else(|| SmoothError::invalid_parameter("window", window, "window does not fit"))?;

    let mut sum = y[first.left..=first.right]
        .iter()
        .fold(T::zero(), |acc, &v| acc + v);
    out[centers.start] = Some(sum * scale);

    for i in centers.start + 1..centers.end {
        // Slide by one: drop the element leaving on the left, add the one entering on the right.
        let leaving = i - 1 - Window::half_left(window);
        let entering = i + Window::half_right(window);
        sum = sum - y[leaving] + y[entering];
        out[i] = Some(sum * scale);
    }

    debug!(
        window,
        n,
        present = centers.len(),
        "moving average computed"
    );

    Ok(out)
}
