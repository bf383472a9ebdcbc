//! Boundary extension modes for convolution filters.
//!
//! ## Purpose
//!
//! A convolution kernel centered near the ends of a sequence needs values
//! beyond the data. This module maps any signed position onto an index of
//! the original sequence according to a [`BoundaryMode`].
//!
//! ## Key concepts
//!
//! For the sequence `a b c d`:
//!
//! | Mode       | Extension                   |
//! |------------|-----------------------------|
//! | `Reflect`  | `d c b a \| a b c d \| d c b a` |
//! | `Mirror`   | `d c b \| a b c d \| c b a`     |
//! | `Nearest`  | `a a a a \| a b c d \| d d d d` |
//! | `Wrap`     | `a b c d \| a b c d \| a b c d` |
//! | `Constant` | `0 0 0 0 \| a b c d \| 0 0 0 0` |
//!
//! ## Invariants
//!
//! * Positions inside `[0, n)` always map to themselves.
//! * `Reflect`, `Mirror` and `Wrap` repeat periodically, so any offset is
//!   valid even when the kernel is longer than the data.
//!
//! ## Non-goals
//!
//! * This module does not allocate padded copies of the data.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;

// ============================================================================
// Boundary Mode
// ============================================================================

/// Policy for values beyond the ends of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Mirror about the edge, repeating the edge sample.
    #[default]
    Reflect,

    /// Mirror about the edge sample without repeating it.
    Mirror,

    /// Repeat the edge sample.
    Nearest,

    /// Wrap around to the opposite end.
    Wrap,

    /// Treat everything outside the data as zero.
    Constant,
}

impl BoundaryMode {
    /// Get the name of the boundary mode.
    pub const fn name(&self) -> &'static str {
        match self {
            BoundaryMode::Reflect => "reflect",
            BoundaryMode::Mirror => "mirror",
            BoundaryMode::Nearest => "nearest",
            BoundaryMode::Wrap => "wrap",
            BoundaryMode::Constant => "constant",
        }
    }

    /// Period of the extension for a sequence of length `n`, `None` for the
    /// non-periodic modes.
    pub fn period(&self, n: usize) -> Option<usize> {
        match self {
            BoundaryMode::Reflect => Some(2 * n),
            BoundaryMode::Mirror => Some((2 * n).saturating_sub(2).max(1)),
            BoundaryMode::Wrap => Some(n),
            BoundaryMode::Nearest | BoundaryMode::Constant => None,
        }
    }

    /// Map a signed position onto an index of a sequence of length `n`.
    ///
    /// Returns `None` when the position falls outside the data under
    /// `Constant`, meaning the fill value applies.
    #[inline]
    pub fn resolve(&self, pos: isize, n: usize) -> Option<usize> {
        debug_assert!(n >= 1, "resolve: sequence must not be empty");

        let len = n as isize;
        if (0..len).contains(&pos) {
            return Some(pos as usize);
        }

        let idx = match self {
            BoundaryMode::Reflect => {
                let m = pos.rem_euclid(2 * len);
                if m < len {
                    m
                } else {
                    2 * len - 1 - m
                }
            }
            BoundaryMode::Mirror => {
                if n == 1 {
                    0
                } else {
                    let period = 2 * len - 2;
                    let m = pos.rem_euclid(period);
                    if m < len {
                        m
                    } else {
                        period - m
                    }
                }
            }
            BoundaryMode::Nearest => pos.clamp(0, len - 1),
            BoundaryMode::Wrap => pos.rem_euclid(len),
            BoundaryMode::Constant => return None,
        };

        Some(idx as usize)
    }
}

impl Display for BoundaryMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoundaryMode {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reflect" => Ok(BoundaryMode::Reflect),
            "mirror" => Ok(BoundaryMode::Mirror),
            "nearest" => Ok(BoundaryMode::Nearest),
            "wrap" => Ok(BoundaryMode::Wrap),
            "constant" => Ok(BoundaryMode::Constant),
            other => Err(format!(
                "unknown boundary mode '{other}' (expected reflect, mirror, nearest, wrap or constant)"
            )),
        }
    }
}
