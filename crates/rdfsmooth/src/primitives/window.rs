//! Windowing primitives for centered rolling statistics.
//!
//! This module provides the index arithmetic for a fixed-size window centered
//! on a point. Even-sized windows carry the extra element on the left, so the
//! window for index `i` is `[i - size/2, i + (size-1)/2]`.

// Inclusive window bounds `[left, right]` centered on one index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    // Left boundary index (inclusive).
    pub left: usize,

    // Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    // Number of elements left of the center.
    #[inline]
    pub const fn half_left(size: usize) -> usize {
        size / 2
    }

    // Number of elements right of the center.
    #[inline]
    pub const fn half_right(size: usize) -> usize {
        size.saturating_sub(1) / 2
    }

    // Window of `size` elements centered on `idx`, or `None` when it would
    // reach outside `[0, n)`.
    #[inline]
    pub fn centered(idx: usize, size: usize, n: usize) -> Option<Self> {
        debug_assert!(size >= 1, "centered: size must be at least 1");

        let left = idx.checked_sub(Self::half_left(size))?;
        let right = idx + Self::half_right(size);
        if right >= n {
            return None;
        }

        Some(Self { left, right })
    }

    // Range of center indices whose window fits inside `[0, n)`.
    #[inline]
    pub fn valid_centers(size: usize, n: usize) -> core::ops::Range<usize> {
        let start = Self::half_left(size);
        let end = n.saturating_sub(Self::half_right(size));
        start..end.max(start)
    }

    // Get the number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    // Check if the window is empty.
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_window_leans_left() {
        let w = Window::centered(5, 4, 10).unwrap();
        assert_eq!(w, Window { left: 3, right: 6 });
        assert_eq!(w.len(), 4);
    }

    #[test]
    fn test_odd_window_is_symmetric() {
        let w = Window::centered(5, 5, 10).unwrap();
        assert_eq!(w, Window { left: 3, right: 7 });
    }

    #[test]
    fn test_window_outside_bounds() {
        assert!(Window::centered(1, 4, 10).is_none());
        assert!(Window::centered(9, 4, 10).is_none());
        assert_eq!(Window::valid_centers(4, 10), 2..9);
    }

    #[test]
    fn test_valid_centers_window_equals_length() {
        assert_eq!(Window::valid_centers(10, 10), 5..6);
        assert_eq!(Window::valid_centers(11, 10), 5..5);
    }
}
