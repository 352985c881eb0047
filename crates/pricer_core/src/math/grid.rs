//! Spot-price grids for sweeps.
//!
//! A [`SpotGrid`] is a sorted list of finite spot prices used to sweep a
//! price, Greek, or strategy profile across a window around the current
//! spot. Points are generated by index (`start + i·step`) so long sweeps do
//! not accumulate rounding error.
//!
//! # Examples
//!
//! ```
//! use pricer_core::math::grid::SpotGrid;
//!
//! // ±60 around 100 in steps of 0.6
//! let grid = SpotGrid::around(100.0, 0.6, 30.0, 100, 0.01);
//! assert_eq!(grid.len(), 201);
//! assert!((grid.points()[0] - 40.0).abs() < 1e-12);
//! assert!((grid.points()[200] - 160.0).abs() < 1e-9);
//! ```

/// Relative slack used when deciding whether the last point fits the window.
const END_TOLERANCE: f64 = 1e-9;

/// Sorted, finite spot prices.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpotGrid {
    points: Vec<f64>,
}

impl SpotGrid {
    /// Builds the grid `[max(center - half_width, floor), center + half_width]`
    /// with step `half_width / steps`.
    ///
    /// Degenerate windows (non-finite arguments, non-positive half width,
    /// or `steps == 0`) collapse to the single point `center` when it is
    /// finite and not below `floor`, otherwise to an empty grid. So do
    /// windows whose end or step overflows or underflows `f64`. A grid
    /// never holds more than `2 * steps + 1` points.
    pub fn window(center: f64, half_width: f64, steps: usize, floor: f64) -> Self {
        let floor = if floor.is_finite() { floor } else { 0.0 };

        if !center.is_finite() {
            return Self::default();
        }
        let single = || {
            let points = if center >= floor { vec![center] } else { Vec::new() };
            Self { points }
        };
        if !half_width.is_finite() || half_width <= 0.0 || steps == 0 {
            return single();
        }

        let start = (center - half_width).max(floor);
        let end = center + half_width;
        if !end.is_finite() {
            return single();
        }
        if start > end {
            return Self::default();
        }

        let step = half_width / steps as f64;
        let span = (end - start) / step;
        if step <= 0.0 || !span.is_finite() {
            return single();
        }
        let intervals = (span + END_TOLERANCE * span.max(1.0)).floor() as usize;
        let count = intervals.min(steps.saturating_mul(2)).saturating_add(1);

        let points = (0..count)
            .map(|i| start + i as f64 * step)
            .take_while(|p| p.is_finite())
            .collect();
        Self { points }
    }

    /// Builds a window whose half width is `max(center * width_fraction,
    /// min_half_width)`.
    pub fn around(
        center: f64,
        width_fraction: f64,
        min_half_width: f64,
        steps: usize,
        floor: f64,
    ) -> Self {
        let half_width = (center * width_fraction).max(min_half_width);
        Self::window(center, half_width, steps, floor)
    }

    /// Builds a grid from arbitrary points, dropping non-finite values and
    /// sorting the rest.
    pub fn from_points(points: impl IntoIterator<Item = f64>) -> Self {
        let mut points: Vec<f64> = points.into_iter().filter(|p| p.is_finite()).collect();
        points.sort_by(f64::total_cmp);
        Self { points }
    }

    /// Returns the grid with `spot` inserted at its sorted position.
    ///
    /// Non-finite spots and spots already on the grid are ignored.
    pub fn with_point(mut self, spot: f64) -> Self {
        if !spot.is_finite() {
            return self;
        }
        match self.points.binary_search_by(|p| p.total_cmp(&spot)) {
            Ok(_) => {}
            Err(pos) => self.points.insert(pos, spot),
        }
        self
    }

    /// Grid points in ascending order.
    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the grid is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }

    /// Consumes the grid, returning the points.
    pub fn into_vec(self) -> Vec<f64> {
        self.points
    }

    /// Index of the point closest to `target`.
    pub fn nearest_index(&self, target: f64) -> Option<usize> {
        nearest_index(&self.points, target)
    }
}

impl From<SpotGrid> for Vec<f64> {
    fn from(grid: SpotGrid) -> Self {
        grid.points
    }
}

/// Index of the value in `points` closest to `target`.
///
/// Works on unsorted input. Ties resolve to the first match. Returns
/// `None` for an empty slice or a non-finite target; non-finite entries
/// are never selected.
pub fn nearest_index(points: &[f64], target: f64) -> Option<usize> {
    if !target.is_finite() {
        return None;
    }
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_finite())
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_window_strategy_chart_defaults() {
        // max(100 * 0.6, 30) = 60, step 0.6
        let grid = SpotGrid::around(100.0, 0.6, 30.0, 100, 0.01);
        assert_eq!(grid.len(), 201);
        assert_relative_eq!(grid.points()[0], 40.0, epsilon = 1e-12);
        assert_relative_eq!(grid.points()[100], 100.0, epsilon = 1e-9);
        assert_relative_eq!(grid.points()[200], 160.0, epsilon = 1e-9);
    }

    #[test]
    fn test_window_min_half_width_applies() {
        // max(20 * 0.6, 30) = 30, start clipped to floor
        let grid = SpotGrid::around(20.0, 0.6, 30.0, 100, 0.01);
        assert_relative_eq!(grid.points()[0], 0.01, epsilon = 1e-12);
        let last = *grid.points().last().unwrap();
        assert!(last <= 50.0 + 1e-9);
        assert!(last > 50.0 - 0.3);
    }

    #[test]
    fn test_window_price_chart_defaults() {
        // ±50 around 100 in 50 steps of 1.0
        let grid = SpotGrid::window(100.0, 50.0, 50, 0.0);
        assert_eq!(grid.len(), 101);
        assert_relative_eq!(grid.points()[0], 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_window_is_sorted_and_finite() {
        let grid = SpotGrid::around(57.3, 0.6, 30.0, 100, 0.01);
        assert!(grid.points().windows(2).all(|w| w[0] < w[1]));
        assert!(grid.iter().all(f64::is_finite));
    }

    #[test]
    fn test_window_degenerate_inputs() {
        assert_eq!(SpotGrid::window(100.0, 0.0, 10, 0.0).points(), &[100.0]);
        assert_eq!(SpotGrid::window(100.0, 10.0, 0, 0.0).points(), &[100.0]);
        assert!(SpotGrid::window(f64::NAN, 10.0, 10, 0.0).is_empty());
        assert!(SpotGrid::window(-5.0, 0.0, 10, 0.0).is_empty());
        assert!(SpotGrid::window(-50.0, 10.0, 10, 0.0).is_empty());
    }

    #[test]
    fn test_window_overflowing_end_collapses() {
        // center + half_width overflows to +inf
        let grid = SpotGrid::around(1.5e308, 0.6, 30.0, 100, 0.01);
        assert_eq!(grid.points(), &[1.5e308]);

        let grid = SpotGrid::window(f64::MAX, f64::MAX, 10, 0.0);
        assert_eq!(grid.points(), &[f64::MAX]);
    }

    #[test]
    fn test_window_large_finite_center() {
        let grid = SpotGrid::around(1e308, 0.6, 30.0, 100, 0.01);
        assert_eq!(grid.len(), 201);
        assert!(grid.iter().all(f64::is_finite));
    }

    #[test]
    fn test_window_underflowing_step_collapses() {
        // half_width / steps rounds to zero
        let grid = SpotGrid::window(1.0, 5e-324, 1000, 0.0);
        assert_eq!(grid.points(), &[1.0]);
    }

    #[test]
    fn test_window_point_count_bounded_by_steps() {
        for (center, half_width, steps) in [(100.0, 50.0, 50), (100.0, 60.0, 100), (7.0, 3.5, 7)] {
            let grid = SpotGrid::window(center, half_width, steps, 0.0);
            assert!(grid.len() <= 2 * steps + 1, "{:?}", (center, half_width, steps));
        }
    }

    #[test]
    fn test_from_points_sorts_and_filters() {
        let grid = SpotGrid::from_points(vec![3.0, f64::NAN, 1.0, 2.0, f64::INFINITY]);
        assert_eq!(grid.points(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_with_point_inserts_sorted() {
        let grid = SpotGrid::from_points(vec![1.0, 2.0, 4.0]).with_point(3.0);
        assert_eq!(grid.points(), &[1.0, 2.0, 3.0, 4.0]);

        let unchanged = grid.clone().with_point(2.0).with_point(f64::NAN);
        assert_eq!(unchanged, grid);
    }

    #[test]
    fn test_nearest_index() {
        let points = [40.0, 70.0, 100.6, 99.9, 130.0];
        assert_eq!(nearest_index(&points, 100.0), Some(3));
        assert_eq!(nearest_index(&points, 0.0), Some(0));
        assert_eq!(nearest_index(&points, 1e6), Some(4));
        assert_eq!(nearest_index(&[], 1.0), None);
        assert_eq!(nearest_index(&points, f64::NAN), None);
    }

    #[test]
    fn test_nearest_index_skips_non_finite() {
        let points = [f64::NAN, 10.0, f64::INFINITY];
        assert_eq!(nearest_index(&points, 1e308), Some(1));
    }
}
