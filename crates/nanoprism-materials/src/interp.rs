//! Local four-point Lagrange interpolation for tabulated optical constants.
//!
//! Measured optical constants are given at discrete photon energies. Each
//! query is answered by the cubic polynomial through the four nodes
//! surrounding it, which keeps the result continuous across node boundaries
//! without the global coupling of a spline.

/// Number of nodes in the interpolation window.
pub const WINDOW: usize = 4;

/// Index of the second node of the four-point window used for `x`.
///
/// This is the largest `i` with `xs[i] <= x`, clamped to `[1, len - 3]` so that
/// nodes `i - 1 ..= i + 2` always lie inside the table. Queries outside the
/// table reuse the nearest interior window.
///
/// # Panics
/// Panics if `xs` has fewer than four nodes.
pub fn window_start(xs: &[f64], x: f64) -> usize {
    let n = xs.len();
    debug_assert!(n >= WINDOW, "interpolation needs at least {WINDOW} nodes, got {n}");

    let at_or_below = xs.partition_point(|&node| node <= x);
    at_or_below.saturating_sub(1).clamp(1, n - 3)
}

/// Evaluate the cubic Lagrange polynomial through four nodes at `x`.
#[inline]
pub fn lagrange_cubic(x: [f64; WINDOW], y: [f64; WINDOW], at: f64) -> f64 {
    (at - x[1]) * (at - x[2]) * (at - x[3]) * y[0] / ((x[0] - x[1]) * (x[0] - x[2]) * (x[0] - x[3]))
        + (at - x[0]) * (at - x[2]) * (at - x[3]) * y[1]
            / ((x[1] - x[0]) * (x[1] - x[2]) * (x[1] - x[3]))
        + (at - x[0]) * (at - x[1]) * (at - x[3]) * y[2]
            / ((x[2] - x[0]) * (x[2] - x[1]) * (x[2] - x[3]))
        + (at - x[0]) * (at - x[1]) * (at - x[2]) * y[3]
            / ((x[3] - x[0]) * (x[3] - x[1]) * (x[3] - x[2]))
}

/// Interpolate `ys(xs)` at `x` with a local four-point Lagrange cubic.
///
/// # Arguments
/// * `xs` - Strictly increasing arguments, at least four of them.
/// * `ys` - Function values (same length as `xs`).
/// * `x` - Query point.
///
/// No range check is done here; callers reject queries outside the table.
///
/// # Panics
/// Panics if `xs` has fewer than four nodes. Embedded tables are checked
/// against this in their own tests.
pub fn lagrange4(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len(), "xs and ys must have equal length");

    let i = window_start(xs, x);
    lagrange_cubic(
        [xs[i - 1], xs[i], xs[i + 1], xs[i + 2]],
        [ys[i - 1], ys[i], ys[i + 1], ys[i + 2]],
        x,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    #[should_panic]
    fn test_fewer_than_four_nodes_panics() {
        lagrange4(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0], 2.5);
    }

    #[test]
    fn test_interpolation_passes_through_data_points() {
        let xs = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.5];
        let ys = vec![2.0, 3.0, 5.0, 4.0, 1.0, -2.0];

        for (x, y) in xs.iter().zip(ys.iter()) {
            let result = lagrange4(&xs, &ys, *x);
            assert!(
                (result - y).abs() < 1e-12,
                "lagrange4({}) = {} but expected {}",
                x,
                result,
                y
            );
        }
    }

    #[test]
    fn test_cubic_is_reproduced_exactly() {
        let f = |x: f64| 0.5 * x * x * x - 2.0 * x * x + x - 3.0;
        let xs: Vec<f64> = (0..8).map(|i| 0.3 * i as f64 + 0.1).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

        for &x in &[0.12, 0.55, 1.0, 1.37, 2.19] {
            assert_relative_eq!(lagrange4(&xs, &ys, x), f(x), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_window_is_clamped_inside_table() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(window_start(&xs, -1.0), 1);
        assert_eq!(window_start(&xs, 0.0), 1);
        assert_eq!(window_start(&xs, 0.5), 1);
        assert_eq!(window_start(&xs, 2.5), 2);
        assert_eq!(window_start(&xs, 3.0), 3);
        assert_eq!(window_start(&xs, 4.9), 3);
    }

    #[test]
    fn test_last_node_uses_last_window() {
        // A forward scan that never finds a node above the query must not fall
        // back to the first window.
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(window_start(&xs, 6.0), 4);

        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
        assert_relative_eq!(lagrange4(&xs, &ys, 6.0), 36.0, epsilon = 1e-12);
    }

    #[test]
    fn test_four_node_table() {
        let xs = [1.0, 2.0, 4.0, 8.0];
        let ys = [1.0, 0.5, 0.25, 0.125];
        assert_eq!(window_start(&xs, 7.0), 1);
        assert_relative_eq!(lagrange4(&xs, &ys, 4.0), 0.25, epsilon = 1e-14);
    }
}
