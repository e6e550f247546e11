//! Linear and bilinear interpolation with degenerate-axis handling.
//!
//! No clamping is applied: coordinates outside the bracket extrapolate
//! linearly.

use super::bracket::Bracket;

/// Linear interpolation between `(x1, v1)` and `(x2, v2)` at `x`.
///
/// A degenerate axis (`x1 == x2`) returns `v1`.
pub fn interpolate_1d(v1: f64, v2: f64, x1: f64, x2: f64, x: f64) -> f64 {
    if x1 == x2 {
        return v1;
    }
    v1 + (v2 - v1) * (x - x1) / (x2 - x1)
}

/// Corner values of one bilinear cell.
///
/// `qxy` is the value at (`x` bound, `y` bound), 1 = lower, 2 = upper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub q11: f64,
    pub q12: f64,
    pub q21: f64,
    pub q22: f64,
}

/// Bilinear interpolation of `cell` at (`x`, `y`).
///
/// Falls back to 1D interpolation along whichever axis is not degenerate,
/// and to `q11` when both are.
pub fn bilinear(cell: &Cell, x: Bracket, y: Bracket, px: f64, py: f64) -> f64 {
    match (x.is_degenerate(), y.is_degenerate()) {
        (true, true) => cell.q11,
        (true, false) => interpolate_1d(cell.q11, cell.q12, y.lower, y.upper, py),
        (false, true) => interpolate_1d(cell.q11, cell.q21, x.lower, x.upper, px),
        (false, false) => {
            let at_y1 = interpolate_1d(cell.q11, cell.q21, x.lower, x.upper, px);
            let at_y2 = interpolate_1d(cell.q12, cell.q22, x.lower, x.upper, px);
            interpolate_1d(at_y1, at_y2, y.lower, y.upper, py)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_interpolate_1d_midpoint_and_extrapolation() {
        assert_abs_diff_eq!(interpolate_1d(0.0, 10.0, 0.0, 2.0, 1.0), 5.0);
        assert_abs_diff_eq!(interpolate_1d(0.0, 10.0, 0.0, 2.0, 3.0), 15.0);
        assert_abs_diff_eq!(interpolate_1d(4.0, 8.0, 10.0, 20.0, 10.0), 4.0);
    }

    #[test]
    fn test_interpolate_1d_degenerate() {
        assert_eq!(interpolate_1d(-3.0, 99.0, 5.0, 5.0, 42.0), -3.0);
    }

    #[test]
    fn test_bilinear_full_cell() {
        let cell = Cell {
            q11: 0.0,
            q12: 10.0,
            q21: 20.0,
            q22: 30.0,
        };
        let x = Bracket::new(0.0, 1.0);
        let y = Bracket::new(0.0, 1.0);
        assert_abs_diff_eq!(bilinear(&cell, x, y, 0.5, 0.5), 15.0);
        assert_abs_diff_eq!(bilinear(&cell, x, y, 1.0, 0.0), 20.0);
        assert_abs_diff_eq!(bilinear(&cell, x, y, 0.0, 1.0), 10.0);
    }

    #[test]
    fn test_bilinear_degenerate_axes() {
        let cell = Cell {
            q11: 1.0,
            q12: 3.0,
            q21: 5.0,
            q22: 7.0,
        };
        let flat = Bracket::new(2.0, 2.0);
        let span = Bracket::new(0.0, 4.0);

        assert_eq!(bilinear(&cell, flat, flat, 9.0, 9.0), 1.0);
        // x degenerate: interpolate q11 -> q12 along y
        assert_abs_diff_eq!(bilinear(&cell, flat, span, 2.0, 2.0), 2.0);
        // y degenerate: interpolate q11 -> q21 along x
        assert_abs_diff_eq!(bilinear(&cell, span, flat, 1.0, 2.0), 2.0);
    }
}
