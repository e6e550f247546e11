//! Angle helpers for the circular (degree) axes.
//!
//! Every angle stored in a [`Sample`](crate::engine::Sample) and every angle
//! used for matching goes through [`normalize_360`] first, so comparisons
//! are always made in the canonical `[0, 360)` range.

/// Length of a full turn in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Normalizes an angle into `[0, 360)`.
///
/// Negative remainders are shifted up by a full turn; a result that rounds
/// to exactly 360.0 collapses to 0.0.
pub fn normalize_360(angle: f64) -> f64 {
    let mut normalized = angle % FULL_TURN;
    if normalized < 0.0 {
        normalized += FULL_TURN;
    }
    // `-1e-20 + 360.0` rounds up to 360.0; `-360.0 % 360.0` is -0.0
    if normalized >= FULL_TURN || normalized == 0.0 {
        return 0.0;
    }
    normalized
}

/// Shorter arc between two angles, in `[0, 180]` degrees.
pub fn circular_difference(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    diff.min(FULL_TURN - diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_basic_values() {
        assert_eq!(normalize_360(0.0), 0.0);
        assert_eq!(normalize_360(360.0), 0.0);
        assert_eq!(normalize_360(-30.0), 330.0);
        assert_eq!(normalize_360(725.0), 5.0);
        assert!(normalize_360(-720.0).is_sign_positive());
    }

    #[test]
    fn test_normalize_tiny_negative_stays_in_range() {
        let n = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&n));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for x in [-1080.5, -359.9, -0.25, 0.0, 12.5, 359.999, 360.0, 1e6 + 0.3] {
            let once = normalize_360(x);
            assert!((0.0..360.0).contains(&once), "{x} -> {once}");
            assert_eq!(normalize_360(once), once);
        }
    }

    #[test]
    fn test_circular_difference_wraps() {
        assert_abs_diff_eq!(circular_difference(359.0, 1.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(circular_difference(-10.0, 10.0), 20.0, epsilon = 1e-12);
        assert_eq!(circular_difference(0.0, 180.0), 180.0);
        assert_eq!(circular_difference(90.0, 450.0), 0.0);
    }

    #[test]
    fn test_circular_difference_symmetric_and_bounded() {
        let angles = [-400.0, -90.0, 0.0, 45.5, 179.0, 181.0, 270.0, 359.5, 1000.0];
        for &a in &angles {
            for &b in &angles {
                let ab = circular_difference(a, b);
                assert_eq!(ab, circular_difference(b, a));
                assert!((0.0..=180.0).contains(&ab));
            }
        }
    }
}
