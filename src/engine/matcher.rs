//! Nearest observation-angle match within a fixed grid corner.

use super::sample::Sample;
use crate::angle::circular_difference;

/// Default tolerance for matching a sample to a corner, in MHz and degrees.
pub const DEFAULT_MATCH_TOLERANCE: f64 = 0.1;

/// A (frequency, incident elevation, incident azimuth) grid corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub frequency: f64,
    pub incident_elevation: f64,
    pub incident_azimuth: f64,
}

impl Corner {
    pub fn new(frequency: f64, incident_elevation: f64, incident_azimuth: f64) -> Self {
        Self {
            frequency,
            incident_elevation,
            incident_azimuth,
        }
    }

    /// True if `sample` sits on this corner within `tolerance` on every axis.
    pub fn contains(&self, sample: &Sample, tolerance: f64) -> bool {
        (sample.frequency - self.frequency).abs() < tolerance
            && circular_difference(sample.incident_elevation, self.incident_elevation) < tolerance
            && circular_difference(sample.incident_azimuth, self.incident_azimuth) < tolerance
    }
}

/// Angular distance between a sample's observation direction and (theta, phi).
///
/// Euclidean combination of the two circular differences.
pub fn observation_distance(sample: &Sample, theta: f64, phi: f64) -> f64 {
    circular_difference(sample.theta, theta).hypot(circular_difference(sample.phi, phi))
}

/// Finds the sample on `corner` whose observation direction is closest to
/// (`theta`, `phi`).
///
/// Ties keep the first sample encountered. Returns `None` when no sample
/// lies on the corner.
pub fn nearest_sample<'a>(
    samples: &'a [Sample],
    corner: &Corner,
    theta: f64,
    phi: f64,
    tolerance: f64,
) -> Option<&'a Sample> {
    let mut closest: Option<(&Sample, f64)> = None;

    for sample in samples.iter().filter(|s| corner.contains(s, tolerance)) {
        let distance = observation_distance(sample, theta, phi);
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((sample, distance)),
        }
    }

    closest.map(|(sample, _)| sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Sample> {
        vec![
            Sample::new(10.0, 0.0, 0.0, 30.0, 0.0, -5.0),
            Sample::new(10.0, 0.0, 0.0, 30.0, 10.0, -7.0),
            Sample::new(10.0, 0.0, 0.0, 30.0, 355.0, -9.0),
            Sample::new(20.0, 0.0, 0.0, 30.0, 5.0, -1.0),
        ]
    }

    #[test]
    fn test_nearest_picks_closest_phi() {
        let data = samples();
        let corner = Corner::new(10.0, 0.0, 0.0);
        let hit = nearest_sample(&data, &corner, 30.0, 9.0, DEFAULT_MATCH_TOLERANCE).unwrap();
        assert_eq!(hit.rcs, -7.0);
    }

    #[test]
    fn test_nearest_wraps_phi() {
        let data = samples();
        let corner = Corner::new(10.0, 0.0, 0.0);
        let hit = nearest_sample(&data, &corner, 30.0, 357.0, DEFAULT_MATCH_TOLERANCE).unwrap();
        assert_eq!(hit.rcs, -9.0);
    }

    #[test]
    fn test_tie_keeps_first_encountered() {
        let data = samples();
        let corner = Corner::new(10.0, 0.0, 0.0);
        let hit = nearest_sample(&data, &corner, 30.0, 5.0, DEFAULT_MATCH_TOLERANCE).unwrap();
        assert_eq!(hit.rcs, -5.0);
    }

    #[test]
    fn test_corner_matching_wraps_incidence() {
        let data = vec![Sample::new(10.0, 359.95, 0.02, 0.0, 0.0, -2.0)];
        let corner = Corner::new(10.0, 0.0, 359.99);
        assert!(nearest_sample(&data, &corner, 0.0, 0.0, DEFAULT_MATCH_TOLERANCE).is_some());
    }

    #[test]
    fn test_no_candidate_returns_none() {
        let data = samples();
        let corner = Corner::new(15.0, 0.0, 0.0);
        assert!(nearest_sample(&data, &corner, 30.0, 0.0, DEFAULT_MATCH_TOLERANCE).is_none());

        let corner = Corner::new(10.0, 0.2, 0.0);
        assert!(nearest_sample(&data, &corner, 30.0, 0.0, DEFAULT_MATCH_TOLERANCE).is_none());
    }
}
