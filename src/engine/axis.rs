//! Distinct sorted values of the three structured axes.

use super::sample::Sample;
use crate::angle::normalize_360;

/// The structured axes the engine brackets on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Frequency,
    IncidentElevation,
    IncidentAzimuth,
}

impl Axis {
    /// Whether values on this axis wrap at 360°.
    pub fn is_circular(self) -> bool {
        !matches!(self, Axis::Frequency)
    }

    /// Reads this axis' coordinate from a sample, normalized for circular axes.
    pub fn value_of(self, sample: &Sample) -> f64 {
        match self {
            Axis::Frequency => sample.frequency,
            Axis::IncidentElevation => normalize_360(sample.incident_elevation),
            Axis::IncidentAzimuth => normalize_360(sample.incident_azimuth),
        }
    }
}

/// Strictly increasing, deduplicated values one axis takes in the data.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisValues {
    axis: Axis,
    values: Vec<f64>,
}

impl AxisValues {
    /// Projects `samples` onto `axis`.
    pub fn from_samples(axis: Axis, samples: &[Sample]) -> Self {
        let mut values: Vec<f64> = samples.iter().map(|s| axis.value_of(s)).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        Self { axis, values }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(frequency: f64, elevation: f64, azimuth: f64) -> Sample {
        Sample::new(frequency, elevation, azimuth, 0.0, 0.0, 0.0)
    }

    #[test]
    fn test_frequency_axis_sorted_distinct() {
        let samples = vec![
            sample(30.0, 0.0, 0.0),
            sample(10.0, 0.0, 0.0),
            sample(20.0, 0.0, 0.0),
            sample(10.0, 5.0, 0.0),
        ];
        let axis = AxisValues::from_samples(Axis::Frequency, &samples);
        assert_eq!(axis.values(), &[10.0, 20.0, 30.0]);
        assert_eq!(axis.axis(), Axis::Frequency);
    }

    #[test]
    fn test_circular_axis_normalizes_before_dedup() {
        // Bypass Sample::new so raw angles reach the projection
        let mut raw = sample(10.0, 0.0, 0.0);
        raw.incident_azimuth = 370.0;
        let samples = vec![raw, sample(10.0, 0.0, 10.0), sample(10.0, 0.0, 350.0)];
        let axis = AxisValues::from_samples(Axis::IncidentAzimuth, &samples);
        assert_eq!(axis.values(), &[10.0, 350.0]);
    }

    #[test]
    fn test_axis_kinds() {
        assert!(!Axis::Frequency.is_circular());
        assert!(Axis::IncidentElevation.is_circular());
        assert!(Axis::IncidentAzimuth.is_circular());
    }
}
