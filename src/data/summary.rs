//! Dataset statistics reported after loading.

use std::fmt;

use crate::engine::{Axis, AxisValues, Sample};

/// Size of a loaded dataset along each structured axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSummary {
    /// Total number of samples.
    pub sample_count: usize,
    /// Number of distinct frequencies.
    pub frequency_count: usize,
    /// Number of distinct incident elevations.
    pub elevation_count: usize,
    /// Number of distinct incident azimuths.
    pub azimuth_count: usize,
    /// Lowest and highest frequency (MHz), if any samples exist.
    pub frequency_range: Option<(f64, f64)>,
}

impl DatasetSummary {
    pub fn from_samples(samples: &[Sample]) -> Self {
        let frequencies = AxisValues::from_samples(Axis::Frequency, samples);
        let frequency_range = match frequencies.values() {
            [] => None,
            [first, .., last] => Some((*first, *last)),
            [only] => Some((*only, *only)),
        };

        Self {
            sample_count: samples.len(),
            frequency_count: frequencies.len(),
            elevation_count: AxisValues::from_samples(Axis::IncidentElevation, samples).len(),
            azimuth_count: AxisValues::from_samples(Axis::IncidentAzimuth, samples).len(),
            frequency_range,
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples: {}", self.sample_count)?;
        write!(f, "Frequencies: {}", self.frequency_count)?;
        if let Some((lo, hi)) = self.frequency_range {
            write!(f, " ({:.1} - {:.1} MHz)", lo, hi)?;
        }
        writeln!(f)?;
        writeln!(f, "Incident elevations: {}", self.elevation_count)?;
        write!(f, "Incident azimuths: {}", self.azimuth_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let samples = vec![
            Sample::new(10.0, 0.0, 0.0, 0.0, 0.0, -1.0),
            Sample::new(10.0, 0.0, 1.0, 5.0, 0.0, -1.0),
            Sample::new(30.0, 90.0, 1.0, 0.0, 0.0, -1.0),
        ];
        let summary = DatasetSummary::from_samples(&samples);
        assert_eq!(summary.sample_count, 3);
        assert_eq!(summary.frequency_count, 2);
        assert_eq!(summary.elevation_count, 2);
        assert_eq!(summary.azimuth_count, 2);
        assert_eq!(summary.frequency_range, Some((10.0, 30.0)));
        assert!(summary.to_string().contains("10.0 - 30.0 MHz"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = DatasetSummary::from_samples(&[]);
        assert_eq!(summary, DatasetSummary::default());
    }
}
