//! Sample records and the frozen collection the engine queries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use super::EngineError;
use crate::angle::normalize_360;

/// One simulated/measured bistatic RCS value.
///
/// All four angle fields are kept in `[0, 360)`; [`Sample::new`] enforces
/// that on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Frequency in MHz
    pub frequency: f64,
    /// Incident elevation in degrees
    pub incident_elevation: f64,
    /// Incident azimuth in degrees
    pub incident_azimuth: f64,
    /// Observation elevation in degrees
    pub theta: f64,
    /// Observation azimuth in degrees
    pub phi: f64,
    /// RCS in dB(m²)
    pub rcs: f64,
}

impl Sample {
    /// Creates a sample, normalizing every angle field.
    pub fn new(
        frequency: f64,
        incident_elevation: f64,
        incident_azimuth: f64,
        theta: f64,
        phi: f64,
        rcs: f64,
    ) -> Self {
        Self {
            frequency,
            incident_elevation: normalize_360(incident_elevation),
            incident_azimuth: normalize_360(incident_azimuth),
            theta: normalize_360(theta),
            phi: normalize_360(phi),
            rcs,
        }
    }

    fn is_finite(&self) -> bool {
        [
            self.frequency,
            self.incident_elevation,
            self.incident_azimuth,
            self.theta,
            self.phi,
            self.rcs,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} MHz, incidence {:.1}°/{:.1}°, theta {:.1}°, phi {:.1}°, {:.2} dB(m²)",
            self.frequency,
            self.incident_elevation,
            self.incident_azimuth,
            self.theta,
            self.phi,
            self.rcs
        )
    }
}

/// Non-empty, immutable set of samples.
///
/// Built once per data load. Order carries no meaning for interpolation,
/// except that the first of several equally near samples wins a match.
#[derive(Debug, Clone)]
pub struct SampleCollection {
    samples: Vec<Sample>,
}

impl SampleCollection {
    /// Freezes `samples` into a collection.
    ///
    /// Rejects an empty input and any sample with a non-finite field.
    pub fn new(samples: Vec<Sample>) -> Result<Self, EngineError> {
        if samples.is_empty() {
            return Err(EngineError::EmptyCollection);
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(EngineError::NonFiniteSample { index });
        }
        Ok(Self { samples })
    }
}

impl Deref for SampleCollection {
    type Target = [Sample];

    fn deref(&self) -> &[Sample] {
        &self.samples
    }
}

/// Query coordinates. Angles may be given in any range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub frequency: f64,
    pub incident_elevation: f64,
    pub incident_azimuth: f64,
    pub theta: f64,
    pub phi: f64,
}

impl Query {
    pub fn new(
        frequency: f64,
        incident_elevation: f64,
        incident_azimuth: f64,
        theta: f64,
        phi: f64,
    ) -> Self {
        Self {
            frequency,
            incident_elevation,
            incident_azimuth,
            theta,
            phi,
        }
    }

    /// Same query with every angle in `[0, 360)`.
    pub fn normalized(&self) -> Self {
        Self {
            frequency: self.frequency,
            incident_elevation: normalize_360(self.incident_elevation),
            incident_azimuth: normalize_360(self.incident_azimuth),
            theta: normalize_360(self.theta),
            phi: normalize_360(self.phi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_angles_normalized() {
        let s = Sample::new(10.0, -90.0, 360.0, 370.0, -1.0, -3.0);
        assert_eq!(s.incident_elevation, 270.0);
        assert_eq!(s.incident_azimuth, 0.0);
        assert_eq!(s.theta, 10.0);
        assert_eq!(s.phi, 359.0);
        assert_eq!(s.frequency, 10.0);
    }

    #[test]
    fn test_empty_collection_rejected() {
        assert!(matches!(
            SampleCollection::new(Vec::new()),
            Err(EngineError::EmptyCollection)
        ));
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        let samples = vec![
            Sample::new(10.0, 0.0, 0.0, 0.0, 0.0, -1.0),
            Sample::new(10.0, 0.0, 0.0, 0.0, 0.0, f64::NAN),
        ];
        assert!(matches!(
            SampleCollection::new(samples),
            Err(EngineError::NonFiniteSample { index: 1 })
        ));
    }

    #[test]
    fn test_query_normalized() {
        let q = Query::new(12.0, -30.0, 720.0, 365.0, -45.0).normalized();
        assert_eq!(q.frequency, 12.0);
        assert_eq!(q.incident_elevation, 330.0);
        assert_eq!(q.incident_azimuth, 0.0);
        assert_eq!(q.theta, 5.0);
        assert_eq!(q.phi, 315.0);
    }
}
