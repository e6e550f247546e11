//! Query orchestration: brackets, corner lookups and nested interpolation.

use std::sync::Arc;

use super::axis::{Axis, AxisValues};
use super::bracket::{circular_bracket, linear_bracket, AxisBracket, Bracket};
use super::grid::{bilinear, interpolate_1d, Cell};
use super::matcher::{nearest_sample, Corner};
use super::sample::{Query, SampleCollection};
use crate::config::EngineConfig;

/// Value substituted for a corner that has no sample, in dB(m²).
pub const MISSING_RCS: f64 = -50.0;

/// Interpolated RCS together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcsEstimate {
    /// Interpolated RCS in dB(m²)
    pub value: f64,
    /// How many of the 8 corner lookups found no sample and used the
    /// missing-data value instead
    pub corners_without_data: u8,
    pub frequency: Bracket,
    /// Elevation bracket, unwrapped across the 0°/360° seam
    pub incident_elevation: Bracket,
    /// Azimuth bracket, unwrapped across the 0°/360° seam
    pub incident_azimuth: Bracket,
}

impl RcsEstimate {
    /// True when every corner came from a real sample.
    pub fn is_complete(&self) -> bool {
        self.corners_without_data == 0
    }
}

/// Interpolates bistatic RCS over a frozen sample collection.
///
/// The engine holds no mutable state, so one instance can serve queries from
/// many threads. To load new data, build a new engine.
#[derive(Debug, Clone)]
pub struct InterpolationEngine {
    samples: Arc<SampleCollection>,
    frequencies: AxisValues,
    elevations: AxisValues,
    azimuths: AxisValues,
    config: EngineConfig,
}

impl InterpolationEngine {
    /// Creates an engine with the default configuration.
    pub fn new(samples: impl Into<Arc<SampleCollection>>) -> Self {
        Self::with_config(samples, EngineConfig::default())
    }

    pub fn with_config(samples: impl Into<Arc<SampleCollection>>, config: EngineConfig) -> Self {
        let samples = samples.into();
        let frequencies = AxisValues::from_samples(Axis::Frequency, &samples);
        let elevations = AxisValues::from_samples(Axis::IncidentElevation, &samples);
        let azimuths = AxisValues::from_samples(Axis::IncidentAzimuth, &samples);

        log::info!(
            "Interpolation engine ready: {} samples, {} frequencies, {} incident elevations, {} incident azimuths",
            samples.len(),
            frequencies.len(),
            elevations.len(),
            azimuths.len()
        );

        Self {
            samples,
            frequencies,
            elevations,
            azimuths,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Distinct values the data takes on `axis`.
    pub fn axis_values(&self, axis: Axis) -> &AxisValues {
        match axis {
            Axis::Frequency => &self.frequencies,
            Axis::IncidentElevation => &self.elevations,
            Axis::IncidentAzimuth => &self.azimuths,
        }
    }

    /// Brackets `query` on `axis` with the policy matching the axis kind.
    fn bracket(&self, axis: Axis, query: f64) -> AxisBracket {
        let values = self.axis_values(axis).values();
        if axis.is_circular() {
            circular_bracket(values, query)
        } else {
            AxisBracket {
                bracket: linear_bracket(values, query, self.config.frequency_policy),
                query,
            }
        }
    }

    /// Interpolated RCS in dB(m²).
    ///
    /// Corners without data contribute the configured missing value
    /// ([`MISSING_RCS`] by default) without further marking; use
    /// [`estimate`](Self::estimate) to detect that.
    pub fn interpolate(&self, query: &Query) -> f64 {
        self.estimate(query).value
    }

    /// Interpolates `query` and reports bracket and coverage details.
    pub fn estimate(&self, query: &Query) -> RcsEstimate {
        let query = query.normalized();

        let frequency = self.bracket(Axis::Frequency, query.frequency).bracket;
        let elevation = self.bracket(Axis::IncidentElevation, query.incident_elevation);
        let azimuth = self.bracket(Axis::IncidentAzimuth, query.incident_azimuth);

        log::debug!(
            "Brackets for {:?}: frequency {:?}, elevation {:?}, azimuth {:?}",
            query,
            frequency,
            elevation.bracket,
            azimuth.bracket
        );

        let (e, a) = (elevation.bracket, azimuth.bracket);
        let mut missing = 0u8;
        let mut plane = |f: f64| {
            let cell = Cell {
                q11: self.corner_rcs(Corner::new(f, e.lower, a.lower), &query, &mut missing),
                q12: self.corner_rcs(Corner::new(f, e.upper, a.lower), &query, &mut missing),
                q21: self.corner_rcs(Corner::new(f, e.lower, a.upper), &query, &mut missing),
                q22: self.corner_rcs(Corner::new(f, e.upper, a.upper), &query, &mut missing),
            };
            bilinear(&cell, a, e, azimuth.query, elevation.query)
        };

        let at_lower = plane(frequency.lower);
        let at_upper = plane(frequency.upper);
        let value = interpolate_1d(
            at_lower,
            at_upper,
            frequency.lower,
            frequency.upper,
            query.frequency,
        );

        RcsEstimate {
            value,
            corners_without_data: missing,
            frequency,
            incident_elevation: elevation.bracket,
            incident_azimuth: azimuth.bracket,
        }
    }

    /// RCS of the sample nearest (theta, phi) on one corner, or the missing value.
    fn corner_rcs(&self, corner: Corner, query: &Query, missing: &mut u8) -> f64 {
        match nearest_sample(
            &self.samples,
            &corner,
            query.theta,
            query.phi,
            self.config.match_tolerance,
        ) {
            Some(sample) => sample.rcs,
            None => {
                log::debug!("No sample on corner {:?}", corner);
                *missing += 1;
                self.config.missing_value
            }
        }
    }
}
