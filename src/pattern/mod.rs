//! Polar RCS patterns over observation azimuth.
//!
//! A pattern fixes frequency, incidence and theta and evaluates the engine
//! around a full turn of phi. [`RcsRange`] and [`rcs_color`] turn the values
//! into plot radii and colours.

mod palette;

pub use palette::{rcs_color, Rgb};

use serde::{Deserialize, Serialize};

use crate::angle::FULL_TURN;
use crate::engine::{InterpolationEngine, Query};

/// One point of a polar pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternPoint {
    /// Observation azimuth in degrees
    pub phi: f64,
    /// Interpolated RCS in dB(m²)
    pub rcs: f64,
    /// Corners that fell back to the missing-data value
    pub corners_without_data: u8,
}

impl PatternPoint {
    pub fn is_complete(&self) -> bool {
        self.corners_without_data == 0
    }
}

/// Finest phi increment a sweep accepts, in degrees.
pub const MIN_PATTERN_STEP: f64 = 0.01;

/// Parameters of a phi sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternSweep {
    pub frequency: f64,
    pub incident_elevation: f64,
    pub incident_azimuth: f64,
    pub theta: f64,
    /// Phi increment in degrees
    pub step: f64,
}

impl PatternSweep {
    /// Evaluates `engine` at phi = 0, step, 2·step, ... below 360°.
    ///
    /// A non-finite step or one below [`MIN_PATTERN_STEP`] yields an empty
    /// pattern.
    pub fn evaluate(&self, engine: &InterpolationEngine) -> Vec<PatternPoint> {
        if !(self.step.is_finite() && self.step >= MIN_PATTERN_STEP) {
            log::warn!("Invalid pattern step {}", self.step);
            return Vec::new();
        }

        let count = (FULL_TURN / self.step).ceil() as usize;
        (0..count)
            .map(|i| i as f64 * self.step)
            .take_while(|&phi| phi < FULL_TURN)
            .map(|phi| {
                let query = Query::new(
                    self.frequency,
                    self.incident_elevation,
                    self.incident_azimuth,
                    self.theta,
                    phi,
                );
                let estimate = engine.estimate(&query);
                PatternPoint {
                    phi,
                    rcs: estimate.value,
                    corners_without_data: estimate.corners_without_data,
                }
            })
            .collect()
    }
}

/// Span of RCS values used to scale a plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RcsRange {
    pub min: f64,
    pub max: f64,
}

impl RcsRange {
    /// Range over the finite values in `values`, or `None` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some(Self { min: v, max: v }),
                Some(r) => Some(Self {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }

    /// Width of the range; a flat range counts as 1 dB.
    pub fn span(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }

    /// Position of `value` within the range, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }

    /// Plot colour for `value`.
    pub fn color(&self, value: f64) -> Rgb {
        rcs_color(self.normalize(value))
    }
}
