//! RCS interpolation engine.
//!
//! This module provides:
//! - Sample records and the frozen collection they live in
//! - Axis projection and bracket selection (linear and circular axes)
//! - Nearest-sample matching in the free observation angles
//! - Nested linear interpolation over the 2×2×2 corner cube
//!
//! ## Query pipeline
//! ```text
//! Query ──normalize──▶ brackets (freq, elev, az)
//!       ──8 corners──▶ nearest (theta, phi) sample per corner
//!       ──bilinear per frequency──▶ linear in frequency ──▶ dB(m²)
//! ```

mod axis;
mod bracket;
mod grid;
mod interpolator;
mod matcher;
mod sample;

pub use axis::{Axis, AxisValues};
pub use bracket::{circular_bracket, linear_bracket, AxisBracket, Bracket, FrequencyPolicy};
pub use grid::{bilinear, interpolate_1d, Cell};
pub use interpolator::{InterpolationEngine, RcsEstimate, MISSING_RCS};
pub use matcher::{nearest_sample, observation_distance, Corner, DEFAULT_MATCH_TOLERANCE};
pub use sample::{Query, Sample, SampleCollection};

/// Errors raised while building the engine's inputs.
///
/// Queries themselves never fail.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The sample collection has no entries.
    EmptyCollection,
    /// A sample carries a NaN or infinite field.
    NonFiniteSample { index: usize },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::EmptyCollection => write!(f, "Sample collection is empty"),
            EngineError::NonFiniteSample { index } => {
                write!(f, "Sample {} has a non-finite field", index)
            }
        }
    }
}

impl std::error::Error for EngineError {}
