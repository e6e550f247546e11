#![warn(clippy::all)]

//! RCS Workbench - bistatic radar-cross-section estimation from sparse
//! simulation exports.
//!
//! The [`engine`] interpolates RCS for any (frequency, incidence,
//! observation) query over a partial grid of samples. The surrounding
//! modules load those samples from disk ([`data`]), derive incidence angles
//! ([`geo`]) and sample polar patterns for plotting ([`pattern`]).

pub mod angle;
pub mod config;
pub mod data;
pub mod engine;
pub mod geo;
pub mod pattern;

pub use config::{ConfigError, EngineConfig, ReaderConfig, WorkbenchConfig};
pub use data::{DataError, DataReader, DatasetSummary};
pub use engine::{InterpolationEngine, Query, RcsEstimate, Sample, SampleCollection};
