//! Geometry helpers for incidence and observation directions.
//!
//! Used offline to derive incidence angles from known propagation vectors;
//! nothing here runs at query time.

mod spherical;

pub use spherical::{
    cartesian_to_spherical, incidence_from_propagation, rotate, spherical_to_cartesian,
    IncidentAngles, SphericalCoord,
};
