//! Spherical/cartesian conversion and incidence angles.
//!
//! Two conventions are in play:
//! - Observation directions are y-up: `theta` is measured from +Y and `phi`
//!   from +Z towards +X.
//! - Incidence directions are z-up: elevation is measured from +Z and
//!   azimuth from +X towards +Y.

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use crate::angle::normalize_360;

/// A point in spherical coordinates, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoord {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

/// Incidence direction of the illuminating wave, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IncidentAngles {
    pub elevation: f64,
    pub azimuth: f64,
}

impl IncidentAngles {
    /// Creates incidence angles, normalized to `[0, 360)`.
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Self {
            elevation: normalize_360(elevation),
            azimuth: normalize_360(azimuth),
        }
    }
}

/// Converts y-up spherical coordinates to a cartesian vector.
pub fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> DVec3 {
    let (sin_t, cos_t) = theta.to_radians().sin_cos();
    let (sin_p, cos_p) = phi.to_radians().sin_cos();
    DVec3::new(r * sin_t * sin_p, r * cos_t, r * sin_t * cos_p)
}

/// Converts a cartesian vector to y-up spherical coordinates.
///
/// `phi` is returned in `[0, 360)`. The zero vector maps to all zeros.
pub fn cartesian_to_spherical(v: DVec3) -> SphericalCoord {
    let r = v.length();
    if r == 0.0 {
        return SphericalCoord {
            r: 0.0,
            theta: 0.0,
            phi: 0.0,
        };
    }
    SphericalCoord {
        r,
        theta: (v.y / r).clamp(-1.0, 1.0).acos().to_degrees(),
        phi: normalize_360(v.x.atan2(v.z).to_degrees()),
    }
}

/// Rotates `v` about X, then Y, then Z by the given angles in degrees.
pub fn rotate(v: DVec3, about_x: f64, about_y: f64, about_z: f64) -> DVec3 {
    let rotation = DMat3::from_rotation_z(about_z.to_radians())
        * DMat3::from_rotation_y(about_y.to_radians())
        * DMat3::from_rotation_x(about_x.to_radians());
    rotation * v
}

/// Incidence angles of a wave travelling along `propagation` (z-up).
///
/// Elevation is `acos(z / r)` and azimuth `atan2(y, x)`, both normalized.
/// The zero vector has no direction and maps to (0°, 0°).
pub fn incidence_from_propagation(propagation: DVec3) -> IncidentAngles {
    let r = propagation.length();
    if r == 0.0 {
        return IncidentAngles::default();
    }
    let elevation = (propagation.z / r).clamp(-1.0, 1.0).acos().to_degrees();
    let azimuth = propagation.y.atan2(propagation.x).to_degrees();
    IncidentAngles::new(elevation, azimuth)
}
