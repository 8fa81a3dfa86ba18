//! Cartesian ↔ spherical position conversion.

use crate::separation::separation;

/// Spherical position: radius, polar angle, azimuth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPosition {
    /// Distance from the origin.
    pub r: f64,
    /// Polar angle from +z in radians, range `[0, π]`.
    pub theta: f64,
    /// Azimuth from +x toward +y in radians, range `(-π, π]`.
    pub phi: f64,
}

/// Convert a Cartesian position to spherical coordinates.
///
/// At the origin the angles are NaN (z/r divides by zero); the radius is 0.
pub fn to_spherical(position: [f64; 3]) -> SphericalPosition {
    let r = separation(position, [0.0; 3]);
    SphericalPosition {
        r,
        theta: (position[2] / r).acos(),
        phi: (position[1] / r).atan2(position[0] / r),
    }
}

/// Spherical coordinates for a whole particle set.
pub fn spherical_positions(positions: &[[f64; 3]]) -> Vec<SphericalPosition> {
    positions.iter().map(|&p| to_spherical(p)).collect()
}

/// Convert spherical coordinates back to a Cartesian position.
pub fn to_cartesian(s: &SphericalPosition) -> [f64; 3] {
    let (sin_theta, cos_theta) = s.theta.sin_cos();
    let (sin_phi, cos_phi) = s.phi.sin_cos();
    [
        s.r * sin_theta * cos_phi,
        s.r * sin_theta * sin_phi,
        s.r * cos_theta,
    ]
}
