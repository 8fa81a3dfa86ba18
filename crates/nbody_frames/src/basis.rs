//! Per-particle spherical basis construction.
//!
//! Angles follow the physicist's (ISO) convention: theta is the polar angle
//! from the +z axis in `[0, π]`, phi is the azimuth in the x-y plane from +x
//! toward +y in `(-π, π]`.

use crate::separation::{radial_distance, separation};

/// Orthonormal spherical basis at a single particle position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisVectors {
    /// Unit radial direction, aligned with the Cartesian position vector.
    pub radial: [f64; 3],
    /// Unit polar (theta) direction, orthogonal to `radial`.
    pub polar: [f64; 3],
    /// Unit azimuthal (phi) direction, orthogonal to both.
    pub azimuthal: [f64; 3],
}

/// Spherical basis for a whole particle set, one [`BasisVectors`] triple per
/// row, stored column-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalBasis {
    /// Unit radial directions, one per particle.
    pub radial: Vec<[f64; 3]>,
    /// Unit polar (theta) directions, one per particle.
    pub polar: Vec<[f64; 3]>,
    /// Unit azimuthal (phi) directions, one per particle.
    pub azimuthal: Vec<[f64; 3]>,
}

impl SphericalBasis {
    /// Number of particles the basis was built from.
    pub fn len(&self) -> usize {
        self.radial.len()
    }

    /// True when the basis holds no particles.
    pub fn is_empty(&self) -> bool {
        self.radial.is_empty()
    }

    /// Basis triple for particle `i`.
    pub fn at(&self, i: usize) -> BasisVectors {
        BasisVectors {
            radial: self.radial[i],
            polar: self.polar[i],
            azimuthal: self.azimuthal[i],
        }
    }
}

/// Spherical basis at one Cartesian position.
///
/// The triple is mutually orthonormal whenever the position is nonzero. At
/// the origin the radial normalization divides by zero and NaN propagates
/// into the returned components.
pub fn spherical_basis_at(position: [f64; 3]) -> BasisVectors {
    let r = separation(position, [0.0; 3]);
    let radial = [position[0] / r, position[1] / r, position[2] / r];
    let theta = radial[2].acos();
    let phi = radial[1].atan2(radial[0]);
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    BasisVectors {
        radial,
        polar: [cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta],
        azimuthal: [-sin_phi, cos_phi, 0.0],
    }
}

/// Set the spherical coordinate basis from a particle position set.
///
/// Returns three arrays of unit vectors (radial, polar, azimuthal), each the
/// same length as `positions`.
pub fn set_spherical_basis(positions: &[[f64; 3]]) -> SphericalBasis {
    let r = radial_distance(positions);
    let mut radial = Vec::with_capacity(positions.len());
    let mut polar = Vec::with_capacity(positions.len());
    let mut azimuthal = Vec::with_capacity(positions.len());
    for (&p, &ri) in positions.iter().zip(&r) {
        let unit = [p[0] / ri, p[1] / ri, p[2] / ri];
        let theta = unit[2].acos();
        let phi = unit[1].atan2(unit[0]);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        radial.push(unit);
        polar.push([cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta]);
        azimuthal.push([-sin_phi, cos_phi, 0.0]);
    }
    SphericalBasis {
        radial,
        polar,
        azimuthal,
    }
}
