//! Projection of Cartesian vector quantities onto the spherical basis.

use crate::basis::spherical_basis_at;
use crate::error::FrameError;

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Convert a set of Cartesian values (typically velocities) to spherical
/// components.
///
/// `positions` sets the per-particle basis; each row of `values` is dotted
/// with the three basis vectors. Output columns are fixed as
/// (radial, theta, phi).
///
/// # Errors
///
/// [`FrameError::ShapeMismatch`] when `values` and `positions` differ in
/// length.
pub fn spherical_components(
    positions: &[[f64; 3]],
    values: &[[f64; 3]],
) -> Result<Vec<[f64; 3]>, FrameError> {
    if values.len() != positions.len() {
        return Err(FrameError::ShapeMismatch {
            expected: positions.len(),
            got: values.len(),
        });
    }
    Ok(positions
        .iter()
        .zip(values)
        .map(|(&p, &v)| {
            let b = spherical_basis_at(p);
            [dot(b.radial, v), dot(b.polar, v), dot(b.azimuthal, v)]
        })
        .collect())
}

/// Reconstruct Cartesian vectors from spherical components.
///
/// Inverse of [`spherical_components`]: each output row is
/// `c_r * radial + c_theta * polar + c_phi * azimuthal` for the basis at the
/// matching position.
///
/// # Errors
///
/// [`FrameError::ShapeMismatch`] when `components` and `positions` differ in
/// length.
pub fn cartesian_components(
    positions: &[[f64; 3]],
    components: &[[f64; 3]],
) -> Result<Vec<[f64; 3]>, FrameError> {
    if components.len() != positions.len() {
        return Err(FrameError::ShapeMismatch {
            expected: positions.len(),
            got: components.len(),
        });
    }
    Ok(positions
        .iter()
        .zip(components)
        .map(|(&p, &c)| {
            let b = spherical_basis_at(p);
            [
                c[0] * b.radial[0] + c[1] * b.polar[0] + c[2] * b.azimuthal[0],
                c[0] * b.radial[1] + c[1] * b.polar[1] + c[2] * b.azimuthal[1],
                c[0] * b.radial[2] + c[1] * b.polar[2] + c[2] * b.azimuthal[2],
            ]
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn velocity_along_position_is_purely_radial() {
        let c = spherical_components(&[[1.0, 0.0, 0.0]], &[[1.0, 0.0, 0.0]]).unwrap();
        assert!((c[0][0] - 1.0).abs() < EPS);
        assert!(c[0][1].abs() < EPS);
        assert!(c[0][2].abs() < EPS);
    }

    #[test]
    fn tangential_velocity_has_no_radial_part() {
        // On +x, moving in +y: purely azimuthal
        let c = spherical_components(&[[1.0, 0.0, 0.0]], &[[0.0, 2.5, 0.0]]).unwrap();
        assert!(c[0][0].abs() < EPS);
        assert!(c[0][1].abs() < EPS);
        assert!((c[0][2] - 2.5).abs() < EPS);
    }

    #[test]
    fn polar_velocity_on_equator() {
        // On +x, moving in +z: against the polar direction (theta-hat points
        // toward -z on the equator)
        let c = spherical_components(&[[1.0, 0.0, 0.0]], &[[0.0, 0.0, 3.0]]).unwrap();
        assert!(c[0][0].abs() < EPS);
        assert!((c[0][1] + 3.0).abs() < EPS);
        assert!(c[0][2].abs() < EPS);
    }

    #[test]
    fn projection_preserves_magnitude() {
        let c = spherical_components(&[[1.0, -2.0, 0.5]], &[[0.3, 0.4, -1.2]]).unwrap();
        let got = (c[0][0] * c[0][0] + c[0][1] * c[0][1] + c[0][2] * c[0][2]).sqrt();
        let want = (0.3f64 * 0.3 + 0.4 * 0.4 + 1.2 * 1.2).sqrt();
        assert!((got - want).abs() < EPS);
    }

    #[test]
    fn output_length_matches_input() {
        let p = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let v = [[1.0, 1.0, 1.0]; 3];
        let c = spherical_components(&p, &v).unwrap();
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn mismatched_lengths_error() {
        let p = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let v = [[1.0, 1.0, 1.0]];
        let err = spherical_components(&p, &v).unwrap_err();
        assert_eq!(err, FrameError::ShapeMismatch { expected: 2, got: 1 });
        let err = cartesian_components(&p, &v).unwrap_err();
        assert_eq!(err, FrameError::ShapeMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn roundtrip_recovers_cartesian_vector() {
        let p = [[1.2, -0.7, 2.3], [0.1, 0.1, -4.0]];
        let v = [[10.0, -20.0, 5.0], [-1.0, 0.5, 0.25]];
        let c = spherical_components(&p, &v).unwrap();
        let back = cartesian_components(&p, &c).unwrap();
        for (row, orig) in back.iter().zip(&v) {
            for i in 0..3 {
                assert!((row[i] - orig[i]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn zero_position_propagates_nan() {
        let c = spherical_components(&[[0.0, 0.0, 0.0]], &[[1.0, 2.0, 3.0]]).unwrap();
        assert!(c[0].iter().all(|x| x.is_nan()));
    }
}
