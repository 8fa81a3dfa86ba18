//! Radial separation between particle positions.

use crate::error::FrameError;

/// Reference position for a separation computation.
///
/// Mirrors array broadcasting: a scalar applies along every axis of every
/// particle, a single point applies to every particle, and a full point set
/// pairs up row by row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reference<'a> {
    /// The origin `[0, 0, 0]`.
    Origin,
    /// The same value along every axis, e.g. `0.5` means `[0.5, 0.5, 0.5]`.
    Scalar(f64),
    /// A single point shared by every particle.
    Point([f64; 3]),
    /// One reference point per particle. The length must equal the position
    /// count, or be 1 (broadcast like [`Reference::Point`]).
    Points(&'a [[f64; 3]]),
}

impl From<f64> for Reference<'static> {
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}

impl From<[f64; 3]> for Reference<'static> {
    fn from(p: [f64; 3]) -> Self {
        Self::Point(p)
    }
}

impl<'a> From<&'a [[f64; 3]]> for Reference<'a> {
    fn from(ps: &'a [[f64; 3]]) -> Self {
        Self::Points(ps)
    }
}

/// Euclidean distance between two points.
pub fn separation(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Distance of each particle from the origin (vector magnitude).
pub fn radial_distance(positions: &[[f64; 3]]) -> Vec<f64> {
    positions.iter().map(|&p| separation(p, [0.0; 3])).collect()
}

/// Radial separation between each particle in `positions` and `reference`.
///
/// No unit conversions are performed. Separations are non-negative;
/// coincident points give exactly 0.
///
/// # Errors
///
/// [`FrameError::ShapeMismatch`] when `reference` is [`Reference::Points`]
/// with a length that is neither `positions.len()` nor 1.
pub fn radial_separation(
    positions: &[[f64; 3]],
    reference: Reference<'_>,
) -> Result<Vec<f64>, FrameError> {
    match reference {
        Reference::Origin => Ok(radial_distance(positions)),
        Reference::Scalar(s) => Ok(positions.iter().map(|&p| separation(p, [s; 3])).collect()),
        Reference::Point(q) => Ok(positions.iter().map(|&p| separation(p, q)).collect()),
        Reference::Points(qs) => {
            if qs.len() == 1 {
                let q = qs[0];
                return Ok(positions.iter().map(|&p| separation(p, q)).collect());
            }
            if qs.len() != positions.len() {
                return Err(FrameError::ShapeMismatch {
                    expected: positions.len(),
                    got: qs.len(),
                });
            }
            Ok(positions
                .iter()
                .zip(qs)
                .map(|(&p, &q)| separation(p, q))
                .collect())
        }
    }
}
