//! Spherical-coordinate frames for N-body particle data.
//!
//! This crate provides:
//! - Radial separation between particle positions and a broadcastable
//!   reference point
//! - Per-particle orthonormal spherical basis vectors (radial, polar,
//!   azimuthal), following the physicist's (ISO) angle convention
//! - Projection of Cartesian vector quantities (e.g. velocities) onto that
//!   basis, and the inverse reconstruction
//!
//! Positions and vector quantities are row sets of `[f64; 3]`. No unit
//! conversions are performed anywhere. A particle sitting exactly at its
//! reference point has an undefined radial direction; the division by zero
//! propagates as NaN rather than raising an error.

pub mod basis;
pub mod components;
pub mod coords;
pub mod error;
pub mod separation;

pub use basis::{BasisVectors, SphericalBasis, set_spherical_basis, spherical_basis_at};
pub use components::{cartesian_components, spherical_components};
pub use coords::{SphericalPosition, spherical_positions, to_cartesian, to_spherical};
pub use error::FrameError;
pub use separation::{Reference, radial_distance, radial_separation, separation};
