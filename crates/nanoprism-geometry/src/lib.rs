//! # Nanoprism Geometry
//!
//! Geometry of the rounded-corner triangular nanoprism:
//!
//! - [`primitives::RoundedPrism`]: edge length, thickness and corner radius.
//! - Volume helpers: the prism volume and the diameter of the
//!   volume-equivalent sphere, which sets the size correction of the metal's
//!   dielectric function.

pub mod primitives;

pub use primitives::{effective_diameter, prism_volume, GeometryError, RoundedPrism};
