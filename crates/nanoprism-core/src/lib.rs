//! # Nanoprism Core
//!
//! Closed-form optical response of a metallic triangular nanoprism with
//! rounded corners. The primary longitudinal plasmon resonance is modelled
//! as a single dipole whose polarisability follows from fitted shape
//! coefficients, so a full spectrum costs microseconds instead of a
//! full-wave simulation.
//!
//! ## Modules
//!
//! - [`resonance`]: Shape coefficients and the dipole polarisability.
//! - [`cross_section`]: Scattering and extinction cross-sections (cm²).
//! - [`spectrum`]: Wavelength sweeps with the size-corrected metal
//!   permittivity, and resonance detection.
//! - [`types`]: Result containers.
//!
//! ## Errors
//!
//! Wavelengths outside a metal's tabulated optical constants surface as
//! [`CoreError::Material`]. A sweep can either fail on the first such
//! wavelength or skip it ([`spectrum::OutOfRangePolicy`]); the computation
//! never terminates the process.

pub mod cross_section;
pub mod error;
pub mod resonance;
pub mod spectrum;
pub mod types;

pub use cross_section::{extinction_cross_section, scattering_cross_section};
pub use error::CoreError;
pub use resonance::{dipole_polarizability, ShapeCoefficients};
pub use spectrum::{compute_spectrum, OutOfRangePolicy, Spectrum, SweepConfig, WavelengthGrid};
pub use types::{CrossSections, SpectralPoint};
