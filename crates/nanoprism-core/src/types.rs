//! Result types shared by the resonance model and the spectral sweep.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Optical cross-sections at a single wavelength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSections {
    /// Wavelength (nm).
    pub wavelength_nm: f64,
    /// Extinction cross-section (cm²).
    pub extinction: f64,
    /// Absorption cross-section, extinction minus scattering (cm²).
    pub absorption: f64,
    /// Scattering cross-section (cm²).
    pub scattering: f64,
}

/// Everything computed at one wavelength of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralPoint {
    /// Wavelength (nm).
    pub wavelength_nm: f64,
    /// Metal permittivity used at this wavelength.
    pub permittivity: Complex64,
    /// Dipole polarisability (nm³).
    pub polarizability: Complex64,
    /// Cross-sections derived from `polarizability`.
    pub cross_sections: CrossSections,
}
