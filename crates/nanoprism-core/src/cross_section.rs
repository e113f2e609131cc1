//! Scattering and extinction cross-sections of a dipole scatterer.
//!
//! With the host wavenumber $k = 2\pi\sqrt{\epsilon_h}/\lambda$:
//!
//! $$C_{sca} = \frac{8\pi}{3} k^4 |\alpha|^2, \qquad C_{ext} = 4\pi k\,\mathrm{Im}\,\alpha$$
//!
//! Lengths are in nm internally; results are converted to cm².

use std::f64::consts::PI;

use nanoprism_geometry::RoundedPrism;
use num_complex::Complex64;

use crate::resonance::dipole_polarizability;
use crate::types::CrossSections;

/// nm² → cm².
pub const NM2_TO_CM2: f64 = 1.0e-14;

/// Wavenumber in the host medium (nm⁻¹).
#[inline]
pub fn host_wavenumber(wavelength_nm: f64, eps_h: f64) -> f64 {
    2.0 * PI * eps_h.sqrt() / wavelength_nm
}

/// Scattering cross-section (cm²) of a dipole with polarisability `alpha` (nm³).
pub fn scattering_from_polarizability(wavelength_nm: f64, eps_h: f64, alpha: Complex64) -> f64 {
    let k = host_wavenumber(wavelength_nm, eps_h);
    8.0 * PI * k.powi(4) * alpha.norm().powi(2) * NM2_TO_CM2 / 3.0
}

/// Extinction cross-section (cm²) of a dipole with polarisability `alpha` (nm³).
pub fn extinction_from_polarizability(wavelength_nm: f64, eps_h: f64, alpha: Complex64) -> f64 {
    let k = host_wavenumber(wavelength_nm, eps_h);
    4.0 * PI * k * alpha.im * NM2_TO_CM2
}

/// Scattering cross-section (cm²) of the prism.
pub fn scattering_cross_section(
    wavelength_nm: f64,
    eps_m: Complex64,
    eps_h: f64,
    prism: &RoundedPrism,
) -> f64 {
    let alpha = dipole_polarizability(wavelength_nm, eps_m, eps_h, prism);
    scattering_from_polarizability(wavelength_nm, eps_h, alpha)
}

/// Extinction cross-section (cm²) of the prism.
pub fn extinction_cross_section(
    wavelength_nm: f64,
    eps_m: Complex64,
    eps_h: f64,
    prism: &RoundedPrism,
) -> f64 {
    let alpha = dipole_polarizability(wavelength_nm, eps_m, eps_h, prism);
    extinction_from_polarizability(wavelength_nm, eps_h, alpha)
}

impl CrossSections {
    /// Derive all cross-sections from one polarisability evaluation.
    pub fn from_polarizability(wavelength_nm: f64, eps_h: f64, alpha: Complex64) -> Self {
        let extinction = extinction_from_polarizability(wavelength_nm, eps_h, alpha);
        let scattering = scattering_from_polarizability(wavelength_nm, eps_h, alpha);
        Self {
            wavelength_nm,
            extinction,
            absorption: extinction - scattering,
            scattering,
        }
    }
}
