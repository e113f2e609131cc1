//! # Nanoprism Materials
//!
//! Dielectric functions of silver and gold for nanoparticle optics. All
//! materials implement the [`MaterialProvider`](provider::MaterialProvider)
//! trait, which maps a vacuum wavelength to a complex permittivity.
//!
//! ## Available data sources
//!
//! | Metal | Dataset | Rows | Energy range |
//! |-------|---------|------|--------------|
//! | Ag | Johnson & Christy, *Phys. Rev. B* **6**, 4370 (1972) | 49 | 0.64–6.60 eV |
//! | Au | Olmon et al., *Phys. Rev. B* **86**, 235147 (2012) | 448 | 0.0497–4.133 eV |
//!
//! ## Interpolation
//!
//! $n(E)$ and $k(E)$ are reconstructed with local four-point Lagrange cubics
//! ([`interp::lagrange4`]). Queries outside the table are rejected with
//! [`MaterialError::OutOfRange`](provider::MaterialError::OutOfRange) rather
//! than extrapolated.
//!
//! ## Size correction
//!
//! [`size_corrected::SizeCorrectedMetal`] adds the finite-size Drude damping
//! correction for a particle of a given effective diameter.

mod data;
pub mod interp;
pub mod metal;
pub mod provider;
pub mod size_corrected;
pub mod table;
pub mod tabulated;

use num_complex::Complex64;

pub use metal::{FreeElectronParams, Metal};
pub use provider::{MaterialError, MaterialProvider};
pub use size_corrected::SizeCorrectedMetal;
pub use table::SpectralTable;
pub use tabulated::TabulatedMetal;

/// $hc$ in eV·nm, as used to convert wavelength to photon energy.
pub const HC_EV_NM: f64 = 1239.8;

/// Reduced Planck constant $\hbar$ in eV·s.
pub const HBAR_EV_S: f64 = 6.582e-16;

/// Nanometres per centimetre.
pub const NM_PER_CM: f64 = 1.0e7;

/// Photon energy (eV) of light with vacuum wavelength `wavelength_nm`.
#[inline]
pub fn photon_energy_ev(wavelength_nm: f64) -> f64 {
    HC_EV_NM / wavelength_nm
}

/// Bulk permittivity of `metal` at `wavelength_nm`.
pub fn dielectric(metal: Metal, wavelength_nm: f64) -> Result<Complex64, MaterialError> {
    TabulatedMetal::new(metal).dielectric_function(wavelength_nm)
}

/// Size-corrected permittivity of `metal` at `wavelength_nm` for a particle
/// of effective diameter `diameter_nm`.
pub fn dielectric_size_corrected(
    metal: Metal,
    wavelength_nm: f64,
    diameter_nm: f64,
) -> Result<Complex64, MaterialError> {
    SizeCorrectedMetal::new(metal, diameter_nm).dielectric_function(wavelength_nm)
}
