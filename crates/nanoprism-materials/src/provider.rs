//! Material property provider trait.
//!
//! All dielectric-function sources implement [`MaterialProvider`], which
//! returns the complex permittivity at a vacuum wavelength.

use num_complex::Complex64;
use thiserror::Error;

use crate::HC_EV_NM;

/// Errors from material providers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    /// The photon energy of the query lies outside the tabulated data.
    ///
    /// Extrapolated optical constants have no physical meaning, so this is
    /// reported instead of evaluating the interpolant outside its table.
    #[error(
        "{material}: photon energy {energy_ev:.5} eV (λ = {wavelength_nm} nm) is outside the data range [{min_ev}, {max_ev}] eV"
    )]
    OutOfRange {
        material: &'static str,
        wavelength_nm: f64,
        energy_ev: f64,
        min_ev: f64,
        max_ev: f64,
    },

    #[error("Material not found: {0}")]
    NotFound(String),
}

/// Provides wavelength-dependent dielectric functions.
///
/// Implementations are the bulk tabulated metals and their size-corrected
/// counterparts.
pub trait MaterialProvider: Send + Sync {
    /// Human-readable name of this material.
    fn name(&self) -> &str;

    /// Photon-energy range (eV) over which data is available.
    fn energy_range_ev(&self) -> (f64, f64);

    /// Wavelength range (nm) over which data is available.
    fn wavelength_range(&self) -> (f64, f64) {
        let (min_ev, max_ev) = self.energy_range_ev();
        (HC_EV_NM / max_ev, HC_EV_NM / min_ev)
    }

    /// Complex dielectric function $\epsilon(\lambda)$ at a vacuum wavelength.
    fn dielectric_function(&self, wavelength_nm: f64) -> Result<Complex64, MaterialError>;

    /// Complex refractive index $\tilde{n} = n + ik$ at a given wavelength.
    ///
    /// Default implementation derives from $\epsilon = \tilde{n}^2$.
    fn refractive_index(&self, wavelength_nm: f64) -> Result<Complex64, MaterialError> {
        let eps = self.dielectric_function(wavelength_nm)?;
        Ok(eps.sqrt())
    }
}
