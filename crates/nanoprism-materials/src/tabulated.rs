//! Bulk dielectric functions interpolated from measured optical constants.
//!
//! The query wavelength is converted to photon energy $E = hc/\lambda$,
//! $n$ and $k$ are interpolated at $E$ with [`lagrange4`](crate::interp::lagrange4)
//! and combined into $\epsilon = (n^2 - k^2) + 2ink$.

use num_complex::Complex64;

use crate::metal::Metal;
use crate::photon_energy_ev;
use crate::provider::{MaterialError, MaterialProvider};
use crate::table::SpectralTable;

/// A bulk metal backed by an embedded [`SpectralTable`].
#[derive(Debug, Clone, Copy)]
pub struct TabulatedMetal {
    metal: Metal,
    table: &'static SpectralTable,
}

impl TabulatedMetal {
    pub fn new(metal: Metal) -> Self {
        Self {
            metal,
            table: metal.table(),
        }
    }

    /// Johnson & Christy silver.
    pub fn silver() -> Self {
        Self::new(Metal::Silver)
    }

    /// Olmon et al. gold.
    pub fn gold() -> Self {
        Self::new(Metal::Gold)
    }

    pub fn metal(&self) -> Metal {
        self.metal
    }

    /// Permittivity at a photon energy, rejecting energies outside the table.
    ///
    /// `wavelength_nm` is only carried into the error for reporting.
    pub(crate) fn checked_permittivity(
        &self,
        energy_ev: f64,
        wavelength_nm: f64,
    ) -> Result<Complex64, MaterialError> {
        if !self.table.contains_energy(energy_ev) {
            let (min_ev, max_ev) = self.table.energy_range_ev();
            log::debug!(
                "{} queried at {energy_ev:.5} eV, outside [{min_ev}, {max_ev}] eV",
                self.metal
            );
            return Err(MaterialError::OutOfRange {
                material: self.metal.symbol(),
                wavelength_nm,
                energy_ev,
                min_ev,
                max_ev,
            });
        }
        Ok(self.table.permittivity_at(energy_ev))
    }
}

impl MaterialProvider for TabulatedMetal {
    fn name(&self) -> &str {
        match self.metal {
            Metal::Silver => "Ag (Johnson & Christy)",
            Metal::Gold => "Au (Olmon et al.)",
        }
    }

    fn energy_range_ev(&self) -> (f64, f64) {
        self.table.energy_range_ev()
    }

    fn dielectric_function(&self, wavelength_nm: f64) -> Result<Complex64, MaterialError> {
        self.checked_permittivity(photon_energy_ev(wavelength_nm), wavelength_nm)
    }
}
