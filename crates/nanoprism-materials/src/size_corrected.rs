//! Size-dependent dielectric functions.
//!
//! Conduction electrons in a particle smaller than their bulk mean free path
//! also scatter off the particle surface. The bulk permittivity is corrected
//! by swapping the bulk Drude damping $\gamma_\infty$ for the size-limited
//! damping $\gamma_r$ (see [`FreeElectronParams::drude_correction`]).

use num_complex::Complex64;

use crate::metal::{FreeElectronParams, Metal};
use crate::photon_energy_ev;
use crate::provider::{MaterialError, MaterialProvider};
use crate::tabulated::TabulatedMetal;

/// A tabulated metal with finite-size damping for a given effective diameter.
#[derive(Debug, Clone, Copy)]
pub struct SizeCorrectedMetal {
    bulk: TabulatedMetal,
    params: FreeElectronParams,
    diameter_nm: f64,
    name: &'static str,
}

impl SizeCorrectedMetal {
    /// # Arguments
    /// * `metal` - Which metal.
    /// * `diameter_nm` - Effective particle diameter $D$ (nm).
    pub fn new(metal: Metal, diameter_nm: f64) -> Self {
        let name = match metal {
            Metal::Silver => "Ag (Johnson & Christy, size-corrected)",
            Metal::Gold => "Au (Olmon et al., size-corrected)",
        };
        Self {
            bulk: TabulatedMetal::new(metal),
            params: metal.free_electron(),
            diameter_nm,
            name,
        }
    }

    pub fn metal(&self) -> Metal {
        self.bulk.metal()
    }

    pub fn diameter_nm(&self) -> f64 {
        self.diameter_nm
    }

    /// The underlying bulk material.
    pub fn bulk(&self) -> &TabulatedMetal {
        &self.bulk
    }
}

impl MaterialProvider for SizeCorrectedMetal {
    fn name(&self) -> &str {
        self.name
    }

    fn energy_range_ev(&self) -> (f64, f64) {
        self.bulk.energy_range_ev()
    }

    fn dielectric_function(&self, wavelength_nm: f64) -> Result<Complex64, MaterialError> {
        let omega = photon_energy_ev(wavelength_nm);
        let bulk = self.bulk.checked_permittivity(omega, wavelength_nm)?;
        Ok(bulk + self.params.drude_correction(omega, self.diameter_nm))
    }
}
