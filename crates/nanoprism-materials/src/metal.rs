//! Supported metals and their free-electron constants.

use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::provider::MaterialError;
use crate::table::{SpectralTable, GOLD, SILVER};
use crate::{HBAR_EV_S, NM_PER_CM};

/// A plasmonic metal with embedded optical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metal {
    #[serde(rename = "Ag", alias = "silver", alias = "Silver")]
    Silver,
    #[serde(rename = "Au", alias = "gold", alias = "Gold")]
    Gold,
}

impl Metal {
    pub const ALL: [Metal; 2] = [Metal::Silver, Metal::Gold];

    /// Chemical symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Metal::Silver => "Ag",
            Metal::Gold => "Au",
        }
    }

    /// Name of the dataset behind [`Metal::table`].
    pub fn source(self) -> &'static str {
        match self {
            Metal::Silver => "Johnson & Christy (1972)",
            Metal::Gold => "Olmon et al. (2012)",
        }
    }

    /// Measured optical constants of the bulk metal.
    pub fn table(self) -> &'static SpectralTable {
        match self {
            Metal::Silver => &SILVER,
            Metal::Gold => &GOLD,
        }
    }

    /// Free-electron constants used for the finite-size correction.
    pub fn free_electron(self) -> FreeElectronParams {
        match self {
            Metal::Silver => FreeElectronParams {
                fermi_velocity_cm_s: 1.39e8,
                mean_free_path_cm: 5.2e-6,
                plasma_energy_ev: 9.1,
                surface_scattering: 2.5,
            },
            Metal::Gold => FreeElectronParams {
                fermi_velocity_cm_s: 1.38e8,
                mean_free_path_cm: 1.28e-6,
                plasma_energy_ev: 9.0,
                surface_scattering: 2.0,
            },
        }
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Metal {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ag" | "silver" => Ok(Metal::Silver),
            "au" | "gold" => Ok(Metal::Gold),
            _ => Err(MaterialError::NotFound(s.to_string())),
        }
    }
}

/// Drude parameters of the conduction electrons.
///
/// Energies are in eV; the damping rates below are $\hbar\gamma$ in eV so
/// they combine directly with photon energies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeElectronParams {
    /// Fermi velocity $v_F$ (cm/s).
    pub fermi_velocity_cm_s: f64,
    /// Bulk electron mean free path (cm).
    pub mean_free_path_cm: f64,
    /// Plasma energy $\hbar\omega_p$ (eV).
    pub plasma_energy_ev: f64,
    /// Empirical surface-scattering constant $A$.
    pub surface_scattering: f64,
}

impl FreeElectronParams {
    /// Bulk damping $\gamma_\infty = \hbar v_F / \ell_\infty$ (eV).
    pub fn bulk_damping_ev(&self) -> f64 {
        HBAR_EV_S * self.fermi_velocity_cm_s / self.mean_free_path_cm
    }

    /// Size-limited damping $\gamma_r = \gamma_\infty + A \hbar v_F (2/D)$ (eV)
    /// for an effective diameter `diameter_nm`.
    pub fn size_damping_ev(&self, diameter_nm: f64) -> f64 {
        self.bulk_damping_ev()
            + self.surface_scattering
                * HBAR_EV_S
                * self.fermi_velocity_cm_s
                * NM_PER_CM
                * (2.0 / diameter_nm)
    }

    /// Correction added to the bulk permittivity at photon energy `omega_ev`:
    ///
    /// $$\omega_p^2 \left(\frac{1}{\omega^2 + i\omega\gamma_\infty}
    ///   - \frac{1}{\omega^2 + i\omega\gamma_r}\right)$$
    ///
    /// The bulk Drude term is removed and re-added with the size-limited
    /// damping.
    pub fn drude_correction(&self, omega_ev: f64, diameter_nm: f64) -> Complex64 {
        let gamma_inf = self.bulk_damping_ev();
        let gamma_r = self.size_damping_ev(diameter_nm);
        let wp2 = self.plasma_energy_ev * self.plasma_energy_ev;
        let w2 = omega_ev * omega_ev;

        wp2 * (Complex64::new(w2, omega_ev * gamma_inf).inv()
            - Complex64::new(w2, omega_ev * gamma_r).inv())
    }
}
