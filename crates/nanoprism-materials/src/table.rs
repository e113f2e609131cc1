//! Embedded spectral tables of optical constants.
//!
//! A [`SpectralTable`] holds measured $(E, n, k)$ triples sorted by photon
//! energy. Tables are compiled in as `static` arrays and never change, so a
//! `&'static SpectralTable` can be shared freely between threads.

use num_complex::Complex64;

use crate::data::{gold, silver};
use crate::interp::lagrange4;

/// Optical constants $n(E)$ and $k(E)$ tabulated at increasing photon energy.
#[derive(Debug, Clone, Copy)]
pub struct SpectralTable {
    /// Photon energies (eV), strictly increasing.
    energy_ev: &'static [f64],
    /// Refractive index at each energy.
    n: &'static [f64],
    /// Extinction coefficient at each energy.
    k: &'static [f64],
}

/// Johnson & Christy (1972) silver, 0.64–6.60 eV.
pub static SILVER: SpectralTable = SpectralTable {
    energy_ev: &silver::ENERGY_EV,
    n: &silver::N,
    k: &silver::K,
};

/// Olmon et al. (2012) evaporated gold, 0.0497–4.133 eV.
pub static GOLD: SpectralTable = SpectralTable {
    energy_ev: &gold::ENERGY_EV,
    n: &gold::N,
    k: &gold::K,
};

impl SpectralTable {
    /// Number of tabulated energies.
    pub fn len(&self) -> usize {
        self.energy_ev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy_ev.is_empty()
    }

    /// Tabulated photon energies (eV).
    pub fn energies(&self) -> &'static [f64] {
        self.energy_ev
    }

    /// Tabulated refractive indices.
    pub fn refractive_indices(&self) -> &'static [f64] {
        self.n
    }

    /// Tabulated extinction coefficients.
    pub fn extinction_coefficients(&self) -> &'static [f64] {
        self.k
    }

    /// Lowest and highest tabulated energies (eV).
    pub fn energy_range_ev(&self) -> (f64, f64) {
        (self.energy_ev[0], self.energy_ev[self.len() - 1])
    }

    /// Whether `energy_ev` lies inside the tabulated range, boundaries included.
    pub fn contains_energy(&self, energy_ev: f64) -> bool {
        let (min, max) = self.energy_range_ev();
        energy_ev >= min && energy_ev <= max
    }

    /// Interpolated $(n, k)$ at a photon energy. No range check.
    pub fn refractive_index_at(&self, energy_ev: f64) -> (f64, f64) {
        (
            lagrange4(self.energy_ev, self.n, energy_ev),
            lagrange4(self.energy_ev, self.k, energy_ev),
        )
    }

    /// Complex permittivity $\epsilon = (n^2 - k^2) + 2ink$ at a photon energy.
    pub fn permittivity_at(&self, energy_ev: f64) -> Complex64 {
        let (n, k) = self.refractive_index_at(energy_ev);
        Complex64::new(n * n - k * k, 2.0 * n * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::WINDOW;

    /// Invariants the interpolator relies on.
    fn is_well_formed(table: &SpectralTable) -> bool {
        table.len() >= WINDOW
            && table.n.len() == table.len()
            && table.k.len() == table.len()
            && table.energy_ev.windows(2).all(|w| w[1] > w[0])
    }

    #[test]
    fn test_embedded_tables_are_well_formed() {
        assert!(is_well_formed(&SILVER));
        assert!(is_well_formed(&GOLD));
        assert_eq!(SILVER.len(), 49);
        assert_eq!(GOLD.len(), 448);
    }

    #[test]
    fn test_energy_ranges() {
        assert_eq!(SILVER.energy_range_ev(), (0.64, 6.60));
        assert_eq!(GOLD.energy_range_ev(), (0.0497329, 4.13281));
    }

    #[test]
    fn test_permittivity_at_node_matches_nk() {
        // Silver at 3.00 eV: n = 0.05, k = 2.275.
        let i = SILVER.energies().iter().position(|&e| e == 3.00).unwrap();
        let n = SILVER.refractive_indices()[i];
        let k = SILVER.extinction_coefficients()[i];
        let eps = SILVER.permittivity_at(3.00);
        assert!((eps.re - (n * n - k * k)).abs() < 1e-10);
        assert!((eps.im - 2.0 * n * k).abs() < 1e-10);
    }

    #[test]
    fn test_contains_energy_is_inclusive() {
        let (min, max) = GOLD.energy_range_ev();
        assert!(GOLD.contains_energy(min));
        assert!(GOLD.contains_energy(max));
        assert!(!GOLD.contains_energy(min - 1e-9));
        assert!(!GOLD.contains_energy(max + 1e-9));
    }
}
