//! Analytical dipole resonance model of the rounded-corner nanoprism.
//!
//! The primary longitudinal plasmon mode is described by a dipole
//! polarisability with four shape coefficients fitted over the aspect ratios
//! $L/H$, $L/R$ and $H/R$:
//!
//! - $\beta$ scales the prism volume, $V_1 = \beta V_0$;
//! - $\epsilon_c$ is the permittivity at which the quasi-static denominator
//!   vanishes;
//! - $a_2$, $a_4$ are the retardation corrections in the size parameter
//!   $s = \sqrt{\epsilon_h} L / \lambda$.
//!
//! $$\alpha = \frac{V_1}{4\pi}\left[\frac{1}{\epsilon_m/\epsilon_h - 1}
//!   - \frac{1}{\epsilon_c - 1} - A_{rc}\right]^{-1},\qquad
//!   A_{rc} = s^2 a_2 + i\frac{4\pi^2}{3}\frac{V_1}{L^3}s^3 + s^4 a_4$$
//!
//! # Reference
//! A. D. Kondorskiy and A. V. Mekshun, *J. Russ. Laser Res.* **44**, 627 (2023).

use std::f64::consts::PI;

use nanoprism_geometry::RoundedPrism;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// One term $c \cdot x^p$ of a power-law regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerTerm {
    pub coefficient: f64,
    pub exponent: f64,
}

impl PowerTerm {
    const fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    fn eval(&self, ratio: f64) -> f64 {
        self.coefficient * ratio.powf(self.exponent)
    }
}

/// A shape coefficient fitted as
/// $c_1 (L/H)^{p_1} + c_2 (L/R)^{p_2} + c_3 (H/R)^{p_3} + c_0$.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioFit {
    pub edge_thickness: PowerTerm,
    pub edge_radius: PowerTerm,
    pub thickness_radius: PowerTerm,
    pub offset: f64,
}

impl RatioFit {
    /// Evaluate at the ratios `(L/H, L/R, H/R)`.
    pub fn evaluate(&self, ratios: (f64, f64, f64)) -> f64 {
        let (lh, lr, hr) = ratios;
        self.edge_thickness.eval(lh)
            + self.edge_radius.eval(lr)
            + self.thickness_radius.eval(hr)
            + self.offset
    }
}

/// Volume factor $\beta$.
pub const BETA_FIT: RatioFit = RatioFit {
    edge_thickness: PowerTerm::new(-0.649487, -1.27802),
    edge_radius: PowerTerm::new(1.87718, -0.928178),
    thickness_radius: PowerTerm::new(0.0784606, -0.619604),
    offset: 0.617065,
};

/// Resonance permittivity $\epsilon_c$.
pub const EPS_C_FIT: RatioFit = RatioFit {
    edge_thickness: PowerTerm::new(-1.73983, 0.904851),
    edge_radius: PowerTerm::new(23.7005, -9.71985),
    thickness_radius: PowerTerm::new(3.73666, -0.416187),
    offset: -4.23387,
};

/// Second-order retardation coefficient $a_2$.
pub const A2_FIT: RatioFit = RatioFit {
    edge_thickness: PowerTerm::new(1.35181, -0.556507),
    edge_radius: PowerTerm::new(1.13818, -0.483608),
    thickness_radius: PowerTerm::new(-0.287856, -0.468685),
    offset: -0.0564038,
};

/// Fourth-order retardation coefficient $a_4$.
pub const A4_FIT: RatioFit = RatioFit {
    edge_thickness: PowerTerm::new(-2.58813, -0.447242),
    edge_radius: PowerTerm::new(-2.62882, -2.97322),
    thickness_radius: PowerTerm::new(-0.254773, -0.125501),
    offset: 0.702526,
};

/// Shape coefficients of one prism geometry.
///
/// They depend only on the geometry, so a sweep over wavelength evaluates
/// them once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeCoefficients {
    pub beta: f64,
    pub eps_c: f64,
    pub a2: f64,
    pub a4: f64,
}

impl ShapeCoefficients {
    pub fn for_prism(prism: &RoundedPrism) -> Self {
        let ratios = prism.aspect_ratios();
        Self {
            beta: BETA_FIT.evaluate(ratios),
            eps_c: EPS_C_FIT.evaluate(ratios),
            a2: A2_FIT.evaluate(ratios),
            a4: A4_FIT.evaluate(ratios),
        }
    }

    /// Dipole polarisability (nm³) using these precomputed coefficients.
    ///
    /// `prism` must be the geometry the coefficients were computed for.
    pub fn polarizability(
        &self,
        wavelength_nm: f64,
        eps_m: Complex64,
        eps_h: f64,
        prism: &RoundedPrism,
    ) -> Complex64 {
        let l = prism.edge_length_nm;
        let s = eps_h.sqrt() * l / wavelength_nm;
        let v1 = prism.volume_nm3() * self.beta;

        let radiative = Complex64::new(
            s * s * self.a2 + s * s * s * s * self.a4,
            4.0 * PI * PI * v1 * s * s * s / (3.0 * l * l * l),
        );
        let one = Complex64::new(1.0, 0.0);
        let denominator = (eps_m / eps_h - one).inv() - 1.0 / (self.eps_c - 1.0) - radiative;

        Complex64::from(v1 / (4.0 * PI)) / denominator
    }
}

/// Complex dipole polarisability (nm³) of the primary longitudinal mode.
///
/// # Arguments
/// * `wavelength_nm` - Vacuum wavelength (nm).
/// * `eps_m` - Permittivity of the metal at this wavelength.
/// * `eps_h` - Permittivity of the host medium.
/// * `prism` - Prism geometry.
///
/// Near resonance the denominator becomes small and the result large; that
/// is the physics, not an error.
pub fn dipole_polarizability(
    wavelength_nm: f64,
    eps_m: Complex64,
    eps_h: f64,
    prism: &RoundedPrism,
) -> Complex64 {
    ShapeCoefficients::for_prism(prism).polarizability(wavelength_nm, eps_m, eps_h, prism)
}
