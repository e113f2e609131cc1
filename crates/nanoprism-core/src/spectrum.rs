//! Spectral sweeps of the analytical prism model.
//!
//! A sweep fixes the metal, the geometry and the host, computes the effective
//! diameter and the shape coefficients once, and then evaluates every
//! wavelength independently. Points are computed in parallel with Rayon;
//! nothing is shared between them except read-only tables.

use nanoprism_geometry::RoundedPrism;
use nanoprism_materials::{
    MaterialError, MaterialProvider, Metal, SizeCorrectedMetal, TabulatedMetal,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::resonance::ShapeCoefficients;
use crate::types::{CrossSections, SpectralPoint};

/// Largest number of wavelengths a range grid may expand to.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Wavelengths to evaluate: an inclusive evenly spaced range or an explicit list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WavelengthGrid {
    Range { start: f64, end: f64, step: f64 },
    List { values: Vec<f64> },
}

impl WavelengthGrid {
    /// Expand into wavelengths (nm).
    ///
    /// A range yields `start + i * step` for every `i` that stays at or below
    /// `end` (up to rounding in the step count). Ranges must start above zero
    /// and expand to at most [`MAX_GRID_POINTS`] wavelengths.
    pub fn wavelengths(&self) -> Result<Vec<f64>, CoreError> {
        match self {
            WavelengthGrid::Range { start, end, step } => {
                let (start, end, step) = (*start, *end, *step);
                if !(start.is_finite() && end.is_finite() && step.is_finite()) {
                    return Err(CoreError::InvalidGrid(format!(
                        "range [{start}, {end}] with step {step} is not finite"
                    )));
                }
                if step <= 0.0 {
                    return Err(CoreError::InvalidGrid(format!("step must be positive, got {step}")));
                }
                if start <= 0.0 {
                    return Err(CoreError::InvalidGrid(format!(
                        "start {start} nm is not a positive wavelength"
                    )));
                }
                if end < start {
                    return Err(CoreError::InvalidGrid(format!(
                        "end {end} nm is below start {start} nm"
                    )));
                }
                let intervals = ((end - start) / step + 1e-9).floor();
                if intervals >= MAX_GRID_POINTS as f64 {
                    return Err(CoreError::InvalidGrid(format!(
                        "step {step} nm over [{start}, {end}] exceeds {MAX_GRID_POINTS} points"
                    )));
                }
                let count = intervals as usize + 1;
                Ok((0..count).map(|i| start + i as f64 * step).collect())
            }
            WavelengthGrid::List { values } => {
                if values.is_empty() {
                    return Err(CoreError::EmptyGrid);
                }
                if let Some(bad) = values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
                    return Err(CoreError::InvalidGrid(format!(
                        "wavelength {bad} nm is not a positive number"
                    )));
                }
                Ok(values.clone())
            }
        }
    }
}

impl Default for WavelengthGrid {
    /// 300–800 nm in 2 nm steps.
    fn default() -> Self {
        WavelengthGrid::Range {
            start: 300.0,
            end: 800.0,
            step: 2.0,
        }
    }
}

/// What a sweep does with wavelengths outside the metal's tabulated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Abort the whole sweep with the first out-of-range wavelength.
    #[default]
    Fail,
    /// Drop the wavelength and carry on.
    Skip,
}

/// Parameters of one spectral sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub metal: Metal,
    pub prism: RoundedPrism,
    /// Permittivity of the surrounding medium.
    pub host_permittivity: f64,
    /// Apply the finite-size correction to the metal's permittivity.
    pub size_correction: bool,
    pub grid: WavelengthGrid,
    pub out_of_range: OutOfRangePolicy,
}

impl Default for SweepConfig {
    /// Size-corrected silver prism (50 × 20 nm, 2 nm corners) in vacuum.
    fn default() -> Self {
        Self {
            metal: Metal::Silver,
            prism: RoundedPrism::default(),
            host_permittivity: 1.0,
            size_correction: true,
            grid: WavelengthGrid::default(),
            out_of_range: OutOfRangePolicy::Fail,
        }
    }
}

/// Result of a sweep, ordered by the grid's wavelengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    pub metal: Metal,
    pub prism: RoundedPrism,
    pub host_permittivity: f64,
    /// Diameter of the volume-equivalent sphere (nm).
    pub effective_diameter_nm: f64,
    pub size_corrected: bool,
    pub coefficients: ShapeCoefficients,
    pub points: Vec<SpectralPoint>,
    /// Wavelengths dropped under [`OutOfRangePolicy::Skip`].
    pub skipped_nm: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.wavelength_nm)
    }

    /// Cross-sections of every point, in order.
    pub fn cross_sections(&self) -> Vec<CrossSections> {
        self.points.iter().map(|p| p.cross_sections).collect()
    }

    /// Point with the largest extinction cross-section.
    pub fn peak_extinction(&self) -> Option<&SpectralPoint> {
        self.points.iter().max_by(|a, b| {
            a.cross_sections
                .extinction
                .total_cmp(&b.cross_sections.extinction)
        })
    }

    /// Interior local maxima of extinction whose height is at least
    /// `min_relative` times the global maximum.
    ///
    /// `min_relative = 0.0` returns every local maximum, including weak
    /// ripples from interband structure in the optical constants.
    pub fn resonances(&self, min_relative: f64) -> Vec<&SpectralPoint> {
        let Some(peak) = self.peak_extinction() else {
            return Vec::new();
        };
        let threshold = min_relative * peak.cross_sections.extinction;

        self.points
            .windows(3)
            .filter(|w| {
                let (prev, here, next) = (
                    w[0].cross_sections.extinction,
                    w[1].cross_sections.extinction,
                    w[2].cross_sections.extinction,
                );
                here > prev && here > next && here >= threshold
            })
            .map(|w| &w[1])
            .collect()
    }
}

/// Evaluate the prism's polarisability and cross-sections over a grid.
pub fn compute_spectrum(config: &SweepConfig) -> Result<Spectrum, CoreError> {
    let wavelengths = config.grid.wavelengths()?;
    let diameter = config.prism.effective_diameter_nm();
    let coefficients = ShapeCoefficients::for_prism(&config.prism);

    let provider: Box<dyn MaterialProvider> = if config.size_correction {
        Box::new(SizeCorrectedMetal::new(config.metal, diameter))
    } else {
        Box::new(TabulatedMetal::new(config.metal))
    };

    log::debug!(
        "sweep: {} over {} wavelengths, D = {diameter:.4} nm, ε_h = {}, {:?}",
        provider.name(),
        wavelengths.len(),
        config.host_permittivity,
        coefficients,
    );

    let evaluated: Vec<Result<SpectralPoint, MaterialError>> = wavelengths
        .par_iter()
        .map(|&wl| {
            let permittivity = provider.dielectric_function(wl)?;
            let polarizability = coefficients.polarizability(
                wl,
                permittivity,
                config.host_permittivity,
                &config.prism,
            );
            Ok(SpectralPoint {
                wavelength_nm: wl,
                permittivity,
                polarizability,
                cross_sections: CrossSections::from_polarizability(
                    wl,
                    config.host_permittivity,
                    polarizability,
                ),
            })
        })
        .collect();

    let mut points = Vec::with_capacity(evaluated.len());
    let mut skipped_nm = Vec::new();
    for (result, &wl) in evaluated.into_iter().zip(&wavelengths) {
        match result {
            Ok(point) => points.push(point),
            Err(err) => match config.out_of_range {
                OutOfRangePolicy::Fail => return Err(err.into()),
                OutOfRangePolicy::Skip => {
                    log::warn!("skipping {wl} nm: {err}");
                    skipped_nm.push(wl);
                }
            },
        }
    }

    Ok(Spectrum {
        metal: config.metal,
        prism: config.prism,
        host_permittivity: config.host_permittivity,
        effective_diameter_nm: diameter,
        size_corrected: config.size_correction,
        coefficients,
        points,
        skipped_nm,
    })
}
