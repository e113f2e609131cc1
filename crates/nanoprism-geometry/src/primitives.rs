//! Parametric description of a triangular nanoprism with rounded corners.
//!
//! The prism has an equilateral triangle as its base. Its shape is fully
//! described by three lengths and can be read directly from TOML job files.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Geometry values outside the validity domain of the resonance fit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{name} must be positive, got {value} nm")]
    NonPositive { name: &'static str, value: f64 },

    #[error("edge length {edge_length_nm} nm must exceed thickness {thickness_nm} nm")]
    EdgeNotLongerThanThickness { edge_length_nm: f64, thickness_nm: f64 },

    #[error("thickness {thickness_nm} nm must exceed corner radius {corner_radius_nm} nm")]
    ThicknessNotAboveRadius { thickness_nm: f64, corner_radius_nm: f64 },
}

/// An equilateral triangular prism with rounded in-plane corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedPrism {
    /// Edge length $L$ of the triangular base (nm).
    #[serde(alias = "edge_length")]
    pub edge_length_nm: f64,
    /// Thickness $H$ of the prism (nm).
    #[serde(alias = "thickness")]
    pub thickness_nm: f64,
    /// Radius $R$ of the rounded base corners (nm).
    #[serde(alias = "corner_radius")]
    pub corner_radius_nm: f64,
}

impl RoundedPrism {
    pub fn new(edge_length_nm: f64, thickness_nm: f64, corner_radius_nm: f64) -> Self {
        Self {
            edge_length_nm,
            thickness_nm,
            corner_radius_nm,
        }
    }

    /// Volume of the sharp-cornered prism, $V_0 = \frac{\sqrt{3}}{4} L^2 H$ (nm³).
    pub fn volume_nm3(&self) -> f64 {
        prism_volume(self.edge_length_nm, self.thickness_nm)
    }

    /// Diameter of the sphere with the same volume as the prism (nm).
    pub fn effective_diameter_nm(&self) -> f64 {
        effective_diameter(self.edge_length_nm, self.thickness_nm)
    }

    /// The ratios $(L/H, L/R, H/R)$ the resonance fit is expressed in.
    pub fn aspect_ratios(&self) -> (f64, f64, f64) {
        (
            self.edge_length_nm / self.thickness_nm,
            self.edge_length_nm / self.corner_radius_nm,
            self.thickness_nm / self.corner_radius_nm,
        )
    }

    /// The same shape with every length multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.edge_length_nm * factor,
            self.thickness_nm * factor,
            self.corner_radius_nm * factor,
        )
    }

    /// Check $L > H > R > 0$.
    ///
    /// The resonance model evaluates any geometry; outside this domain its
    /// fitted coefficients carry no physical meaning.
    pub fn validate_fit_domain(&self) -> Result<(), GeometryError> {
        for (name, value) in [
            ("edge length", self.edge_length_nm),
            ("thickness", self.thickness_nm),
            ("corner radius", self.corner_radius_nm),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(GeometryError::NonPositive { name, value });
            }
        }
        if self.edge_length_nm <= self.thickness_nm {
            return Err(GeometryError::EdgeNotLongerThanThickness {
                edge_length_nm: self.edge_length_nm,
                thickness_nm: self.thickness_nm,
            });
        }
        if self.thickness_nm <= self.corner_radius_nm {
            return Err(GeometryError::ThicknessNotAboveRadius {
                thickness_nm: self.thickness_nm,
                corner_radius_nm: self.corner_radius_nm,
            });
        }
        Ok(())
    }
}

impl Default for RoundedPrism {
    /// 50 nm edge, 20 nm thick, 2 nm corner radius.
    fn default() -> Self {
        Self::new(50.0, 20.0, 2.0)
    }
}

/// Volume of an equilateral triangular prism, $\frac{\sqrt{3}}{4} L^2 H$ (nm³).
pub fn prism_volume(edge_length_nm: f64, thickness_nm: f64) -> f64 {
    0.25 * 3.0_f64.sqrt() * edge_length_nm * edge_length_nm * thickness_nm
}

/// Diameter of the sphere with the volume of the prism:
/// $D = 2\left(\frac{3\sqrt{3} L^2 H}{16\pi}\right)^{1/3}$ (nm).
pub fn effective_diameter(edge_length_nm: f64, thickness_nm: f64) -> f64 {
    2.0 * (3.0 * 3.0_f64.sqrt() * edge_length_nm * edge_length_nm * thickness_nm / (16.0 * PI))
        .powf(1.0 / 3.0)
}
