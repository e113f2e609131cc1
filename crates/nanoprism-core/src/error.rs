//! Errors raised while evaluating spectra.

use nanoprism_materials::MaterialError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The metal's dielectric function is not available at a wavelength.
    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error("Wavelength grid is empty")]
    EmptyGrid,

    #[error("Invalid wavelength grid: {0}")]
    InvalidGrid(String),
}
