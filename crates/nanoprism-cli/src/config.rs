//! TOML configuration deserialisation for spectrum jobs.
//!
//! ```toml
//! [simulation]
//! wavelengths = { range = [300.0, 800.0], step = 2.0 }
//! host_permittivity = 1.0
//! size_correction = true
//! out_of_range = "fail"
//!
//! [prism]
//! material = "Ag"
//! edge_length = 50.0
//! thickness = 20.0
//! corner_radius = 2.0
//!
//! [output]
//! directory = "./output"
//! prefix = "analytic_model"
//! ```

use nanoprism_core::{OutOfRangePolicy, SweepConfig, WavelengthGrid};
use nanoprism_geometry::RoundedPrism;
use nanoprism_materials::Metal;
use serde::Deserialize;

/// Top-level job configuration.
#[derive(Debug, Default, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub prism: PrismConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Simulation parameters from TOML.
#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub wavelengths: WavelengthSpec,
    #[serde(default = "default_host_permittivity")]
    pub host_permittivity: f64,
    /// Use the size-corrected dielectric function. Default: true.
    #[serde(default = "default_true")]
    pub size_correction: bool,
    /// "fail" (default) or "skip".
    #[serde(default)]
    pub out_of_range: OutOfRangePolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            wavelengths: WavelengthSpec::default(),
            host_permittivity: default_host_permittivity(),
            size_correction: true,
            out_of_range: OutOfRangePolicy::default(),
        }
    }
}

fn default_host_permittivity() -> f64 {
    1.0
}

/// Wavelength specification: either a stepped range or explicit list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WavelengthSpec {
    Range { range: [f64; 2], step: f64 },
    List { values: Vec<f64> },
}

impl Default for WavelengthSpec {
    fn default() -> Self {
        WavelengthSpec::Range {
            range: [300.0, 800.0],
            step: 2.0,
        }
    }
}

impl WavelengthSpec {
    pub fn to_grid(&self) -> WavelengthGrid {
        match self {
            WavelengthSpec::Range { range, step } => WavelengthGrid::Range {
                start: range[0],
                end: range[1],
                step: *step,
            },
            WavelengthSpec::List { values } => WavelengthGrid::List {
                values: values.clone(),
            },
        }
    }
}

/// Prism material and geometry from TOML.
#[derive(Debug, Deserialize)]
pub struct PrismConfig {
    /// "Ag"/"silver" or "Au"/"gold".
    #[serde(default = "default_material")]
    pub material: Metal,
    /// Edge length of the triangular base (nm).
    #[serde(default = "default_edge_length")]
    pub edge_length: f64,
    /// Thickness (nm).
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    /// Corner radius of the triangular base (nm).
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            material: default_material(),
            edge_length: default_edge_length(),
            thickness: default_thickness(),
            corner_radius: default_corner_radius(),
        }
    }
}

fn default_material() -> Metal {
    Metal::Silver
}
fn default_edge_length() -> f64 {
    RoundedPrism::default().edge_length_nm
}
fn default_thickness() -> f64 {
    RoundedPrism::default().thickness_nm
}
fn default_corner_radius() -> f64 {
    RoundedPrism::default().corner_radius_nm
}

impl PrismConfig {
    pub fn geometry(&self) -> RoundedPrism {
        RoundedPrism::new(self.edge_length, self.thickness, self.corner_radius)
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// File name prefix of the `.dat` files (default: "analytic_model").
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Write one `"wavelength value"` file per quantity (default: true).
    #[serde(default = "default_true")]
    pub save_dat: bool,
    /// Whether to also save spectra as CSV (default: false).
    #[serde(default)]
    pub save_csv: bool,
    /// Whether to also save spectra as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            prefix: default_prefix(),
            save_dat: true,
            save_csv: false,
            save_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_prefix() -> String {
    "analytic_model".into()
}
fn default_true() -> bool {
    true
}

impl JobConfig {
    /// Sweep parameters for the core model.
    pub fn sweep(&self) -> SweepConfig {
        SweepConfig {
            metal: self.prism.material,
            prism: self.prism.geometry(),
            host_permittivity: self.simulation.host_permittivity,
            size_correction: self.simulation.size_correction,
            grid: self.simulation.wavelengths.to_grid(),
            out_of_range: self.simulation.out_of_range,
        }
    }
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_job_is_reference_job() {
        let job: JobConfig = toml::from_str("").unwrap();
        assert_eq!(job.sweep(), SweepConfig::default());
        assert_eq!(job.output.prefix, "analytic_model");
        assert!(job.output.save_dat);
    }

    #[test]
    fn test_full_job() {
        let job: JobConfig = toml::from_str(
            r#"
            [simulation]
            wavelengths = { values = [500.0, 550.0, 600.0] }
            host_permittivity = 1.77
            size_correction = false
            out_of_range = "skip"

            [prism]
            material = "gold"
            edge_length = 80.0
            thickness = 15.0
            corner_radius = 3.0

            [output]
            directory = "results"
            save_json = true
            "#,
        )
        .unwrap();

        let sweep = job.sweep();
        assert_eq!(sweep.metal, Metal::Gold);
        assert_eq!(sweep.prism, RoundedPrism::new(80.0, 15.0, 3.0));
        assert_eq!(sweep.host_permittivity, 1.77);
        assert!(!sweep.size_correction);
        assert_eq!(sweep.out_of_range, OutOfRangePolicy::Skip);
        assert_eq!(
            sweep.grid,
            WavelengthGrid::List {
                values: vec![500.0, 550.0, 600.0]
            }
        );
        assert_eq!(job.output.directory, "results");
        assert!(job.output.save_json);
        assert!(!job.output.save_csv);
    }

    #[test]
    fn test_range_spec() {
        let job: JobConfig = toml::from_str(
            r#"
            [simulation]
            wavelengths = { range = [400.0, 900.0], step = 5.0 }
            "#,
        )
        .unwrap();
        assert_eq!(
            job.sweep().grid,
            WavelengthGrid::Range {
                start: 400.0,
                end: 900.0,
                step: 5.0
            }
        );
    }

    #[test]
    fn test_partial_prism_section_keeps_reference_geometry() {
        let job: JobConfig = toml::from_str(
            r#"
            [prism]
            material = "Au"
            thickness = 10.0
            "#,
        )
        .unwrap();
        let sweep = job.sweep();
        assert_eq!(sweep.metal, Metal::Gold);
        assert_eq!(sweep.prism, RoundedPrism::new(50.0, 10.0, 2.0));
    }

    #[test]
    fn test_unknown_material_is_rejected() {
        let result: Result<JobConfig, _> = toml::from_str(
            r#"
            [prism]
            material = "Cu"
            edge_length = 50.0
            thickness = 20.0
            corner_radius = 2.0
            "#,
        );
        assert!(result.is_err());
    }
}
