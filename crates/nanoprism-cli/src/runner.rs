//! Job runner: builds the sweep, evaluates it and writes the result files.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nanoprism_core::{compute_spectrum, SpectralPoint, Spectrum};

use crate::config::JobConfig;

/// Quantities written as one `.dat` file each, with their file-name suffix.
const DAT_COLUMNS: [(&str, fn(&SpectralPoint) -> f64); 4] = [
    ("polarizability_re", |p| p.polarizability.re),
    ("polarizability_im", |p| p.polarizability.im),
    ("scattering_cs", |p| p.cross_sections.scattering),
    ("extinction_cs", |p| p.cross_sections.extinction),
];

/// Run the sweep described by a parsed job configuration.
pub fn run_simulation(job: &JobConfig) -> Result<Spectrum> {
    let sweep = job.sweep();

    if let Err(e) = sweep.prism.validate_fit_domain() {
        log::warn!("{e}; the shape-coefficient fits are extrapolated");
    }

    println!(
        "  Prism: {} L={} nm, H={} nm, R={} nm in ε_h={}",
        sweep.metal,
        sweep.prism.edge_length_nm,
        sweep.prism.thickness_nm,
        sweep.prism.corner_radius_nm,
        sweep.host_permittivity
    );

    let spectrum = compute_spectrum(&sweep).with_context(|| {
        format!(
            "spectrum of {} prism failed (size correction: {})",
            sweep.metal, sweep.size_correction
        )
    })?;

    println!(
        "  Effective diameter: {:.4} nm{}",
        spectrum.effective_diameter_nm,
        if spectrum.size_corrected {
            " (used for the size correction)"
        } else {
            ""
        }
    );
    println!("  Wavelengths evaluated: {}", spectrum.len());
    if !spectrum.skipped_nm.is_empty() {
        println!(
            "  Skipped {} wavelength(s) outside the {} data range",
            spectrum.skipped_nm.len(),
            spectrum.metal
        );
    }
    match spectrum.peak_extinction() {
        Some(peak) => println!(
            "  Resonance: λ={:.1} nm, C_ext={:.4e} cm², C_sca={:.4e} cm²",
            peak.wavelength_nm, peak.cross_sections.extinction, peak.cross_sections.scattering
        ),
        None => println!("  Resonance: none (no wavelengths evaluated)"),
    }

    Ok(spectrum)
}

/// Write every output the job asks for into `out_dir`.
pub fn write_outputs(spectrum: &Spectrum, job: &JobConfig, out_dir: &Path) -> Result<()> {
    if job.output.save_dat {
        write_dat_files(spectrum, out_dir, &job.output.prefix)?;
    }
    if job.output.save_csv {
        write_spectra_csv(spectrum, &out_dir.join("spectra.csv"), job)?;
    }
    if job.output.save_json {
        write_spectra_json(spectrum, &out_dir.join("spectra.json"))?;
    }
    Ok(())
}

/// Write the four `"wavelength value"` files: `<prefix>-polarizability_re.dat`,
/// `-polarizability_im.dat`, `-scattering_cs.dat` and `-extinction_cs.dat`.
pub fn write_dat_files(spectrum: &Spectrum, dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(DAT_COLUMNS.len());
    for (suffix, value) in DAT_COLUMNS {
        let path = dir.join(format!("{prefix}-{suffix}.dat"));
        let mut file = std::io::BufWriter::new(
            std::fs::File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?,
        );
        for point in &spectrum.points {
            writeln!(file, "{} {:e}", point.wavelength_nm, value(point))?;
        }
        file.flush()?;
        written.push(path);
    }

    println!("Data files written to: {}/{prefix}-*.dat", dir.display());
    Ok(written)
}

/// Write the spectrum to a CSV file with a metadata header.
pub fn write_spectra_csv(spectrum: &Spectrum, path: &Path, job: &JobConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);

    let prism = &spectrum.prism;
    writeln!(file, "# nanoprism analytical model: dipole polarizability and cross-sections")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        file,
        "# material: {} ({})",
        spectrum.metal,
        spectrum.metal.source()
    )?;
    writeln!(
        file,
        "# prism: edge_length={} nm, thickness={} nm, corner_radius={} nm",
        prism.edge_length_nm, prism.thickness_nm, prism.corner_radius_nm
    )?;
    writeln!(file, "# effective_diameter: {} nm", spectrum.effective_diameter_nm)?;
    writeln!(file, "# host_permittivity: {}", spectrum.host_permittivity)?;
    writeln!(file, "# size_correction: {}", spectrum.size_corrected)?;
    writeln!(file, "# out_of_range: {:?}", job.simulation.out_of_range)?;
    if !spectrum.skipped_nm.is_empty() {
        writeln!(file, "# skipped_nm: {:?}", spectrum.skipped_nm)?;
    }
    writeln!(file, "#")?;
    writeln!(
        file,
        "wavelength_nm,alpha_re_nm3,alpha_im_nm3,extinction_cm2,absorption_cm2,scattering_cm2"
    )?;

    for p in &spectrum.points {
        let cs = &p.cross_sections;
        writeln!(
            file,
            "{:.2},{:.6e},{:.6e},{:.6e},{:.6e},{:.6e}",
            p.wavelength_nm,
            p.polarizability.re,
            p.polarizability.im,
            cs.extinction,
            cs.absorption,
            cs.scattering
        )?;
    }
    file.flush()?;

    println!("Spectra written to: {}", path.display());
    Ok(())
}

/// Write the spectrum, including its sweep metadata, to a JSON file.
pub fn write_spectra_json(spectrum: &Spectrum, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(spectrum).context("JSON serialisation error")?;
    std::fs::write(path, json)?;

    println!("Spectra (JSON) written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_job() -> JobConfig {
        toml::from_str(
            r#"
            [simulation]
            wavelengths = { values = [400.0, 458.0, 520.0] }

            [output]
            save_csv = true
            save_json = true
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_dat_files_hold_one_record_per_wavelength() {
        let job = small_job();
        let spectrum = run_simulation(&job).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let written = write_dat_files(&spectrum, dir.path(), "analytic_model").unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            [
                "analytic_model-polarizability_re.dat",
                "analytic_model-polarizability_im.dat",
                "analytic_model-scattering_cs.dat",
                "analytic_model-extinction_cs.dat",
            ]
        );

        let extinction = std::fs::read_to_string(&written[3]).unwrap();
        let lines: Vec<_> = extinction.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, point) in lines.iter().zip(&spectrum.points) {
            let mut fields = line.split(' ');
            let wl: f64 = fields.next().unwrap().parse().unwrap();
            let value: f64 = fields.next().unwrap().parse().unwrap();
            assert!(fields.next().is_none());
            assert_eq!(wl, point.wavelength_nm);
            assert_eq!(value, point.cross_sections.extinction);
        }
        assert!(lines[1].starts_with("458 "));
    }

    #[test]
    fn test_polarizability_files_split_real_and_imaginary_parts() {
        let spectrum = run_simulation(&small_job()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let written = write_dat_files(&spectrum, dir.path(), "run").unwrap();

        let im = std::fs::read_to_string(&written[1]).unwrap();
        let peak_line = im.lines().nth(1).unwrap();
        let value: f64 = peak_line.split(' ').nth(1).unwrap().parse().unwrap();
        assert_relative_eq!(value, 72_476.312_05, max_relative = 1e-6);
    }

    #[test]
    fn test_write_outputs_honours_flags() {
        let job = small_job();
        let spectrum = run_simulation(&job).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");

        write_outputs(&spectrum, &job, &out).unwrap();
        assert!(out.join("analytic_model-extinction_cs.dat").exists());
        assert!(out.join("spectra.csv").exists());
        assert!(out.join("spectra.json").exists());

        let csv = std::fs::read_to_string(out.join("spectra.csv")).unwrap();
        assert!(csv.starts_with("# nanoprism"));
        let data: Vec<_> = csv.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 4);
        assert!(data[0].starts_with("wavelength_nm,"));
        assert!(data[2].starts_with("458.00,"));

        let json = std::fs::read_to_string(out.join("spectra.json")).unwrap();
        let back: Spectrum = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 3);
    }

    #[test]
    fn test_dat_output_can_be_disabled() {
        let mut job = small_job();
        job.output.save_dat = false;
        job.output.save_csv = false;
        job.output.save_json = false;
        let spectrum = run_simulation(&job).unwrap();
        let dir = tempfile::tempdir().unwrap();

        write_outputs(&spectrum, &job, dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_out_of_range_job_fails_with_context() {
        let job: JobConfig = toml::from_str(
            r#"
            [simulation]
            wavelengths = { values = [150.0, 500.0] }
            "#,
        )
        .unwrap();
        let err = run_simulation(&job).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("outside the data range"), "{message}");
    }

    #[test]
    fn test_skip_policy_job_keeps_in_range_points() {
        let job: JobConfig = toml::from_str(
            r#"
            [simulation]
            wavelengths = { values = [150.0, 500.0] }
            out_of_range = "skip"
            "#,
        )
        .unwrap();
        let spectrum = run_simulation(&job).unwrap();
        assert_eq!(spectrum.skipped_nm, vec![150.0]);
        assert_eq!(spectrum.len(), 1);
    }
}
