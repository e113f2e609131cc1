//! nanoprism command-line interface.
//!
//! Compute the plasmon spectrum of a rounded-corner nanoprism:
//! ```sh
//! nanoprism-cli run                 # reference job: Ag 50×20 nm, R=2 nm, vacuum
//! nanoprism-cli run job.toml -o out
//! nanoprism-cli validate job.toml
//! nanoprism-cli materials
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use nanoprism_materials::{MaterialProvider, Metal, TabulatedMetal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nanoprism-cli")]
#[command(about = "Analytical plasmon model of rounded-corner metal nanoprisms")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a spectrum, from a TOML configuration file or the reference job.
    Run {
        /// Path to the job configuration file.
        config: Option<PathBuf>,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without running the sweep.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Display information about available materials.
    Materials,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("nanoprism analytical model");
            println!("==========================");
            let job = match &config {
                Some(path) => {
                    let job = config::load_config(path)?;
                    println!("Configuration: {}", path.display());
                    job
                }
                None => {
                    println!("Configuration: reference job");
                    config::JobConfig::default()
                }
            };

            let spectrum = runner::run_simulation(&job)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));
            runner::write_outputs(&spectrum, &job, &out_dir)?;

            println!("Simulation complete.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            let sweep = job.sweep();
            let wavelengths = sweep.grid.wavelengths()?;
            if let Err(e) = sweep.prism.validate_fit_domain() {
                println!("Warning: {e}");
            }
            let provider = TabulatedMetal::new(sweep.metal);
            let (lo, hi) = provider.wavelength_range();
            let outside = wavelengths.iter().filter(|&&wl| wl < lo || wl > hi).count();
            if outside > 0 {
                println!(
                    "Warning: {outside} of {} wavelengths lie outside {lo:.1}–{hi:.1} nm ({} data)",
                    wavelengths.len(),
                    sweep.metal
                );
            }
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Materials => {
            println!("Available materials:");
            println!();
            for metal in Metal::ALL {
                let provider = TabulatedMetal::new(metal);
                let (lo, hi) = provider.wavelength_range();
                let (min_ev, max_ev) = provider.energy_range_ev();
                println!(
                    "  {:<3} {:<6} {:.1}–{:.1} nm ({min_ev}–{max_ev} eV), {} rows, {}",
                    metal.symbol(),
                    format!("{metal:?}"),
                    lo,
                    hi,
                    metal.table().len(),
                    metal.source()
                );
            }
            println!();
            println!("  Size correction: Drude free-electron term with surface scattering");
            println!("  (enable with `size_correction = true` under [simulation]).");
            Ok(())
        }
    }
}
