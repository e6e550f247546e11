#![warn(clippy::all)]

//! RCS Workbench - command-line front end.
//!
//! Loads a directory of simulation exports and answers point queries or
//! samples polar patterns.
//!
//! ```bash
//! rcs-workbench query --frequency 10 --incident-elevation 0 --incident-azimuth 0 --theta 30 --phi 5
//! rcs-workbench --data-dir ./exports pattern --frequency 10 --theta 90 --step 5
//! ```

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use rcs_workbench::pattern::{PatternSweep, RcsRange};
use rcs_workbench::{DataReader, DatasetSummary, InterpolationEngine, Query, WorkbenchConfig};

/// Bistatic RCS estimation from simulation exports
#[derive(Parser, Debug)]
#[command(name = "rcs-workbench")]
#[command(about = "Estimate bistatic RCS from sparse simulation samples")]
struct Cli {
    /// JSON settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "rcs-workbench.json")]
    config: PathBuf,

    /// Override the data directory from the settings file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpolate RCS at a single point
    Query {
        /// Frequency in MHz
        #[arg(short, long, allow_negative_numbers = true)]
        frequency: f64,
        /// Incident elevation in degrees
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        incident_elevation: f64,
        /// Incident azimuth in degrees
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        incident_azimuth: f64,
        /// Observation elevation in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        theta: f64,
        /// Observation azimuth in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        phi: f64,
    },
    /// Sample RCS around a full turn of observation azimuth
    Pattern {
        /// Frequency in MHz
        #[arg(short, long, allow_negative_numbers = true)]
        frequency: f64,
        /// Incident elevation in degrees
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        incident_elevation: f64,
        /// Incident azimuth in degrees
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        incident_azimuth: f64,
        /// Observation elevation in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        theta: f64,
        /// Azimuth step in degrees
        #[arg(short, long, default_value = "5")]
        step: f64,
    },
    /// Print dataset statistics
    Summary,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = WorkbenchConfig::load_or_default(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        config.reader.data_directory = dir;
    }

    log::info!(
        "Reading RCS data from {}",
        config.reader.data_directory.display()
    );
    let samples = DataReader::new(config.reader.clone()).load_collection()?;
    let summary = DatasetSummary::from_samples(&samples);
    log::info!("Loaded dataset:\n{}", summary);

    let engine = InterpolationEngine::with_config(samples, config.engine.clone());

    match cli.command {
        Command::Query {
            frequency,
            incident_elevation,
            incident_azimuth,
            theta,
            phi,
        } => {
            let query = Query::new(frequency, incident_elevation, incident_azimuth, theta, phi);
            let estimate = engine.estimate(&query);
            if !estimate.is_complete() {
                eprintln!(
                    "Warning: {} of 8 corners had no sample and used {:.1} dB(m²)",
                    estimate.corners_without_data,
                    engine.config().missing_value
                );
            }
            println!(
                "Frequency {:.1} MHz, incidence {:.1}° / {:.1}°, observation {:.1}° / {:.1}° -> RCS: {:.2} dB(m²)",
                frequency, incident_elevation, incident_azimuth, theta, phi, estimate.value
            );
        }
        Command::Pattern {
            frequency,
            incident_elevation,
            incident_azimuth,
            theta,
            step,
        } => {
            let points = PatternSweep {
                frequency,
                incident_elevation,
                incident_azimuth,
                theta,
                step,
            }
            .evaluate(&engine);

            let incomplete = points.iter().filter(|p| !p.is_complete()).count();
            if incomplete > 0 {
                eprintln!(
                    "Warning: {} of {} points used {:.1} dB(m²) for corners without samples",
                    incomplete,
                    points.len(),
                    engine.config().missing_value
                );
            }

            let range = RcsRange::from_values(points.iter().map(|p| p.rcs));
            for point in &points {
                match range {
                    Some(range) => println!(
                        "{:7.2} {:9.3} {}",
                        point.phi,
                        point.rcs,
                        range.color(point.rcs).to_hex()
                    ),
                    None => println!("{:7.2} {:9.3}", point.phi, point.rcs),
                }
            }
        }
        Command::Summary => println!("{}", summary),
    }

    Ok(())
}
