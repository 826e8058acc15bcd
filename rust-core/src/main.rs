use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};
use nalgebra::Vector3;

use spinwave_core::models::{antiferromagnetic_chain, ferromagnetic_chain, ferromagnetic_chain_in_field, q_line};
use spinwave_core::{calculate, SpinwaveConfig, SpinwaveInput};

#[derive(Parser)]
#[command(name = "spinwave")]
#[command(about = "Linear spin-wave dispersions of model magnetic chains")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispersion of the two-site ferromagnetic chain
    FerroChain {
        /// Exchange constant in meV (negative is ferromagnetic)
        #[arg(short, long, default_value = "-1.0", allow_hyphen_values = true)]
        exchange: f64,

        /// Spin length
        #[arg(short, long, default_value = "1.0")]
        spin: f64,

        /// Number of wavevectors between (0,0,0) and (0,1,0)
        #[arg(short, long, default_value = "21")]
        points: usize,

        /// Field along +z in tesla; the moments point along -z
        #[arg(short, long)]
        field: Option<f64>,

        /// Isotropic g-factor used with --field
        #[arg(short, long, default_value = "2.0")]
        g: f64,
    },
    /// Dispersion of the two-site antiferromagnetic chain
    AntiferroChain {
        /// Exchange constant in meV (positive is antiferromagnetic)
        #[arg(short, long, default_value = "1.0", allow_hyphen_values = true)]
        exchange: f64,

        /// Spin length
        #[arg(short, long, default_value = "1.0")]
        spin: f64,

        /// Number of wavevectors between (0,0,0) and (0,1,0)
        #[arg(short, long, default_value = "21")]
        points: usize,
    },
    /// Time a large batch of wavevectors
    Benchmark {
        /// Number of wavevectors
        #[arg(short, long, default_value = "100000")]
        points: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("Failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting spinwave v{}", spinwave_core::VERSION);

    match cli.command {
        Commands::FerroChain {
            exchange,
            spin,
            points,
            field,
            g,
        } => {
            let input = match field {
                Some(b) => {
                    info!("Ferromagnetic chain J = {} meV, S = {}, B = {} T", exchange, spin, b);
                    ferromagnetic_chain_in_field(exchange, spin, b, g)?
                }
                None => {
                    info!("Ferromagnetic chain J = {} meV, S = {}", exchange, spin);
                    ferromagnetic_chain(exchange, spin)?
                }
            };
            print_dispersion(&input, points)
        }
        Commands::AntiferroChain { exchange, spin, points } => {
            info!("Antiferromagnetic chain J = {} meV, S = {}", exchange, spin);
            print_dispersion(&antiferromagnetic_chain(exchange, spin)?, points)
        }
        Commands::Benchmark { points } => {
            info!("Running benchmark with {} wavevectors", points);
            run_benchmark(points)
        }
    }
}

fn chain_path(points: usize) -> Vec<Vector3<f64>> {
    q_line(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0), points)
}

fn print_dispersion(input: &SpinwaveInput, points: usize) -> Result<()> {
    let config = SpinwaveConfig::default();
    let result = calculate(input, &chain_path(points), &config)?;

    println!("{:>8}  {:>8}  energies (meV)", "q_y", "method");
    for outcome in &result.outcomes {
        match outcome {
            Ok(o) => {
                let energies: Vec<String> = o
                    .spectrum
                    .physical(config.zero_energy_tolerance)
                    .iter()
                    .map(|e| format!("{:10.6}", e))
                    .collect();
                println!("{:8.4}  {:>8}  {}", o.q.y, o.method.to_string(), energies.join(" "));
            }
            Err(e) => println!("{:>8}  {:>8}  {}", "-", "failed", e),
        }
    }

    if !result.warnings().is_empty() {
        warn!("{} wavevectors show complex energies", result.warnings().len());
    }
    Ok(())
}

fn run_benchmark(points: usize) -> Result<()> {
    let input = antiferromagnetic_chain(1.0, 1.0)?;
    let qs = chain_path(points);
    let config = SpinwaveConfig::default();

    let start = Instant::now();
    let result = calculate(&input, &qs, &config)?;
    let elapsed = start.elapsed();

    println!(
        "{} wavevectors in {:.3} s ({:.2} us per wavevector), {} failures",
        result.len(),
        elapsed.as_secs_f64(),
        elapsed.as_secs_f64() * 1e6 / points.max(1) as f64,
        result.failures().len()
    );
    Ok(())
}
