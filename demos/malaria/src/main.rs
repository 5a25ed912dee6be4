//! malaria: command-line driver for the rust_vb vector-borne disease model.
//!
//! Runs one seeded simulation and writes one CSV line per step:
//!
//! ```text
//! step,humanInfected,humanResistant,humanSusceptible,mosquitoInfected,mosquitoHungry
//! ```
//!
//! Parameters come from `ModelConfig::default()`, optionally overlaid by a
//! JSON file (`--config`), then by individual flags.  Logging goes through
//! `env_logger`; set `RUST_LOG=debug` to see every step's tallies.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use vb_core::{ModelConfig, RunConfig};
use vb_output::{CsvWriter, StatsOutputObserver};
use vb_sim::{LogProgress, SimBuilder};

#[derive(Parser, Debug)]
#[command(version, about = "Simulate malaria-like transmission between humans and mosquitoes on a grid")]
struct Args {
    /// JSON file with `ModelConfig` fields; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of steps to simulate.
    #[arg(long, default_value_t = 100)]
    steps: u64,

    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output CSV path.
    #[arg(long, default_value = "simulation.csv")]
    output: PathBuf,

    /// Write a header line before the records.
    #[arg(long)]
    header: bool,

    /// Log progress every N steps (0 disables).
    #[arg(long, default_value_t = 10)]
    log_every: u64,

    /// Enable bed nets.
    #[arg(long)]
    nets: bool,

    /// Nets take effect on steps after this one.
    #[arg(long)]
    nets_from: Option<u64>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Number of humans.
    #[arg(long)]
    humans: Option<usize>,

    /// Number of mosquitoes.
    #[arg(long)]
    mosquitoes: Option<usize>,
}

impl Args {
    fn model_config(&self) -> Result<ModelConfig> {
        let mut model = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => ModelConfig::default(),
        };

        if self.nets {
            model.simulate_nets = true;
        }
        if let Some(step) = self.nets_from {
            model.nets_active_from_step = step;
        }
        if let Some(w) = self.width {
            model.width = w;
        }
        if let Some(h) = self.height {
            model.height = h;
        }
        if let Some(n) = self.humans {
            model.n_human = n;
        }
        if let Some(n) = self.mosquitoes {
            model.n_mosquito = n;
        }
        Ok(model)
    }

    fn run_config(&self) -> RunConfig {
        RunConfig {
            total_ticks:        self.steps,
            seed:               self.seed,
            log_interval_ticks: self.log_every,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let model = args.model_config()?;
    let run = args.run_config();

    let mut sim = SimBuilder::new(model, run.clone())
        .build()
        .context("invalid model configuration")?;

    let writer = if args.header {
        CsvWriter::with_header(&args.output)
    } else {
        CsvWriter::create(&args.output)
    }
    .with_context(|| format!("opening {}", args.output.display()))?;

    let mut observer = (
        StatsOutputObserver::new(writer),
        LogProgress::new(run.log_interval_ticks, run.total_ticks),
    );

    let started = Instant::now();
    sim.run(&mut observer);

    if let Some(e) = observer.0.take_error() {
        error!("output error: {e}");
        return Err(e).context("writing statistics");
    }

    info!(
        "wrote {} rows to {} in {:.3} s",
        observer.0.rows_written(),
        args.output.display(),
        started.elapsed().as_secs_f64(),
    );
    Ok(())
}
