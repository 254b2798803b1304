use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::SolverBackend;

#[derive(Parser)]
#[command(name = "schedule-runner")]
#[command(about = "University timetabling optimizer: heuristic/exact solve, constraint audit")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve an instance and write the output directory.
    Run {
        /// Merged course-data JSON file.
        #[arg(long)]
        courses: PathBuf,
        /// Class-type -> rooms JSON file.
        #[arg(long)]
        rooms: PathBuf,
        /// Number of time-slots; must be divisible by 5.
        #[arg(long, default_value_t = types::slots::DEFAULT_NUM_SLOTS)]
        num_slots: usize,

        /// Load the full run configuration from a TOML file instead of flags.
        #[arg(long, conflicts_with_all = [
            "population_size", "generations", "mutation_rate", "saving_every",
            "output_dir", "backend", "exact_time_limit_secs", "seed",
        ])]
        config: Option<PathBuf>,

        #[arg(long, default_value_t = 100)]
        population_size: usize,
        #[arg(long, default_value_t = 200)]
        generations: usize,
        #[arg(long, default_value_t = 0.05)]
        mutation_rate: f64,
        /// 0 disables checkpointing.
        #[arg(long, default_value_t = 0)]
        saving_every: usize,
        #[arg(long, default_value = "./output")]
        output_dir: PathBuf,
        #[arg(long, value_enum, default_value_t = BackendArg::Heuristic)]
        backend: BackendArg,
        #[arg(long, default_value_t = 60)]
        exact_time_limit_secs: u64,
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Resume from a prior `population.bin.gz` checkpoint.
        #[arg(long)]
        population_file: Option<PathBuf>,
        /// Optional teacher-preferences JSON file.
        #[arg(long)]
        preferences_file: Option<PathBuf>,
    },

    /// Re-check an existing `best.json` against the six hard-constraint kernels.
    Audit {
        #[arg(long)]
        courses: PathBuf,
        #[arg(long)]
        rooms: PathBuf,
        #[arg(long, default_value_t = types::slots::DEFAULT_NUM_SLOTS)]
        num_slots: usize,
        /// Path to the `best.json` produced by a prior run.
        #[arg(long)]
        best: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum BackendArg {
    Heuristic,
    Exact,
}

impl From<BackendArg> for SolverBackend {
    fn from(b: BackendArg) -> Self {
        match b {
            BackendArg::Heuristic => SolverBackend::Heuristic,
            BackendArg::Exact => SolverBackend::Exact,
        }
    }
}
