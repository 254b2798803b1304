mod audit;
mod cli;
mod input;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sched_core::IndexedInstance;
use solver_heur::GaSolver;
use solver_milp::ExactSolver;
use tracing::error;
use types::{RunConfig, ScheduleError, SolveRequest, Solver, SolverBackend};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("{} {}", "error:".red().bold(), e);
            exitcode::SOFTWARE
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Run {
            courses,
            rooms,
            num_slots,
            config,
            population_size,
            generations,
            mutation_rate,
            saving_every,
            output_dir,
            backend,
            exact_time_limit_secs,
            seed,
            population_file,
            preferences_file,
        } => {
            let run_config = match config {
                Some(path) => load_config_toml(&path)?,
                None => RunConfig {
                    population_size,
                    generations,
                    mutation_rate,
                    saving_every,
                    population_file,
                    preferences_file,
                    output_dir,
                    weights: Default::default(),
                    backend: backend.into(),
                    exact_time_limit_secs,
                    seed,
                },
            };

            if let Err(e) = run_config.validate() {
                println!("{} {}", "config invalid:".red().bold(), e);
                return Ok(exit_code_for(&e));
            }

            let raw_instance = match input::load_instance(
                &courses,
                &rooms,
                run_config.preferences_file.as_deref(),
                num_slots,
            ) {
                Ok(inst) => inst,
                Err(e) => {
                    println!("{} {}", "input error:".red().bold(), e);
                    return Ok(exit_code_for(&e));
                }
            };

            let request = SolveRequest {
                instance: raw_instance,
                config: run_config.clone(),
            };

            println!(
                "{} backend={:?} population_size={} generations={}",
                "solving...".cyan().bold(),
                run_config.backend,
                run_config.population_size,
                run_config.generations
            );

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("running genetic/exact solve, see logs for per-generation progress");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let outcome = match run_config.backend {
                SolverBackend::Heuristic => GaSolver::new().solve(request).await?,
                SolverBackend::Exact => ExactSolver::new().solve(request).await?,
            };

            spinner.finish_and_clear();

            println!(
                "{} status={:?} objective={:?} elapsed={:.2}s",
                "done.".green().bold(),
                outcome.status,
                outcome.objective_value,
                outcome.computing_time_seconds
            );
            println!("output written to {}", run_config.output_dir.display().to_string().green());

            if outcome.status.has_assignment() {
                Ok(exitcode::OK)
            } else {
                println!("{}", "no feasible assignment found".yellow());
                Ok(exitcode::SOFTWARE)
            }
        }

        Commands::Audit {
            courses,
            rooms,
            num_slots,
            best,
        } => {
            let raw_instance = match input::load_instance(&courses, &rooms, None, num_slots) {
                Ok(inst) => inst,
                Err(e) => {
                    println!("{} {}", "input error:".red().bold(), e);
                    return Ok(exit_code_for(&e));
                }
            };
            let inst = match IndexedInstance::build(&raw_instance) {
                Ok(inst) => inst,
                Err(e) => {
                    println!("{} {}", "input error:".red().bold(), e);
                    return Ok(exit_code_for(&e));
                }
            };
            let ind = audit::load_best_as_individual(&best, &inst)?;
            let feasible = audit::print_report(&inst, &ind);
            Ok(if feasible { exitcode::OK } else { exitcode::SOFTWARE })
        }
    }
}

fn load_config_toml(path: &std::path::Path) -> Result<RunConfig> {
    let text = std::fs::read_to_string(path)?;
    let config: RunConfig = toml::from_str(&text)?;
    Ok(config)
}

fn exit_code_for(e: &ScheduleError) -> i32 {
    match e {
        ScheduleError::MissingFile(_) => exitcode::NOINPUT,
        ScheduleError::MalformedJson { .. } => exitcode::DATAERR,
        ScheduleError::UnknownIdentifier { .. } => exitcode::DATAERR,
        ScheduleError::SlotCountNotDivisibleByFive(_) => exitcode::DATAERR,
        ScheduleError::OddPopulationSize(_) => exitcode::CONFIG,
        ScheduleError::PopulationShapeMismatch { .. } => exitcode::DATAERR,
    }
}
