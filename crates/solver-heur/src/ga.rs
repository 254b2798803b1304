use std::path::Path;
use std::time::Instant;

use async_trait::async_trait;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sched_core::{scoring, IndexedInstance};
use tracing::info;
use types::{
    Individual, ScheduleError, SolveOutcome, SolveRequest, Solver, SolverStatus,
};

use crate::checkpoint;
use crate::crossover::crossover_population;
use crate::mutation::mutate_population;
use crate::population::{initial_population, Population};
use crate::repair::repair_population;
use crate::selection::select_indices;

pub struct GaSolver;

impl GaSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GaSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Solver for GaSolver {
    async fn solve(&self, request: SolveRequest) -> anyhow::Result<SolveOutcome> {
        request.config.validate()?;
        let inst = IndexedInstance::build(&request.instance)?;
        let config = &request.config;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let mut population: Population = match &config.population_file {
            Some(path) => load_and_validate(&inst, path)?,
            None => initial_population(&inst, config.population_size, &mut rng),
        };

        let mut best_ever: Option<(Individual, f64)> = None;
        let mut fitness_history: Vec<Vec<f64>> = Vec::with_capacity(config.generations);
        let mut computing_times: Vec<f64> = Vec::with_capacity(config.generations);

        std::fs::create_dir_all(&config.output_dir)?;

        for generation in 0..config.generations {
            let start = Instant::now();

            let breakdowns = scoring::evaluate_population(&inst, &population, &config.weights);
            let fitnesses: Vec<f64> = breakdowns.iter().map(|b| b.fitness).collect();
            update_best(&mut best_ever, &population, &fitnesses);

            let this_best = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
            let this_avg = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
            info!(
                generation,
                best_ever = best_ever.as_ref().map(|(_, f)| *f),
                this_gen_best = this_best,
                this_gen_avg = this_avg,
                elapsed_s = start.elapsed().as_secs_f64(),
                "generation complete"
            );
            if config.saving_every != 0 && generation % config.saving_every == 0 {
                checkpoint::save_population(&config.output_dir.join("population.bin.gz"), &inst, &population);
            }

            let selected_indices = select_indices(&fitnesses, population.len(), &mut rng);
            fitness_history.push(fitnesses);
            let selected: Population = selected_indices.iter().map(|&i| population[i].clone()).collect();

            let mut children = crossover_population(&inst, &selected, &mut rng);
            repair_population(&inst, &mut children, &mut rng);
            mutate_population(&mut children, inst.num_slots, config.mutation_rate, &mut rng);
            population = children;

            computing_times.push(start.elapsed().as_secs_f64());
        }

        let final_breakdowns = scoring::evaluate_population(&inst, &population, &config.weights);
        let final_fitnesses: Vec<f64> = final_breakdowns.iter().map(|b| b.fitness).collect();
        update_best(&mut best_ever, &population, &final_fitnesses);

        checkpoint::save_population(&config.output_dir.join("population.bin.gz"), &inst, &population);
        if let Err(e) = checkpoint::save_fitness_history(&config.output_dir.join("fitness_history.json"), &fitness_history) {
            tracing::warn!(error = %e, "failed to write fitness history");
        }
        if let Err(e) = checkpoint::save_computing_times(&config.output_dir.join("computing_times.json"), &computing_times) {
            tracing::warn!(error = %e, "failed to write computing times");
        }
        if let Some((best, _)) = &best_ever {
            if let Err(e) = checkpoint::save_best(&config.output_dir.join("best.json"), &inst, best) {
                tracing::warn!(error = %e, "failed to write best assignment");
            }
        }

        let (best, fitness) = best_ever.unwrap_or_else(|| (Individual::new(inst.num_courses()), f64::INFINITY));
        Ok(SolveOutcome {
            status: SolverStatus::Feasible,
            best: Some(best),
            objective_value: Some(fitness),
            computing_time_seconds: computing_times.iter().sum(),
        })
    }
}

fn update_best(best_ever: &mut Option<(Individual, f64)>, population: &[Individual], fitnesses: &[f64]) {
    if let Some((idx, &f)) = fitnesses
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
    {
        if best_ever.as_ref().map_or(true, |(_, best_f)| f < *best_f) {
            *best_ever = Some((population[idx].clone(), f));
        }
    }
}

fn load_and_validate(inst: &IndexedInstance, path: &Path) -> Result<Population, ScheduleError> {
    let checkpoint = checkpoint::load_population(path).map_err(|_| ScheduleError::MissingFile(path.display().to_string()))?;
    if checkpoint.num_courses != inst.num_courses()
        || checkpoint.num_teachers != inst.num_teachers()
        || checkpoint.num_rooms != inst.num_rooms()
        || checkpoint.num_slots != inst.num_slots
    {
        return Err(ScheduleError::PopulationShapeMismatch {
            expected: format!(
                "({}, {}, {}, {})",
                inst.num_courses(),
                inst.num_teachers(),
                inst.num_rooms(),
                inst.num_slots
            ),
            found: format!(
                "({}, {}, {}, {})",
                checkpoint.num_courses, checkpoint.num_teachers, checkpoint.num_rooms, checkpoint.num_slots
            ),
        });
    }
    Ok(checkpoint.population)
}
