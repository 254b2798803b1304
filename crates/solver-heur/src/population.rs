use rand::Rng;
use sched_core::IndexedInstance;
use types::Individual;

use crate::generator::generate_feasible;

pub type Population = Vec<Individual>;

/// Builds the initial population via repeated calls to the feasible
/// generator; `size` must already be validated even by the caller.
pub fn initial_population(inst: &IndexedInstance, size: usize, rng: &mut impl Rng) -> Population {
    (0..size).map(|_| generate_feasible(inst, rng)).collect()
}
