use rand::Rng;
use sched_core::IndexedInstance;
use types::Individual;

use crate::generator::place_course_randomly;
use crate::occupancy::Occupancy;

/// Places every unplaced course (H1 violated) using the occupancy derived
/// from the individual's current placements. No-op if all courses are
/// already placed.
pub fn repair(inst: &IndexedInstance, ind: &mut Individual, rng: &mut impl Rng) {
    if ind.num_unplaced() == 0 {
        return;
    }
    let mut occ = Occupancy::from_individual(inst, ind);
    for course in 0..inst.num_courses() {
        if ind.placements[course].is_none() {
            ind.placements[course] = place_course_randomly(inst, &mut occ, course, rng);
        }
    }
}

pub fn repair_population(inst: &IndexedInstance, population: &mut [Individual], rng: &mut impl Rng) {
    for ind in population.iter_mut() {
        repair(inst, ind, rng);
    }
}
