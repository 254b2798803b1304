use rand::{seq::SliceRandom, Rng};
use sched_core::IndexedInstance;
use types::Individual;

use crate::generator::place_course_randomly;
use crate::occupancy::Occupancy;

/// Produces one child from a pair of parents: for each course in index
/// order, randomizes which parent goes first, accepts that parent's
/// placement if it still fits the child's occupancy so far, else the other
/// parent's, else falls back to random single-course placement. The child is
/// feasible with respect to H2-H6 by construction.
fn build_child(inst: &IndexedInstance, p1: &Individual, p2: &Individual, rng: &mut impl Rng) -> Individual {
    let mut occ = Occupancy::empty(inst);
    let mut child = Individual::new(inst.num_courses());

    for course in 0..inst.num_courses() {
        let group = inst.course_group[course];
        let (first, second) = if rng.gen_bool(0.5) {
            (p1, p2)
        } else {
            (p2, p1)
        };

        let mut placed = false;
        for parent in [first, second] {
            if let Some(p) = parent.placements[course] {
                if occ.is_free(p.teacher, p.room, group, p.slot) {
                    occ.mark(p.teacher, p.room, group, p.slot);
                    child.placements[course] = Some(p);
                    placed = true;
                    break;
                }
            }
        }
        if !placed {
            child.placements[course] = place_course_randomly(inst, &mut occ, course, rng);
        }
    }

    child
}

/// Pairs adjacent indices after a uniform shuffle and produces two children
/// per pair; draws are consumed in pair order, then course order, then
/// parent-order randomization within each course, matching the required
/// draw sequencing.
pub fn crossover_population(
    inst: &IndexedInstance,
    selected: &[Individual],
    rng: &mut impl Rng,
) -> Vec<Individual> {
    let mut order: Vec<usize> = (0..selected.len()).collect();
    order.shuffle(rng);

    let mut children = Vec::with_capacity(selected.len());
    for pair in order.chunks(2) {
        if pair.len() < 2 {
            children.push(selected[pair[0]].clone());
            continue;
        }
        let (p1, p2) = (&selected[pair[0]], &selected[pair[1]]);
        children.push(build_child(inst, p1, p2, rng));
        children.push(build_child(inst, p2, p1, rng));
    }
    children
}
