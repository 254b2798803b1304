//! Soft-objective kernels, computed over occupancy derived from a sparse
//! `Individual`. Each is a pure function of the instance and the individual.

use rayon::prelude::*;
use types::{Individual, ObjectiveBreakdown, ObjectiveWeights};

use crate::index::IndexedInstance;

fn slots_per_day(inst: &IndexedInstance) -> usize {
    inst.num_slots / 5
}

/// `occ[agent][slot] = Some(room)` if the agent teaches at that slot, keyed
/// by whichever room hosts that placement (needed for the room-change count).
fn agent_room_occupancy(
    inst: &IndexedInstance,
    ind: &Individual,
    num_agents: usize,
    agent_of: impl Fn(usize) -> usize,
) -> Vec<Vec<Option<usize>>> {
    let mut occ = vec![vec![None; inst.num_slots]; num_agents];
    for (c, p) in ind.placements.iter().enumerate() {
        if let Some(p) = p {
            occ[agent_of(c)][p.slot] = Some(p.room);
        }
    }
    occ
}

fn gaps_for(occ: &[Vec<Option<usize>>], spd: usize) -> f64 {
    let mut total = 0u64;
    for per_agent in occ {
        for day in 0..5 {
            let day_slots = &per_agent[day * spd..(day + 1) * spd];
            let first = day_slots.iter().position(Option::is_some);
            let last = day_slots.iter().rposition(Option::is_some);
            if let (Some(first), Some(last)) = (first, last) {
                let occupied = day_slots[first..=last].iter().filter(|o| o.is_some()).count();
                total += (last - first + 1 - occupied) as u64;
            }
        }
    }
    total as f64
}

fn room_changes_for(occ: &[Vec<Option<usize>>], spd: usize) -> f64 {
    let mut total = 0u64;
    for per_agent in occ {
        for day in 0..5 {
            let day_slots = &per_agent[day * spd..(day + 1) * spd];
            let mut prev_room: Option<usize> = None;
            for slot in day_slots {
                if let Some(room) = slot {
                    if let Some(prev) = prev_room {
                        if prev != *room {
                            total += 1;
                        }
                    }
                    prev_room = Some(*room);
                }
            }
        }
    }
    total as f64
}

fn teacher_of(inst: &IndexedInstance, ind: &Individual, c: usize) -> usize {
    // A feasible individual places c with one of its declared teachers;
    // infeasible individuals (mid-repair) still need a stable agent to
    // score against, so fall back to the first allowed teacher.
    ind.placements[c]
        .map(|p| p.teacher)
        .unwrap_or_else(|| inst.candidate_teachers(c).first().copied().unwrap_or(0))
}

pub fn teacher_gaps(inst: &IndexedInstance, ind: &Individual) -> f64 {
    let occ = agent_room_occupancy(inst, ind, inst.num_teachers(), |c| teacher_of(inst, ind, c));
    gaps_for(&occ, slots_per_day(inst))
}

pub fn group_gaps(inst: &IndexedInstance, ind: &Individual) -> f64 {
    let occ = agent_room_occupancy(inst, ind, inst.groups.len(), |c| inst.course_group[c]);
    gaps_for(&occ, slots_per_day(inst))
}

pub fn teacher_room_changes(inst: &IndexedInstance, ind: &Individual) -> f64 {
    let occ = agent_room_occupancy(inst, ind, inst.num_teachers(), |c| teacher_of(inst, ind, c));
    room_changes_for(&occ, slots_per_day(inst))
}

pub fn group_room_changes(inst: &IndexedInstance, ind: &Individual) -> f64 {
    let occ = agent_room_occupancy(inst, ind, inst.groups.len(), |c| inst.course_group[c]);
    room_changes_for(&occ, slots_per_day(inst))
}

pub fn preference_penalty(inst: &IndexedInstance, ind: &Individual) -> f64 {
    ind.placements
        .iter()
        .filter_map(|p| *p)
        .filter_map(|p| inst.preference_score(p.teacher, p.slot))
        .map(|score| 1.0 - score as f64 / 5.0)
        .sum()
}

/// Computes the five components concurrently and combines them into the
/// weighted fitness.
pub fn evaluate(inst: &IndexedInstance, ind: &Individual, weights: &ObjectiveWeights) -> ObjectiveBreakdown {
    let (tg, (gg, (pp, (trc, grc)))) = rayon::join(
        || teacher_gaps(inst, ind),
        || {
            rayon::join(
                || group_gaps(inst, ind),
                || {
                    rayon::join(
                        || preference_penalty(inst, ind),
                        || {
                            rayon::join(
                                || teacher_room_changes(inst, ind),
                                || group_room_changes(inst, ind),
                            )
                        },
                    )
                },
            )
        },
    );

    let mut breakdown = ObjectiveBreakdown {
        teacher_gaps: tg,
        group_gaps: gg,
        preference_penalty: pp,
        teacher_room_changes: trc,
        group_room_changes: grc,
        fitness: 0.0,
    };
    breakdown.fitness = breakdown.weighted_sum(weights);
    breakdown
}

/// Evaluates an entire population in parallel; one logical task per
/// individual, each of which internally fans out across its five components.
pub fn evaluate_population(
    inst: &IndexedInstance,
    population: &[Individual],
    weights: &ObjectiveWeights,
) -> Vec<ObjectiveBreakdown> {
    population.par_iter().map(|ind| evaluate(inst, ind, weights)).collect()
}
