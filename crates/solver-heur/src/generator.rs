use rand::Rng;
use sched_core::IndexedInstance;
use tracing::warn;
use types::{Individual, Placement};

use crate::occupancy::Occupancy;

/// Enumerates every `(teacher, room, slot)` triple for `course` that is
/// currently free in `occ`, honoring H5/H6 by construction (only the
/// course's allowed teachers/rooms are considered).
pub fn candidate_triples(inst: &IndexedInstance, occ: &Occupancy, course: usize) -> Vec<Placement> {
    let teachers = inst.candidate_teachers(course).to_vec();
    let rooms = inst.candidate_rooms(course);
    let group = inst.course_group[course];

    let mut out = Vec::new();
    for &teacher in &teachers {
        for &room in &rooms {
            for slot in 0..inst.num_slots {
                if occ.is_free(teacher, room, group, slot) {
                    out.push(Placement { teacher, room, slot });
                }
            }
        }
    }
    out
}

/// The single-course random-placement routine shared by the generator,
/// crossover's fallback path, and repair: picks uniformly among free
/// candidate triples, marks occupancy, and returns the placement. `None`
/// means a dead end (course left unplaced).
pub fn place_course_randomly(
    inst: &IndexedInstance,
    occ: &mut Occupancy,
    course: usize,
    rng: &mut impl Rng,
) -> Option<Placement> {
    let candidates = candidate_triples(inst, occ, course);
    if candidates.is_empty() {
        return None;
    }
    let chosen = candidates[rng.gen_range(0..candidates.len())];
    occ.mark_placement(inst, course, &chosen);
    Some(chosen)
}

/// Builds one feasible individual by placing courses in index order; a
/// course with zero candidates is logged and left unplaced for repair.
pub fn generate_feasible(inst: &IndexedInstance, rng: &mut impl Rng) -> Individual {
    let mut occ = Occupancy::empty(inst);
    let mut ind = Individual::new(inst.num_courses());

    for course in 0..inst.num_courses() {
        match place_course_randomly(inst, &mut occ, course, rng) {
            Some(p) => ind.placements[course] = Some(p),
            None => {
                warn!(course, course_code = %inst.courses[course], "generator dead-end: no candidate triple, leaving course unplaced");
            }
        }
    }
    ind
}
