//! Pure hard-constraint kernels over a sparse `Individual`. Each returns a
//! non-negative violation count; zero means the constraint is satisfied.

use types::Individual;

use crate::index::IndexedInstance;

pub fn room_violations(inst: &IndexedInstance, ind: &Individual) -> u64 {
    let mut occ = vec![0u32; inst.num_rooms() * inst.num_slots];
    for p in ind.placements.iter().flatten() {
        occ[p.room * inst.num_slots + p.slot] += 1;
    }
    occ.into_iter().map(|n| n.saturating_sub(1) as u64).sum()
}

pub fn teacher_violations(inst: &IndexedInstance, ind: &Individual) -> u64 {
    let mut occ = vec![0u32; inst.num_teachers() * inst.num_slots];
    for p in ind.placements.iter().flatten() {
        occ[p.teacher * inst.num_slots + p.slot] += 1;
    }
    occ.into_iter().map(|n| n.saturating_sub(1) as u64).sum()
}

pub fn group_violations(inst: &IndexedInstance, ind: &Individual) -> u64 {
    let mut occ = vec![0u32; inst.groups.len() * inst.num_slots];
    for (c, p) in ind.placements.iter().enumerate() {
        if let Some(p) = p {
            let g = inst.course_group[c];
            occ[g * inst.num_slots + p.slot] += 1;
        }
    }
    occ.into_iter().map(|n| n.saturating_sub(1) as u64).sum()
}

/// `Σ_c |assigned_count(c) − 1|`; sparse `Individual` can only hold 0 or 1
/// placements per course, so this is just the unplaced-course count.
pub fn assignment_count_violations(ind: &Individual) -> u64 {
    ind.num_unplaced() as u64
}

pub fn teacher_domain_violations(inst: &IndexedInstance, ind: &Individual) -> u64 {
    ind.placements
        .iter()
        .enumerate()
        .filter_map(|(c, p)| p.as_ref().map(|p| (c, p)))
        .filter(|(c, p)| !inst.candidate_teachers(*c).contains(&p.teacher))
        .count() as u64
}

pub fn room_domain_violations(inst: &IndexedInstance, ind: &Individual) -> u64 {
    ind.placements
        .iter()
        .enumerate()
        .filter_map(|(c, p)| p.as_ref().map(|p| (c, p)))
        .filter(|(c, p)| !inst.candidate_rooms(*c).contains(&p.room))
        .count() as u64
}

/// Sum of all six hard-constraint violation counts; zero iff `ind` is
/// feasible (H1-H6).
pub fn total_violations(inst: &IndexedInstance, ind: &Individual) -> u64 {
    room_violations(inst, ind)
        + teacher_violations(inst, ind)
        + group_violations(inst, ind)
        + assignment_count_violations(ind)
        + teacher_domain_violations(inst, ind)
        + room_domain_violations(inst, ind)
}
