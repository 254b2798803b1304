use sched_core::IndexedInstance;
use types::{Individual, Placement};

/// Teacher x slot, room x slot and group x slot occupancy bitmaps, derived
/// from (or built alongside) an `Individual`. Kept dense since `|T|*|S|` and
/// `|R|*|S|` are small relative to the candidate-triple enumeration cost they
/// save.
pub struct Occupancy {
    num_slots: usize,
    teacher: Vec<bool>,
    room: Vec<bool>,
    group: Vec<bool>,
}

impl Occupancy {
    pub fn empty(inst: &IndexedInstance) -> Self {
        Self {
            num_slots: inst.num_slots,
            teacher: vec![false; inst.num_teachers() * inst.num_slots],
            room: vec![false; inst.num_rooms() * inst.num_slots],
            group: vec![false; inst.groups.len() * inst.num_slots],
        }
    }

    /// Rebuilds occupancy from an individual's current placements.
    pub fn from_individual(inst: &IndexedInstance, ind: &Individual) -> Self {
        let mut occ = Self::empty(inst);
        for (c, p) in ind.placements.iter().enumerate() {
            if let Some(p) = p {
                occ.mark(p.teacher, p.room, inst.course_group[c], p.slot);
            }
        }
        occ
    }

    pub fn is_free(&self, teacher: usize, room: usize, group: usize, slot: usize) -> bool {
        !self.teacher[teacher * self.num_slots + slot]
            && !self.room[room * self.num_slots + slot]
            && !self.group[group * self.num_slots + slot]
    }

    pub fn mark(&mut self, teacher: usize, room: usize, group: usize, slot: usize) {
        self.teacher[teacher * self.num_slots + slot] = true;
        self.room[room * self.num_slots + slot] = true;
        self.group[group * self.num_slots + slot] = true;
    }

    pub fn unmark(&mut self, teacher: usize, room: usize, group: usize, slot: usize) {
        self.teacher[teacher * self.num_slots + slot] = false;
        self.room[room * self.num_slots + slot] = false;
        self.group[group * self.num_slots + slot] = false;
    }

    pub fn mark_placement(&mut self, inst: &IndexedInstance, course: usize, p: &Placement) {
        self.mark(p.teacher, p.room, inst.course_group[course], p.slot);
    }

    pub fn unmark_placement(&mut self, inst: &IndexedInstance, course: usize, p: &Placement) {
        self.unmark(p.teacher, p.room, inst.course_group[course], p.slot);
    }
}
