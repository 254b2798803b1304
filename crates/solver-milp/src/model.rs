//! Exact 0/1 IP formulation of the assignment problem, built over the same
//! `IndexedInstance` the heuristic backend uses.
//!
//! One binary variable per valid `(course, teacher, room, slot)` candidate
//! triple. H1 is a per-course equality, H2-H4 are per-resource-slot
//! capacity constraints, H5/H6 are enforced by only ever declaring a
//! variable for an allowed teacher/room pair. The objective linearizes
//! `teacher_gaps` alone, via `has_class`/`has_any`/`earliest`/`latest`
//! auxiliary variables per `(teacher, day)`.

use std::collections::HashMap;

use good_lp::{variable, Expression, ProblemVariables, Solution, SolverModel, Variable};
use sched_core::IndexedInstance;

const BIG_M: f64 = 1_000.0;

pub struct Candidate {
    pub course: usize,
    pub teacher: usize,
    pub room: usize,
    pub slot: usize,
    pub var: Variable,
}

pub struct Model {
    pub candidates: Vec<Candidate>,
    pub by_course: Vec<Vec<usize>>,
    pub by_room_slot: HashMap<(usize, usize), Vec<usize>>,
    pub by_teacher_slot: HashMap<(usize, usize), Vec<usize>>,
    pub by_group_slot: HashMap<(usize, usize), Vec<usize>>,

    pub slots_per_day: usize,
    /// `has_class[(teacher, day, hour)]`.
    pub has_class: HashMap<(usize, usize, usize), Variable>,
    /// `has_any[(teacher, day)]`.
    pub has_any: HashMap<(usize, usize), Variable>,
    pub earliest: HashMap<(usize, usize), Variable>,
    pub latest: HashMap<(usize, usize), Variable>,
    pub total_gap: HashMap<(usize, usize), Variable>,
}

impl Model {
    fn sum_over(&self, idxs: &[usize]) -> Expression {
        let mut sum = Expression::from(0.0);
        for &i in idxs {
            sum = sum + self.candidates[i].var;
        }
        sum
    }

    fn teacher_slot_sum(&self, teacher: usize, slot: usize) -> Expression {
        match self.by_teacher_slot.get(&(teacher, slot)) {
            Some(idxs) => self.sum_over(idxs),
            None => Expression::from(0.0),
        }
    }
}

/// Declares every candidate start variable plus the gap-linearization
/// auxiliaries, returning both the model and the `ProblemVariables` they
/// live in.
pub fn build(inst: &IndexedInstance) -> (ProblemVariables, Model) {
    let mut vars = ProblemVariables::new();
    let mut candidates = Vec::new();
    let mut by_course = vec![Vec::new(); inst.num_courses()];
    let mut by_room_slot: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    let mut by_teacher_slot: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    let mut by_group_slot: HashMap<(usize, usize), Vec<usize>> = HashMap::new();

    for course in 0..inst.num_courses() {
        let group = inst.course_group[course];
        for &teacher in inst.candidate_teachers(course) {
            for room in inst.candidate_rooms(course) {
                for slot in 0..inst.num_slots {
                    let var = vars.add(variable().binary());
                    let idx = candidates.len();
                    candidates.push(Candidate { course, teacher, room, slot, var });
                    by_course[course].push(idx);
                    by_room_slot.entry((room, slot)).or_default().push(idx);
                    by_teacher_slot.entry((teacher, slot)).or_default().push(idx);
                    by_group_slot.entry((group, slot)).or_default().push(idx);
                }
            }
        }
    }

    let slots_per_day = inst.num_slots / 5;
    let mut has_class = HashMap::new();
    let mut has_any = HashMap::new();
    let mut earliest = HashMap::new();
    let mut latest = HashMap::new();
    let mut total_gap = HashMap::new();

    for teacher in 0..inst.num_teachers() {
        for day in 0..5 {
            for hour in 0..slots_per_day {
                has_class.insert((teacher, day, hour), vars.add(variable().binary()));
            }
            has_any.insert((teacher, day), vars.add(variable().binary()));
            earliest.insert((teacher, day), vars.add(variable().min(0.0).max(slots_per_day as f64)));
            latest.insert((teacher, day), vars.add(variable().min(0.0).max(slots_per_day as f64)));
            total_gap.insert((teacher, day), vars.add(variable().min(0.0)));
        }
    }

    (
        vars,
        Model {
            candidates,
            by_course,
            by_room_slot,
            by_teacher_slot,
            by_group_slot,
            slots_per_day,
            has_class,
            has_any,
            earliest,
            latest,
            total_gap,
        },
    )
}

/// H1: every course gets exactly one placement.
pub fn add_course_count_constraints<M: SolverModel>(mut model: M, m: &Model) -> M {
    for idxs in &m.by_course {
        model = model.with(m.sum_over(idxs).eq(1.0));
    }
    model
}

/// H2: a room hosts at most one class per slot.
pub fn add_room_capacity_constraints<M: SolverModel>(mut model: M, m: &Model) -> M {
    for idxs in m.by_room_slot.values() {
        model = model.with(m.sum_over(idxs).leq(1.0));
    }
    model
}

/// H3: a teacher teaches at most one class per slot.
pub fn add_teacher_capacity_constraints<M: SolverModel>(mut model: M, m: &Model) -> M {
    for idxs in m.by_teacher_slot.values() {
        model = model.with(m.sum_over(idxs).leq(1.0));
    }
    model
}

/// H4: a group attends at most one class per slot.
pub fn add_group_capacity_constraints<M: SolverModel>(mut model: M, m: &Model) -> M {
    for idxs in m.by_group_slot.values() {
        model = model.with(m.sum_over(idxs).leq(1.0));
    }
    model
}

/// Links `has_class[t,d,h]` to the candidate sum at that teacher-slot (H3
/// above already bounds it to 0/1), then bounds `earliest`/`latest` against
/// every active hour and derives `has_any` and the gated `total_gap`.
pub fn add_gap_linearization<M: SolverModel>(mut model: M, m: &Model, inst: &IndexedInstance) -> M {
    for teacher in 0..inst.num_teachers() {
        for day in 0..5 {
            let mut occupied = Expression::from(0.0);
            for hour in 0..m.slots_per_day {
                let slot = day * m.slots_per_day + hour;
                let hc = m.has_class[&(teacher, day, hour)];
                model = model.with(Expression::from(hc).eq(m.teacher_slot_sum(teacher, slot)));
                occupied = occupied + hc;

                let earliest = m.earliest[&(teacher, day)];
                let latest = m.latest[&(teacher, day)];
                // earliest <= hour + M*(1-hc)  <=>  earliest + M*hc <= hour + M
                model = model.with((Expression::from(earliest) + BIG_M * hc).leq(hour as f64 + BIG_M));
                // latest >= hour - M*(1-hc)  <=>  latest - M*hc >= hour - M
                model = model.with((Expression::from(latest) - BIG_M * hc).geq(hour as f64 - BIG_M));

                let has_any = m.has_any[&(teacher, day)];
                model = model.with((Expression::from(has_any) - hc).geq(0.0));
            }

            let has_any = m.has_any[&(teacher, day)];
            model = model.with((Expression::from(has_any) - occupied.clone()).leq(0.0));

            let earliest = m.earliest[&(teacher, day)];
            let latest = m.latest[&(teacher, day)];
            let total_gap = m.total_gap[&(teacher, day)];
            // total_gap >= (latest - earliest + 1 - occupied) - M*(1-has_any)
            model = model.with(
                (Expression::from(total_gap) - latest + earliest + occupied - BIG_M * has_any).geq(1.0 - BIG_M),
            );
        }
    }
    model
}

pub fn objective(m: &Model) -> Expression {
    let mut sum = Expression::from(0.0);
    for &v in m.total_gap.values() {
        sum = sum + v;
    }
    sum
}

/// Reads back the chosen candidate per course into an `Individual`; H1 is
/// an equality so a correctly solved model has exactly one per course, but
/// a course is left `None` rather than panicking if the solver ever hands
/// back something short of that.
pub fn extract_solution(m: &Model, sol: &impl Solution) -> types::Individual {
    let mut by_course: HashMap<usize, types::Placement> = HashMap::new();
    for c in &m.candidates {
        if sol.value(c.var) > 0.5 {
            by_course.insert(c.course, types::Placement { teacher: c.teacher, room: c.room, slot: c.slot });
        }
    }
    types::Individual {
        placements: (0..m.by_course.len()).map(|c| by_course.get(&c).copied()).collect(),
    }
}
