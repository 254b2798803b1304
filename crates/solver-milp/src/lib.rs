#[cfg(feature = "with-milp")]
mod model;
#[cfg(feature = "with-milp")]
mod worker;

use async_trait::async_trait;
use sched_core::IndexedInstance;
use tracing::{info, warn};
use types::{Individual, SolveOutcome, SolveRequest, Solver};

#[cfg(not(feature = "with-milp"))]
use types::SolverStatus;

/// CP/IP backend over `good_lp`+CBC, gated behind the `with-milp` feature
/// (the solver crate is a heavy native dependency, same as the teacher's
/// original optional-MILP split). Without the feature, falls back to a
/// single deterministic greedy placement so the backend is always callable.
pub struct ExactSolver;

impl ExactSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExactSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Solver for ExactSolver {
    async fn solve(&self, request: SolveRequest) -> anyhow::Result<SolveOutcome> {
        request.config.validate()?;
        let inst = IndexedInstance::build(&request.instance)?;
        info!(courses = inst.num_courses(), teachers = inst.num_teachers(), "exact solve starting");

        #[cfg(feature = "with-milp")]
        {
            let time_limit = std::time::Duration::from_secs(request.config.exact_time_limit_secs);
            let start = std::time::Instant::now();
            let (vars, m) = model::build(&inst);
            let objective = model::objective(&m);
            let out = worker::solve_bounded(vars, m, objective, inst.clone(), time_limit);
            let elapsed = start.elapsed().as_secs_f64();

            Ok(SolveOutcome {
                status: out.status,
                best: out.individual,
                objective_value: out.objective_value,
                computing_time_seconds: elapsed,
            })
        }

        #[cfg(not(feature = "with-milp"))]
        {
            warn!("solver-milp built without the with-milp feature; falling back to greedy placement");
            let start = std::time::Instant::now();
            let best = greedy_fallback(&inst);
            let status = if best.num_unplaced() == 0 { SolverStatus::Feasible } else { SolverStatus::Infeasible };
            Ok(SolveOutcome {
                status,
                best: Some(best),
                objective_value: None,
                computing_time_seconds: start.elapsed().as_secs_f64(),
            })
        }
    }
}

/// Fixed-order greedy placement, used only when the `good_lp`/CBC backend
/// isn't compiled in. Not an exact method; a stand-in so the backend always
/// answers something.
#[cfg(not(feature = "with-milp"))]
fn greedy_fallback(inst: &IndexedInstance) -> Individual {
    let mut teacher_slot = vec![false; inst.num_teachers() * inst.num_slots];
    let mut room_slot = vec![false; inst.num_rooms() * inst.num_slots];
    let mut group_slot = vec![false; inst.groups.len() * inst.num_slots];

    let mut ind = Individual::new(inst.num_courses());
    for course in 0..inst.num_courses() {
        let group = inst.course_group[course];
        'search: for &teacher in inst.candidate_teachers(course) {
            for room in inst.candidate_rooms(course) {
                for slot in 0..inst.num_slots {
                    let t_free = !teacher_slot[teacher * inst.num_slots + slot];
                    let r_free = !room_slot[room * inst.num_slots + slot];
                    let g_free = !group_slot[group * inst.num_slots + slot];
                    if t_free && r_free && g_free {
                        teacher_slot[teacher * inst.num_slots + slot] = true;
                        room_slot[room * inst.num_slots + slot] = true;
                        group_slot[group * inst.num_slots + slot] = true;
                        ind.placements[course] = Some(types::Placement { teacher, room, slot });
                        break 'search;
                    }
                }
            }
        }
    }
    ind
}
