//! Runs the (blocking, possibly slow) `good_lp`/CBC solve on its own thread
//! so the async caller can bound it by wall-clock time via `recv_timeout`
//! instead of blocking the executor.

use std::sync::mpsc;
use std::time::Duration;

use good_lp::{Expression, ProblemVariables, Solution, SolverModel};
use sched_core::IndexedInstance;
use tracing::warn;
use types::SolverStatus;

use crate::model::{self, Model};

pub struct SolveOutput {
    pub status: SolverStatus,
    pub individual: Option<types::Individual>,
    pub objective_value: Option<f64>,
}

/// Builds and solves the model on a dedicated thread, waiting up to
/// `time_limit` for a result. A timeout leaves the worker thread running
/// (CBC has no cooperative cancellation hook in `good_lp`) and reports
/// `Unknown` without waiting for it to exit.
pub fn solve_bounded(
    vars: ProblemVariables,
    m: Model,
    objective: Expression,
    inst: IndexedInstance,
    time_limit: Duration,
) -> SolveOutput {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let mut built = vars.minimise(objective.clone()).using(good_lp::default_solver);
        built = model::add_course_count_constraints(built, &m);
        built = model::add_room_capacity_constraints(built, &m);
        built = model::add_teacher_capacity_constraints(built, &m);
        built = model::add_group_capacity_constraints(built, &m);
        built = model::add_gap_linearization(built, &m, &inst);

        let result = built.solve();
        let out = match result {
            Ok(sol) => {
                let value = sol.eval(objective.clone());
                let individual = model::extract_solution(&m, &sol);
                SolveOutput { status: SolverStatus::Optimal, individual: Some(individual), objective_value: Some(value) }
            }
            Err(e) => {
                warn!(error = %e, "exact solve failed");
                SolveOutput { status: SolverStatus::Infeasible, individual: None, objective_value: None }
            }
        };
        let _ = tx.send(out);
    });

    match rx.recv_timeout(time_limit) {
        Ok(out) => out,
        Err(mpsc::RecvTimeoutError::Timeout) => {
            warn!(?time_limit, "exact solve exceeded wall-clock budget");
            SolveOutput { status: SolverStatus::Unknown, individual: None, objective_value: None }
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            SolveOutput { status: SolverStatus::Unknown, individual: None, objective_value: None }
        }
    }
}
