use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use sched_core::{kernels, IndexedInstance};
use types::{BestAssignmentEntry, Individual, Placement};

/// Re-hydrates a `best.json` report into an `Individual` against a freshly
/// built index, so the six hard-constraint kernels can be re-run
/// independently of whichever run produced the file.
pub fn load_best_as_individual(path: &Path, inst: &IndexedInstance) -> Result<Individual> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not open best assignment file {}", path.display()))?;
    let entries: Vec<BestAssignmentEntry> =
        serde_json::from_str(&text).with_context(|| format!("malformed JSON in {}", path.display()))?;

    let mut ind = Individual::new(inst.num_courses());
    for entry in entries {
        let course_idx = inst
            .courses
            .iter()
            .position(|c| c.0 == entry.course_code)
            .ok_or_else(|| anyhow!("best assignment references unknown course {}", entry.course_code))?;
        let teacher_idx = inst
            .teachers
            .iter()
            .position(|t| t.0 == entry.teacher)
            .ok_or_else(|| anyhow!("best assignment references unknown teacher {}", entry.teacher))?;
        let room_idx = inst
            .rooms
            .iter()
            .position(|r| r.0 == entry.room)
            .ok_or_else(|| anyhow!("best assignment references unknown room {}", entry.room))?;
        let slot_idx: usize = entry
            .slot
            .parse()
            .map_err(|_| anyhow!("best assignment has non-numeric slot {}", entry.slot))?;

        ind.placements[course_idx] = Some(Placement {
            teacher: teacher_idx,
            room: room_idx,
            slot: slot_idx,
        });
    }
    Ok(ind)
}

/// Prints a pass/fail report over the six hard-constraint kernels, returns
/// whether the assignment is fully feasible.
pub fn print_report(inst: &IndexedInstance, ind: &Individual) -> bool {
    let checks: [(&str, u64); 6] = [
        ("room capacity", kernels::room_violations(inst, ind)),
        ("teacher capacity", kernels::teacher_violations(inst, ind)),
        ("group capacity", kernels::group_violations(inst, ind)),
        ("assignment count", kernels::assignment_count_violations(ind)),
        ("teacher domain", kernels::teacher_domain_violations(inst, ind)),
        ("room domain", kernels::room_domain_violations(inst, ind)),
    ];

    let mut feasible = true;
    for (name, count) in checks {
        if count == 0 {
            println!("  {} {}", "✓".green(), name);
        } else {
            feasible = false;
            println!("  {} {}: {} violation(s)", "✗".red(), name, count);
        }
    }

    if feasible {
        println!("{}", "Constraint audit: PASS".green().bold());
    } else {
        println!("{}", "Constraint audit: FAIL".red().bold());
    }
    feasible
}
