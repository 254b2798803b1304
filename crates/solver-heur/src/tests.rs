use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sched_core::{kernels, scoring, IndexedInstance};
use types::domain::ClassType;
use types::{CourseRecord, ObjectiveWeights, RawInstance, TeacherName};

use crate::crossover::crossover_population;
use crate::generator::generate_feasible;
use crate::mutation::mutate_population;
use crate::repair::repair_population;

fn minimal_instance(num_courses: usize) -> RawInstance {
    let mut courses = HashMap::new();
    for i in 0..num_courses {
        courses.insert(
            format!("C{i}"),
            CourseRecord {
                course_name: format!("Course {i}"),
                field: "CS".into(),
                degree: "BSc".into(),
                class_type: ClassType::Lecture,
                lecturers: vec![TeacherName::from("t0")],
            },
        );
    }
    let mut rooms = HashMap::new();
    rooms.insert(types::domain::RoomCategory::SmallLecture, vec!["R0".into()]);

    RawInstance {
        courses,
        rooms,
        preferences: None,
        num_slots: 35,
    }
}

fn total_hard_violations(inst: &IndexedInstance, ind: &types::Individual) -> u64 {
    kernels::room_violations(inst, ind)
        + kernels::teacher_violations(inst, ind)
        + kernels::group_violations(inst, ind)
        + kernels::assignment_count_violations(ind)
        + kernels::teacher_domain_violations(inst, ind)
        + kernels::room_domain_violations(inst, ind)
}

#[test]
fn generator_produces_feasible_individual() {
    let raw = minimal_instance(1);
    let inst = IndexedInstance::build(&raw).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let ind = generate_feasible(&inst, &mut rng);

    assert_eq!(total_hard_violations(&inst, &ind), 0);
    assert_eq!(ind.num_unplaced(), 0);
    let placement = ind.placements[0].unwrap();
    assert_eq!(placement.teacher, 0);
    assert_eq!(placement.room, 0);

    let breakdown = scoring::evaluate(&inst, &ind, &ObjectiveWeights::default());
    assert_eq!(breakdown.teacher_gaps, 0.0);
    assert_eq!(breakdown.group_gaps, 0.0);
    assert_eq!(breakdown.teacher_room_changes, 0.0);
    assert_eq!(breakdown.group_room_changes, 0.0);
}

#[test]
fn conflict_detection_counts_teacher_violation_only() {
    let raw = {
        let mut r = minimal_instance(2);
        r.rooms.get_mut(&types::domain::RoomCategory::SmallLecture).unwrap().push("R1".into());
        r.courses.get_mut("C1").unwrap().field = "EE".into();
        r
    };
    let inst = IndexedInstance::build(&raw).unwrap();
    let mut ind = types::Individual::new(2);
    ind.placements[0] = Some(types::Placement { teacher: 0, room: 0, slot: 0 });
    ind.placements[1] = Some(types::Placement { teacher: 0, room: 1, slot: 0 });

    assert_eq!(kernels::teacher_violations(&inst, &ind), 1);
    assert_eq!(kernels::room_violations(&inst, &ind), 0);
    assert_eq!(kernels::group_violations(&inst, &ind), 0);
}

#[test]
fn single_teacher_gap_counts_one() {
    let raw = minimal_instance(2);
    let inst = IndexedInstance::build(&raw).unwrap();
    let mut ind = types::Individual::new(2);
    ind.placements[0] = Some(types::Placement { teacher: 0, room: 0, slot: 0 });
    ind.placements[1] = Some(types::Placement { teacher: 0, room: 0, slot: 2 });

    assert_eq!(scoring::teacher_gaps(&inst, &ind), 1.0);
}

#[test]
fn preference_penalty_matches_formula() {
    let mut raw = minimal_instance(1);
    let mut prefs = HashMap::new();
    let mut by_slot = HashMap::new();
    by_slot.insert("5".to_string(), 1u8);
    prefs.insert("0".to_string(), by_slot);
    raw.preferences = Some(prefs);

    let inst = IndexedInstance::build(&raw).unwrap();
    let mut ind = types::Individual::new(1);
    ind.placements[0] = Some(types::Placement { teacher: 0, room: 0, slot: 5 });

    assert!((scoring::preference_penalty(&inst, &ind) - 0.8).abs() < 1e-9);
}

#[test]
fn missing_preference_entries_contribute_nothing() {
    let raw = minimal_instance(1);
    let inst = IndexedInstance::build(&raw).unwrap();
    let mut ind = types::Individual::new(1);
    ind.placements[0] = Some(types::Placement { teacher: 0, room: 0, slot: 5 });

    assert_eq!(scoring::preference_penalty(&inst, &ind), 0.0);
}

#[test]
fn mutation_preserves_hard_violation_counts() {
    let raw = minimal_instance(5);
    let inst = IndexedInstance::build(&raw).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let ind = generate_feasible(&inst, &mut rng);
    let before = total_hard_violations(&inst, &ind);

    let mut population = vec![ind];
    mutate_population(&mut population, inst.num_slots, 1.0, &mut rng);

    assert_eq!(total_hard_violations(&inst, &population[0]), before);
}

#[test]
fn crossover_then_repair_yields_feasible_children() {
    let raw = minimal_instance(6);
    let inst = IndexedInstance::build(&raw).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let parents = vec![
        generate_feasible(&inst, &mut rng),
        generate_feasible(&inst, &mut rng),
    ];

    let mut children = crossover_population(&inst, &parents, &mut rng);
    repair_population(&inst, &mut children, &mut rng);

    for child in &children {
        assert_eq!(total_hard_violations(&inst, child), 0);
    }
}

#[test]
fn zero_courses_is_trivially_feasible_with_zero_fitness() {
    let raw = minimal_instance(0);
    let inst = IndexedInstance::build(&raw).unwrap();
    let ind = types::Individual::new(0);
    let breakdown = scoring::evaluate(&inst, &ind, &ObjectiveWeights::default());
    assert_eq!(breakdown.fitness, 0.0);
}
