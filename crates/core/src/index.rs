use std::collections::{HashMap, HashSet};

use types::domain::{ClassType, RoomCategory};
use types::{CourseCode, GroupId, RawInstance, RoomId, ScheduleError, TeacherName};

/// Deterministic index assignment over a raw instance: courses sorted by
/// code, teachers and rooms sorted lexicographically, so that two runs over
/// identical input files produce identical index vectors.
#[derive(Clone, Debug)]
pub struct IndexedInstance {
    pub courses: Vec<CourseCode>,
    pub teachers: Vec<TeacherName>,
    pub rooms: Vec<RoomId>,
    pub groups: Vec<GroupId>,
    pub num_slots: usize,

    /// `allowed_teachers(c)`: every lecturer index listed for the course.
    pub course_allowed_teachers: Vec<Vec<usize>>,
    pub course_group: Vec<usize>,
    pub course_class_type: Vec<ClassType>,

    /// teacher-index -> slot-index -> preference score in `1..=5`.
    pub preferences: HashMap<usize, HashMap<usize, u8>>,

    /// room-category -> room indices, in the order `rooms` lists them.
    pub rooms_by_category: HashMap<RoomCategory, Vec<usize>>,
}

impl IndexedInstance {
    pub fn build(raw: &RawInstance) -> Result<Self, ScheduleError> {
        if raw.num_slots % 5 != 0 {
            return Err(ScheduleError::SlotCountNotDivisibleByFive(raw.num_slots));
        }

        let mut courses: Vec<String> = raw.courses.keys().cloned().collect();
        courses.sort();

        let mut teacher_set: HashSet<String> = HashSet::new();
        let mut group_labels: Vec<(String, String)> = Vec::new();
        for (code, rec) in &raw.courses {
            for t in &rec.lecturers {
                teacher_set.insert(t.0.clone());
            }
            group_labels.push((code.clone(), format!("{}-{}", rec.field, rec.degree)));
        }
        let mut teachers: Vec<String> = teacher_set.into_iter().collect();
        teachers.sort();
        let teacher_pos: HashMap<&str, usize> =
            teachers.iter().map(|t| t.as_str()).enumerate().collect();

        let mut group_set: HashSet<String> = group_labels.iter().map(|(_, g)| g.clone()).collect();
        let mut groups: Vec<String> = group_set.drain().collect();
        groups.sort();
        let group_pos: HashMap<&str, usize> =
            groups.iter().map(|g| g.as_str()).enumerate().collect();

        let mut rooms: Vec<String> = raw.rooms.values().flatten().cloned().collect();
        rooms.sort();
        rooms.dedup();
        let room_pos: HashMap<&str, usize> =
            rooms.iter().map(|r| r.as_str()).enumerate().collect();

        let mut rooms_by_category: HashMap<RoomCategory, Vec<usize>> = HashMap::new();
        for (category, names) in &raw.rooms {
            let mut idxs: Vec<usize> = Vec::with_capacity(names.len());
            for name in names {
                let idx = *room_pos.get(name.as_str()).ok_or_else(|| {
                    ScheduleError::UnknownIdentifier {
                        kind: "room category entry",
                        id: format!("{category:?}"),
                        referent: "room",
                        target: name.clone(),
                    }
                })?;
                idxs.push(idx);
            }
            idxs.sort_unstable();
            rooms_by_category.insert(*category, idxs);
        }

        let mut course_allowed_teachers = Vec::with_capacity(courses.len());
        let mut course_group = Vec::with_capacity(courses.len());
        let mut course_class_type = Vec::with_capacity(courses.len());

        for code in &courses {
            let rec = &raw.courses[code];
            if rec.lecturers.is_empty() {
                return Err(ScheduleError::UnknownIdentifier {
                    kind: "course",
                    id: code.clone(),
                    referent: "lecturer",
                    target: "<none>".to_string(),
                });
            }
            let mut t_idxs = Vec::with_capacity(rec.lecturers.len());
            for teacher_name in &rec.lecturers {
                let t_idx = *teacher_pos.get(teacher_name.0.as_str()).ok_or_else(|| {
                    ScheduleError::UnknownIdentifier {
                        kind: "course",
                        id: code.clone(),
                        referent: "teacher",
                        target: teacher_name.0.clone(),
                    }
                })?;
                t_idxs.push(t_idx);
            }
            t_idxs.sort_unstable();
            t_idxs.dedup();
            let group_label = format!("{}-{}", rec.field, rec.degree);
            let g_idx = *group_pos.get(group_label.as_str()).ok_or_else(|| {
                ScheduleError::UnknownIdentifier {
                    kind: "course",
                    id: code.clone(),
                    referent: "group",
                    target: group_label.clone(),
                }
            })?;
            course_allowed_teachers.push(t_idxs);
            course_group.push(g_idx);
            course_class_type.push(rec.class_type);
        }

        let mut preferences: HashMap<usize, HashMap<usize, u8>> = HashMap::new();
        if let Some(raw_prefs) = &raw.preferences {
            for (teacher_str, by_slot) in raw_prefs {
                let t_idx: usize = teacher_str.parse().map_err(|_| {
                    ScheduleError::UnknownIdentifier {
                        kind: "preferences",
                        id: teacher_str.clone(),
                        referent: "teacher index",
                        target: teacher_str.clone(),
                    }
                })?;
                if t_idx >= teachers.len() {
                    return Err(ScheduleError::UnknownIdentifier {
                        kind: "preferences",
                        id: teacher_str.clone(),
                        referent: "teacher index",
                        target: teacher_str.clone(),
                    });
                }
                let mut slots = HashMap::new();
                for (slot_str, score) in by_slot {
                    let s_idx: usize = slot_str.parse().map_err(|_| {
                        ScheduleError::UnknownIdentifier {
                            kind: "preferences",
                            id: slot_str.clone(),
                            referent: "slot index",
                            target: slot_str.clone(),
                        }
                    })?;
                    if s_idx >= raw.num_slots {
                        return Err(ScheduleError::UnknownIdentifier {
                            kind: "preferences",
                            id: slot_str.clone(),
                            referent: "slot index",
                            target: slot_str.clone(),
                        });
                    }
                    slots.insert(s_idx, *score);
                }
                preferences.insert(t_idx, slots);
            }
        }

        Ok(Self {
            courses: courses.into_iter().map(CourseCode::from).collect(),
            teachers: teachers.into_iter().map(TeacherName::from).collect(),
            rooms: rooms.into_iter().map(RoomId::from).collect(),
            groups: groups.into_iter().map(GroupId::from).collect(),
            num_slots: raw.num_slots,
            course_allowed_teachers,
            course_group,
            course_class_type,
            preferences,
            rooms_by_category,
        })
    }

    pub fn num_courses(&self) -> usize {
        self.courses.len()
    }
    pub fn num_teachers(&self) -> usize {
        self.teachers.len()
    }
    pub fn num_rooms(&self) -> usize {
        self.rooms.len()
    }

    /// `allowed_teachers(c)`.
    pub fn candidate_teachers(&self, course: usize) -> &[usize] {
        &self.course_allowed_teachers[course]
    }

    /// Candidate rooms for a course: the union of rooms across every room
    /// category its class type allows.
    pub fn candidate_rooms(&self, course: usize) -> Vec<usize> {
        let mut rooms: Vec<usize> = self.course_class_type[course]
            .allowed_room_categories()
            .iter()
            .flat_map(|cat| self.rooms_by_category.get(cat).cloned().unwrap_or_default())
            .collect();
        rooms.sort_unstable();
        rooms.dedup();
        rooms
    }

    /// `None` for an absent teacher/slot entry: the penalty kernel skips
    /// these rather than assuming a default score.
    pub fn preference_score(&self, teacher: usize, slot: usize) -> Option<u8> {
        self.preferences.get(&teacher).and_then(|s| s.get(&slot)).copied()
    }
}
