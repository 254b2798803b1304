pub mod assignment;
pub mod config;
pub mod domain;
pub mod error;
pub mod ids;
pub mod instance;
pub mod objective;
pub mod slots;
pub mod solver;

pub use assignment::{BestAssignmentEntry, Checkpoint, ExactResults, Individual, Placement};
pub use config::{RunConfig, SolverBackend};
pub use domain::{ClassType, CourseRecord, RoomCategory};
pub use error::ScheduleError;
pub use ids::{CourseCode, GroupId, RoomId, TeacherName};
pub use instance::{CourseData, RawInstance, RawPreferences, RoomCatalog};
pub use objective::{ObjectiveBreakdown, ObjectiveKind, ObjectiveWeights};
pub use solver::{SolveOutcome, SolveRequest, Solver, SolverStatus};
