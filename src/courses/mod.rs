//! Course deletion: resolution, confirmation and the deletion driver

mod commands;
pub mod driver;
pub mod resolver;

pub use commands::{run_batch_command, run_course_command, BatchOutcome, RunOptions};
pub use driver::{CourseOutcome, CourseState, DeletionDriver, DeletionReport};
pub use resolver::{BatchTarget, Resolution};
