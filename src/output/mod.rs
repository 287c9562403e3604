//! Output formatting for course listings

mod courses;

pub use courses::{courses_table, output_courses};
