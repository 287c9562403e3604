//! course-purge - Bulk course deletion for Moodle
//!
//! A CLI tool for LMS administrators to delete courses by ID, by category or
//! by sole editing teacher, with interactive or forced confirmation.
//!
//! # Features
//!
//! - Delete a single course by ID
//! - Delete every course directly inside a category (subcategories untouched)
//! - Delete courses whose only editing teacher is a given user
//! - Per-course confirmation, or `--force` to skip it
//! - One failed deletion never stops the rest of a batch
//!
//! # Example
//!
//! ```bash
//! # Delete course 42 (asks for confirmation)
//! course-purge --courseid=42
//!
//! # Delete all courses in category 5 without per-course prompts
//! course-purge --category=5 --force
//!
//! # Prompt for the user ID, then delete their sole-taught courses
//! course-purge --teacher
//! ```

pub mod cli;
pub mod config;
pub mod courses;
pub mod error;
pub mod output;
pub mod platform;
pub mod ui;

pub use cli::{help_text, normalize_args, unrecognized_options, Cli, IdInput, IdKind, Mode};
pub use courses::{
    run_batch_command, run_course_command, BatchOutcome, BatchTarget, DeletionDriver,
    DeletionReport, RunOptions,
};
pub use error::{PurgeError, Result};
pub use platform::{
    Category, Connection, Course, CoursePlatform, MoodleClient, Settings, SettingsStore, User,
};
pub use ui::{Prompter, TerminalPrompter};
