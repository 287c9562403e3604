//! Course platform access
//!
//! The [`CoursePlatform`] trait is the seam between this tool and the LMS:
//! lookups, the destructive delete and the sort-order fixup. [`MoodleClient`]
//! implements it over the Moodle REST web services.

mod api;
mod client;
pub mod models;
mod settings;
#[cfg(test)]
pub(crate) mod testing;

use crate::error::Result;

pub use client::MoodleClient;
pub use models::{Category, Course, User};
pub use settings::{Connection, Settings, SettingsStore};

/// Operations the course purge needs from the platform
///
/// Calls are awaited one at a time; implementations need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait CoursePlatform {
    /// Fetch a course by id
    ///
    /// Returns `PurgeError::NotFound` when no such course exists.
    async fn get_course(&self, id: u64) -> Result<Course>;

    /// Courses directly inside a category, in platform sort order.
    ///
    /// Subcategories are not searched. An unknown category yields an empty
    /// list.
    async fn get_courses_by_category(&self, category_id: u64) -> Result<Vec<Course>>;

    /// Fetch a category by id
    async fn get_category(&self, id: u64) -> Result<Category>;

    /// Fetch a user by id
    async fn get_user(&self, id: u64) -> Result<User>;

    /// Courses where `user_id` is the only holder of role `role_id`
    async fn sole_teacher_courses(&self, user_id: u64, role_id: u64) -> Result<Vec<Course>>;

    /// Delete a course and everything that depends on it
    async fn delete_course(&self, course: &Course) -> Result<()>;

    /// Recompute category sort order after a removal
    async fn fix_sort_order(&self) -> Result<()>;
}
