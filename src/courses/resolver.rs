//! Course resolution for each deletion mode

use log::debug;

use crate::error::{PurgeError, Result};
use crate::platform::{Course, CoursePlatform};

/// Courses selected for a batch deletion and the question put to the operator
#[derive(Debug, Clone)]
pub struct Resolution {
    pub courses: Vec<Course>,
    pub question: String,
}

/// Look up a single course by id
pub async fn resolve_course<P: CoursePlatform>(platform: &P, id: u64) -> Result<Course> {
    platform
        .get_course(id)
        .await
        .map_err(|e| e.during_resolution(&format!("course {}", id)))
}

/// Confirmation question for a single course
pub fn course_question(course: &Course) -> String {
    format!("Delete \"{} ({})\"? (Y/N)", course.fullname, course.shortname)
}

/// Batch deletion target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchTarget {
    /// Courses directly inside a category (subcategories are left alone)
    Category(u64),
    /// Courses where the user is the only editing teacher
    Teacher { user_id: u64, role_id: u64 },
}

impl BatchTarget {
    /// Short label for spinners and logs
    pub fn label(&self) -> String {
        match self {
            BatchTarget::Category(id) => format!("courses in category {}", id),
            BatchTarget::Teacher { user_id, .. } => {
                format!("courses taught solely by user {}", user_id)
            }
        }
    }

    async fn fetch<P: CoursePlatform>(&self, platform: &P) -> Result<Vec<Course>> {
        let courses = match *self {
            BatchTarget::Category(id) => platform.get_courses_by_category(id).await,
            BatchTarget::Teacher { user_id, role_id } => {
                platform.sole_teacher_courses(user_id, role_id).await
            }
        };
        courses.map_err(|e| e.during_resolution(&self.label()))
    }

    /// Resolve the courses to delete.
    ///
    /// An empty result is fatal, as is failing to describe the category or
    /// user in the confirmation question.
    pub async fn resolve<P: CoursePlatform>(&self, platform: &P) -> Result<Resolution> {
        let courses = self.fetch(platform).await?;
        debug!("Resolved {} {}", courses.len(), self.label());

        match *self {
            BatchTarget::Category(id) => {
                if courses.is_empty() {
                    return Err(PurgeError::NotFound(format!(
                        "No courses found in category {}. Aborting...",
                        id
                    )));
                }
                let category = platform
                    .get_category(id)
                    .await
                    .map_err(|e| e.during_resolution(&format!("category {}", id)))?;
                Ok(Resolution {
                    question: format!(
                        "Delete all {} courses in {}? (Y/N)",
                        courses.len(),
                        category.name
                    ),
                    courses,
                })
            }
            BatchTarget::Teacher { user_id, .. } => {
                if courses.is_empty() {
                    return Err(PurgeError::NotFound(format!(
                        "There are no courses in which user {} is enrolled as sole editing teacher",
                        user_id
                    )));
                }
                let user = platform
                    .get_user(user_id)
                    .await
                    .map_err(|e| e.during_resolution(&format!("user {}", user_id)))?;
                Ok(Resolution {
                    question: format!(
                        "Delete {} courses in which {} is enrolled as sole faculty? (Y/N)",
                        courses.len(),
                        user.display_name()
                    ),
                    courses,
                })
            }
        }
    }

    /// How many of `requested` the platform still reports for this target
    pub async fn remaining<P: CoursePlatform>(
        &self,
        platform: &P,
        requested: &[Course],
    ) -> Result<usize> {
        let current = self.fetch(platform).await?;
        Ok(requested
            .iter()
            .filter(|r| current.iter().any(|c| c.id == r.id))
            .count())
    }
}
