//! Course platform operations over Moodle web services

use log::{debug, info, warn};

use crate::config::api;
use crate::error::{PurgeError, Result};

use super::models::{
    Category, Course, CoursesResponse, DeleteCoursesResponse, EnrolledUser, User,
};
use super::{CoursePlatform, MoodleClient};

fn param(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}

impl MoodleClient {
    async fn courses_by_field(&self, field: &str, value: u64) -> Result<Vec<Course>> {
        let response: CoursesResponse = self
            .call(
                api::GET_COURSES_BY_FIELD,
                &[param("field", field), param("value", value)],
            )
            .await?;
        for w in &response.warnings {
            warn!("{} warning for {}={}: {}", api::GET_COURSES_BY_FIELD, field, value, w.message);
        }
        Ok(response.courses)
    }

    /// Users enrolled in a course together with their course roles
    async fn enrolled_users(&self, course_id: u64) -> Result<Vec<EnrolledUser>> {
        self.call(
            api::GET_ENROLLED_USERS,
            &[
                param("courseid", course_id),
                param("options[0][name]", "userfields"),
                param("options[0][value]", "id,roles"),
            ],
        )
        .await
    }
}

/// Whether `user_id` is the one and only holder of `role_id` among `users`
fn is_sole_holder(users: &[EnrolledUser], user_id: u64, role_id: u64) -> bool {
    let mut holders = users.iter().filter(|u| u.has_role(role_id));
    matches!((holders.next(), holders.next()), (Some(u), None) if u.id == user_id)
}

impl CoursePlatform for MoodleClient {
    async fn get_course(&self, id: u64) -> Result<Course> {
        self.courses_by_field("id", id)
            .await?
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| {
                PurgeError::NotFound(format!(
                    "The course {} cannot be found. Ensure you are using the correct ID number",
                    id
                ))
            })
    }

    async fn get_courses_by_category(&self, category_id: u64) -> Result<Vec<Course>> {
        let mut courses: Vec<Course> = self
            .courses_by_field("category", category_id)
            .await?
            .into_iter()
            .filter(|c| c.categoryid.map_or(true, |cat| cat == category_id))
            .collect();
        courses.sort_by_key(|c| (c.sortorder.unwrap_or(i64::MAX), c.id));
        debug!("Category {} has {} course(s)", category_id, courses.len());
        Ok(courses)
    }

    async fn get_category(&self, id: u64) -> Result<Category> {
        let categories: Vec<Category> = self
            .call(
                api::GET_CATEGORIES,
                &[
                    param("criteria[0][key]", "id"),
                    param("criteria[0][value]", id),
                    param("addsubcategories", 0),
                ],
            )
            .await?;
        categories
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| PurgeError::NotFound(format!("The category {} cannot be found", id)))
    }

    async fn get_user(&self, id: u64) -> Result<User> {
        let users: Vec<User> = self
            .call(
                api::GET_USERS_BY_FIELD,
                &[param("field", "id"), param("values[0]", id)],
            )
            .await?;
        users
            .into_iter()
            .find(|u| u.id == id)
            .ok_or_else(|| PurgeError::NotFound(format!("The user {} cannot be found", id)))
    }

    async fn sole_teacher_courses(&self, user_id: u64, role_id: u64) -> Result<Vec<Course>> {
        let enrolled: Vec<Course> = self
            .call(api::GET_USERS_COURSES, &[param("userid", user_id)])
            .await?;
        debug!("User {} is enrolled in {} course(s)", user_id, enrolled.len());

        let mut courses = Vec::new();
        for course in enrolled {
            let users = self.enrolled_users(course.id).await?;
            if is_sole_holder(&users, user_id, role_id) {
                courses.push(course);
            } else {
                debug!(
                    "Skipping course {}: user {} is not its sole holder of role {}",
                    course.id, user_id, role_id
                );
            }
        }
        Ok(courses)
    }

    async fn delete_course(&self, course: &Course) -> Result<()> {
        debug!("Deleting course {}", course.id);
        let response: Option<DeleteCoursesResponse> = self
            .call(api::DELETE_COURSES, &[param("courseids[0]", course.id)])
            .await
            .map_err(|e| PurgeError::Deletion {
                course: course.display_name(),
                message: e.to_string(),
            })?;

        let warnings = response.unwrap_or_default().warnings;
        if warnings.is_empty() {
            debug!("Successfully deleted course {}", course.id);
            return Ok(());
        }

        let message = warnings
            .iter()
            .map(|w| match &w.warningcode {
                Some(code) => format!("{} ({})", w.message, code),
                None => w.message.clone(),
            })
            .collect::<Vec<_>>()
            .join("; ");
        Err(PurgeError::Deletion {
            course: course.display_name(),
            message,
        })
    }

    async fn fix_sort_order(&self) -> Result<()> {
        match self.sortorder_function() {
            Some(function) => {
                debug!("Reindexing course sort order via {}", function);
                let _: serde_json::Value = self.call(function, &[]).await?;
                Ok(())
            }
            None => {
                if self.take_fixup_notice() {
                    info!(
                        "No sort-order function configured, course sort order is left to the server"
                    );
                } else {
                    debug!("Skipping sort-order fixup");
                }
                Ok(())
            }
        }
    }
}
