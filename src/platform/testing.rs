//! In-memory platform for resolver, driver and command tests

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::error::{PurgeError, Result};

use super::{Category, Course, CoursePlatform, User};

pub(crate) const EDITING_TEACHER: u64 = 3;

pub(crate) fn course(id: u64, shortname: &str, category: u64) -> Course {
    Course {
        id,
        fullname: format!("{} full name", shortname),
        shortname: shortname.to_string(),
        categoryid: Some(category),
        sortorder: Some(id as i64),
    }
}

#[derive(Default)]
pub(crate) struct MockPlatform {
    courses: RefCell<Vec<Course>>,
    categories: Vec<Category>,
    users: Vec<User>,
    /// course id -> users holding the editing teacher role
    teachers: HashMap<u64, Vec<u64>>,
    failing_deletes: HashSet<u64>,
    fail_queries: bool,
    /// Lookups beyond this many fail
    fail_queries_after: Option<usize>,
    fail_fix: bool,
    pub deleted: RefCell<Vec<u64>>,
    pub fix_calls: Cell<usize>,
    pub lookups: Cell<usize>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_course(self, course: Course) -> Self {
        self.courses.borrow_mut().push(course);
        self
    }

    pub fn with_category(mut self, id: u64, name: &str) -> Self {
        self.categories.push(Category {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_user(mut self, id: u64, firstname: &str, lastname: &str) -> Self {
        self.users.push(User {
            id,
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            email: format!("{}@example.edu", firstname.to_lowercase()),
        });
        self
    }

    pub fn with_teachers(mut self, course_id: u64, users: &[u64]) -> Self {
        self.teachers.insert(course_id, users.to_vec());
        self
    }

    pub fn failing_delete(mut self, course_id: u64) -> Self {
        self.failing_deletes.insert(course_id);
        self
    }

    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    pub fn failing_queries_after(mut self, lookups: usize) -> Self {
        self.fail_queries_after = Some(lookups);
        self
    }

    pub fn failing_fix(mut self) -> Self {
        self.fail_fix = true;
        self
    }

    pub fn deleted_ids(&self) -> Vec<u64> {
        self.deleted.borrow().clone()
    }

    fn lookup(&self) -> Result<()> {
        let count = self.lookups.get() + 1;
        self.lookups.set(count);
        if self.fail_queries || self.fail_queries_after.is_some_and(|n| count > n) {
            return Err(PurgeError::Api {
                status: 500,
                message: "database unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl CoursePlatform for MockPlatform {
    async fn get_course(&self, id: u64) -> Result<Course> {
        self.lookup()?;
        self.courses
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| PurgeError::NotFound(format!("The course {} cannot be found", id)))
    }

    async fn get_courses_by_category(&self, category_id: u64) -> Result<Vec<Course>> {
        self.lookup()?;
        let mut courses: Vec<Course> = self
            .courses
            .borrow()
            .iter()
            .filter(|c| c.categoryid == Some(category_id))
            .cloned()
            .collect();
        courses.sort_by_key(|c| c.sortorder);
        Ok(courses)
    }

    async fn get_category(&self, id: u64) -> Result<Category> {
        self.lookup()?;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| PurgeError::NotFound(format!("The category {} cannot be found", id)))
    }

    async fn get_user(&self, id: u64) -> Result<User> {
        self.lookup()?;
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| PurgeError::NotFound(format!("The user {} cannot be found", id)))
    }

    async fn sole_teacher_courses(&self, user_id: u64, role_id: u64) -> Result<Vec<Course>> {
        self.lookup()?;
        if role_id != EDITING_TEACHER {
            return Ok(Vec::new());
        }
        Ok(self
            .courses
            .borrow()
            .iter()
            .filter(|c| self.teachers.get(&c.id).map(Vec::as_slice) == Some(&[user_id][..]))
            .cloned()
            .collect())
    }

    async fn delete_course(&self, course: &Course) -> Result<()> {
        if self.failing_deletes.contains(&course.id) {
            return Err(PurgeError::Deletion {
                course: course.display_name(),
                message: "course is locked".to_string(),
            });
        }
        self.courses.borrow_mut().retain(|c| c.id != course.id);
        self.deleted.borrow_mut().push(course.id);
        Ok(())
    }

    async fn fix_sort_order(&self) -> Result<()> {
        self.fix_calls.set(self.fix_calls.get() + 1);
        if self.fail_fix {
            return Err(PurgeError::WebService {
                errorcode: "dmlwriteexception".to_string(),
                message: "Error writing to database".to_string(),
            });
        }
        Ok(())
    }
}
