//! Course, category and user models from the Moodle web-service API

use serde::{Deserialize, Serialize};

/// Course record
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: u64,
    pub fullname: String,
    pub shortname: String,
    /// `core_enrol_get_users_courses` names this field `category`
    #[serde(default, alias = "category")]
    pub categoryid: Option<u64>,
    #[serde(default)]
    pub sortorder: Option<i64>,
}

impl Course {
    /// `SHORTNAME (FULLNAME)`, the form used in per-course messages
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.shortname, self.fullname)
    }
}

/// Course category record
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// User record
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// `FIRST LAST (EMAIL)`
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.firstname, self.lastname, self.email)
    }
}

/// User enrolled in a course, as returned by `core_enrol_get_enrolled_users`
#[derive(Deserialize, Debug, Clone)]
pub struct EnrolledUser {
    pub id: u64,
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
}

impl EnrolledUser {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.roles.iter().any(|r| r.roleid == role_id)
    }
}

/// Role held by an enrolled user in the course context
#[derive(Deserialize, Debug, Clone)]
pub struct RoleAssignment {
    pub roleid: u64,
}

/// Response of `core_course_get_courses_by_field`
#[derive(Deserialize, Debug)]
pub struct CoursesResponse {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub warnings: Vec<WsWarning>,
}

/// Response of `core_course_delete_courses`
#[derive(Deserialize, Debug, Default)]
pub struct DeleteCoursesResponse {
    #[serde(default)]
    pub warnings: Vec<WsWarning>,
}

/// Warning entry attached to many web-service responses
#[derive(Deserialize, Debug, Clone)]
pub struct WsWarning {
    #[serde(default)]
    pub warningcode: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Exception body returned (with HTTP 200) when a web-service call fails
#[derive(Deserialize, Debug)]
pub struct WsException {
    pub exception: String,
    #[serde(default)]
    pub errorcode: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
