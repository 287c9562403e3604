/// Configuration constants for the Moodle web-service API
pub mod api {
    /// REST endpoint path (relative to the site URL)
    pub const REST_PATH: &str = "/webservice/rest/server.php";

    /// Response format requested from the REST server
    pub const REST_FORMAT: &str = "json";

    /// Look up courses by a single field (id, category, ...)
    pub const GET_COURSES_BY_FIELD: &str = "core_course_get_courses_by_field";

    /// Look up course categories by criteria
    pub const GET_CATEGORIES: &str = "core_course_get_categories";

    /// Look up users by a single field
    pub const GET_USERS_BY_FIELD: &str = "core_user_get_users_by_field";

    /// Courses a user is enrolled in
    pub const GET_USERS_COURSES: &str = "core_enrol_get_users_courses";

    /// Users enrolled in a course, with their roles
    pub const GET_ENROLLED_USERS: &str = "core_enrol_get_enrolled_users";

    /// Delete courses (cascades on the server)
    pub const DELETE_COURSES: &str = "core_course_delete_courses";
}

/// Configuration constants for connection settings
pub mod settings {
    /// Directory under the user config dir holding the settings file
    pub const DIR_NAME: &str = "course-purge";

    /// Settings file name
    pub const FILE_NAME: &str = "config.json";

    /// Environment variable overriding the settings file path
    pub const PATH_ENV_VAR: &str = "COURSE_PURGE_CONFIG";

    /// Environment variable holding the Moodle site URL
    pub const URL_ENV_VAR: &str = "MOODLE_URL";

    /// Environment variable holding the web-service token
    pub const TOKEN_ENV_VAR: &str = "MOODLE_TOKEN";

    /// Environment variable holding the editing-teacher role id
    pub const ROLE_ENV_VAR: &str = "MOODLE_EDITING_TEACHER_ROLE";
}

/// Default values for CLI
pub mod defaults {
    /// Role id of "editingteacher" on a stock Moodle install
    pub const EDITING_TEACHER_ROLE_ID: u64 = 3;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// HTTP request timeout in seconds (course deletion can be slow)
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;
}
