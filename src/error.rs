use std::fmt;

/// Error type for course purge operations
#[derive(Debug)]
pub enum PurgeError {
    /// Bad command line usage (unknown options, malformed identifiers)
    Usage(String),
    /// Course, category or user does not exist, or a batch resolved to nothing
    NotFound(String),
    /// Platform query failed while resolving courses
    Query(String),
    /// Deleting a single course failed
    Deletion { course: String, message: String },
    /// HTTP request failed
    Http(reqwest::Error),
    /// Server returned a non-success HTTP status
    Api { status: u16, message: String },
    /// Web service reported an exception
    WebService { errorcode: String, message: String },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Terminal read/write failed
    Io(String),
}

impl PurgeError {
    /// Build the error reported for unrecognized command line options
    pub fn unknown_options(options: &[String]) -> Self {
        PurgeError::Usage(format!("Unknown option(s):\n  {}", options.join("\n  ")))
    }

    /// Convert a transport failure raised while resolving courses into a query error.
    ///
    /// Not-found and usage errors pass through unchanged so callers can still
    /// tell them apart.
    pub fn during_resolution(self, context: &str) -> Self {
        match self {
            PurgeError::Http(_)
            | PurgeError::Api { .. }
            | PurgeError::WebService { .. }
            | PurgeError::Json(_) => {
                PurgeError::Query(format!("Failed to fetch {}: {}", context, self))
            }
            other => other,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PurgeError::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for PurgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurgeError::Usage(msg) => write!(f, "{}", msg),
            PurgeError::NotFound(msg) => write!(f, "{}", msg),
            PurgeError::Query(msg) => write!(f, "{}", msg),
            PurgeError::Deletion { course, message } => {
                write!(f, "Error deleting {}: {}", course, message)
            }
            PurgeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            PurgeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            PurgeError::WebService { errorcode, message } => {
                write!(f, "Web service error ({}): {}", errorcode, message)
            }
            PurgeError::Json(msg) => write!(f, "JSON error: {}", msg),
            PurgeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PurgeError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for PurgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PurgeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PurgeError {
    fn from(err: reqwest::Error) -> Self {
        PurgeError::Http(err)
    }
}

impl From<serde_json::Error> for PurgeError {
    fn from(err: serde_json::Error) -> Self {
        PurgeError::Json(err.to_string())
    }
}

impl From<std::io::Error> for PurgeError {
    fn from(err: std::io::Error) -> Self {
        PurgeError::Io(err.to_string())
    }
}

/// Result type alias for course purge operations
pub type Result<T> = std::result::Result<T, PurgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_options_lists_every_option() {
        let err = PurgeError::unknown_options(&["--foo".to_string(), "-x".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("--foo"));
        assert!(msg.contains("-x"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_deletion_error_display() {
        let err = PurgeError::Deletion {
            course: "BIO101 (Biology)".to_string(),
            message: "locked".to_string(),
        };
        assert_eq!(err.to_string(), "Error deleting BIO101 (Biology): locked");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_web_service_error_display() {
        let err = PurgeError::WebService {
            errorcode: "invalidtoken".to_string(),
            message: "Invalid token".to_string(),
        };
        assert!(err.to_string().contains("invalidtoken"));
        assert!(err.to_string().contains("Invalid token"));
    }

    #[test]
    fn test_during_resolution_wraps_transport_errors() {
        let err = PurgeError::Api {
            status: 500,
            message: "boom".to_string(),
        }
        .during_resolution("courses in category 5");
        match err {
            PurgeError::Query(msg) => {
                assert!(msg.contains("courses in category 5"));
                assert!(msg.contains("500"));
            }
            other => panic!("expected query error, got {:?}", other),
        }
    }

    #[test]
    fn test_during_resolution_keeps_not_found() {
        let err = PurgeError::NotFound("Course 9 not found".to_string()).during_resolution("x");
        assert!(matches!(err, PurgeError::NotFound(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PurgeError>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err: PurgeError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }
}
