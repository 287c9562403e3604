//! Moodle REST client for web-service calls

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::config::{api, defaults};
use crate::error::{PurgeError, Result};

use super::models::WsException;
use super::settings::Connection;

/// Moodle web-service client
pub struct MoodleClient {
    client: Client,
    /// Site URL without trailing slash
    base_url: String,
    token: String,
    /// Web-service function that reindexes course sort order, if the site has one
    sortorder_function: Option<String>,
    /// Set once the missing sort-order function has been reported
    fixup_notice_logged: AtomicBool,
}

impl MoodleClient {
    /// Create a client for the resolved connection
    pub fn new(connection: &Connection) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: connection.url.trim_end_matches('/').to_string(),
            token: connection.token.clone(),
            sortorder_function: connection.sortorder_function.clone(),
            fixup_notice_logged: AtomicBool::new(false),
        }
    }

    /// Create a client pointed at a mock server
    #[cfg(test)]
    pub fn test_client(base_url: &str) -> Self {
        Self::new(&Connection {
            url: base_url.to_string(),
            token: "test-token".to_string(),
            role_id: defaults::EDITING_TEACHER_ROLE_ID,
            sortorder_function: None,
        })
    }

    pub(crate) fn sortorder_function(&self) -> Option<&str> {
        self.sortorder_function.as_deref()
    }

    /// True only on the first call, so the skipped fixup is reported once per run
    pub(crate) fn take_fixup_notice(&self) -> bool {
        !self.fixup_notice_logged.swap(true, Ordering::Relaxed)
    }

    /// Full URL of the REST endpoint
    pub(crate) fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, api::REST_PATH)
    }

    /// Encode the form body for a web-service call
    fn form_body(&self, function: &str, params: &[(String, String)]) -> String {
        let standard = [
            ("wstoken", self.token.as_str()),
            ("wsfunction", function),
            ("moodlewsrestformat", api::REST_FORMAT),
        ];
        standard
            .into_iter()
            .chain(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Call a web-service function and parse its JSON result.
    ///
    /// Moodle reports failures as an exception object with HTTP 200, so the
    /// body is checked for one before deserializing into `T`.
    pub(crate) async fn call<T>(&self, function: &str, params: &[(String, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Calling web service {} with {} argument(s)", function, params.len());

        let response = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(self.form_body(function, params))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PurgeError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to call {}", function),
            });
        }

        let text = response.text().await?;
        let value: serde_json::Value = if text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        if value.get("exception").is_some() {
            let exc: WsException = serde_json::from_value(value)?;
            return Err(PurgeError::WebService {
                errorcode: exc.errorcode.unwrap_or(exc.exception),
                message: exc.message.unwrap_or_default(),
            });
        }

        Ok(serde_json::from_value(value)?)
    }
}
