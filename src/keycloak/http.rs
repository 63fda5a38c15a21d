//! HTTP utilities for Keycloak admin REST calls

use crate::error::{Error, Result};
use crate::http::Method;
use anyhow::Context;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and drops control characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let total = body.chars().count();
    let truncated = if total > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| c.is_control(), "")
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// HTTP client wrapper for admin API calls
#[derive(Clone)]
pub struct KeycloakHttpClient {
    client: Client,
}

impl KeycloakHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("kcadmin/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Send an authenticated request, returning the parsed body
    /// (`Value::Null` when the server sends none)
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        token: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(to_reqwest(method), url)
            .bearer_auth(token);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.context("Failed to send request")?;
        read_response(response).await
    }

    /// POST a form without authentication (token endpoint)
    pub async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<Value> {
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .context("Failed to send request")?;

        read_response(response).await
    }
}

async fn read_response(response: Response) -> Result<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        // Only log sanitized/truncated error bodies
        let message = sanitize_for_log(&body);
        tracing::error!("API error: {} - {}", status, message);
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }

    // Handle empty response
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(&body)?)
}

/// Format an admin API error for display
pub fn format_api_error(error: &Error) -> String {
    match error {
        Error::Api { status: 401, .. } => {
            "Authentication failed. Check the username, password or client secret.".to_string()
        },
        Error::Api { status: 403, .. } => {
            "Permission denied. The account lacks the required admin role.".to_string()
        },
        Error::Api { status: 404, .. } => "Resource not found.".to_string(),
        Error::Api { status: 409, .. } => {
            "Resource conflict. The resource may already exist.".to_string()
        },
        Error::Api { status: 400, message } => format!("Invalid request: {}", message),
        Error::Api { status, .. } if *status >= 500 => {
            "Keycloak is temporarily unavailable. Please try again.".to_string()
        },
        Error::Transport(_) => {
            "Request failed. Check the server URL and your network connection.".to_string()
        },
        other => {
            let text = other.to_string();
            let sanitized: String = text
                .chars()
                .filter(|c| !c.is_control())
                .take(120)
                .collect();
            if sanitized.len() < text.len() {
                format!("{}...", sanitized)
            } else {
                sanitized
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_truncates_long_bodies() {
        let body = "x".repeat(500);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.starts_with(&"x".repeat(200)));
        assert!(sanitized.ends_with("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_handles_multibyte_boundaries() {
        let body = "é".repeat(300);
        let sanitized = sanitize_for_log(&body);
        assert!(sanitized.contains("[truncated, 600 bytes total]"));
    }

    #[test]
    fn test_sanitize_drops_control_characters() {
        assert_eq!(sanitize_for_log("a\nb\tc"), "abc");
    }

    #[test]
    fn test_format_api_error_messages() {
        let err = Error::Api {
            status: 404,
            message: "{\"error\":\"Realm not found.\"}".to_string(),
        };
        assert_eq!(format_api_error(&err), "Resource not found.");

        let err = Error::Api {
            status: 503,
            message: String::new(),
        };
        assert!(format_api_error(&err).contains("temporarily unavailable"));

        let err = Error::InvalidArgument("realm name required".to_string());
        assert_eq!(format_api_error(&err), "invalid argument: realm name required");
    }
}
