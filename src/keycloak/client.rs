//! Keycloak client
//!
//! Combines authentication and the HTTP client, and executes command and
//! query descriptors against a server.

use super::auth::{Grant, KeycloakCredentials};
use super::http::KeycloakHttpClient;
use crate::error::{Error, Result};
use crate::http::{Command, CommandExecutor, Method, Query, QueryExecutor, ResolvedPath};
use crate::resource::Realms;
use anyhow::Context;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Where and how to connect
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    /// Base URL, e.g. `http://localhost:8080`
    pub server_url: String,
    /// Realm the admin account lives in
    pub auth_realm: String,
    pub grant: Grant,
}

/// Main admin API client
#[derive(Clone)]
pub struct Keycloak {
    pub credentials: KeycloakCredentials,
    pub http: KeycloakHttpClient,
    base_url: String,
}

impl Keycloak {
    /// Create a client; no request is made until the first call
    pub fn new(settings: &ConnectionSettings) -> Result<Self> {
        Url::parse(&settings.server_url)
            .with_context(|| format!("Invalid server URL: {}", settings.server_url))?;

        let http = KeycloakHttpClient::new()?;
        let credentials = KeycloakCredentials::new(
            http.clone(),
            &settings.server_url,
            &settings.auth_realm,
            settings.grant.clone(),
        );

        Ok(Self {
            credentials,
            http,
            base_url: settings.server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Realm resource backed by this client
    pub fn realms(&self) -> Realms {
        let shared = Arc::new(self.clone());
        Realms::new(shared.clone(), shared)
    }

    /// Full request URL for a resolved path
    pub fn url_for(&self, resolved: &ResolvedPath) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, resolved.path))
            .with_context(|| format!("Invalid request path: {}", resolved.path))?;

        if !resolved.query.is_empty() {
            url.query_pairs_mut().extend_pairs(resolved.query.iter());
        }

        Ok(url)
    }

    /// Send with the cached token; on 401 refresh it once and resend
    async fn send(&self, method: Method, resolved: &ResolvedPath, body: Option<&Value>) -> Result<Value> {
        let url = self.url_for(resolved)?;
        let token = self.credentials.get_token().await?;

        match self.http.send(method, url.clone(), &token, body).await {
            Err(Error::Api { status: 401, .. }) => {
                tracing::debug!("Token rejected, refreshing");
                let token = self.credentials.refresh_token().await?;
                self.http.send(method, url, &token, body).await
            },
            other => other,
        }
    }
}

#[async_trait::async_trait]
impl CommandExecutor for Keycloak {
    async fn execute_command(&self, command: &Command) -> Result<()> {
        let resolved = command.resolve()?;
        self.send(command.method(), &resolved, command.payload())
            .await
            .map(|_| ())
    }
}

#[async_trait::async_trait]
impl QueryExecutor for Keycloak {
    async fn execute_query(&self, query: &Query) -> Result<Value> {
        let resolved = query.resolve()?;
        self.send(Method::Get, &resolved, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycloak::auth::DEFAULT_CLIENT_ID;

    fn settings(server_url: &str) -> ConnectionSettings {
        ConnectionSettings {
            server_url: server_url.to_string(),
            auth_realm: "master".to_string(),
            grant: Grant::Password {
                client_id: DEFAULT_CLIENT_ID.to_string(),
                username: "admin".to_string(),
                password: "admin".to_string(),
            },
        }
    }

    #[test]
    fn test_url_for_appends_query() {
        let client = Keycloak::new(&settings("http://localhost:8080/")).unwrap();
        let url = client
            .url_for(&ResolvedPath {
                path: "/admin/realms/master/admin-events".to_string(),
                query: vec![("max".to_string(), "5".to_string())],
            })
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/admin/realms/master/admin-events?max=5"
        );
    }

    #[test]
    fn test_url_for_keeps_context_path() {
        let client = Keycloak::new(&settings("https://sso.example.com/auth")).unwrap();
        let url = client
            .url_for(&ResolvedPath {
                path: "/admin/realms".to_string(),
                query: Vec::new(),
            })
            .unwrap();

        assert_eq!(url.as_str(), "https://sso.example.com/auth/admin/realms");
    }

    #[test]
    fn test_invalid_server_url_is_rejected() {
        assert!(Keycloak::new(&settings("not a url")).is_err());
    }
}
