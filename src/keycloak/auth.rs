//! Admin API authentication
//!
//! Obtains access tokens from the OpenID Connect token endpoint of the
//! authentication realm, using either the password grant or the client
//! credentials grant, and caches them until shortly before they expire.

use super::http::KeycloakHttpClient;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Client used by the admin console CLI tools
pub const DEFAULT_CLIENT_ID: &str = "admin-cli";

/// Token expiry buffer - refresh tokens this much before they actually expire
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(5);

/// TTL used when the token endpoint does not report `expires_in`
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60);

/// How to obtain tokens
#[derive(Clone, PartialEq, Eq)]
pub enum Grant {
    /// Resource owner password grant
    Password {
        client_id: String,
        username: String,
        password: String,
    },
    /// Client credentials grant (service account)
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
}

impl Grant {
    fn form(&self) -> Vec<(&'static str, &str)> {
        match self {
            Grant::Password {
                client_id,
                username,
                password,
            } => vec![
                ("grant_type", "password"),
                ("client_id", client_id.as_str()),
                ("username", username.as_str()),
                ("password", password.as_str()),
            ],
            Grant::ClientCredentials {
                client_id,
                client_secret,
            } => vec![
                ("grant_type", "client_credentials"),
                ("client_id", client_id.as_str()),
                ("client_secret", client_secret.as_str()),
            ],
        }
    }
}

// Secrets stay out of logs
impl fmt::Debug for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grant::Password {
                client_id,
                username,
                ..
            } => f
                .debug_struct("Password")
                .field("client_id", client_id)
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Grant::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"***")
                .finish(),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Credentials holder with token caching
#[derive(Clone)]
pub struct KeycloakCredentials {
    http: KeycloakHttpClient,
    token_url: String,
    grant: Arc<Grant>,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

impl KeycloakCredentials {
    pub fn new(http: KeycloakHttpClient, server_url: &str, auth_realm: &str, grant: Grant) -> Self {
        Self {
            http,
            token_url: token_url(server_url, auth_realm),
            grant: Arc::new(grant),
            token_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Get an access token for API calls
    pub async fn get_token(&self) -> Result<String> {
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let response = self.http.post_form(&self.token_url, &self.grant.form()).await?;
        let token: TokenResponse = serde_json::from_value(response)
            .map_err(|e| Error::decode(format!("token response: {}", e)))?;

        let ttl = match token.expires_in {
            Some(seconds) => Duration::from_secs(seconds),
            None => {
                tracing::warn!("Token response without expires_in, assuming {:?}", DEFAULT_TOKEN_TTL);
                DEFAULT_TOKEN_TTL
            },
        };
        let expires_at = Instant::now() + ttl.saturating_sub(TOKEN_EXPIRY_BUFFER);

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: token.access_token.clone(),
                expires_at,
            });
        }

        tracing::debug!("New token cached, expires in ~{}s", ttl.saturating_sub(TOKEN_EXPIRY_BUFFER).as_secs());

        Ok(token.access_token)
    }

    /// Force refresh the token
    pub async fn refresh_token(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }

        self.get_token().await
    }
}

/// Token endpoint of `auth_realm`
pub fn token_url(server_url: &str, auth_realm: &str) -> String {
    format!(
        "{}/realms/{}/protocol/openid-connect/token",
        server_url.trim_end_matches('/'),
        urlencoding::encode(auth_realm)
    )
}
