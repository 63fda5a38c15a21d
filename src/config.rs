//! Configuration Management
//!
//! Handles persistent configuration storage for kcadmin. Secrets are never
//! written to disk; they come from the environment.

use crate::error::{Error, Result};
use crate::keycloak::{ConnectionSettings, Grant, DEFAULT_CLIENT_ID};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the admin password
pub const PASSWORD_ENV: &str = "KCADMIN_PASSWORD";
/// Environment variable holding the client secret
pub const CLIENT_SECRET_ENV: &str = "KCADMIN_CLIENT_SECRET";

const DEFAULT_SERVER_URL: &str = "http://localhost:8080";
const DEFAULT_AUTH_REALM: &str = "master";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Keycloak base URL
    #[serde(default)]
    pub server_url: Option<String>,
    /// Realm to authenticate against
    #[serde(default)]
    pub auth_realm: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    /// Admin user; without one the client credentials grant is used
    #[serde(default)]
    pub username: Option<String>,
    /// Realm used when a command is given none
    #[serde(default)]
    pub default_realm: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kcadmin").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`; a missing or malformed file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Values given on the command line replace the stored ones
    pub fn merge(mut self, overrides: Config) -> Self {
        self.server_url = overrides.server_url.or(self.server_url);
        self.auth_realm = overrides.auth_realm.or(self.auth_realm);
        self.client_id = overrides.client_id.or(self.client_id);
        self.username = overrides.username.or(self.username);
        self.default_realm = overrides.default_realm.or(self.default_realm);
        self
    }

    /// Get effective server URL (config > localhost)
    pub fn effective_server_url(&self) -> String {
        self.server_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    /// Get effective authentication realm (config > master)
    pub fn effective_auth_realm(&self) -> String {
        self.auth_realm
            .clone()
            .unwrap_or_else(|| DEFAULT_AUTH_REALM.to_string())
    }

    /// Get effective client id (config > admin-cli)
    pub fn effective_client_id(&self) -> String {
        self.client_id
            .clone()
            .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string())
    }

    /// Realm to operate on: the explicit one, else the configured default
    pub fn effective_realm(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.default_realm.clone())
            .ok_or_else(|| {
                Error::InvalidArgument("no realm given and no default_realm configured".to_string())
            })
    }

    /// Connection settings with the secret taken from the environment
    pub fn connection_settings(&self) -> Result<ConnectionSettings> {
        self.connection_settings_with(
            std::env::var(PASSWORD_ENV).ok(),
            std::env::var(CLIENT_SECRET_ENV).ok(),
        )
    }

    pub fn connection_settings_with(
        &self,
        password: Option<String>,
        client_secret: Option<String>,
    ) -> Result<ConnectionSettings> {
        let client_id = self.effective_client_id();

        let grant = match (&self.username, password, client_secret) {
            (Some(username), Some(password), _) => Grant::Password {
                client_id,
                username: username.clone(),
                password,
            },
            (Some(username), None, _) => {
                return Err(Error::InvalidArgument(format!(
                    "user '{}' needs a password in {}",
                    username, PASSWORD_ENV
                )))
            },
            (None, _, Some(client_secret)) => Grant::ClientCredentials {
                client_id,
                client_secret,
            },
            (None, _, None) => {
                return Err(Error::InvalidArgument(format!(
                    "set a username with {} or a client secret in {}",
                    PASSWORD_ENV, CLIENT_SECRET_ENV
                )))
            },
        };

        Ok(ConnectionSettings {
            server_url: self.effective_server_url(),
            auth_realm: self.effective_auth_realm(),
            grant,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.effective_server_url(), "http://localhost:8080");
        assert_eq!(config.effective_auth_realm(), "master");
        assert_eq!(config.effective_client_id(), "admin-cli");
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let stored = Config {
            server_url: Some("https://sso.example.com".to_string()),
            username: Some("admin".to_string()),
            default_realm: Some("ops".to_string()),
            ..Config::default()
        };
        let merged = stored.merge(Config {
            server_url: Some("http://localhost:9090".to_string()),
            ..Config::default()
        });

        assert_eq!(merged.effective_server_url(), "http://localhost:9090");
        assert_eq!(merged.username.as_deref(), Some("admin"));
        assert_eq!(merged.effective_realm(None).unwrap(), "ops");
        assert_eq!(merged.effective_realm(Some("test")).unwrap(), "test");
    }

    #[test]
    fn test_effective_realm_requires_a_value() {
        let err = Config::default().effective_realm(None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_password_grant() {
        let config = Config {
            username: Some("admin".to_string()),
            ..Config::default()
        };
        let settings = config
            .connection_settings_with(Some("secret".to_string()), None)
            .unwrap();

        assert_eq!(
            settings.grant,
            Grant::Password {
                client_id: "admin-cli".to_string(),
                username: "admin".to_string(),
                password: "secret".to_string(),
            }
        );
        assert!(config.connection_settings_with(None, None).is_err());
    }

    #[test]
    fn test_client_credentials_grant() {
        let config = Config {
            client_id: Some("automation".to_string()),
            ..Config::default()
        };
        let settings = config
            .connection_settings_with(None, Some("s3cr3t".to_string()))
            .unwrap();

        assert!(matches!(settings.grant, Grant::ClientCredentials { ref client_id, .. } if client_id == "automation"));
        assert!(config.connection_settings_with(None, None).is_err());
    }

    #[test]
    fn test_load_is_lenient_and_save_round_trips() {
        let dir = std::env::temp_dir().join(format!("kcadmin-config-test-{}", std::process::id()));
        let path = dir.join("config.json");

        assert_eq!(Config::load_from(&path), Config::default());

        let config = Config {
            server_url: Some("https://sso.example.com".to_string()),
            auth_realm: Some("admins".to_string()),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
