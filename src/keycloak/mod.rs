//! Keycloak admin API transport
//!
//! This module provides the concrete executor behind the resource layer:
//! authentication against the token endpoint, the HTTP client, and the
//! client that turns command and query descriptors into requests.
//!
//! # Module Structure
//!
//! - [`auth`] - Access tokens via the password or client credentials grant
//! - [`client`] - Main client implementing both executor traits
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use kcadmin::keycloak::{ConnectionSettings, Grant, Keycloak};
//!
//! async fn example() -> kcadmin::Result<()> {
//!     let keycloak = Keycloak::new(&ConnectionSettings {
//!         server_url: "http://localhost:8080".to_string(),
//!         auth_realm: "master".to_string(),
//!         grant: Grant::Password {
//!             client_id: "admin-cli".to_string(),
//!             username: "admin".to_string(),
//!             password: "admin".to_string(),
//!         },
//!     })?;
//!     let master = keycloak.realms().get("master").await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;

pub use auth::{Grant, KeycloakCredentials, DEFAULT_CLIENT_ID};
pub use client::{ConnectionSettings, Keycloak};
pub use http::{format_api_error, KeycloakHttpClient};
