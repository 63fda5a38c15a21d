//! Typed client for the Keycloak admin REST API
//!
//! Server-side resources are modeled as immutable representations. Resources
//! such as [`resource::Realms`] turn typed calls into declarative
//! [`http::Command`] / [`http::Query`] descriptors and hand them to an
//! executor; [`keycloak::Keycloak`] is the HTTP executor.

pub mod config;
pub mod error;
pub mod http;
pub mod keycloak;
pub mod representation;
pub mod resource;

pub use error::{Error, Result};
pub use http::{Command, CommandExecutor, Method, Query, QueryExecutor};
pub use keycloak::{ConnectionSettings, Grant, Keycloak};
pub use representation::{Collection, KeyMetadata, KeysMetadata, Realm, Representation};
pub use resource::{load_realm_file, RealmSource, Realms};
