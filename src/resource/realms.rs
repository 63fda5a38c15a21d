//! Realm management
//!
//! Every operation builds a [`Command`] or [`Query`] and hands it to the
//! executors; `import` and `update` chain a command with a follow-up query
//! that returns the server's view of the realm.

use crate::error::{Error, Result};
use crate::http::{Command, CommandExecutor, Method, Query, QueryExecutor, QueryResult};
use crate::representation::{Collection, KeysMetadata, Realm, Representation};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const REALMS: &str = "/admin/realms";
const REALM: &str = "/admin/realms/{realm}";
const REALM_KEYS: &str = "/admin/realms/{realm}/keys";
const CLEAR_KEYS_CACHE: &str = "/admin/realms/{realm}/clear-keys-cache";
const CLEAR_REALM_CACHE: &str = "/admin/realms/{realm}/clear-realm-cache";
const CLEAR_USER_CACHE: &str = "/admin/realms/{realm}/clear-user-cache";
const ADMIN_EVENTS: &str = "/admin/realms/{realm}/admin-events";

/// What to import: a realm value or a realm export file
#[derive(Debug, Clone, PartialEq)]
pub enum RealmSource {
    Realm(Realm),
    File(PathBuf),
}

impl From<Realm> for RealmSource {
    fn from(realm: Realm) -> Self {
        Self::Realm(realm)
    }
}

impl From<PathBuf> for RealmSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Path> for RealmSource {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

/// Decoded content of a realm export file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExportDocument {
    /// `{"realm": ...}`
    Single(Map<String, Value>),
    /// `[{"realm": ...}, ...]`, as written by a full export
    Bulk(Vec<Map<String, Value>>),
}

/// Realm resource bound to a pair of executors
#[derive(Clone)]
pub struct Realms {
    commands: Arc<dyn CommandExecutor>,
    queries: Arc<dyn QueryExecutor>,
}

impl Realms {
    pub fn new(commands: Arc<dyn CommandExecutor>, queries: Arc<dyn QueryExecutor>) -> Self {
        Self { commands, queries }
    }

    async fn execute(&self, command: Command) -> Result<()> {
        tracing::debug!("command: {} {}", command.method(), command.path());
        self.commands.execute_command(&command).await
    }

    async fn fetch<T: QueryResult>(&self, query: Query) -> Result<T> {
        tracing::debug!("query: {} ({:?})", query.path(), query.shape());
        let raw = self.queries.execute_query(&query).await?;
        query.decode(raw)
    }

    fn realm_query(realm: &str) -> Query {
        Query::returning::<Realm>(REALM).with_parameter("realm", realm)
    }

    /// List all realms
    pub async fn all(&self) -> Result<Collection<Realm>> {
        self.fetch(Query::returning::<Collection<Realm>>(REALMS)).await
    }

    /// Get one realm by name
    pub async fn get(&self, realm: &str) -> Result<Realm> {
        self.fetch(Self::realm_query(realm)).await
    }

    /// Create a realm from a value or an export file and return it as stored
    ///
    /// A file holding an array of realms needs `name` to pick one entry.
    pub async fn import(&self, source: impl Into<RealmSource>, name: Option<&str>) -> Result<Realm> {
        let realm = match source.into() {
            RealmSource::Realm(realm) => realm,
            RealmSource::File(path) => load_realm_file(&path, name).await?,
        };

        let realm_name = realm_name(&realm)?;
        tracing::info!("Importing realm '{}'", realm_name);

        self.execute(Command::new(REALMS, Method::Post).with_representation(&realm))
            .await?;

        self.fetch(Self::realm_query(&realm_name)).await
    }

    /// Replace realm `realm` with `updated` and return the stored result
    ///
    /// The follow-up read uses the name inside `updated`, which differs from
    /// `realm` when the realm is renamed.
    pub async fn update(&self, realm: &str, updated: &Realm) -> Result<Realm> {
        let realm_name = realm_name(updated)?;
        tracing::info!("Updating realm '{}'", realm);

        self.execute(
            Command::new(REALM, Method::Put)
                .with_parameter("realm", realm)
                .with_representation(updated),
        )
        .await?;

        self.fetch(Self::realm_query(&realm_name)).await
    }

    /// Delete a realm
    pub async fn delete(&self, realm: &str) -> Result<()> {
        tracing::info!("Deleting realm '{}'", realm);
        self.execute(Command::new(REALM, Method::Delete).with_parameter("realm", realm))
            .await
    }

    /// Key providers and active keys of a realm
    pub async fn keys(&self, realm: &str) -> Result<KeysMetadata> {
        self.fetch(Query::returning::<KeysMetadata>(REALM_KEYS).with_parameter("realm", realm))
            .await
    }

    pub async fn clear_keys_cache(&self, realm: &str) -> Result<()> {
        tracing::info!("Clearing keys cache of realm '{}'", realm);
        self.execute(Command::new(CLEAR_KEYS_CACHE, Method::Post).with_parameter("realm", realm))
            .await
    }

    pub async fn clear_realm_cache(&self, realm: &str) -> Result<()> {
        tracing::info!("Clearing realm cache of realm '{}'", realm);
        self.execute(Command::new(CLEAR_REALM_CACHE, Method::Post).with_parameter("realm", realm))
            .await
    }

    pub async fn clear_user_cache(&self, realm: &str) -> Result<()> {
        tracing::info!("Clearing user cache of realm '{}'", realm);
        self.execute(Command::new(CLEAR_USER_CACHE, Method::Post).with_parameter("realm", realm))
            .await
    }

    /// Admin events of a realm, undecoded
    pub async fn admin_events(&self, realm: &str) -> Result<Vec<Value>> {
        self.fetch(Query::returning::<Vec<Value>>(ADMIN_EVENTS).with_parameter("realm", realm))
            .await
    }

    pub async fn delete_admin_events(&self, realm: &str) -> Result<()> {
        tracing::info!("Deleting admin events of realm '{}'", realm);
        self.execute(Command::new(ADMIN_EVENTS, Method::Delete).with_parameter("realm", realm))
            .await
    }
}

/// Name a write is addressed to; an assigned `null` cannot address a realm
fn realm_name(realm: &Realm) -> Result<String> {
    realm
        .realm()?
        .cloned()
        .ok_or_else(|| Error::InvalidArgument("realm name is null".to_string()))
}

/// Read a realm export, picking the entry called `name` from a bulk export
///
/// The path must name an existing regular file.
pub async fn load_realm_file(path: &Path, name: Option<&str>) -> Result<Realm> {
    let filesystem_error = |reason: String| Error::Filesystem {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            filesystem_error("file does not exist".to_string())
        } else {
            filesystem_error(e.to_string())
        }
    })?;
    if metadata.is_dir() {
        return Err(filesystem_error("path is a directory".to_string()));
    }
    if !metadata.is_file() {
        return Err(filesystem_error("not a regular file".to_string()));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| filesystem_error(e.to_string()))?;

    match serde_json::from_str::<ExportDocument>(&content)? {
        ExportDocument::Single(properties) => Realm::from_properties(properties),
        ExportDocument::Bulk(entries) => {
            let Some(name) = name else {
                return Err(Error::InvalidArgument(format!(
                    "{} contains {} realms, a realm name is required",
                    path.display(),
                    entries.len()
                )));
            };

            let entry = entries
                .into_iter()
                .find(|entry| entry.get("realm").and_then(Value::as_str) == Some(name))
                .ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "realm '{}' not found in {}",
                        name,
                        path.display()
                    ))
                })?;

            Realm::from_properties(entry)
        },
    }
}
