//! Resource layer
//!
//! A resource groups the admin API operations for one entity kind. It only
//! builds descriptors and decodes results; the executors it is given do the
//! actual I/O, so any transport (or a test double) can sit behind it.
//!
//! # Example
//!
//! ```ignore
//! use kcadmin::keycloak::Keycloak;
//!
//! async fn list(keycloak: &Keycloak) -> kcadmin::Result<()> {
//!     for realm in keycloak.realms().all().await? {
//!         println!("{}", realm.realm()?.map_or("-", String::as_str));
//!     }
//!     Ok(())
//! }
//! ```

mod realms;

pub use realms::{load_realm_file, RealmSource, Realms};
