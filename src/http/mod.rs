//! Declarative HTTP descriptors
//!
//! A [`Command`] or [`Query`] says what to call: path template, method,
//! parameters, payload or expected result shape. Turning it into a request
//! is left to a [`CommandExecutor`] / [`QueryExecutor`].
//!
//! # Module Structure
//!
//! - [`command`] - create/update/delete descriptors
//! - [`query`] - read descriptors and result decoding
//! - [`template`] - `{placeholder}` expansion
//! - [`executor`] - the executor traits

pub mod command;
pub mod executor;
pub mod query;
pub mod template;

use std::fmt;

pub use command::Command;
pub use executor::{CommandExecutor, QueryExecutor};
pub use query::{Query, QueryResult, ResultShape};
pub use template::ResolvedPath;

/// HTTP method of a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
