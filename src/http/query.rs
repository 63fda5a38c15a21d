//! Read-only request descriptors and result decoding

use super::template::{self, ResolvedPath};
use crate::error::{Error, Result};
use crate::representation::{describe, Collection, Representation};
use serde_json::Value;
use std::collections::BTreeMap;

/// What a query is expected to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// One representation of the named kind
    Representation(&'static str),
    /// A JSON array of the named kind
    Collection(&'static str),
    /// Untyped JSON array, e.g. admin events
    Raw,
}

/// A type a query result can be decoded into
pub trait QueryResult: Sized {
    fn shape() -> ResultShape;

    fn decode(value: Value) -> Result<Self>;
}

/// Drop top-level keys `R` does not declare
///
/// The server knows more properties than the schemas model; caller input
/// stays strict, responses do not.
fn retain_declared<R: Representation>(value: Value) -> Value {
    match value {
        Value::Object(mut properties) => {
            properties.retain(|name, _| {
                let declared = R::declares(name);
                if !declared {
                    tracing::trace!("Ignoring undeclared {} property '{}'", R::KIND, name);
                }
                declared
            });
            Value::Object(properties)
        },
        other => other,
    }
}

impl<R: Representation> QueryResult for R {
    fn shape() -> ResultShape {
        ResultShape::Representation(R::KIND)
    }

    fn decode(value: Value) -> Result<Self> {
        R::from_value(retain_declared::<R>(value))
    }
}

impl<R: Representation> QueryResult for Collection<R> {
    fn shape() -> ResultShape {
        ResultShape::Collection(R::KIND)
    }

    fn decode(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => {
                Collection::from_array(items.into_iter().map(retain_declared::<R>).collect())
            },
            other => Err(Error::decode(format!(
                "expected an array of {}, found {}",
                R::KIND,
                describe(&other)
            ))),
        }
    }
}

impl QueryResult for Vec<Value> {
    fn shape() -> ResultShape {
        ResultShape::Raw
    }

    fn decode(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(items),
            other => Err(Error::decode(format!(
                "expected an array, found {}",
                describe(&other)
            ))),
        }
    }
}

/// Describes one read call without performing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    path: String,
    shape: ResultShape,
    parameters: BTreeMap<String, String>,
}

impl Query {
    pub fn new(path: impl Into<String>, shape: ResultShape) -> Self {
        Self {
            path: path.into(),
            shape,
            parameters: BTreeMap::new(),
        }
    }

    /// Query whose shape is taken from the result type
    pub fn returning<T: QueryResult>(path: impl Into<String>) -> Self {
        Self::new(path, T::shape())
    }

    /// Add a path (or query-string) parameter
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn shape(&self) -> ResultShape {
        self.shape
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Expand the path template
    pub fn resolve(&self) -> Result<ResolvedPath> {
        template::expand(&self.path, &self.parameters)
    }

    /// Decode a raw response as `T`, checking it matches this query's shape
    pub fn decode<T: QueryResult>(&self, value: Value) -> Result<T> {
        if T::shape() != self.shape {
            return Err(Error::decode(format!(
                "query for {} expects {:?}, requested {:?}",
                self.path,
                self.shape,
                T::shape()
            )));
        }
        T::decode(value)
    }
}
