//! Side-effecting request descriptors

use super::template::{self, ResolvedPath};
use super::Method;
use crate::error::Result;
use crate::representation::Representation;
use serde_json::Value;
use std::collections::BTreeMap;

/// Describes one create/update/delete call without performing it
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    path: String,
    method: Method,
    parameters: BTreeMap<String, String>,
    payload: Option<Value>,
}

impl Command {
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        Self {
            path: path.into(),
            method,
            parameters: BTreeMap::new(),
            payload: None,
        }
    }

    /// Add a path (or query-string) parameter
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Use the assigned properties of `representation` as the body
    pub fn with_representation<R: Representation>(mut self, representation: &R) -> Self {
        self.payload = Some(Value::Object(representation.to_properties()));
        self
    }

    /// Use an arbitrary JSON body
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Expand the path template
    pub fn resolve(&self) -> Result<ResolvedPath> {
        template::expand(&self.path, &self.parameters)
    }
}
