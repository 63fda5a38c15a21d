//! Executor seams between descriptors and a transport

use super::{Command, Query};
use crate::error::Result;
use serde_json::Value;

/// Performs side-effecting descriptors
#[async_trait::async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute_command(&self, command: &Command) -> Result<()>;
}

/// Performs read descriptors, returning the undecoded response body
#[async_trait::async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute_query(&self, query: &Query) -> Result<Value>;
}
