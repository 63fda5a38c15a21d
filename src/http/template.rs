//! Path template expansion
//!
//! Templates look like `/admin/realms/{realm}/keys`. Every placeholder must
//! have a parameter; parameters with no placeholder become query-string
//! pairs.

use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};

/// A template with all placeholders substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: String,
    pub query: Vec<(String, String)>,
}

/// Substitute `parameters` into `template`
///
/// Values are percent-encoded as single path segments. An unclosed `{` is
/// kept literally.
pub fn expand(template: &str, parameters: &BTreeMap<String, String>) -> Result<ResolvedPath> {
    let mut path = String::with_capacity(template.len());
    let mut used = BTreeSet::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };

        let name = &after[..close];
        let value = parameters
            .get(name)
            .ok_or_else(|| Error::MissingPathParameter {
                template: template.to_string(),
                parameter: name.to_string(),
            })?;

        path.push_str(&rest[..open]);
        path.push_str(&urlencoding::encode(value));
        used.insert(name);
        rest = &after[close + 1..];
    }
    path.push_str(rest);

    let query = parameters
        .iter()
        .filter(|(name, _)| !used.contains(name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    Ok(ResolvedPath { path, query })
}
