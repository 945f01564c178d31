//! Qualified table references as they appear in queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{KeyspaceName, TableName};
use crate::errors::{CommonError, Result};

/// A table reference from a query: an optional keyspace qualifier and a bare name.
///
/// `orders` has no qualifier and is resolved against the configured default
/// keyspace; `commerce.orders` names its keyspace explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    qualifier: Option<KeyspaceName>,
    name: TableName,
}

impl TableRef {
    /// Builds a reference. An empty qualifier is treated as no qualifier.
    pub fn new(qualifier: Option<KeyspaceName>, name: TableName) -> Self {
        Self {
            qualifier: qualifier.filter(|q| !q.is_empty()),
            name,
        }
    }

    /// Reference without a keyspace qualifier.
    pub fn unqualified(name: impl Into<TableName>) -> Self {
        Self::new(None, name.into())
    }

    /// Reference with an explicit keyspace qualifier.
    pub fn qualified(qualifier: impl Into<KeyspaceName>, name: impl Into<TableName>) -> Self {
        Self::new(Some(qualifier.into()), name.into())
    }

    /// Parses `table` or `keyspace.table`.
    ///
    /// Surrounding backticks or double quotes on either part are stripped.
    pub fn parse(reference: &str) -> Result<Self> {
        let parts: Vec<&str> = reference.trim().split('.').map(unquote).collect();
        match parts.as_slice() {
            [name] if !name.is_empty() => Ok(Self::unqualified(*name)),
            [qualifier, name] if !name.is_empty() => Ok(Self::qualified(*qualifier, *name)),
            _ => Err(CommonError::invalid_input(format!(
                "Invalid table reference '{}'. Expected 'table' or 'keyspace.table'",
                reference
            ))),
        }
    }

    pub fn qualifier(&self) -> Option<&KeyspaceName> {
        self.qualifier.as_ref()
    }

    pub fn name(&self) -> &TableName {
        &self.name
    }
}

fn unquote(part: &str) -> &str {
    let part = part.trim();
    part.strip_prefix('`')
        .and_then(|p| p.strip_suffix('`'))
        .or_else(|| part.strip_prefix('"').and_then(|p| p.strip_suffix('"')))
        .unwrap_or(part)
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}.{}", qualifier, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
