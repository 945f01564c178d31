use shardgate_commons::{KeyspaceName, TableName, TableRef};
use sqlparser::ast::{ObjectName, ObjectNamePart};

use crate::error::{Result, SqlError};

/// Unquoted value of every part of an object name.
#[allow(unreachable_patterns)]
pub(crate) fn object_name_parts(name: &ObjectName) -> Vec<String> {
    name.0
        .iter()
        .map(|part| match part {
            ObjectNamePart::Identifier(ident) => ident.value.clone(),
            other => other.to_string(),
        })
        .collect()
}

/// Converts `table` or `keyspace.table` into a [`TableRef`].
///
/// # Errors
///
/// Returns [`SqlError::InvalidObjectName`] for names with more than two parts.
pub fn table_ref_from_object_name(name: &ObjectName) -> Result<TableRef> {
    let parts = object_name_parts(name);
    match parts.as_slice() {
        [table] => Ok(TableRef::new(None, TableName::new(table.as_str()))),
        [keyspace, table] => Ok(TableRef::new(
            Some(KeyspaceName::new(keyspace.as_str())),
            TableName::new(table.as_str()),
        )),
        _ => Err(SqlError::InvalidObjectName {
            name: name.to_string(),
            reason: "expected 'table' or 'keyspace.table'".to_string(),
        }),
    }
}

/// Converts a database name into a keyspace name. Only the last part counts,
/// so `catalog.db` names keyspace `db`.
pub(crate) fn keyspace_from_object_name(name: &ObjectName) -> Result<KeyspaceName> {
    object_name_parts(name)
        .pop()
        .filter(|part| !part.is_empty())
        .map(KeyspaceName::new)
        .ok_or_else(|| SqlError::InvalidObjectName {
            name: name.to_string(),
            reason: "empty database name".to_string(),
        })
}
