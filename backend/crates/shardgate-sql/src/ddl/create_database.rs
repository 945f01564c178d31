//! CREATE DATABASE / CREATE SCHEMA
//!
//! Both forms declare a keyspace:
//! - CREATE DATABASE commerce
//! - CREATE SCHEMA IF NOT EXISTS commerce

use shardgate_commons::KeyspaceName;
use sqlparser::ast::{SchemaName, Statement};

use crate::error::Result;
use crate::object_name::keyspace_from_object_name;

/// CREATE DATABASE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabaseStatement {
    /// Keyspace to create
    pub name: KeyspaceName,

    /// If true, the statement was written with IF NOT EXISTS
    pub if_not_exists: bool,
}

impl CreateDatabaseStatement {
    pub fn new(name: impl Into<KeyspaceName>) -> Self {
        Self {
            name: name.into(),
            if_not_exists: false,
        }
    }

    /// Returns `None` when the statement is not a CREATE DATABASE/SCHEMA, and for
    /// authorization-only schemas that carry no name.
    pub fn from_ast(statement: &Statement) -> Result<Option<Self>> {
        match statement {
            Statement::CreateDatabase {
                db_name,
                if_not_exists,
                ..
            } => Ok(Some(Self {
                name: keyspace_from_object_name(db_name)?,
                if_not_exists: *if_not_exists,
            })),
            Statement::CreateSchema {
                schema_name,
                if_not_exists,
                ..
            } => match schema_name {
                SchemaName::Simple(name) | SchemaName::NamedAuthorization(name, _) => {
                    Ok(Some(Self {
                        name: keyspace_from_object_name(name)?,
                        if_not_exists: *if_not_exists,
                    }))
                }
                SchemaName::UnnamedAuthorization(_) => Ok(None),
            },
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::dialect::GenericDialect;
    use sqlparser::parser::Parser;

    fn parse_one(sql: &str) -> Statement {
        Parser::parse_sql(&GenericDialect {}, sql).unwrap().remove(0)
    }

    #[test]
    fn test_create_database() {
        let stmt = CreateDatabaseStatement::from_ast(&parse_one("CREATE DATABASE commerce"))
            .unwrap()
            .unwrap();
        assert_eq!(stmt.name.as_str(), "commerce");
        assert!(!stmt.if_not_exists);
    }

    #[test]
    fn test_create_schema_if_not_exists() {
        let stmt =
            CreateDatabaseStatement::from_ast(&parse_one("CREATE SCHEMA IF NOT EXISTS customer"))
                .unwrap()
                .unwrap();
        assert_eq!(stmt.name.as_str(), "customer");
        assert!(stmt.if_not_exists);
    }

    #[test]
    fn test_other_statement_is_none() {
        let result = CreateDatabaseStatement::from_ast(&parse_one("SELECT 1")).unwrap();
        assert!(result.is_none());
    }
}
