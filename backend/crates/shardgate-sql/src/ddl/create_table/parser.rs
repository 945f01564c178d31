use std::fmt::Display;

use sqlparser::ast::{
    CreateTable, CreateTableOptions, IndexOption as SqlIndexOption, IndexType, Statement,
    TableConstraint,
};
use sqlparser::dialect::Dialect;

use super::types::{ColumnSpec, CreateTableStatement, IndexDefinition, IndexInfo, IndexOption};
use crate::column_type::ColumnType;
use crate::error::{Result, SqlError};
use crate::object_name::table_ref_from_object_name;
use crate::tokens::parser_for;

impl CreateTableStatement {
    /// Parse a single CREATE TABLE statement from SQL.
    pub fn parse(sql: &str, dialect: &dyn Dialect) -> Result<Self> {
        let mut statements = parser_for(dialect, sql)?.parse_statements()?;
        if statements.len() != 1 {
            return Err(SqlError::UnexpectedStatement {
                expected: "exactly one statement",
                found: format!("{} statements", statements.len()),
            });
        }
        match statements.remove(0) {
            Statement::CreateTable(create_table) => Self::from_ast(&create_table),
            other => Err(SqlError::UnexpectedStatement {
                expected: "CREATE TABLE",
                found: other.to_string(),
            }),
        }
    }

    /// Convert a parsed CREATE TABLE.
    ///
    /// Column-level `PRIMARY KEY` options carry no `USING` marker and are not
    /// reported as index definitions; only table constraints are.
    pub fn from_ast(create_table: &CreateTable) -> Result<Self> {
        let table = table_ref_from_object_name(&create_table.name)?;

        let columns = create_table
            .columns
            .iter()
            .map(|column| ColumnSpec::new(column.name.value.clone(), ColumnType::from(&column.data_type)))
            .collect();

        let indexes = create_table
            .constraints
            .iter()
            .filter_map(index_from_constraint)
            .collect();

        Ok(Self {
            table,
            columns,
            indexes,
            options: normalize_table_options(&create_table.table_options),
        })
    }
}

/// Renders table options as lower case `key=value` pairs without quotes or
/// spaces, e.g. `WITH (TYPE = 'vindex')` becomes `type=vindex` and MySQL's
/// `ENGINE=InnoDB COMMENT='type=vindex'` becomes `engine=innodb comment=type=vindex`.
#[allow(unreachable_patterns)]
fn normalize_table_options(options: &CreateTableOptions) -> String {
    let options = match options {
        CreateTableOptions::With(opts)
        | CreateTableOptions::Options(opts)
        | CreateTableOptions::Plain(opts)
        | CreateTableOptions::TableProperties(opts) => opts.as_slice(),
        _ => &[],
    };
    options
        .iter()
        .map(|option| {
            option
                .to_string()
                .chars()
                .filter(|c| !c.is_whitespace() && !matches!(c, '\'' | '"' | '`'))
                .collect::<String>()
                .to_lowercase()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn index_from_constraint(constraint: &TableConstraint) -> Option<IndexDefinition> {
    match constraint {
        TableConstraint::PrimaryKey {
            index_name,
            index_type,
            columns,
            index_options,
            ..
        } => Some(IndexDefinition::new(
            IndexInfo {
                name: index_name.as_ref().map(|ident| ident.value.clone()),
                primary: true,
                spatial: false,
                unique: true,
                columns: column_names(columns),
            },
            index_options_of(index_type.as_ref(), index_options),
        )),
        TableConstraint::Unique {
            name,
            index_name,
            index_type,
            columns,
            index_options,
            ..
        } => Some(IndexDefinition::new(
            IndexInfo {
                name: index_name
                    .as_ref()
                    .or(name.as_ref())
                    .map(|ident| ident.value.clone()),
                primary: false,
                spatial: false,
                unique: true,
                columns: column_names(columns),
            },
            index_options_of(index_type.as_ref(), index_options),
        )),
        TableConstraint::Index {
            name,
            index_type,
            columns,
            index_options,
            ..
        } => Some(IndexDefinition::new(
            IndexInfo {
                name: name.as_ref().map(|ident| ident.value.clone()),
                columns: column_names(columns),
                ..IndexInfo::default()
            },
            index_options_of(index_type.as_ref(), index_options),
        )),
        // FULLTEXT and SPATIAL definitions have no USING clause in MySQL, so
        // they never carry a vindex marker.
        TableConstraint::FulltextOrSpatial {
            fulltext,
            opt_index_name,
            columns,
            ..
        } => Some(IndexDefinition::new(
            IndexInfo {
                name: opt_index_name.as_ref().map(|ident| ident.value.clone()),
                spatial: !*fulltext,
                columns: column_names(columns),
                ..IndexInfo::default()
            },
            Vec::new(),
        )),
        _ => None,
    }
}

/// `USING` before the column list comes first, then the trailing index options.
#[allow(unreachable_patterns)]
fn index_options_of(index_type: Option<&IndexType>, options: &[SqlIndexOption]) -> Vec<IndexOption> {
    let mut result: Vec<IndexOption> = index_type
        .map(|method| IndexOption::Using(method.to_string()))
        .into_iter()
        .collect();
    for option in options {
        match option {
            SqlIndexOption::Using(method) => result.push(IndexOption::Using(method.to_string())),
            SqlIndexOption::Comment(comment) => result.push(IndexOption::Comment(comment.clone())),
            _ => {}
        }
    }
    result
}

/// Bare column names of an index column list (ordering and operator classes dropped).
fn column_names<T: Display>(columns: &[T]) -> Vec<String> {
    columns
        .iter()
        .filter_map(|column| {
            column
                .to_string()
                .split_whitespace()
                .next()
                .map(|name| name.trim_matches(|c| matches!(c, '"' | '`')).to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::dialect::{GenericDialect, MySqlDialect};

    fn parse(sql: &str) -> CreateTableStatement {
        CreateTableStatement::parse(sql, &GenericDialect {}).unwrap()
    }

    #[test]
    fn primary_key_with_vindex_marker() {
        let stmt = parse(
            "CREATE TABLE ks.orders (id BIGINT, fcol VARCHAR(10), tcol VARCHAR(10), PRIMARY KEY (id) USING v_hash)",
        );
        assert_eq!(stmt.table.to_string(), "ks.orders");
        assert_eq!(stmt.column_names().collect::<Vec<_>>(), vec!["id", "fcol", "tcol"]);
        assert_eq!(stmt.columns[0].column_type, ColumnType::Int64);
        assert_eq!(stmt.indexes.len(), 1);
        let index = &stmt.indexes[0];
        assert!(index.info.primary);
        assert_eq!(index.info.columns, vec!["id".to_string()]);
        assert_eq!(index.using(), Some("v_hash"));
    }

    #[test]
    fn secondary_index_with_marker() {
        let stmt = parse("CREATE TABLE users (id BIGINT, email VARCHAR(64), INDEX email_idx USING v_md5 (email))");
        assert!(stmt.table.qualifier().is_none());
        let index = &stmt.indexes[0];
        assert!(!index.info.primary);
        assert_eq!(index.info.name.as_deref(), Some("email_idx"));
        assert_eq!(index.using(), Some("v_md5"));
    }

    #[test]
    fn plain_index_has_no_marker() {
        let stmt = parse("CREATE TABLE users (id BIGINT, name TEXT, INDEX name_idx (name))");
        assert_eq!(stmt.indexes.len(), 1);
        assert_eq!(stmt.indexes[0].using(), None);
    }

    #[test]
    fn spatial_index_is_flagged() {
        let stmt = parse("CREATE TABLE places (id BIGINT, pos TEXT, SPATIAL INDEX pos_idx (pos))");
        assert!(stmt.indexes[0].info.spatial);
        assert_eq!(stmt.indexes[0].info.name.as_deref(), Some("pos_idx"));
    }

    #[test]
    fn with_options_are_normalized() {
        let stmt = parse("CREATE TABLE ks.lookup1 (fa INT, fb INT, tx INT) WITH (TYPE = 'vindex')");
        assert_eq!(stmt.options, "type=vindex");
    }

    #[test]
    fn trailing_using_on_plain_index() {
        let stmt = CreateTableStatement::parse(
            "CREATE TABLE ks.t1 (id INT, c INT, INDEX ic (c) USING v_hash, KEY kd (id) USING v_binary)",
            &MySqlDialect {},
        )
        .unwrap();
        assert_eq!(stmt.indexes.len(), 2);
        assert_eq!(stmt.indexes[0].info.name.as_deref(), Some("ic"));
        assert_eq!(stmt.indexes[0].info.columns, vec!["c".to_string()]);
        assert_eq!(stmt.indexes[0].using(), Some("v_hash"));
        assert_eq!(stmt.indexes[1].using(), Some("v_binary"));
    }

    #[test]
    fn bare_with_options_are_accepted() {
        let stmt = parse("CREATE TABLE ks.lookup1 (fa INT, fb INT, tx INT) WITH type=vindex");
        assert_eq!(stmt.options, "type=vindex");
        assert_eq!(stmt.table.to_string(), "ks.lookup1");
    }

    #[test]
    fn mysql_table_options_are_normalized() {
        let stmt = CreateTableStatement::parse(
            "CREATE TABLE ks.lookup1 (fa INT, tx INT) ENGINE=InnoDB COMMENT='type=vindex'",
            &MySqlDialect {},
        )
        .unwrap();
        assert!(stmt.options.contains("innodb"));
        assert!(stmt.options.contains("type=vindex"));
    }

    #[test]
    fn rejects_non_create_table() {
        let err = CreateTableStatement::parse("SELECT 1", &GenericDialect {}).unwrap_err();
        assert!(matches!(err, SqlError::UnexpectedStatement { expected: "CREATE TABLE", .. }));
    }

    #[test]
    fn rejects_three_part_names() {
        let err = CreateTableStatement::parse("CREATE TABLE a.b.c (id INT)", &GenericDialect {})
            .unwrap_err();
        assert!(matches!(err, SqlError::InvalidObjectName { .. }));
    }
}
