use shardgate_commons::TableRef;

use crate::column_type::ColumnType;

/// CREATE TABLE statement as consumed by the schema builder.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    /// Table name with its optional keyspace qualifier
    pub table: TableRef,
    /// Columns in declaration order
    pub columns: Vec<ColumnSpec>,
    /// PRIMARY KEY, UNIQUE, INDEX and SPATIAL definitions in declaration order
    pub indexes: Vec<IndexDefinition>,
    /// Table options, normalized to lower case `key=value` pairs separated by spaces
    pub options: String,
}

/// Column name and semantic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Identity and shape of an index definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexInfo {
    /// Declared index name, if any
    pub name: Option<String>,
    pub primary: bool,
    pub spatial: bool,
    pub unique: bool,
    /// Indexed columns in declaration order
    pub columns: Vec<String>,
}

/// Option attached to an index definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOption {
    /// `USING <method>`, kept as written
    Using(String),
    Comment(String),
}

/// An index definition together with its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    pub info: IndexInfo,
    pub options: Vec<IndexOption>,
}

impl IndexDefinition {
    pub fn new(info: IndexInfo, options: Vec<IndexOption>) -> Self {
        Self { info, options }
    }

    /// PRIMARY KEY over `columns` with an optional `USING` marker.
    pub fn primary_key(columns: &[&str], using: Option<&str>) -> Self {
        Self::new(
            IndexInfo {
                name: None,
                primary: true,
                spatial: false,
                unique: true,
                columns: columns.iter().map(|c| c.to_string()).collect(),
            },
            using_options(using),
        )
    }

    /// Named secondary INDEX over `columns` with an optional `USING` marker.
    pub fn named(name: &str, columns: &[&str], using: Option<&str>) -> Self {
        Self::new(
            IndexInfo {
                name: Some(name.to_string()),
                columns: columns.iter().map(|c| c.to_string()).collect(),
                ..IndexInfo::default()
            },
            using_options(using),
        )
    }

    /// First non-empty `USING` method among the options.
    pub fn using(&self) -> Option<&str> {
        self.options.iter().find_map(|option| match option {
            IndexOption::Using(method) if !method.is_empty() => Some(method.as_str()),
            _ => None,
        })
    }
}

fn using_options(using: Option<&str>) -> Vec<IndexOption> {
    using
        .map(|method| vec![IndexOption::Using(method.to_string())])
        .unwrap_or_default()
}

impl CreateTableStatement {
    /// Column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }
}
