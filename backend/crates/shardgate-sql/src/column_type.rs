//! Semantic column types.
//!
//! The schema only needs to know what kind of value a column holds, not its
//! exact width or collation, so SQL types collapse onto a small set of
//! wire-level types.

use std::fmt;

use sqlparser::ast::DataType as SqlDataType;

/// Semantic type of a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Decimal,
    Char,
    Varchar,
    Text,
    Binary,
    Varbinary,
    Blob,
    Date,
    Time,
    Datetime,
    Timestamp,
    Json,
    /// Any type without a dedicated variant, kept as its SQL spelling
    Other(String),
}

impl ColumnType {
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            ColumnType::Int8 | ColumnType::Int16 | ColumnType::Int32 | ColumnType::Int64
        )
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, ColumnType::Char | ColumnType::Varchar | ColumnType::Text)
    }
}

impl From<&SqlDataType> for ColumnType {
    fn from(sql_type: &SqlDataType) -> Self {
        match sql_type {
            // MySQL stores BOOLEAN as TINYINT(1)
            SqlDataType::Boolean | SqlDataType::TinyInt(_) => ColumnType::Int8,
            SqlDataType::SmallInt(_) => ColumnType::Int16,
            SqlDataType::Int(_) | SqlDataType::Integer(_) => ColumnType::Int32,
            SqlDataType::BigInt(_) => ColumnType::Int64,
            SqlDataType::Float(_) => ColumnType::Float32,
            SqlDataType::Double(_) | SqlDataType::Real => ColumnType::Float64,
            SqlDataType::Decimal(_) => ColumnType::Decimal,
            SqlDataType::Char(_) => ColumnType::Char,
            SqlDataType::Varchar(_) | SqlDataType::String(_) => ColumnType::Varchar,
            SqlDataType::Text => ColumnType::Text,
            SqlDataType::Binary(_) => ColumnType::Binary,
            SqlDataType::Varbinary(_) | SqlDataType::Bytea => ColumnType::Varbinary,
            SqlDataType::Blob(_) => ColumnType::Blob,
            SqlDataType::Date => ColumnType::Date,
            SqlDataType::Time(_, _) => ColumnType::Time,
            SqlDataType::Datetime(_) => ColumnType::Datetime,
            SqlDataType::Timestamp(_, _) => ColumnType::Timestamp,
            SqlDataType::JSON => ColumnType::Json,
            other => ColumnType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Int8 => "INT8",
            ColumnType::Int16 => "INT16",
            ColumnType::Int32 => "INT32",
            ColumnType::Int64 => "INT64",
            ColumnType::Float32 => "FLOAT32",
            ColumnType::Float64 => "FLOAT64",
            ColumnType::Decimal => "DECIMAL",
            ColumnType::Char => "CHAR",
            ColumnType::Varchar => "VARCHAR",
            ColumnType::Text => "TEXT",
            ColumnType::Binary => "BINARY",
            ColumnType::Varbinary => "VARBINARY",
            ColumnType::Blob => "BLOB",
            ColumnType::Date => "DATE",
            ColumnType::Time => "TIME",
            ColumnType::Datetime => "DATETIME",
            ColumnType::Timestamp => "TIMESTAMP",
            ColumnType::Json => "JSON",
            ColumnType::Other(sql) => return write!(f, "{}", sql),
        };
        f.write_str(name)
    }
}
