//! Vindexes: sharding indexes that map column values to keyspace ids.

use std::collections::BTreeMap;
use std::fmt;

use md5::{Digest, Md5};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::{Result, VindexError};
use crate::KeyspaceId;

/// The kinds of vindex a schema can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VindexKind {
    /// Identity: the value bytes are the keyspace id
    Binary,
    /// Content hash: MD5 of the value bytes
    BinaryMd5,
    /// Identity hash over unsigned integer values
    Hash,
    /// Backed by a lookup table mapping source columns to a target column
    Lookup,
}

impl VindexKind {
    /// Maps the part of a `USING` marker after the vindex prefix to a kind.
    ///
    /// Lookup vindexes are declared through lookup tables, never through a marker.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "binary" => Some(VindexKind::Binary),
            "md5" | "binary_md5" => Some(VindexKind::BinaryMd5),
            "hash" => Some(VindexKind::Hash),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VindexKind::Binary => "binary",
            VindexKind::BinaryMd5 => "binary_md5",
            VindexKind::Hash => "hash",
            VindexKind::Lookup => "lookup",
        }
    }

    /// Functional vindexes compute keyspace ids without consulting any table.
    pub fn is_functional(&self) -> bool {
        !matches!(self, VindexKind::Lookup)
    }
}

impl fmt::Display for VindexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a lookup vindex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupParams {
    /// Backing table holding the mapping rows
    pub table: String,
    /// Source columns, in declaration order
    pub from: Vec<String>,
    /// Target column holding the keyspace id
    pub to: String,
    pub autocommit: bool,
}

impl LookupParams {
    /// Source columns as the single comma-joined expression used in lookup queries.
    pub fn from_expression(&self) -> String {
        self.from.join(",")
    }
}

/// A named sharding index.
///
/// Vindexes are immutable once built and shared by reference between every
/// table of a keyspace that binds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vindex {
    name: String,
    kind: VindexKind,
    lookup: Option<LookupParams>,
}

impl Vindex {
    pub fn binary(name: impl Into<String>) -> Self {
        Self::functional_unchecked(name.into(), VindexKind::Binary)
    }

    pub fn binary_md5(name: impl Into<String>) -> Self {
        Self::functional_unchecked(name.into(), VindexKind::BinaryMd5)
    }

    pub fn hash(name: impl Into<String>) -> Self {
        Self::functional_unchecked(name.into(), VindexKind::Hash)
    }

    /// Builds a functional vindex of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`VindexError::UnsupportedKind`] for [`VindexKind::Lookup`], which needs
    /// parameters; use [`Vindex::lookup`] instead.
    pub fn functional(name: impl Into<String>, kind: VindexKind) -> Result<Self> {
        let name = name.into();
        if !kind.is_functional() {
            return Err(VindexError::UnsupportedKind {
                vindex: name,
                kind: kind.as_str(),
                reason: "lookup vindexes need table, from and to parameters",
            });
        }
        Ok(Self::functional_unchecked(name, kind))
    }

    fn functional_unchecked(name: String, kind: VindexKind) -> Self {
        Self {
            name,
            kind,
            lookup: None,
        }
    }

    /// Builds a lookup vindex from its parameter map.
    ///
    /// Recognized parameters: `table`, `from` (comma separated), `to` and the
    /// optional `autocommit` (`true`/`false`, default `false`).
    ///
    /// # Errors
    ///
    /// Returns [`VindexError::MissingParam`] when `table`, `from` or `to` is absent or
    /// empty, and [`VindexError::InvalidParam`] for a non-boolean `autocommit`.
    pub fn lookup(name: impl Into<String>, params: &BTreeMap<String, String>) -> Result<Self> {
        let name = name.into();
        let required = |param: &'static str| -> Result<String> {
            match params.get(param).map(|v| v.trim()) {
                Some(value) if !value.is_empty() => Ok(value.to_string()),
                _ => Err(VindexError::MissingParam {
                    vindex: name.clone(),
                    param,
                }),
            }
        };

        let table = required("table")?;
        let from: Vec<String> = required("from")?
            .split(',')
            .map(str::trim)
            .filter(|column| !column.is_empty())
            .map(str::to_string)
            .collect();
        if from.is_empty() {
            return Err(VindexError::MissingParam {
                vindex: name.clone(),
                param: "from",
            });
        }
        let to = required("to")?;
        let autocommit = match params.get("autocommit").map(|v| v.trim()) {
            None | Some("") => false,
            Some(value) => value.parse::<bool>().map_err(|_| VindexError::InvalidParam {
                vindex: name.clone(),
                param: "autocommit",
                value: value.to_string(),
            })?,
        };

        Ok(Self {
            name,
            kind: VindexKind::Lookup,
            lookup: Some(LookupParams {
                table,
                from,
                to,
                autocommit,
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VindexKind {
        self.kind
    }

    /// Lookup parameters, present only for [`VindexKind::Lookup`].
    pub fn lookup_params(&self) -> Option<&LookupParams> {
        self.lookup.as_ref()
    }

    /// Relative cost of resolving a value; planners prefer the cheapest vindex.
    pub fn cost(&self) -> u32 {
        match self.kind {
            VindexKind::Lookup => 20,
            _ => 1,
        }
    }

    /// True when every value maps to at most one keyspace id.
    pub fn is_unique(&self) -> bool {
        self.kind.is_functional()
    }

    /// Maps a column value to its keyspace id.
    ///
    /// `Hash` expects the decimal text of an unsigned 64-bit integer.
    ///
    /// # Errors
    ///
    /// Lookup vindexes return [`VindexError::RequiresLookup`]; `Hash` returns
    /// [`VindexError::InvalidValue`] for values that are not unsigned integers.
    pub fn map(&self, value: &[u8]) -> Result<KeyspaceId> {
        if let Some(id) = self.map_bytes(value) {
            return Ok(id);
        }
        match self.kind {
            VindexKind::Hash => {
                let number = std::str::from_utf8(value)
                    .ok()
                    .and_then(|text| text.trim().parse::<u64>().ok())
                    .ok_or_else(|| VindexError::InvalidValue {
                        vindex: self.name.clone(),
                        reason: "expected an unsigned integer".to_string(),
                    })?;
                Ok(KeyspaceId::new(xxh3_64(&number.to_be_bytes()).to_be_bytes().to_vec()))
            }
            _ => Err(VindexError::RequiresLookup(self.name.clone())),
        }
    }

    /// Infallible mapping for the byte oriented kinds (`Binary`, `BinaryMd5`).
    pub(crate) fn map_bytes(&self, value: &[u8]) -> Option<KeyspaceId> {
        match self.kind {
            VindexKind::Binary => Some(KeyspaceId::from(value)),
            VindexKind::BinaryMd5 => Some(KeyspaceId::new(Md5::digest(value).to_vec())),
            VindexKind::Hash | VindexKind::Lookup => None,
        }
    }
}

impl fmt::Display for Vindex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
