//! Vindex inference from index definitions.
//!
//! An index declares a vindex when its `USING` marker carries the vindex prefix:
//!
//! ```sql
//! PRIMARY KEY (id) USING v_hash          -- vindex "<table>_primary_key", owned
//! INDEX by_email USING v_md5 (email)     -- vindex "by_email", not owned
//! INDEX by_name (name)                   -- ignored
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};
use shardgate_commons::NamingConventions;
use shardgate_sharding::{Vindex, VindexKind};
use shardgate_sql::IndexDefinition;

use crate::error::Result;

/// Inferred vindexes are never ordered; no marker expresses ordering.
pub const ORDERED: bool = false;

/// A vindex resolved for one index definition, with its binding flags.
#[derive(Debug, Clone)]
pub struct InferredVindex {
    pub vindex: Arc<Vindex>,
    pub owned: bool,
    pub ordered: bool,
}

/// The vindexes one statement can see: those already committed to the
/// keyspace plus those created while processing the statement.
///
/// New vindexes stay pending until the caller commits them, so a statement
/// that fails halfway leaves the keyspace untouched.
#[derive(Debug)]
pub struct VindexStage<'a> {
    committed: &'a HashMap<String, Arc<Vindex>>,
    pending: HashMap<String, Arc<Vindex>>,
}

impl<'a> VindexStage<'a> {
    pub fn new(committed: &'a HashMap<String, Arc<Vindex>>) -> Self {
        Self {
            committed,
            pending: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Vindex>> {
        self.pending.get(name).or_else(|| self.committed.get(name))
    }

    /// Number of vindexes created since the stage was opened.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn stage(&mut self, vindex: Arc<Vindex>) {
        self.pending.insert(vindex.name().to_string(), vindex);
    }

    pub fn into_pending(self) -> Vec<Arc<Vindex>> {
        self.pending.into_values().collect()
    }
}

/// Decides whether an index definition declares a vindex.
#[derive(Debug, Clone, Copy)]
pub struct VindexInference<'a> {
    conventions: &'a NamingConventions,
}

impl<'a> VindexInference<'a> {
    pub fn new(conventions: &'a NamingConventions) -> Self {
        Self { conventions }
    }

    /// Resolves the vindex declared by `index` on `table`.
    ///
    /// Returns `Ok(None)` for indexes that do not declare a vindex: no marker, a
    /// marker without the vindex prefix, an unknown marker kind, spatial indexes
    /// and unnamed secondary indexes. A name already visible in `stage` yields
    /// the existing vindex; otherwise a new one is staged.
    pub fn infer(
        &self,
        table: &str,
        index: &IndexDefinition,
        stage: &mut VindexStage<'_>,
    ) -> Result<Option<InferredVindex>> {
        let Some(marker) = index
            .using()
            .and_then(|using| self.conventions.vindex_marker(using))
        else {
            return Ok(None);
        };
        if index.info.spatial {
            trace!("Skipping spatial index on '{}'", table);
            return Ok(None);
        }

        let (name, owned) = if index.info.primary {
            (self.conventions.primary_key_vindex_name(table), true)
        } else {
            match index.info.name.as_deref() {
                Some(name) if !name.is_empty() => (name.to_string(), false),
                _ => {
                    trace!("Skipping unnamed index on '{}'", table);
                    return Ok(None);
                }
            }
        };

        if let Some(existing) = stage.get(&name) {
            return Ok(Some(InferredVindex {
                vindex: Arc::clone(existing),
                owned,
                ordered: ORDERED,
            }));
        }

        let Some(kind) = VindexKind::from_marker(marker) else {
            debug!(
                "Index '{}' on '{}' has unknown vindex marker '{}'",
                name, table, marker
            );
            return Ok(None);
        };

        let vindex = Arc::new(Vindex::functional(name, kind)?);
        debug!("Inferred {} vindex '{}' on '{}'", kind, vindex.name(), table);
        stage.stage(Arc::clone(&vindex));
        Ok(Some(InferredVindex {
            vindex,
            owned,
            ordered: ORDERED,
        }))
    }
}
