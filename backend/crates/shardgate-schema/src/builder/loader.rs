//! Single pass over a DDL statement stream.

use log::{debug, trace};
use shardgate_commons::{KeyspaceName, NamingConventions};
use shardgate_sql::{dialect_by_name, DdlStatement, SqlScriptReader, StatementReader};

use super::table_builder::TableBuilder;
use crate::error::{Result, SchemaError, SchemaLoadError};
use crate::vschema::VSchema;

/// Settings for one load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Keyspace of unqualified table names
    pub default_keyspace: KeyspaceName,
    /// Sharded flag given to every keyspace the load creates
    pub sharded: bool,
    pub conventions: NamingConventions,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            default_keyspace: KeyspaceName::new(""),
            sharded: true,
            conventions: NamingConventions::default(),
        }
    }
}

impl LoaderOptions {
    pub fn new(default_keyspace: impl Into<KeyspaceName>) -> Self {
        Self {
            default_keyspace: default_keyspace.into(),
            ..Self::default()
        }
    }

    pub fn with_sharded(mut self, sharded: bool) -> Self {
        self.sharded = sharded;
        self
    }

    pub fn with_conventions(mut self, conventions: NamingConventions) -> Self {
        self.conventions = conventions;
        self
    }
}

/// Builds a [`VSchema`] from DDL statements.
///
/// Keyspaces are created on first mention: by `CREATE DATABASE`, or by a
/// table statement naming them (unqualified tables go to the default keyspace).
/// Statements other than database and table DDL are ignored.
#[derive(Debug)]
pub struct SchemaLoader {
    options: LoaderOptions,
    vschema: VSchema,
    statements: usize,
}

impl SchemaLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            vschema: VSchema::new(),
            statements: 0,
        }
    }

    /// Statements applied so far.
    pub fn statements(&self) -> usize {
        self.statements
    }

    pub fn vschema(&self) -> &VSchema {
        &self.vschema
    }

    /// Applies one statement. A failed statement leaves no table and no vindex
    /// behind, though its keyspace may already have been created.
    pub fn apply(&mut self, statement: DdlStatement) -> Result<()> {
        match statement {
            DdlStatement::CreateDatabase(create) => {
                self.vschema.get_or_create(&create.name, self.options.sharded);
            }
            DdlStatement::CreateTable(create) => {
                let keyspace_name = self.keyspace_of(create.table.qualifier());
                let keyspace = self.vschema.get_or_create(&keyspace_name, self.options.sharded);
                TableBuilder::new(&self.options.conventions).build(keyspace, &create)?;
            }
            DdlStatement::TableDdl(ddl) => {
                for table in &ddl.tables {
                    let keyspace_name = self.keyspace_of(table.qualifier());
                    self.vschema.get_or_create(&keyspace_name, self.options.sharded);
                }
                trace!("{} on {} table(s) only touches keyspaces", ddl.action, ddl.tables.len());
            }
            DdlStatement::Other => trace!("Ignoring non-DDL statement"),
        }
        self.statements += 1;
        Ok(())
    }

    /// Reads `reader` to the end.
    ///
    /// # Errors
    ///
    /// Stops at the first reader or builder error and returns it together
    /// with the registry built from the preceding statements.
    pub fn load<R>(mut self, reader: &mut R) -> std::result::Result<VSchema, SchemaLoadError>
    where
        R: StatementReader + ?Sized,
    {
        loop {
            let statement = match reader.next_statement() {
                Ok(Some(statement)) => statement,
                Ok(None) => break,
                Err(e) => return Err(self.fail(e.into())),
            };
            if let Err(e) = self.apply(statement) {
                return Err(self.fail(e));
            }
        }
        debug!(
            "Loaded {} statement(s) into {} keyspace(s)",
            self.statements,
            self.vschema.len()
        );
        Ok(self.vschema)
    }

    /// Ends the load, keeping whatever was applied.
    pub fn finish(self) -> VSchema {
        self.vschema
    }

    fn keyspace_of(&self, qualifier: Option<&KeyspaceName>) -> KeyspaceName {
        qualifier
            .cloned()
            .unwrap_or_else(|| self.options.default_keyspace.clone())
    }

    fn fail(self, source: SchemaError) -> SchemaLoadError {
        debug!(
            "Schema load failed after {} statement(s): {}",
            self.statements, source
        );
        SchemaLoadError {
            schema: Box::new(self.vschema),
            statements: self.statements,
            source,
        }
    }
}

/// Parses `sql` with the named dialect and loads every statement.
pub fn load_script(
    dialect: &str,
    sql: &str,
    options: LoaderOptions,
) -> std::result::Result<VSchema, SchemaLoadError> {
    let loader = SchemaLoader::new(options);
    let dialect = match dialect_by_name(dialect) {
        Ok(dialect) => dialect,
        Err(e) => return Err(loader.fail(e.into())),
    };
    match SqlScriptReader::new(dialect.as_ref(), sql) {
        Ok(mut reader) => loader.load(&mut reader),
        Err(e) => Err(loader.fail(e.into())),
    }
}
