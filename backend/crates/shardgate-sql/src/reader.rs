//! Statement-at-a-time reading of DDL scripts.

use std::iter::FusedIterator;

use log::trace;
use sqlparser::dialect::{dialect_from_str, Dialect};
use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;

use crate::ddl::DdlStatement;
use crate::error::{Result, SqlError};
use crate::tokens::parser_for;

/// Looks up a dialect by name (`generic`, `mysql`, `postgresql`, ...).
pub fn dialect_by_name(name: &str) -> Result<Box<dyn Dialect>> {
    dialect_from_str(name).ok_or_else(|| SqlError::UnknownDialect(name.to_string()))
}

/// Source of DDL statements, one per call.
///
/// `Ok(None)` marks the end of input. Any iterator over statement results is a
/// reader, so tests can feed prepared statements without SQL text.
pub trait StatementReader {
    fn next_statement(&mut self) -> Result<Option<DdlStatement>>;
}

impl<I> StatementReader for I
where
    I: Iterator<Item = Result<DdlStatement>>,
{
    fn next_statement(&mut self) -> Result<Option<DdlStatement>> {
        self.next().transpose()
    }
}

/// Reads a script of `;`-separated statements.
///
/// Yields one [`DdlStatement`] per statement and ends at end of input. Empty
/// statements (`;;`) are skipped. The first error is yielded once and ends the
/// iteration, since the parser cannot resynchronize after it.
pub struct SqlScriptReader<'a> {
    parser: Parser<'a>,
    position: usize,
    finished: bool,
}

impl<'a> SqlScriptReader<'a> {
    /// Tokenizes `sql`. Fails on lexical errors such as unterminated strings.
    pub fn new(dialect: &'a dyn Dialect, sql: &str) -> Result<Self> {
        let parser = parser_for(dialect, sql)?;
        Ok(Self {
            parser,
            position: 0,
            finished: false,
        })
    }

    /// Number of statements read so far.
    pub fn position(&self) -> usize {
        self.position
    }

    fn skip_delimiters(&mut self) -> bool {
        let mut skipped = false;
        while self.parser.consume_token(&Token::SemiColon) {
            skipped = true;
        }
        skipped
    }

    fn fail(&mut self, error: SqlError) -> Option<Result<DdlStatement>> {
        self.finished = true;
        Some(Err(error))
    }
}

impl Iterator for SqlScriptReader<'_> {
    type Item = Result<DdlStatement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let delimited = self.skip_delimiters();
        let next_token = self.parser.peek_token().token;
        if next_token == Token::EOF {
            self.finished = true;
            return None;
        }
        if self.position > 0 && !delimited {
            return self.fail(SqlError::MissingDelimiter {
                statement: self.position,
                found: next_token.to_string(),
            });
        }

        let statement = match self.parser.parse_statement() {
            Ok(statement) => statement,
            Err(e) => return self.fail(e.into()),
        };
        self.position += 1;

        match DdlStatement::from_ast(statement) {
            Ok(ddl) => {
                trace!("Read statement #{}: {}", self.position, ddl.kind());
                Some(Ok(ddl))
            }
            Err(e) => self.fail(e),
        }
    }
}

impl FusedIterator for SqlScriptReader<'_> {}
