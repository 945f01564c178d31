//! Tokenizing with the table option forms sqlparser does not accept.
//!
//! Lookup tables are commonly declared with bare options after the column
//! list, `CREATE TABLE t (...) WITH type=vindex`. The parser only knows the
//! parenthesized form, so the token stream is rewritten to
//! `WITH (type=vindex)` before parsing. Spans are kept from the `WITH` token
//! so error locations still point into the original script.

use sqlparser::dialect::Dialect;
use sqlparser::keywords::Keyword;
use sqlparser::parser::{Parser, ParserError};
use sqlparser::tokenizer::{Token, TokenWithSpan, Tokenizer};

use crate::error::Result;

/// Builds a parser over `sql` with bare `WITH key=value` options parenthesized.
pub(crate) fn parser_for<'a>(dialect: &'a dyn Dialect, sql: &str) -> Result<Parser<'a>> {
    let tokens = Tokenizer::new(dialect, sql)
        .tokenize_with_location()
        .map_err(ParserError::from)?;
    Ok(Parser::new(dialect).with_tokens_with_locations(parenthesize_bare_with_options(tokens)))
}

/// Rewrites `) WITH k = v [, k = v]*` into `) WITH (k = v [, k = v]*)`.
///
/// Only a `WITH` that directly follows a closing parenthesis at nesting depth
/// zero and is itself followed by `word =` is touched, which leaves CTEs and
/// `WITH TIME ZONE` style clauses alone.
pub(crate) fn parenthesize_bare_with_options(tokens: Vec<TokenWithSpan>) -> Vec<TokenWithSpan> {
    let mut result = Vec::with_capacity(tokens.len() + 2);
    let mut depth = 0usize;
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        match &token.token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            Token::SemiColon => depth = 0,
            _ => {}
        }

        let bare_with = depth == 0
            && is_keyword(&token.token, Keyword::WITH)
            && previous_significant(&result).is_some_and(|t| t == &Token::RParen)
            && starts_option(&tokens, index + 1);
        result.push(token.clone());
        index += 1;
        if !bare_with {
            continue;
        }

        let span = token.span;
        let start = skip_whitespace(&tokens, index);
        result.extend(tokens[index..start].iter().cloned());
        result.push(TokenWithSpan::new(Token::LParen, span));
        let end = option_list_end(&tokens, start);
        result.extend(tokens[start..end].iter().cloned());
        result.push(TokenWithSpan::new(Token::RParen, span));
        index = end;
    }
    result
}

fn is_keyword(token: &Token, keyword: Keyword) -> bool {
    matches!(token, Token::Word(word) if word.keyword == keyword)
}

fn is_whitespace(token: &Token) -> bool {
    matches!(token, Token::Whitespace(_))
}

fn previous_significant(tokens: &[TokenWithSpan]) -> Option<&Token> {
    tokens
        .iter()
        .rev()
        .map(|t| &t.token)
        .find(|t| !is_whitespace(t))
}

/// Index of the next non-whitespace token at or after `from`.
fn skip_whitespace(tokens: &[TokenWithSpan], from: usize) -> usize {
    let mut index = from;
    while index < tokens.len() && is_whitespace(&tokens[index].token) {
        index += 1;
    }
    index
}

fn starts_option(tokens: &[TokenWithSpan], from: usize) -> bool {
    let key = skip_whitespace(tokens, from);
    let eq = skip_whitespace(tokens, key + 1);
    matches!(tokens.get(key).map(|t| &t.token), Some(Token::Word(_)))
        && matches!(tokens.get(eq).map(|t| &t.token), Some(Token::Eq))
}

/// End (exclusive) of the `k = v [, k = v]*` run starting at `from`.
fn option_list_end(tokens: &[TokenWithSpan], from: usize) -> usize {
    let mut end = from;
    let mut cursor = from;
    while starts_option(tokens, cursor) {
        let eq = skip_whitespace(tokens, skip_whitespace(tokens, cursor) + 1);
        let value = skip_whitespace(tokens, eq + 1);
        let is_value = matches!(
            tokens.get(value).map(|t| &t.token),
            Some(
                Token::Word(_)
                    | Token::Number(_, _)
                    | Token::SingleQuotedString(_)
                    | Token::DoubleQuotedString(_)
            )
        );
        if !is_value {
            break;
        }
        end = value + 1;
        let next = skip_whitespace(tokens, end);
        if matches!(tokens.get(next).map(|t| &t.token), Some(Token::Comma)) {
            cursor = next + 1;
        } else {
            break;
        }
    }
    end
}
