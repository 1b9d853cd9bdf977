//! Text dispatcher: one line in, one typed request out
//!
//! Parses a command line into a [`Request`] before anything reaches the
//! handlers: a case-insensitive command name (an optional leading `!`
//! chat prefix is accepted), positional tokens, and a
//! remainder-with-spaces for free-text arguments. Parse failures become
//! response text, not errors; only store-level failures propagate.

use thiserror::Error;

use roster_core::Request;

use crate::registry::Registry;

const UPDATE_NAME_USAGE: &str = "update_name <name> <column> <new value>";
const UPDATE_CELL_USAGE: &str = "update_cell <row number> <column> <new value>";

/// A line that could not be turned into a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Available commands: search_rank, show_rank, update_name, update_cell")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Row number '{0}' is not a number.")]
    InvalidRowNumber(String),

    #[error("Empty command.")]
    Empty,
}

/// Whitespace tokenizer that can hand back the untokenized remainder.
///
/// Free-text arguments (names, rank text, new values) keep their
/// internal spaces; only leading/trailing whitespace is dropped.
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line.trim() }
    }

    fn next(&mut self) -> Option<&'a str> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn remainder(&mut self) -> &'a str {
        let rest = self.rest.trim();
        self.rest = "";
        rest
    }
}

/// Parse one line of text into a typed request.
pub fn parse(line: &str) -> Result<Request, ParseError> {
    let mut tokens = Tokens::new(line);
    let Some(command) = tokens.next() else {
        return Err(ParseError::Empty);
    };
    let command = command.strip_prefix('!').unwrap_or(command);

    match command.to_lowercase().as_str() {
        "search_rank" => Ok(Request::SearchRank {
            rank: tokens.remainder().to_string(),
        }),
        "show_rank" => Ok(Request::ShowRank {
            name: tokens.remainder().to_string(),
        }),
        "update_name" => {
            let name = tokens
                .next()
                .ok_or(ParseError::Usage(UPDATE_NAME_USAGE))?
                .to_string();
            let column = tokens
                .next()
                .ok_or(ParseError::Usage(UPDATE_NAME_USAGE))?
                .to_string();
            let value = tokens.remainder();
            if value.is_empty() {
                return Err(ParseError::Usage(UPDATE_NAME_USAGE));
            }
            Ok(Request::UpdateByName {
                name,
                column,
                value: value.to_string(),
            })
        }
        "update_cell" => {
            let row_token = tokens.next().ok_or(ParseError::Usage(UPDATE_CELL_USAGE))?;
            let row: u32 = row_token
                .parse()
                .map_err(|_| ParseError::InvalidRowNumber(row_token.to_string()))?;
            let column = tokens
                .next()
                .ok_or(ParseError::Usage(UPDATE_CELL_USAGE))?
                .to_string();
            let value = tokens.remainder();
            if value.is_empty() {
                return Err(ParseError::Usage(UPDATE_CELL_USAGE));
            }
            Ok(Request::UpdateCell {
                row,
                column,
                value: value.to_string(),
            })
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Parse a line, run the matching handler, and return the response text.
///
/// Parse failures are delivered as response text for the caller to
/// self-correct; only store-level failures surface as errors.
pub async fn dispatch(registry: &Registry, line: &str) -> roster_store::Result<String> {
    match parse(line) {
        Ok(request) => registry.handle(request).await,
        Err(err) => Ok(err.to_string()),
    }
}
