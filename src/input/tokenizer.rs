use super::reserve_doubling;
use crate::error::ShellResult;
use std::ops::Deref;

/// Initial number of token slots.
pub const TOKEN_BUFFER_SIZE: usize = 64;

/// Characters that separate tokens. Runs of them collapse.
pub const TOKEN_DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Ordered arguments of one command line, borrowed from the line they were
/// split from. The first token, if any, is the command name.
///
/// The list ends where the slice ends; there is no separate terminator entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> TokenList<'a> {
    pub fn command(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    /// Everything after the command name.
    pub fn operands(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }
}

impl<'a> Deref for TokenList<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

fn is_delimiter(c: char) -> bool {
    TOKEN_DELIMITERS.contains(&c)
}

/// Split a line into whitespace separated tokens.
///
/// No quoting or escaping is recognised. A blank line yields an empty list.
pub fn parse_tokens(line: &str) -> ShellResult<TokenList<'_>> {
    let mut tokens: Vec<&str> = Vec::new();
    reserve_doubling(&mut tokens, 0, TOKEN_BUFFER_SIZE, "tokenizer")?;

    for token in line.split(is_delimiter).filter(|token| !token.is_empty()) {
        reserve_doubling(&mut tokens, 1, TOKEN_BUFFER_SIZE, "tokenizer")?;
        tokens.push(token);
    }

    Ok(TokenList { tokens })
}
