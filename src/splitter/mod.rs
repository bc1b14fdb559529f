//! Statement-at-a-time splitting of a SQL token stream.
//!
//! The splitter sits between a tokenizer and whatever consumes whole
//! statements (grouping, formatting, execution). It never interprets
//! statement content: it only decides where one statement ends and the
//! next begins, which takes real bookkeeping in the presence of
//! `BEGIN ... END` blocks, parens, dollar-quoted bodies and a couple of
//! keyword idioms where `FOR` does not open a loop.

use fallible_iterator::FallibleIterator;
use log::debug;
use std::fmt;

use crate::dialect::TokenKind;

mod nesting;

use nesting::NestingTracker;

/// One lexical token: kind plus the literal text it was scanned from.
pub type Token<'i> = (TokenKind, &'i str);

/// One complete SQL statement, as delimited by the splitter: an ordered
/// token sequence, semicolon included when the input provided one.
///
/// The splitter owns the statement while it accumulates; ownership moves
/// to the caller on yield.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statement<'i> {
    tokens: Vec<Token<'i>>,
}

impl<'i> Statement<'i> {
    fn new() -> Statement<'i> {
        Statement::default()
    }

    fn push(&mut self, token: Token<'i>) {
        self.tokens.push(token);
    }

    /// Tokens of this statement, in input order.
    pub fn tokens(&self) -> &[Token<'i>] {
        &self.tokens
    }

    /// Consume the statement, keeping its tokens.
    pub fn into_tokens(self) -> Vec<Token<'i>> {
        self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// `true` when no token has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'i> IntoIterator for Statement<'i> {
    type Item = Token<'i>;
    type IntoIter = std::vec::IntoIter<Token<'i>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Reproduces the statement's source text (token texts, concatenated).
impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, text) in &self.tokens {
            f.write_str(text)?;
        }
        Ok(())
    }
}

/// Splits a token stream into statements.
///
/// Pull-based: each call to [`FallibleIterator::next`] consumes upstream
/// tokens until one statement is complete (or the stream ends) and yields
/// it. At most one statement is buffered at any time. Upstream errors are
/// passed through untouched; splitting itself cannot fail, and malformed
/// nesting (unterminated block, stray closer, unterminated dollar quote)
/// degrades into one trailing statement flushed at end of stream.
pub struct Splitter<'i, I> {
    source: I,
    tracker: NestingTracker,
    /// Running sum of nesting deltas since the current statement began.
    split_level: i32,
    /// Set once a terminating `;` was seen; trailing whitespace and line
    /// comments still belong to the finished statement.
    consume_trailing: bool,
    current: Option<Statement<'i>>,
}

impl<'i, I> Splitter<'i, I>
where
    I: FallibleIterator<Item = Token<'i>>,
{
    /// Create a splitter over `source`.
    pub fn new(source: I) -> Splitter<'i, I> {
        Splitter {
            source,
            tracker: NestingTracker::new(),
            split_level: 0,
            consume_trailing: false,
            current: None,
        }
    }

    /// Reset the splitter such that it behaves as if it had never been
    /// used, reading from `source`. Any partially accumulated statement
    /// is dropped.
    pub fn reset(&mut self, source: I) {
        self.source = source;
        self.tracker.reset();
        self.split_level = 0;
        self.consume_trailing = false;
        self.current = None;
    }

    /// Statement-boundary reset, run before the token that follows a
    /// terminated statement is processed.
    fn begin_statement(&mut self) {
        self.tracker.reset();
        self.split_level = 0;
        self.consume_trailing = false;
    }
}

impl<'i, I> FallibleIterator for Splitter<'i, I>
where
    I: FallibleIterator<Item = Token<'i>>,
{
    type Item = Statement<'i>;
    type Error = I::Error;

    fn next(&mut self) -> Result<Option<Statement<'i>>, I::Error> {
        while let Some((kind, text)) = self.source.next()? {
            // A terminated statement stays open for trailing whitespace
            // and line comments; any other token seals it.
            let finished = if self.consume_trailing && !kind.is_statement_trailing() {
                self.begin_statement();
                self.current.take()
            } else {
                None
            };

            let stmt = self.current.get_or_insert_with(Statement::new);
            self.split_level += self.tracker.level_delta(kind, text);
            stmt.push((kind, text));
            if self.split_level <= 0 && kind == TokenKind::Punctuation && text == ";" {
                self.consume_trailing = true;
            }

            if let Some(finished) = finished {
                debug!(target: "splitter", "statement complete ({} tokens)", finished.len());
                return Ok(Some(finished));
            }
        }
        // End of stream: flush whatever is pending, terminated or not.
        let pending = self.current.take();
        if let Some(ref stmt) = pending {
            debug!(target: "splitter", "flush at end of stream ({} tokens)", stmt.len());
        }
        Ok(pending)
    }
}
