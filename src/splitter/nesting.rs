//! Nesting depth bookkeeping for the statement splitter.

use uncased::UncasedStr;

use crate::dialect::{closes_block, is_dollar_quote_marker, TokenKind, BLOCK_MATCH, LOCK_RESOLVERS};

/// Tracks every construct that makes a `;` *not* end the current statement:
/// open blocks and parens, dollar-quoted bodies, and the two keyword idioms
/// whose trailing `FOR` must not be read as a loop opener.
#[derive(Debug, Default)]
pub(crate) struct NestingTracker {
    in_dollar_quote: bool,
    in_locking: bool,
    in_cursor: bool,
    /// Closing patterns still owed, innermost last.
    block_stack: Vec<&'static str>,
}

impl NestingTracker {
    pub fn new() -> NestingTracker {
        NestingTracker::default()
    }

    /// Restore the freshly-constructed state. Called between statements.
    pub fn reset(&mut self) {
        self.in_dollar_quote = false;
        self.in_locking = false;
        self.in_cursor = false;
        self.block_stack.clear();
    }

    /// Change of split level caused by one token: +1 when it opens a
    /// nesting context, -1 when it closes one, 0 otherwise.
    pub fn level_delta(&mut self, kind: TokenKind, text: &str) -> i32 {
        // PostgreSQL dollar-quoted bodies suppress everything else.
        if kind == TokenKind::Builtin && is_dollar_quote_marker(text) {
            self.in_dollar_quote = !self.in_dollar_quote;
            return if self.in_dollar_quote { 1 } else { -1 };
        }
        if self.in_dollar_quote {
            return 0;
        }

        if !kind.affects_nesting() {
            return 0;
        }

        // Teradata's LOCKING ROW|TABLE|VIEW|DATABASE FOR ACCESS|READ|WRITE|EXCLUSIVE
        if text.eq_ignore_ascii_case("LOCK") || text.eq_ignore_ascii_case("LOCKING") {
            self.in_locking = true;
            return 0;
        }
        if self.in_locking && text.eq_ignore_ascii_case("FOR") {
            return 0;
        }
        if self.in_locking && LOCK_RESOLVERS.contains(UncasedStr::new(text)) {
            self.in_locking = false;
            return 0;
        }

        // DECLARE ... CURSOR FOR SELECT ...
        // The flag stays set for the rest of the statement.
        if text.eq_ignore_ascii_case("CURSOR") {
            self.in_cursor = true;
            return 0;
        }
        if self.in_cursor && text.eq_ignore_ascii_case("FOR") {
            return 0;
        }

        if let Some(&closer) = BLOCK_MATCH.get(UncasedStr::new(text)) {
            self.block_stack.push(closer);
            return 1;
        }
        // A closer with nothing open is ignored, not an error.
        if let Some(&closer) = self.block_stack.last() {
            if closes_block(text, closer) {
                self.block_stack.pop();
                return -1;
            }
        }

        0
    }
}

#[cfg(test)]
mod test {
    use super::NestingTracker;
    use crate::dialect::TokenKind::{Builtin, Keyword, Literal, Name, Punctuation, Whitespace};

    #[test]
    fn blocks_nest_and_unwind() {
        let mut t = NestingTracker::new();
        assert_eq!(t.level_delta(Keyword, "BEGIN"), 1);
        assert_eq!(t.level_delta(Keyword, "IF"), 1);
        assert_eq!(t.level_delta(Keyword, "END"), 0); // does not close IF
        assert_eq!(t.level_delta(Keyword, "END IF"), -1);
        assert_eq!(t.level_delta(Keyword, "end"), -1);
    }

    #[test]
    fn parens() {
        let mut t = NestingTracker::new();
        assert_eq!(t.level_delta(Punctuation, "("), 1);
        assert_eq!(t.level_delta(Punctuation, "("), 1);
        assert_eq!(t.level_delta(Punctuation, ")"), -1);
        assert_eq!(t.level_delta(Punctuation, ")"), -1);
        // stray closer on an empty stack
        assert_eq!(t.level_delta(Punctuation, ")"), 0);
    }

    #[test]
    fn only_keywords_and_punctuation_count() {
        let mut t = NestingTracker::new();
        assert_eq!(t.level_delta(Name, "BEGIN"), 0);
        assert_eq!(t.level_delta(Literal, "("), 0);
        assert_eq!(t.level_delta(Whitespace, " "), 0);
    }

    #[test]
    fn locking_clause_swallows_for() {
        let mut t = NestingTracker::new();
        assert_eq!(t.level_delta(Keyword, "LOCKING"), 0);
        assert_eq!(t.level_delta(Keyword, "ROW"), 0);
        assert_eq!(t.level_delta(Keyword, "FOR"), 0);
        assert_eq!(t.level_delta(Keyword, "ACCESS"), 0);
        // flag cleared: a later FOR opens a block again
        assert_eq!(t.level_delta(Keyword, "FOR"), 1);
    }

    #[test]
    fn cursor_flag_is_sticky() {
        let mut t = NestingTracker::new();
        assert_eq!(t.level_delta(Keyword, "CURSOR"), 0);
        assert_eq!(t.level_delta(Keyword, "FOR"), 0);
        // never resolved within the statement
        assert_eq!(t.level_delta(Keyword, "FOR"), 0);
        t.reset();
        assert_eq!(t.level_delta(Keyword, "FOR"), 1);
    }

    #[test]
    fn dollar_quote_suppresses_everything() {
        let mut t = NestingTracker::new();
        assert_eq!(t.level_delta(Builtin, "$$"), 1);
        assert_eq!(t.level_delta(Keyword, "BEGIN"), 0);
        assert_eq!(t.level_delta(Punctuation, ";"), 0);
        assert_eq!(t.level_delta(Builtin, "$$"), -1);
        assert_eq!(t.level_delta(Keyword, "BEGIN"), 1);
    }

    #[test]
    fn dollar_quote_tags_are_not_compared() {
        let mut t = NestingTracker::new();
        assert_eq!(t.level_delta(Builtin, "$one$"), 1);
        assert_eq!(t.level_delta(Builtin, "$two$"), -1);
    }
}
