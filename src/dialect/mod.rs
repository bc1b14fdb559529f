//! Token taxonomy and static dialect tables.
//!
//! The tokenizer lives upstream; this module only fixes the interface it
//! presents (token kinds) and the keyword knowledge the splitter needs to
//! recognize statement boundaries across ANSI blocks, Teradata locking
//! clauses, cursor declarations and PostgreSQL dollar-quoted bodies.

use phf::{phf_map, phf_set};
use uncased::UncasedStr;

/// Lexical classification of a token, as reported by the upstream tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved or dialect keyword (`SELECT`, `BEGIN`, `END IF`, ...)
    Keyword,
    /// Plain identifier
    Name,
    /// Builtin name; dollar-quote markers (`$$`, `$tag$`) are reported
    /// with this kind and their literal text
    Builtin,
    /// String/number literal
    Literal,
    /// Punctuation (`;`, `(`, `)`, `,`, ...)
    Punctuation,
    /// Spaces, tabs, newlines
    Whitespace,
    /// `-- ...` comment, up to end of line
    LineComment,
    /// `/* ... */` comment
    BlockComment,
    /// Anything the tokenizer does not classify further
    Other,
}

impl TokenKind {
    /// Only keywords and punctuation can open or close a nesting context.
    pub fn affects_nesting(self) -> bool {
        matches!(self, TokenKind::Keyword | TokenKind::Punctuation)
    }

    /// Tokens of these kinds may still trail a terminated statement
    /// before the next one begins.
    pub fn is_statement_trailing(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::LineComment)
    }
}

/// Block opener -> closing pattern. `IF` nests until `END IF`, `(` until
/// `)`, and so on. Lookup is case-insensitive; the table itself is baked
/// at compile time.
pub(crate) static BLOCK_MATCH: phf::Map<&'static UncasedStr, &'static str> = phf_map! {
    UncasedStr::new("BEGIN") => "END",
    UncasedStr::new("CASE") => "END",
    UncasedStr::new("IF") => "END IF",
    UncasedStr::new("FOR") => "END FOR",
    UncasedStr::new("WHILE") => "END WHILE",
    UncasedStr::new("REPEAT") => "END REPEAT",
    UncasedStr::new("LOOP") => "END LOOP",
    UncasedStr::new("(") => ")",
};

/// Keywords that resolve a pending `LOCK`/`LOCKING ... FOR` clause.
pub(crate) static LOCK_RESOLVERS: phf::Set<&'static UncasedStr> = phf_set! {
    UncasedStr::new("ACCESS"),
    UncasedStr::new("READ"),
    UncasedStr::new("WRITE"),
    UncasedStr::new("EXCLUSIVE"),
};

/// `$$` or `$tag$`. Only the leading and trailing `$` are checked; the tag
/// between opener and closer is not compared.
pub(crate) fn is_dollar_quote_marker(text: &str) -> bool {
    text.starts_with('$') && text.ends_with('$')
}

/// Whole-token match of `text` against a closing pattern, case-insensitive,
/// with any run of whitespace between the pattern's words (`END    IF`
/// still closes an `IF` block).
pub(crate) fn closes_block(text: &str, closer: &str) -> bool {
    let mut words = text.split_ascii_whitespace();
    let mut pattern = closer.split_ascii_whitespace();
    loop {
        match (words.next(), pattern.next()) {
            (Some(w), Some(p)) if w.eq_ignore_ascii_case(p) => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}
