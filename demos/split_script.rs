use std::convert::Infallible;

use fallible_iterator::{convert, FallibleIterator};

use sql_stmt_splitter::{Splitter, Token, TokenKind};

/// Split a pre-tokenized script and print one line per statement.
fn main() {
    env_logger::init();
    // What a tokenizer would produce for:
    //   BEGIN UPDATE t SET n=0; END; LOCKING ROW FOR ACCESS SELECT 1;
    let tokens: &[Token<'_>] = &[
        (TokenKind::Keyword, "BEGIN"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Keyword, "UPDATE"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Name, "t"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Keyword, "SET"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Name, "n"),
        (TokenKind::Punctuation, "="),
        (TokenKind::Literal, "0"),
        (TokenKind::Punctuation, ";"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Keyword, "END"),
        (TokenKind::Punctuation, ";"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Keyword, "LOCKING"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Keyword, "ROW"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Keyword, "FOR"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Keyword, "ACCESS"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Keyword, "SELECT"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Literal, "1"),
        (TokenKind::Punctuation, ";"),
    ];
    let mut splitter = Splitter::new(convert(tokens.iter().copied().map(Ok::<_, Infallible>)));
    loop {
        match splitter.next() {
            Ok(None) => break,
            Ok(Some(stmt)) => println!("{}", stmt.to_string().trim_end()),
            Err(err) => match err {},
        }
    }
}
