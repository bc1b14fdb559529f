//! Nesting-aware streaming SQL statement splitter
#![warn(missing_docs)]

pub mod dialect;
pub mod splitter;

pub use dialect::TokenKind;
pub use splitter::{Splitter, Statement, Token};
