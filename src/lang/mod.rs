/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of macro scripts.
Each line of a script is one statement. A line that fails to parse
produces an [`Error`] naming its line number; it never stops the lines
after it from being parsed.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;

pub mod ast;
pub mod token;

/// Character range of a token within its line.
pub type Column = std::ops::Range<usize>;

/// 1-based line in the script, when known.
pub type LineNumber = Option<usize>;

#[cfg(test)]
mod tests;
