use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::token::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: usize,
    source: String,
    tokens: Vec<Token>,
}

impl Line {
    /// `number` is the 1-based position of the line in its source.
    pub fn new(number: usize, s: &str) -> Line {
        let source = s.trim_end_matches(|c| c == '\r' || c == '\n');
        Line {
            number,
            source: source.to_string(),
            tokens: lex(source),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// The line as written, without its line ending. Columns index into it.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True for blank lines and comments.
    pub fn is_empty(&self) -> bool {
        self.tokens
            .iter()
            .all(|t| matches!(t, Token::Whitespace(_) | Token::Comment(_)))
    }

    /// Errors carry the line number and the line as written.
    pub fn ast(&self) -> Result<Option<Statement>, Error> {
        parse(self.number, &self.tokens).map_err(|e| e.message(&self.source))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: String = self.tokens.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", s)
    }
}
