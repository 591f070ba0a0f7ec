use super::{ast::*, token::*, Column, Error, ErrorCode};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Blank lines and comments parse to `None`.
pub fn parse(line_number: usize, tokens: &[Token]) -> Result<Option<Statement>> {
    match Parser::parse(tokens) {
        Err(e) => Err(e.in_line_number(line_number)),
        Ok(r) => Ok(r),
    }
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Option<Statement>> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            col: 0..0,
        };
        parse.statement()
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    /// Empty column just past the last token, for missing arguments.
    fn end_column(&self) -> Column {
        self.col.end..self.col.end
    }

    fn next(&mut self) -> Option<&'a Token> {
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.len();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn statement(&mut self) -> Result<Option<Statement>> {
        use ErrorCode::{InvalidKeyDuration, InvalidPauseDuration};
        let word = match self.next() {
            None | Some(Token::Comment(_)) => return Ok(None),
            Some(Token::Word(word)) => *word,
            Some(_) => return Err(error!(UnknownCommand, ..&self.column())),
        };
        let start = self.col.start;
        let statement = match word {
            Word::Pause => {
                let duration = self.duration(DurationSpec::from_seconds, InvalidPauseDuration)?;
                Statement::Pause(start..self.col.end, duration)
            }
            Word::KeyDown => {
                let key = self.key()?;
                let duration = self.duration(DurationSpec::from_millis, InvalidKeyDuration)?;
                Statement::KeyDown(start..self.col.end, key, duration)
            }
            Word::KeyPress => {
                let key = self.key()?;
                let duration = self.duration(DurationSpec::from_millis, InvalidKeyDuration)?;
                Statement::KeyPress(start..self.col.end, key, duration)
            }
            Word::Key => {
                let key = self.key()?;
                Statement::Key(start..self.col.end, key)
            }
            Word::Loop => {
                let count = self.loop_count()?;
                Statement::Loop(start..self.col.end, count)
            }
            Word::EndLoop => Statement::EndLoop(start..self.col.end),
        };
        Ok(Some(statement))
    }

    fn key(&mut self) -> Result<KeyName> {
        match self.next() {
            Some(Token::Text(s)) => Ok(s.to_ascii_uppercase().into()),
            _ => Err(error!(MissingKey, ..&self.end_column())),
        }
    }

    fn duration(
        &mut self,
        parse: fn(&str) -> Option<DurationSpec>,
        code: ErrorCode,
    ) -> Result<DurationSpec> {
        match self.next() {
            Some(Token::Text(s)) => match parse(s) {
                Some(duration) => Ok(duration),
                None => Err(Error::new(code).in_column(&self.column())),
            },
            _ => Err(Error::new(code).in_column(&self.end_column())),
        }
    }

    fn loop_count(&mut self) -> Result<u32> {
        match self.next() {
            Some(Token::Text(s)) => match s.parse::<u32>() {
                Ok(count) => Ok(count),
                Err(_) => Err(error!(InvalidLoopCount, ..&self.column())),
            },
            _ => Err(error!(InvalidLoopCount, ..&self.end_column())),
        }
    }
}
