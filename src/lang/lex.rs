use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    MacroLexer::lex(s)
}

fn is_macro_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_comment_start(c: char) -> bool {
    c == '#' || c == ';'
}

struct MacroLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    tokens: Vec<Token>,
}

impl<'a> MacroLexer<'a> {
    fn lex(s: &'a str) -> Vec<Token> {
        let mut lexer = MacroLexer {
            chars: s.chars().peekable(),
            tokens: vec![],
        };
        while let Some(&pk) = lexer.chars.peek() {
            let token = if is_macro_whitespace(pk) {
                lexer.whitespace()
            } else if lexer.at_start() && is_comment_start(pk) {
                lexer.comment()
            } else {
                lexer.word()
            };
            lexer.tokens.push(token);
        }
        lexer.trim_end();
        lexer.tokens
    }

    fn at_start(&self) -> bool {
        self.tokens
            .iter()
            .all(|t| matches!(t, Token::Whitespace(_)))
    }

    fn trim_end(&mut self) {
        while let Some(Token::Whitespace(_)) = self.tokens.last() {
            self.tokens.pop();
        }
    }

    fn whitespace(&mut self) -> Token {
        let mut len = 0;
        while let Some(&pk) = self.chars.peek() {
            if !is_macro_whitespace(pk) {
                break;
            }
            self.chars.next();
            len += 1;
        }
        Token::Whitespace(len)
    }

    fn comment(&mut self) -> Token {
        let s: String = self.chars.by_ref().collect();
        Token::Comment(s.trim_end().to_string())
    }

    fn word(&mut self) -> Token {
        let keyword_position = self.at_start();
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if is_macro_whitespace(pk) {
                break;
            }
            s.push(pk);
            self.chars.next();
        }
        if keyword_position {
            if let Some(t) = Token::from_string(&s) {
                return t;
            }
        }
        Token::Text(s)
    }
}
