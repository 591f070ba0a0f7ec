#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Whitespace(usize),
    Comment(String),
    Word(Word),
    Text(String),
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        Word::from_string(s).map(Token::Word)
    }

    /// Width of the token in characters, used to track columns.
    pub fn len(&self) -> usize {
        match self {
            Token::Whitespace(len) => *len,
            _ => self.to_string().chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Comment(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Pause,
    KeyDown,
    KeyPress,
    Key,
    Loop,
    EndLoop,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        match s.to_ascii_uppercase().as_str() {
            "PAUSE" => Some(Pause),
            "KEYDOWN" => Some(KeyDown),
            "KEYPRESS" => Some(KeyPress),
            "KEY" => Some(Key),
            "LOOP" => Some(Loop),
            "ENDLOOP" => Some(EndLoop),
            _ => None,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Pause => write!(f, "PAUSE"),
            KeyDown => write!(f, "KEYDOWN"),
            KeyPress => write!(f, "KEYPRESS"),
            Key => write!(f, "KEY"),
            Loop => write!(f, "LOOP"),
            EndLoop => write!(f, "ENDLOOP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let t = Token::from_string("endLoop");
        assert_eq!(t, Some(Token::Word(Word::EndLoop)));
        let t = Token::from_string("PICKLES");
        assert_eq!(t, None);
    }

    #[test]
    fn test_len() {
        assert_eq!(Token::Whitespace(4).len(), 4);
        assert_eq!(Token::Word(Word::KeyPress).len(), 8);
        assert_eq!(Token::Text("ÄB".to_string()).len(), 2);
    }
}
