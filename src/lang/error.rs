use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// The source line or name the error refers to.
    pub fn detail(&self) -> &str {
        &self.message
    }

    /// Fatal errors mean there is nothing to compile or run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::SourceUnavailable
                | ErrorCode::BadKeyTable
                | ErrorCode::InputUnavailable
                | ErrorCode::NoValidCommands
        )
    }

    pub fn in_line_number(&self, line: usize) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            code: self.code,
            line_number: Some(line),
            column: self.column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            line_number: self.line_number,
            column: column.clone(),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            line_number: self.line_number,
            column: self.column.clone(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownCommand = 1,
    MissingKey = 2,
    InvalidPauseDuration = 3,
    InvalidKeyDuration = 4,
    InvalidLoopCount = 5,
    EndloopWithoutLoop = 6,
    LoopWithoutEndloop = 7,
    UnknownKey = 9,
    SourceUnavailable = 53,
    BadKeyTable = 54,
    InputUnavailable = 55,
    NoValidCommands = 56,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            UnknownCommand => "UNKNOWN COMMAND",
            MissingKey => "MISSING KEY",
            InvalidPauseDuration => "INVALID PAUSE DURATION",
            InvalidKeyDuration => "INVALID KEY DURATION",
            InvalidLoopCount => "INVALID LOOP COUNT",
            EndloopWithoutLoop => "ENDLOOP WITHOUT LOOP",
            LoopWithoutEndloop => "LOOP WITHOUT ENDLOOP",
            UnknownKey => "UNKNOWN KEY",
            SourceUnavailable => "SOURCE UNAVAILABLE",
            BadKeyTable => "BAD KEY TABLE",
            InputUnavailable => "INPUT UNAVAILABLE",
            NoValidCommands => "NO VALID COMMANDS",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if self.line_number.is_some() || (0..0) != self.column {
            write!(f, "{} IN{}", code_str, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}
