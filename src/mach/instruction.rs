use super::Address;
use crate::lang::ast::{DurationSpec, KeyName};

/// ## Macro machine instruction set
///
/// A compiled macro is a flat list of instructions walked by a program
/// counter. Loops are the only branches. Their addresses are filled in
/// by the compiler when a `LOOP` meets its `ENDLOOP`.
///
/// For example: `LOOP 2 / KEY A / ENDLOOP` compiles to
/// `[Loop(2, end 2), Press(Key, A, 50), EndLoop(start 0)]`

#[derive(Clone, PartialEq)]
pub enum Instruction {
    /// Block for a duration in milliseconds.
    Pause(DurationSpec),
    /// Hold a key down for a duration in milliseconds then release it.
    Press(PressKind, KeyName, DurationSpec),
    /// Push the count on the loop stack. `end` is the matching `EndLoop`.
    Loop { count: u32, end: Option<Address> },
    /// Decrement the loop stack and branch to the instruction after
    /// `start` until it reaches zero. Without a `start` it does nothing.
    EndLoop { start: Option<Address> },
}

/// Which statement produced a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKind {
    KeyDown,
    KeyPress,
    Key,
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Instruction::*;
        match self {
            Pause(d) => write!(f, "PAUSE({})", d),
            Press(kind, key, d) => write!(f, "{}({} {})", kind, key, d),
            Loop { count, end: None } => write!(f, "LOOP({})", count),
            Loop {
                count,
                end: Some(a),
            } => write!(f, "LOOP({} END {})", count, a),
            EndLoop { start: None } => write!(f, "ENDLOOP"),
            EndLoop { start: Some(a) } => write!(f, "ENDLOOP(START {})", a),
        }
    }
}

impl std::fmt::Display for PressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use PressKind::*;
        match self {
            KeyDown => write!(f, "KEYDOWN"),
            KeyPress => write!(f, "KEYPRESS"),
            Key => write!(f, "KEY"),
        }
    }
}
