use super::compile::compile_line;
use super::{Address, Instruction, Link};
use crate::error;
use crate::lang::{Error, Line, LineNumber};

/// ## Compiled macro
///
/// Instructions, the script line each one came from, and every
/// diagnostic produced while compiling.

#[derive(Debug, Default)]
pub struct Program {
    ops: Vec<Instruction>,
    lines: Vec<usize>,
    link: Link,
    errors: Vec<Error>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Compile every line read from a source. Bad lines become
    /// diagnostics; failing to read the source is the only fatal error.
    pub fn load<I>(source: I) -> Result<Program, Error>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        let mut program = Program::new();
        for (index, text) in source.into_iter().enumerate() {
            match text {
                Err(error) => {
                    let msg = format!("In line {} of the file. {}", index + 1, error);
                    return Err(error!(SourceUnavailable; &msg));
                }
                Ok(text) => program.compile(Some(&Line::new(index + 1, &text))),
            }
        }
        program.link();
        Ok(program)
    }

    pub fn compile<'a, T: IntoIterator<Item = &'a Line>>(&mut self, lines: T) {
        for line in lines {
            compile_line(self, line);
        }
    }

    /// Report loops that were never closed.
    pub fn link(&mut self) {
        let mut errors = self.link.link();
        self.errors.append(&mut errors);
    }

    pub fn error(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn push(&mut self, line_number: usize, op: Instruction) -> Address {
        self.ops.push(op);
        self.lines.push(line_number);
        self.ops.len() - 1
    }

    pub fn open_loop(&mut self, line_number: usize, count: u32, unclosed: Error) -> Address {
        let addr = self.push(line_number, Instruction::Loop { count, end: None });
        self.link.open_loop(addr, unclosed);
        addr
    }

    /// Emits the `EndLoop` even when nothing is open to close.
    pub fn close_loop(&mut self, line_number: usize) -> Option<Address> {
        let start = self.link.close_loop();
        let end = self.push(line_number, Instruction::EndLoop { start });
        if let Some(start) = start {
            if let Some(Instruction::Loop { end: loop_end, .. }) = self.ops.get_mut(start) {
                *loop_end = Some(end);
            }
        }
        start
    }

    pub fn op(&self, addr: Address) -> Option<&Instruction> {
        self.ops.get(addr)
    }

    pub fn ops(&self) -> &[Instruction] {
        &self.ops
    }

    pub fn line_number_for(&self, addr: Address) -> LineNumber {
        self.lines.get(addr).copied()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (addr, (op, line)) in self.ops.iter().zip(self.lines.iter()).enumerate() {
            writeln!(f, "{:>4} {:>5}  {}", addr, line, op)?;
        }
        Ok(())
    }
}
