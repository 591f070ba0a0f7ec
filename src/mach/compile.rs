use super::{Instruction, PressKind, Program};
use crate::error;
use crate::lang::ast::{DurationSpec, Statement};
use crate::lang::{Column, Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// Hold time of the `KEY` statement in milliseconds.
pub const KEY_TAP_MS: u64 = 50;

/// Compile script lines, numbering them from 1.
pub fn compile<I, S>(lines: I) -> Program
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut program = Program::new();
    for (index, text) in lines.into_iter().enumerate() {
        program.compile(Some(&Line::new(index + 1, text.as_ref())));
    }
    program.link();
    program
}

pub fn compile_line(prog: &mut Program, line: &Line) {
    let statement = match line.ast() {
        Ok(Some(statement)) => statement,
        Ok(None) => return,
        Err(e) => return prog.error(e),
    };
    if let Err(e) = Compiler::statement(prog, line, statement) {
        prog.error(e)
    }
}

struct Compiler;

impl Compiler {
    fn statement(prog: &mut Program, line: &Line, statement: Statement) -> Result<()> {
        let ln = line.number();
        match statement {
            Statement::Pause(_, duration) => {
                prog.push(ln, Instruction::Pause(duration));
            }
            Statement::KeyDown(_, key, duration) => {
                prog.push(ln, Instruction::Press(PressKind::KeyDown, key, duration));
            }
            Statement::KeyPress(_, key, duration) => {
                prog.push(ln, Instruction::Press(PressKind::KeyPress, key, duration));
            }
            Statement::Key(_, key) => {
                let duration = DurationSpec::Fixed(KEY_TAP_MS);
                prog.push(ln, Instruction::Press(PressKind::Key, key, duration));
            }
            Statement::Loop(col, count) => Compiler::r#loop(prog, line, &col, count),
            Statement::EndLoop(col) => Compiler::r#endloop(prog, line, &col)?,
        }
        Ok(())
    }

    fn r#loop(prog: &mut Program, line: &Line, col: &Column, count: u32) {
        let ln = line.number();
        let unclosed = error!(LoopWithoutEndloop, ln, ..col; line.source());
        prog.open_loop(ln, count, unclosed);
    }

    fn r#endloop(prog: &mut Program, line: &Line, col: &Column) -> Result<()> {
        match prog.close_loop(line.number()) {
            Some(_) => Ok(()),
            None => Err(error!(EndloopWithoutLoop, line.number(), ..col; line.source())),
        }
    }
}
