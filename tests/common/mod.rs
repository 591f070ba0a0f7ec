#![allow(dead_code)]
use keymacro::lang::Error;
use keymacro::mach::{compile, execute, Effects, KeyCode, KeyTable, Outcome, Program};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Writes every effect to a transcript instead of performing it.
#[derive(Default)]
pub struct Transcript {
    pub text: String,
    pub effects: usize,
    pub abort_after: Option<usize>,
}

impl Effects for Transcript {
    fn pause(&mut self, ms: u64) {
        self.effects += 1;
        self.text.push_str(&format!("PAUSE {}\n", ms));
    }
    fn press(&mut self, key: &str, code: KeyCode, ms: u64) {
        self.effects += 1;
        self.text.push_str(&format!("{} 0x{:02X} {}\n", key, code, ms));
    }
    fn aborted(&mut self) -> bool {
        matches!(self.abort_after, Some(n) if self.effects >= n)
    }
    fn report(&mut self, error: &Error) {
        self.text.push_str(&format!("?{}\n", error));
    }
}

pub fn exec(source: &str) -> String {
    exec_program(&compile(source.lines()), None).1
}

pub fn exec_n(source: &str, abort_after: usize) -> (Outcome, String) {
    exec_program(&compile(source.lines()), Some(abort_after))
}

pub fn exec_program(program: &Program, abort_after: Option<usize>) -> (Outcome, String) {
    let keys = KeyTable::standard();
    let mut transcript = Transcript {
        abort_after,
        ..Transcript::default()
    };
    let outcome = execute(program, &keys, &mut transcript, StdRng::seed_from_u64(42));
    (outcome, transcript.text)
}

/// Diagnostics of a compiled script, one per line.
pub fn diagnostics(source: &str) -> String {
    let program = compile(source.lines());
    let mut s = String::new();
    for error in program.errors() {
        s.push_str(&format!("{}\n", error));
    }
    s
}
