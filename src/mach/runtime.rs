use super::{Address, Instruction, KeyCode, KeyTable, Program};
use crate::error;
use crate::lang::ast::{DurationSpec, KeyName};
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// ## How a run ended
///
/// Aborting is a normal way to stop, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Aborted,
}

/// ## Result of executing one instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Control flow only; nothing for the host to do.
    Running,
    /// Block for this many milliseconds.
    Pause(u64),
    /// Hold the key for this many milliseconds then release it.
    Press(KeyName, KeyCode, u64),
    /// A diagnostic; the run continues.
    Error(Error),
    Stopped(Outcome),
}

/// ## Side effects of a running macro
///
/// `pause` and `press` block until their duration has passed.
/// `aborted` is polled once before every instruction.
pub trait Effects {
    fn pause(&mut self, ms: u64);
    fn press(&mut self, key: &str, code: KeyCode, ms: u64);
    fn aborted(&mut self) -> bool {
        false
    }
    fn report(&mut self, error: &Error) {
        tracing::warn!("{}", error);
    }
}

/// Run a program to the end or until `effects` reports an abort.
pub fn execute<E, R>(program: &Program, keys: &KeyTable, effects: &mut E, rng: R) -> Outcome
where
    E: Effects,
    R: Rng,
{
    let mut runtime = Runtime::with_rng(program, keys, rng);
    loop {
        if effects.aborted() {
            runtime.interrupt();
        }
        match runtime.execute() {
            Event::Running => {}
            Event::Pause(ms) => effects.pause(ms),
            Event::Press(key, code, ms) => effects.press(&key, code, ms),
            Event::Error(error) => effects.report(&error),
            Event::Stopped(outcome) => return outcome,
        }
    }
}

/// ## State of one run
///
/// Created fresh for every run and dropped when it stops.
pub struct Runtime<'a, R> {
    program: &'a Program,
    keys: &'a KeyTable,
    rng: R,
    pc: Address,
    loops: Vec<u32>,
    interrupted: bool,
    stopped: Option<Outcome>,
}

impl<'a> Runtime<'a, StdRng> {
    pub fn new(program: &'a Program, keys: &'a KeyTable) -> Runtime<'a, StdRng> {
        Runtime::with_rng(program, keys, StdRng::from_entropy())
    }
}

impl<'a, R: Rng> Runtime<'a, R> {
    pub fn with_rng(program: &'a Program, keys: &'a KeyTable, rng: R) -> Runtime<'a, R> {
        Runtime {
            program,
            keys,
            rng,
            pc: 0,
            loops: vec![],
            interrupted: false,
            stopped: None,
        }
    }

    /// The next call to `execute` stops with `Outcome::Aborted`.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    /// Number of loops currently open.
    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }

    /// Executes a single instruction. An interrupt only takes effect
    /// while instructions remain.
    pub fn execute(&mut self) -> Event {
        if let Some(outcome) = self.stopped {
            return Event::Stopped(outcome);
        }
        let program = self.program;
        let op = match program.op(self.pc) {
            Some(op) => op,
            None => return self.stop(Outcome::Completed),
        };
        if self.interrupted {
            return self.stop(Outcome::Aborted);
        }
        trace!(pc = self.pc, "{}", op);
        match op {
            Instruction::Pause(duration) => {
                let ms = self.millis(duration);
                self.pc += 1;
                Event::Pause(ms)
            }
            Instruction::Press(_, key, duration) => {
                let ms = self.millis(duration);
                let event = match self.keys.resolve(key) {
                    Some(code) => Event::Press(key.clone(), code, ms),
                    None => Event::Error(self.unknown_key(key)),
                };
                self.pc += 1;
                event
            }
            Instruction::Loop { count, .. } => {
                self.loops.push(*count);
                debug!(
                    pc = self.pc,
                    depth = self.loop_depth(),
                    "starting loop ({} iterations)",
                    count
                );
                self.pc += 1;
                Event::Running
            }
            Instruction::EndLoop { start } => {
                self.r#endloop(*start);
                Event::Running
            }
        }
    }

    fn r#endloop(&mut self, start: Option<Address>) {
        let (start, remaining) = match (start, self.loops.last_mut()) {
            (Some(start), Some(remaining)) => {
                *remaining = remaining.saturating_sub(1);
                (start, *remaining)
            }
            _ => {
                self.pc += 1;
                return;
            }
        };
        if remaining > 0 {
            self.pc = start + 1;
        } else {
            self.loops.pop();
            debug!(pc = self.pc, depth = self.loop_depth(), "loop completed");
            self.pc += 1;
        }
    }

    fn millis(&mut self, duration: &DurationSpec) -> u64 {
        match *duration {
            DurationSpec::Fixed(ms) => ms,
            DurationSpec::Range(min, max) => self.rng.gen_range(min..=max),
        }
    }

    fn unknown_key(&self, key: &str) -> Error {
        match self.program.line_number_for(self.pc) {
            Some(ln) => error!(UnknownKey, ln; key),
            None => error!(UnknownKey; key),
        }
    }

    fn stop(&mut self, outcome: Outcome) -> Event {
        debug!(pc = self.pc, "stopped: {:?}", outcome);
        self.stopped = Some(outcome);
        Event::Stopped(outcome)
    }
}
