use super::*;
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod runtime_test;

#[derive(Default)]
struct Recorder {
    log: String,
    effects: usize,
    abort_after: Option<usize>,
}

impl Effects for Recorder {
    fn pause(&mut self, ms: u64) {
        self.effects += 1;
        self.log.push_str(&format!("PAUSE {}\n", ms));
    }
    fn press(&mut self, key: &str, code: KeyCode, ms: u64) {
        self.effects += 1;
        self.log.push_str(&format!("{} {} {}\n", key, code, ms));
    }
    fn aborted(&mut self) -> bool {
        matches!(self.abort_after, Some(n) if self.effects >= n)
    }
    fn report(&mut self, error: &Error) {
        self.log.push_str(&format!("{}\n", error));
    }
}

fn run(source: &str) -> String {
    run_until(source, None).1
}

fn run_until(source: &str, abort_after: Option<usize>) -> (Outcome, String) {
    let program = compile(source.lines());
    let keys = KeyTable::standard();
    let mut recorder = Recorder {
        abort_after,
        ..Recorder::default()
    };
    let outcome = execute(&program, &keys, &mut recorder, StdRng::seed_from_u64(7));
    (outcome, recorder.log)
}
