use crate::lang::Error;
use crate::mach::{execute, KeyTable, Outcome, Program};
use crate::error;
use ansi_term::Style;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

mod console;
#[cfg(feature = "enigo")]
mod inject;

pub use console::Console;
#[cfg(feature = "enigo")]
pub use inject::Injector;

/// Longest sleep between two looks at the abort flag.
const SLICE_MS: u64 = 10;

#[derive(Parser, Debug)]
#[command(name = "keymacro", version, about = "Compile and play keyboard macro scripts")]
pub struct Args {
    /// Macro script to run
    #[arg(default_value = "macro.ini")]
    pub file: PathBuf,

    /// Seconds to wait before the macro starts
    #[arg(long, value_name = "SECONDS", default_value_t = 3)]
    pub delay: u64,

    /// Compile only; exit with 1 if the script has any diagnostics
    #[arg(long)]
    pub check: bool,

    /// Print the compiled program and exit
    #[arg(long)]
    pub list: bool,

    /// TOML file with extra key names under a [keys] table
    #[arg(long, value_name = "FILE")]
    pub keys: Option<PathBuf>,

    /// Seed for random durations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log key presses instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn main() {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Ctrl-C will not stop the macro: {}", error);
    }

    let code = match main_loop(&args, interrupted) {
        Ok(code) => code,
        Err(error) => {
            print_error(&error);
            1
        }
    };
    std::process::exit(code);
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> Result<i32, Error> {
    let mut keys = KeyTable::standard();
    if let Some(path) = &args.keys {
        keys.merge(load_keys(path)?);
    }
    let program = load(&args.file)?;
    for error in program.errors() {
        print_error(error);
    }
    if args.list {
        print!("{}", program);
    }
    if args.check {
        return Ok(if program.errors().is_empty() { 0 } else { 1 });
    }
    if args.list {
        return Ok(0);
    }
    if program.is_empty() {
        print_error(&error!(NoValidCommands));
        return Ok(1);
    }
    info!(
        "{} instructions loaded from {}",
        program.len(),
        args.file.display()
    );

    if countdown(args.delay, &interrupted) {
        info!("aborted before start");
        return Ok(0);
    }
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let outcome = run(args, &program, &keys, interrupted, rng)?;
    match outcome {
        Outcome::Completed => info!("macro completed"),
        Outcome::Aborted => info!("macro aborted"),
    }
    Ok(0)
}

#[cfg(feature = "enigo")]
fn run(
    args: &Args,
    program: &Program,
    keys: &KeyTable,
    interrupted: Arc<AtomicBool>,
    rng: StdRng,
) -> Result<Outcome, Error> {
    if args.dry_run {
        return Ok(execute(program, keys, &mut Console::new(interrupted), rng));
    }
    let mut injector = Injector::new(interrupted)?;
    Ok(execute(program, keys, &mut injector, rng))
}

#[cfg(not(feature = "enigo"))]
fn run(
    args: &Args,
    program: &Program,
    keys: &KeyTable,
    interrupted: Arc<AtomicBool>,
    rng: StdRng,
) -> Result<Outcome, Error> {
    if !args.dry_run {
        tracing::debug!("built without key injection; logging key presses only");
    }
    Ok(execute(program, keys, &mut Console::new(interrupted), rng))
}

/// Compile a script file. Only a missing or unreadable file is an error.
pub fn load(path: &Path) -> Result<Program, Error> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            return Err(error!(SourceUnavailable; &msg));
        }
    };
    Program::load(BufReader::new(file).lines())
}

pub fn load_keys(path: &Path) -> Result<KeyTable, Error> {
    match std::fs::read_to_string(path) {
        Ok(s) => KeyTable::from_toml_str(&s),
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            Err(error!(BadKeyTable; &msg))
        }
    }
}

/// Returns true if aborted while waiting.
fn countdown(seconds: u64, interrupted: &AtomicBool) -> bool {
    for remaining in (1..=seconds).rev() {
        info!("starting in {}...", remaining);
        if hold(1000, interrupted) {
            return true;
        }
    }
    interrupted.load(Ordering::SeqCst)
}

/// Sleep in short slices. Returns true if the abort flag was raised.
fn hold(ms: u64, interrupted: &AtomicBool) -> bool {
    let mut left = ms;
    while left > 0 {
        if interrupted.load(Ordering::SeqCst) {
            return true;
        }
        let slice = left.min(SLICE_MS);
        std::thread::sleep(Duration::from_millis(slice));
        left -= slice;
    }
    interrupted.load(Ordering::SeqCst)
}

fn print_error(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
    if error.line_number().is_some() && error.column() != (0..0) {
        eprintln!("    {}", decorate(error.detail(), &error.column()));
    }
}

/// Underline the columns of `ins`. A column just past the end underlines
/// a space so missing arguments still show.
fn decorate(ins: &str, column: &std::ops::Range<usize>) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    let mut index = 0;
    for char in ins.chars() {
        let do_under = column.contains(&index);
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(char);
        index += 1;
    }
    if column.start == index {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_plain_when_column_outside() {
        assert_eq!(decorate("PAUSE 1", &(20..25)), "PAUSE 1");
    }

    #[test]
    fn test_decorate_missing_argument() {
        let s = decorate("PAUSE", &(5..5));
        assert!(s.starts_with("PAUSE"));
        assert!(s.contains(' '));
    }

    #[test]
    fn test_hold_returns_early() {
        let flag = AtomicBool::new(true);
        assert!(hold(60_000, &flag));
        let flag = AtomicBool::new(false);
        assert!(!hold(0, &flag));
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["keymacro", "--delay", "0", "--seed", "9", "run.ini"]);
        assert_eq!(args.file, PathBuf::from("run.ini"));
        assert_eq!(args.delay, 0);
        assert_eq!(args.seed, Some(9));
        let args = Args::parse_from(["keymacro"]);
        assert_eq!(args.file, PathBuf::from("macro.ini"));
        assert_eq!(args.delay, 3);
        assert!(!args.dry_run);
    }
}
