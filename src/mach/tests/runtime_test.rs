use super::*;
use crate::lang::ast::DurationSpec;

#[test]
fn test_press_durations() {
    let s = run("KEYDOWN W 200\nKEYPRESS space 75\nPAUSE 0.25");
    assert_eq!(s, "W 87 200\nSPACE 32 75\nPAUSE 250\n");
}

#[test]
fn test_unknown_key_is_reported_and_skipped() {
    assert_eq!(run("KEY FOO\nKEY A"), "UNKNOWN KEY IN 1; FOO\nA 65 50\n");
}

#[test]
fn test_ranges_stay_in_bounds() {
    let prog = compile("LOOP 50\nPAUSE 1-3\nKEYDOWN A 20-10\nENDLOOP".lines());
    let keys = KeyTable::standard();
    let mut r = Runtime::with_rng(&prog, &keys, StdRng::seed_from_u64(1));
    let mut pauses = 0;
    let mut presses = 0;
    loop {
        match r.execute() {
            Event::Pause(ms) => {
                assert!((1000..=3000).contains(&ms), "{}", ms);
                pauses += 1;
            }
            Event::Press(_, _, ms) => {
                assert!((10..=20).contains(&ms), "{}", ms);
                presses += 1;
            }
            Event::Stopped(outcome) => {
                assert_eq!(outcome, Outcome::Completed);
                break;
            }
            Event::Running => {}
            Event::Error(e) => panic!("{}", e),
        }
    }
    assert_eq!(pauses, 50);
    assert_eq!(presses, 50);
}

#[test]
fn test_stepping() {
    let prog = compile("PAUSE 1\nLOOP 2\nKEY A\nENDLOOP".lines());
    let keys = KeyTable::standard();
    let mut r = Runtime::new(&prog, &keys);
    assert_eq!(r.execute(), Event::Pause(1000));
    assert_eq!(r.execute(), Event::Running);
    assert_eq!(r.loop_depth(), 1);
    assert_eq!(r.execute(), Event::Press("A".into(), 0x41, 50));
    assert_eq!(r.execute(), Event::Running);
    assert_eq!(r.pc(), 2);
    assert_eq!(r.execute(), Event::Press("A".into(), 0x41, 50));
    assert_eq!(r.execute(), Event::Running);
    assert_eq!(r.loop_depth(), 0);
    assert_eq!(r.execute(), Event::Stopped(Outcome::Completed));
    assert_eq!(r.execute(), Event::Stopped(Outcome::Completed));
}

#[test]
fn test_interrupt() {
    let prog = compile("KEY A\nKEY B".lines());
    let keys = KeyTable::standard();
    let mut r = Runtime::new(&prog, &keys);
    r.interrupt();
    assert_eq!(r.execute(), Event::Stopped(Outcome::Aborted));
    assert_eq!(r.execute(), Event::Stopped(Outcome::Aborted));
}

#[test]
fn test_abort_before_start() {
    let (outcome, s) = run_until("KEY A\nPAUSE 1", Some(0));
    assert_eq!(outcome, Outcome::Aborted);
    assert_eq!(s, "");
}

#[test]
fn test_abort_after_last_instruction_completes() {
    let (outcome, s) = run_until("KEY A", Some(1));
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(s, "A 65 50\n");
}

#[test]
fn test_interrupt_at_end_completes() {
    let prog = compile("KEY A".lines());
    let keys = KeyTable::standard();
    let mut r = Runtime::new(&prog, &keys);
    assert_eq!(r.execute(), Event::Press("A".into(), 0x41, 50));
    r.interrupt();
    assert_eq!(r.execute(), Event::Stopped(Outcome::Completed));
}

#[test]
fn test_abort_inside_loop() {
    let (outcome, s) = run_until("LOOP 100\nKEY A\nENDLOOP", Some(2));
    assert_eq!(outcome, Outcome::Aborted);
    assert_eq!(s, "A 65 50\nA 65 50\n");
}

#[test]
fn test_empty_program_completes() {
    let (outcome, s) = run_until("# nothing\n\n", None);
    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(s, "");
    assert_eq!(
        compile(Some("PAUSE 2")).ops(),
        &[Instruction::Pause(DurationSpec::Fixed(2000))]
    );
}
