mod common;
use common::*;
use keymacro::lang::ast::DurationSpec;
use keymacro::lang::ErrorCode;
use keymacro::mach::{compile, Instruction, PressKind};

#[test]
fn test_bad_lines_are_skipped() {
    let program = compile(vec!["PAUSE abc", "KEY A", "JUMP", "KEYDOWN", "PAUSE 2"]);
    assert_eq!(program.len(), 2);
    assert_eq!(
        diagnostics("PAUSE abc\nKEY A\nJUMP\nKEYDOWN\nPAUSE 2"),
        "INVALID PAUSE DURATION IN 1 (6..9); PAUSE abc\n\
         UNKNOWN COMMAND IN 3 (0..4); JUMP\n\
         MISSING KEY IN 4 (7..7); KEYDOWN\n"
    );
}

#[test]
fn test_diagnostic_keeps_line_as_written() {
    assert_eq!(
        diagnostics("  loop\tx\nKEY A\nendloop  "),
        "INVALID LOOP COUNT IN 1 (7..8);   loop\tx\n\
         ENDLOOP WITHOUT LOOP IN 3 (0..7); endloop  \n"
    );
}

#[test]
fn test_line_numbers_count_blank_lines() {
    let program = compile(vec!["", "# comment", "KEY A"]);
    assert_eq!(program.line_number_for(0), Some(3));
    assert_eq!(program.line_number_for(1), None);
}

#[test]
fn test_instructions() {
    let program = compile(vec!["pause 1-3", "keypress Q 30-10", "key tab extra"]);
    assert_eq!(
        program.ops(),
        &[
            Instruction::Pause(DurationSpec::Range(1000, 3000)),
            Instruction::Press(PressKind::KeyPress, "Q".into(), DurationSpec::Range(10, 30)),
            Instruction::Press(PressKind::Key, "TAB".into(), DurationSpec::Fixed(50)),
        ]
    );
    assert!(program.errors().is_empty());
}

#[test]
fn test_loop_diagnostics() {
    let program = compile(vec!["ENDLOOP", "LOOP 2", "LOOP 3", "KEY A", "ENDLOOP"]);
    let errors: Vec<_> = program
        .errors()
        .iter()
        .map(|e| (e.code(), e.line_number()))
        .collect();
    assert_eq!(
        errors,
        vec![
            (ErrorCode::EndloopWithoutLoop, Some(1)),
            (ErrorCode::LoopWithoutEndloop, Some(2)),
        ]
    );
}

#[test]
fn test_invalid_loop_counts() {
    assert_eq!(
        diagnostics("LOOP -1\nLOOP 2.5\nLOOP"),
        "INVALID LOOP COUNT IN 1 (5..7); LOOP -1\n\
         INVALID LOOP COUNT IN 2 (5..8); LOOP 2.5\n\
         INVALID LOOP COUNT IN 3 (4..4); LOOP\n"
    );
}

#[test]
fn test_listing() {
    let program = compile(vec!["LOOP 3", "  PAUSE 1-3", "  KEY a", "ENDLOOP"]);
    assert_eq!(
        program.to_string(),
        "   0     1  LOOP(3 END 3)\n   \
            1     2  PAUSE(1000..=3000)\n   \
            2     3  KEY(A 50)\n   \
            3     4  ENDLOOP(START 0)\n"
    );
}
