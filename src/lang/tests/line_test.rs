use super::*;

#[test]
fn test_crlf() {
    let l = Line::new(1, "endloop\r\n");
    assert_eq!(l.to_string(), "ENDLOOP");
}

#[test]
fn test_number() {
    let l = Line::new(42, "KEY A");
    assert_eq!(l.number(), 42);
}

#[test]
fn test_blank_is_empty() {
    assert!(Line::new(1, "").is_empty());
    assert!(Line::new(1, " \t ").is_empty());
}

#[test]
fn test_comments_are_empty() {
    assert!(Line::new(1, "# pause 3").is_empty());
    assert!(Line::new(1, "  ; key a").is_empty());
    assert!(!Line::new(1, "KEY #").is_empty());
}

#[test]
fn test_display_keeps_key_case() {
    let l = Line::new(1, "  keydown   shift 100  ");
    assert_eq!(l.to_string(), "  KEYDOWN   shift 100");
}

#[test]
fn test_source_is_kept_as_written() {
    let l = Line::new(3, "\tpause  abc \r\n");
    assert_eq!(l.source(), "\tpause  abc ");
    let e = l.ast().unwrap_err();
    assert_eq!(e.detail(), "\tpause  abc ");
    assert_eq!(e.column(), 8..11);
    assert_eq!(&l.source()[8..11], "abc");
}
