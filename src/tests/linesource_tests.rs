// src/tests/linesource_tests.rs

//! tests for `linesource.rs`

use ::test_case::test_case;

use crate::common::{RepyError, EOF_HITS_MAX};
use crate::readers::linesource::LineSource;

#[test]
fn test_new_before_first_advance() {
    let source = LineSource::new("one\ntwo\n");
    assert_eq!(source.current_line(), "");
    assert_eq!(source.line_number(), 0);
    assert_eq!(source.count_lines(), 2);
    assert!(!source.is_eof());
}

#[test_case("one\ntwo\n", &["one", "two"]; "trailing newline")]
#[test_case("one\ntwo", &["one", "two"]; "no trailing newline")]
#[test_case("one\r\ntwo\r\n", &["one", "two"]; "crlf")]
#[test_case("one\n\n  \nfour", &["one", "", "  ", "four"]; "blank lines kept")]
#[test_case("", &[]; "empty")]
fn test_advance_lines(
    text: &str,
    expected: &[&str],
) {
    let mut source = LineSource::new(text);
    let mut lines: Vec<String> = Vec::new();
    while source.advance().unwrap() {
        assert_eq!(source.line_number(), lines.len() + 1);
        lines.push(source.current_line().to_string());
    }
    assert_eq!(lines, expected);
    assert_eq!(source.current_line(), "");
    assert!(source.is_eof());
    assert_eq!(source.eof_hits(), 1);
}

#[test]
fn test_line_number_kept_after_eof() {
    let mut source = LineSource::new("a\nb\n");
    assert!(source.advance().unwrap());
    assert!(source.advance().unwrap());
    assert!(!source.advance().unwrap());
    assert_eq!(source.line_number(), 2);
}

#[test]
fn test_from_cp862() {
    let mut source = LineSource::from_cp862(&[b'|', 0x99, 0x8c, 0x85, 0x8d, b'|', b'\r', b'\n']);
    assert!(source.advance().unwrap());
    assert_eq!(source.current_line(), "|שלום|");
}

#[test]
fn test_eof_exhaustion() {
    let mut source = LineSource::new("only\n");
    assert!(source.advance().unwrap());
    for hit in 1..=EOF_HITS_MAX {
        assert!(!source.advance().unwrap(), "hit {}", hit);
        assert_eq!(source.eof_hits(), hit);
    }
    match source.advance() {
        Err(RepyError::EofExhaustion { line, hits }) => {
            assert_eq!(line, 1);
            assert_eq!(hits, EOF_HITS_MAX + 1);
        }
        other => panic!("expected EofExhaustion, got {:?}", other),
    }
}
