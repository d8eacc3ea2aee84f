// src/tests/printers_tests.rs

//! tests for `printer/` modules

use crate::data::catalog::{Catalog, Faculty};
use crate::debug::printers::{char_to_char_noraw, str_to_String_noraw};
use crate::printer::logger::{Level, Logger, MemoryLogger, NullLogger, WriterLogger};
use crate::printer::printers::{print_colored, Color};
use crate::printer::summary::write_summary;
use crate::tests::common::{course_44101, FACULTY_NAME, FACULTY_SEMESTER};

use ::termcolor::Buffer;
use ::test_case::test_case;

fn catalog_one_course() -> Catalog {
    Catalog {
        faculties: vec![Faculty {
            name: FACULTY_NAME.to_string(),
            semester: FACULTY_SEMESTER.to_string(),
            courses: vec![course_44101()],
        }],
    }
}

#[test]
fn test_writer_logger() {
    let mut logger = WriterLogger::new(Vec::<u8>::new());
    logger.info("Line 1: started");
    logger.warn("Line 2: something odd");
    logger.flush();
    let written = String::from_utf8(logger.into_inner()).unwrap();
    assert_eq!(written, "I Line 1: started\nW Line 2: something odd\n");
}

#[test]
fn test_memory_logger() {
    let mut logger = MemoryLogger::new();
    logger.info("a");
    logger.warn("b");
    logger.info("c");
    assert_eq!(logger.messages(Level::Info), vec!["a", "c"]);
    assert_eq!(logger.warnings(), vec!["b"]);
    assert_eq!(logger.records.len(), 3);
    assert_eq!(logger.flushes, 0);
    logger.flush();
    assert_eq!(logger.flushes, 1);
}

#[test]
fn test_null_logger() {
    let logger: &mut dyn Logger = &mut NullLogger;
    logger.info("a");
    logger.warn("b");
    logger.flush();
}

#[test]
fn test_print_colored_no_color() {
    let mut buffer = Buffer::no_color();
    print_colored(Some(Color::Red), b"hello\n", &mut buffer).unwrap();
    print_colored(None, b"world\n", &mut buffer).unwrap();
    assert_eq!(buffer.as_slice(), b"hello\nworld\n");
}

#[test]
fn test_print_colored_ansi() {
    let mut buffer = Buffer::ansi();
    print_colored(Some(Color::Red), b"hello", &mut buffer).unwrap();
    let written = String::from_utf8(buffer.into_inner()).unwrap();
    assert!(written.contains("hello"), "{:?}", written);
    assert!(written.starts_with('\x1b'), "{:?}", written);
}

#[test]
fn test_write_summary() {
    let mut buffer = Buffer::no_color();
    write_summary(&catalog_one_course(), &mut buffer).unwrap();
    let written = String::from_utf8(buffer.into_inner()).unwrap();
    assert_eq!(written, "faculty(הנדסת חשמל, 1)\nfaculties: 1, courses: 1\n");
}

#[test]
fn test_write_summary_empty() {
    let mut buffer = Buffer::no_color();
    write_summary(&Catalog::default(), &mut buffer).unwrap();
    assert_eq!(buffer.as_slice(), b"faculties: 0, courses: 0\n");
}

#[test_case('\n', '␊'; "newline")]
#[test_case('\t', '␉'; "tab")]
#[test_case('\0', '␀'; "nul")]
#[test_case('\x7F', '␡'; "del")]
#[test_case('א', 'א'; "alef")]
#[test_case(' ', ' '; "space")]
fn test_char_to_char_noraw(
    c: char,
    expect: char,
) {
    assert_eq!(char_to_char_noraw(c), expect);
}

#[test]
fn test_str_to_string_noraw() {
    assert_eq!(str_to_String_noraw("| םוי\t|\r"), "| םוי␉|␍");
}
