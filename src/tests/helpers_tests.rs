// src/tests/helpers_tests.rs

//! tests for `readers/helpers.rs`

use crate::common::{FPath, RepyError, REPY_MEMBER_NAME};
use crate::data::codepage::encode_cp862;
use crate::debug::helpers::{create_temp_file, create_temp_file_bytes, ntf_fpath, NamedTempFile};
use crate::printer::logger::{MemoryLogger, NullLogger};
use crate::readers::helpers::{basename, read_repy_file, read_repy_zip_file};
use crate::tests::common::{course_44101, FACULTY_NAME, FACULTY_ONE_COURSE};

use std::io::{Cursor, ErrorKind, Write};

use ::test_case::test_case;
use ::zip::write::SimpleFileOptions;
use ::zip::{CompressionMethod, ZipWriter};

#[cfg(not(target_os = "windows"))]
#[test_case("/a/b/c.txt", "c.txt")]
#[test_case("/a/b/", "")]
#[test_case("REPY", "REPY")]
#[test_case("", ""; "empty")]
fn test_basename(
    path: &str,
    expect: &str,
) {
    assert_eq!(basename(&FPath::from(path)), expect);
}

fn repy_temp_file() -> NamedTempFile {
    let data = encode_cp862(FACULTY_ONE_COURSE).unwrap();
    create_temp_file_bytes(&data)
}

#[test]
fn test_read_repy_file() {
    let ntf = repy_temp_file();
    let mut logger = MemoryLogger::new();
    let catalog = read_repy_file(&ntf_fpath(&ntf), &mut logger).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.faculties[0].name, FACULTY_NAME);
    assert_eq!(catalog.faculties[0].courses, vec![course_44101()]);
    assert_eq!(logger.flushes, 1);
}

#[test]
fn test_read_repy_file_missing() {
    let path = FPath::from("/THIS/PATH/DOES/NOT/EXIST/REPY");
    let err = read_repy_file(&path, &mut NullLogger).unwrap_err();
    match err {
        RepyError::Io(err) => assert_eq!(err.kind(), ErrorKind::NotFound),
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn test_read_repy_file_not_a_repy() {
    let ntf = create_temp_file("this is not a REPY\n");
    let err = read_repy_file(&ntf_fpath(&ntf), &mut NullLogger).unwrap_err();
    assert!(matches!(err.root(), RepyError::StructuralMismatch { line: 1, .. }), "{}", err);
}

#[test]
fn test_read_repy_zip_file() {
    let data = encode_cp862(FACULTY_ONE_COURSE).unwrap();
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer.start_file(REPY_MEMBER_NAME, options).unwrap();
    writer.write_all(&data).unwrap();
    let archive: Vec<u8> = writer.finish().unwrap().into_inner();
    let ntf = create_temp_file_bytes(&archive);

    let catalog = read_repy_zip_file(&ntf_fpath(&ntf), REPY_MEMBER_NAME, &mut NullLogger).unwrap();
    assert_eq!(catalog.course_count(), 1);

    let err = read_repy_zip_file(&ntf_fpath(&ntf), "OTHER", &mut NullLogger).unwrap_err();
    match err {
        RepyError::Io(err) => assert_eq!(err.kind(), ErrorKind::NotFound),
        other => panic!("expected Io, got {:?}", other),
    }
}
