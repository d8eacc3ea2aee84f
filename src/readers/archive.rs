// src/readers/archive.rs

//! Extract the REPY from the archive the Technion publishes it in.
//!
//! The archive at [`REPFILE_URL`] is a ZIP file holding one member named
//! [`REPY_MEMBER_NAME`].
//!
//! [`REPFILE_URL`]: crate::common::REPFILE_URL
//! [`REPY_MEMBER_NAME`]: crate::common::REPY_MEMBER_NAME

use std::io::{Error, ErrorKind, Read, Result, Seek};

#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfo, dpfx};
use ::zip::result::ZipError;
use ::zip::ZipArchive;

/// Convert a [`ZipError`] to an `io::Error` of a fitting `ErrorKind`.
///
/// [`ZipError`]: https://docs.rs/zip/2.2.0/zip/result/enum.ZipError.html
fn zip_error_to_io(
    err: ZipError,
    member: &str,
) -> Error {
    match err {
        ZipError::Io(err) => err,
        ZipError::FileNotFound => Error::new(
            ErrorKind::NotFound,
            format!("archive has no member {:?}", member),
        ),
        err => Error::new(ErrorKind::InvalidData, format!("bad archive: {}", err)),
    }
}

/// Most bytes preallocated for a member, whatever size its header declares.
pub const MEMBER_PREALLOC_MAX: u64 = 1 << 24;

/// Buffer capacity for a member whose header declares `size` bytes.
/// `read_to_end` grows the buffer past this when the member is larger.
pub(crate) fn member_capacity(size: u64) -> usize {
    size.min(MEMBER_PREALLOC_MAX) as usize
}

/// Return the bytes of archive member `member` from the ZIP archive read
/// from `reader`.
///
/// A missing member is `ErrorKind::NotFound`, a malformed archive is
/// `ErrorKind::InvalidData`.
pub fn extract_from_zip<R: Read + Seek>(
    reader: R,
    member: &str,
) -> Result<Vec<u8>> {
    dpfn!("({:?})", member);
    let mut archive = match ZipArchive::new(reader) {
        Ok(val) => val,
        Err(err) => {
            dpfx!("ZipArchive::new Error {}", err);
            return Err(zip_error_to_io(err, member));
        }
    };
    dpfo!("archive has {} members", archive.len());

    let mut file = match archive.by_name(member) {
        Ok(val) => val,
        Err(err) => {
            dpfx!("by_name({:?}) Error {}", member, err);
            return Err(zip_error_to_io(err, member));
        }
    };
    let mut buffer: Vec<u8> = Vec::with_capacity(member_capacity(file.size()));
    file.read_to_end(&mut buffer)?;
    dpfx!("return {} bytes", buffer.len());

    Ok(buffer)
}
