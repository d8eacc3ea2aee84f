// src/readers/helpers.rs

//! Miscellaneous helper functions for _Readers_.

use crate::common::{FPath, ResultRepy};
use crate::data::catalog::Catalog;
use crate::printer::logger::Logger;
use crate::readers::archive::extract_from_zip;
use crate::readers::repyparser::parse;

use std::fs::File;
use std::io::BufReader;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Return the basename of an `FPath`.
pub fn basename(path: &FPath) -> FPath {
    let mut riter = path.rsplit(std::path::MAIN_SEPARATOR);

    FPath::from(riter.next().unwrap_or(""))
}

/// Helper function for completeness.
pub fn fpath_to_path(path: &FPath) -> &std::path::Path {
    std::path::Path::new(path)
}

/// Read and parse the REPY file at `path`, in code page 862.
///
/// Failing to read is [`RepyError::Io`].
///
/// [`RepyError::Io`]: crate::common::RepyError::Io
pub fn read_repy_file(
    path: &FPath,
    logger: &mut dyn Logger,
) -> ResultRepy<Catalog> {
    defn!("({:?})", path);
    let data: Vec<u8> = match std::fs::read(fpath_to_path(path)) {
        Ok(val) => val,
        Err(err) => {
            defx!("read error {}", err);
            return Err(err.into());
        }
    };
    defo!("read {} bytes from {:?}", data.len(), basename(path));
    let result = parse(&data, logger);
    defx!("return is_ok {}", result.is_ok());

    result
}

/// Extract member `member` of the ZIP archive at `path` then parse it as a
/// REPY.
pub fn read_repy_zip_file(
    path: &FPath,
    member: &str,
    logger: &mut dyn Logger,
) -> ResultRepy<Catalog> {
    defn!("({:?}, {:?})", path, member);
    let file = File::open(fpath_to_path(path))?;
    let data: Vec<u8> = extract_from_zip(BufReader::new(file), member)?;
    defo!("extracted {} bytes", data.len());
    let result = parse(&data, logger);
    defx!("return is_ok {}", result.is_ok());

    result
}
