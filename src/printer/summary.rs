// src/printer/summary.rs

//! CLI option `--summary` printing functions.
//! Only used by `repy.rs`.

use crate::data::catalog::Catalog;
use crate::debug::printers::de_err;
use crate::printer::printers::{print_colored, ColorChoice, StandardStream, WriteColor, COLOR_FACULTY};

/// Write one `faculty(<name>, <course count>)` line per faculty of
/// `catalog`, then a line of totals.
pub fn write_summary<W: WriteColor>(
    catalog: &Catalog,
    out: &mut W,
) -> std::io::Result<()> {
    for faculty in catalog.iter() {
        print_colored(Some(COLOR_FACULTY), format!("{}\n", faculty).as_bytes(), out)?;
    }
    let totals = format!(
        "faculties: {}, courses: {}\n",
        catalog.len(),
        catalog.course_count()
    );
    print_colored(None, totals.as_bytes(), out)
}

/// [`write_summary`] to stderr.
pub fn print_summary(
    catalog: &Catalog,
    color_choice: ColorChoice,
) {
    let mut stderr = StandardStream::stderr(color_choice);
    if let Err(_err) = write_summary(catalog, &mut stderr) {
        de_err!("write_summary failed: {}", _err);
    }
}
