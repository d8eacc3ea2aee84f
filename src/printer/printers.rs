// src/printer/printers.rs

//! Colored printing helpers shared by the [`ColorLogger`] and `--summary`.
//!
//! [`ColorLogger`]: crate::printer::logger::ColorLogger

use crate::debug::printers::de_err;

use std::io::Write;

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// [`Color`] for printing warnings.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_WARNING: Color = Color::Yellow;

/// [`Color`] for printing faculty lines of the summary.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_FACULTY: Color = Color::Green;

/// Print `value` in `color` to `out`, then reset the color.
///
/// `None` prints in the terminal's default color.
pub fn print_colored<W: WriteColor>(
    color: Option<Color>,
    value: &[u8],
    out: &mut W,
) -> std::io::Result<()> {
    match out.set_color(ColorSpec::new().set_fg(color)) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
            return Err(err);
        }
    };
    match out.write_all(value) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.write_all(…) returned error {}", err);
            return Err(err);
        }
    }
    match out.reset() {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.reset() returned error {}", err);
            return Err(err);
        }
    }
    out.flush()?;

    Ok(())
}

/// Safely write the `buffer` to stdout with help of [`StdoutLock`].
///
/// [`StdoutLock`]: std::io::StdoutLock
pub fn write_stdout(buffer: &[u8]) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    stdout_lock.write_all(buffer)?;
    stdout_lock.flush()
}
