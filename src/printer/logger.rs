// src/printer/logger.rs

//! The [`Logger`] collaborator that receives parse diagnostics, and a few
//! implementations of it.
//!
//! Messages arrive already formatted and prefixed with `Line <n>: `.
//! Logging must never stop parsing so these methods do not return errors;
//! a failing sink is reported with [`de_err!`] in debug builds and otherwise
//! ignored.
//!
//! [`de_err!`]: crate::debug::printers::de_err

use crate::debug::printers::de_err;
use crate::printer::printers::{print_colored, Color, ColorChoice, StandardStream, COLOR_WARNING};

use std::io::Write;

/// Receives diagnostics from the parser.
pub trait Logger {
    fn info(
        &mut self,
        msg: &str,
    );

    fn warn(
        &mut self,
        msg: &str,
    );

    /// Called once after parsing completes, successfully or not.
    fn flush(&mut self);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn info(
        &mut self,
        _msg: &str,
    ) {
    }

    fn warn(
        &mut self,
        _msg: &str,
    ) {
    }

    fn flush(&mut self) {}
}

/// Writes `I <msg>` and `W <msg>` lines to `W`.
#[derive(Debug)]
pub struct WriterLogger<W: Write> {
    writer: W,
}

impl<W: Write> WriterLogger<W> {
    pub fn new(writer: W) -> WriterLogger<W> {
        WriterLogger { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(
        &mut self,
        prefix: &str,
        msg: &str,
    ) {
        if let Err(_err) = writeln!(self.writer, "{} {}", prefix, msg) {
            de_err!("WriterLogger write failed: {}", _err);
        }
    }
}

impl<W: Write> Logger for WriterLogger<W> {
    fn info(
        &mut self,
        msg: &str,
    ) {
        self.write_line("I", msg);
    }

    fn warn(
        &mut self,
        msg: &str,
    ) {
        self.write_line("W", msg);
    }

    fn flush(&mut self) {
        if let Err(_err) = self.writer.flush() {
            de_err!("WriterLogger flush failed: {}", _err);
        }
    }
}

/// Writes to stderr; warnings are colored [`COLOR_WARNING`].
///
/// Info messages are only printed when `verbose` is set.
pub struct ColorLogger {
    stderr: StandardStream,
    verbose: bool,
}

impl ColorLogger {
    pub fn new(
        color_choice: ColorChoice,
        verbose: bool,
    ) -> ColorLogger {
        ColorLogger {
            stderr: StandardStream::stderr(color_choice),
            verbose,
        }
    }

    fn print_line(
        &mut self,
        color: Option<Color>,
        msg: &str,
    ) -> std::io::Result<()> {
        print_colored(color, format!("{}\n", msg).as_bytes(), &mut self.stderr)
    }
}

impl Logger for ColorLogger {
    fn info(
        &mut self,
        msg: &str,
    ) {
        if !self.verbose {
            return;
        }
        if let Err(_err) = self.print_line(None, msg) {
            de_err!("ColorLogger info failed: {}", _err);
        }
    }

    fn warn(
        &mut self,
        msg: &str,
    ) {
        if let Err(_err) = self.print_line(Some(COLOR_WARNING), msg) {
            de_err!("ColorLogger warn failed: {}", _err);
        }
    }

    fn flush(&mut self) {
        if let Err(_err) = self.stderr.flush() {
            de_err!("ColorLogger flush failed: {}", _err);
        }
    }
}

/// Severity of a [`MemoryLogger`] record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Info,
    Warning,
}

/// Keeps every message in memory, in order.
#[derive(Clone, Debug, Default)]
pub struct MemoryLogger {
    pub records: Vec<(Level, String)>,
    pub flushes: usize,
}

impl MemoryLogger {
    pub fn new() -> MemoryLogger {
        MemoryLogger::default()
    }

    /// Messages logged at `level`.
    pub fn messages(
        &self,
        level: Level,
    ) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(level_, _)| *level_ == level)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Level::Warning)
    }
}

impl Logger for MemoryLogger {
    fn info(
        &mut self,
        msg: &str,
    ) {
        self.records.push((Level::Info, msg.to_string()));
    }

    fn warn(
        &mut self,
        msg: &str,
    ) {
        self.records.push((Level::Warning, msg.to_string()));
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
