// src/readers/linesource.rs

//! Implements a [`LineSource`], the sequential line cursor that the
//! [`RepyParser`] walks.
//!
//! [`RepyParser`]: crate::readers::repyparser::RepyParser

use crate::common::{Count, LineNumber, RepyError, ResultRepy, CRc, EOF_HITS_MAX};
use crate::data::codepage::decode_cp862;
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use std::fmt;

use ::more_asserts::debug_assert_le;
#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfo, dpfx, dpfñ};

/// Yields the lines of a decoded REPY one at a time.
///
/// The whole input is decoded once, up front. Before the first
/// [`advance`] and after the end of input, [`current_line`] is `""`.
///
/// _XXX: not a rust "Reader"; does not implement trait [`Read`]._
///
/// [`advance`]: self::LineSource#method.advance
/// [`current_line`]: self::LineSource#method.current_line
/// [`Read`]: std::io::Read
pub struct LineSource {
    /// Every line, `\r` stripped.
    lines: Vec<String>,
    /// Index into `lines` of the current line, or `None` before the first
    /// `advance` and after the end of input.
    index: Option<usize>,
    /// Index of the next line to yield.
    next: usize,
    /// 1-based number of the current line, `0` before the first `advance`.
    /// Keeps the last line's number once input is exhausted.
    line_number: LineNumber,
    /// `Count` of times `advance` found no more lines.
    eof_hits: Count,
}

impl fmt::Debug for LineSource {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LineSource")
            .field("lines", &self.lines.len())
            .field("line_number", &self.line_number)
            .field("eof_hits", &self.eof_hits)
            .finish()
    }
}

impl LineSource {
    /// Create a new `LineSource` over already decoded `text`.
    pub fn new(text: &str) -> LineSource {
        let lines: Vec<String> = text
            .lines()
            .map(|line| line.strip_suffix(CRc).unwrap_or(line).to_string())
            .collect();
        dpfñ!("LineSource::new(text len {}) {} lines", text.len(), lines.len());

        LineSource {
            lines,
            index: None,
            next: 0,
            line_number: 0,
            eof_hits: 0,
        }
    }

    /// Create a new `LineSource` over `data` in code page 862.
    pub fn from_cp862(data: &[u8]) -> LineSource {
        LineSource::new(&decode_cp862(data))
    }

    /// Text of the current line.
    #[inline(always)]
    pub fn current_line(&self) -> &str {
        match self.index {
            Some(index) => self.lines[index].as_str(),
            None => "",
        }
    }

    /// Number of the current line, or of the last line once input is
    /// exhausted.
    #[inline(always)]
    pub const fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// `Count` of times [`advance`] has reached end of input.
    ///
    /// [`advance`]: self::LineSource#method.advance
    #[inline(always)]
    pub const fn eof_hits(&self) -> Count {
        self.eof_hits
    }

    /// Has [`advance`] reached end of input?
    ///
    /// [`advance`]: self::LineSource#method.advance
    #[inline(always)]
    pub const fn is_eof(&self) -> bool {
        self.eof_hits > 0
    }

    /// Total `Count` of lines in the input.
    pub fn count_lines(&self) -> Count {
        self.lines.len() as Count
    }

    /// Move to the next line. Returns `Ok(false)` at end of input, after
    /// which the current line is `""`.
    ///
    /// Reaching end of input more than [`EOF_HITS_MAX`] times is an
    /// [`EofExhaustion`] error; it means some loop is not checking for the
    /// end of input.
    ///
    /// [`EofExhaustion`]: crate::common::RepyError::EofExhaustion
    pub fn advance(&mut self) -> ResultRepy<bool> {
        debug_assert_le!(self.next, self.lines.len(), "next is past the end of lines");
        if self.next < self.lines.len() {
            self.index = Some(self.next);
            self.next += 1;
            self.line_number += 1;
            dpfo!(
                "line {}: {:?}",
                self.line_number,
                str_to_String_noraw(self.current_line())
            );
            return Ok(true);
        }

        self.index = None;
        self.eof_hits += 1;
        dpfo!("EOF hit {} at line {}", self.eof_hits, self.line_number);
        if self.eof_hits > EOF_HITS_MAX {
            return Err(RepyError::EofExhaustion {
                line: self.line_number,
                hits: self.eof_hits,
            });
        }

        Ok(false)
    }
}
