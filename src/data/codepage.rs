// src/data/codepage.rs

//! 8-bit code pages used by the REPY.
//!
//! The report is published in IBM code page 862 ("DOS Hebrew"). That is not
//! a [WHATWG encoding] so [`encoding_rs`] cannot decode it; the table here
//! covers it. [`recode`] converts between code page 862 and ISO-8859-8, the
//! latter through `encoding_rs`, to produce human-readable mirrors of the
//! raw report.
//!
//! [WHATWG encoding]: https://encoding.spec.whatwg.org/#names-and-labels
//! [`encoding_rs`]: https://docs.rs/encoding_rs/0.8.35/encoding_rs/

use std::borrow::Cow;
use std::io::{Error, ErrorKind, Result};

use ::encoding_rs::{Encoding, ISO_8859_8};
#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfo, dpfx};

/// Code page 862 bytes `0x80` to `0xFF`.
///
/// `0x80..=0x9A` are the Hebrew letters alef to tav, the remainder is shared
/// with code page 437.
#[rustfmt::skip]
const CP862_HIGH: [char; 128] = [
    // 0x80
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'ך', 'כ', 'ל', 'ם', 'מ', 'ן',
    // 0x90
    'נ', 'ס', 'ע', 'ף', 'פ', 'ץ', 'צ', 'ק', 'ר', 'ש', 'ת', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{A0}',
];

/// Decode one code page 862 byte.
#[inline(always)]
pub const fn cp862_to_char(byte: u8) -> char {
    if byte < 0x80 {
        return byte as char;
    }

    CP862_HIGH[(byte - 0x80) as usize]
}

/// Encode one `char` as code page 862, if it has a mapping.
pub fn char_to_cp862(c: char) -> Option<u8> {
    if c.is_ascii() {
        return Some(c as u8);
    }
    CP862_HIGH
        .iter()
        .position(|c_| *c_ == c)
        .map(|index| 0x80 + index as u8)
}

/// Decode code page 862 `data`. Every byte has a mapping so this cannot fail.
pub fn decode_cp862(data: &[u8]) -> String {
    data.iter()
        .map(|byte| cp862_to_char(*byte))
        .collect()
}

/// Encode `s` as code page 862.
///
/// Returns `ErrorKind::InvalidData` naming the first `char` that has no
/// mapping.
pub fn encode_cp862(s: &str) -> Result<Vec<u8>> {
    let mut buffer: Vec<u8> = Vec::with_capacity(s.len());
    for (at, c) in s.chars().enumerate() {
        match char_to_cp862(c) {
            Some(byte) => buffer.push(byte),
            None => {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("char {:?} at {} has no code page 862 mapping", c, at),
                ));
            }
        }
    }

    Ok(buffer)
}

/// An 8-bit charset that [`recode`] handles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Charset {
    /// IBM code page 862, as published.
    Cp862,
    /// ISO-8859-8, "visual" Hebrew; readable by most text viewers.
    Iso8859_8,
}

impl Charset {
    /// A `Content-Type` charset label.
    pub const fn label(&self) -> &'static str {
        match self {
            Charset::Cp862 => "cp862",
            Charset::Iso8859_8 => "iso8859-8",
        }
    }

    fn encoding(&self) -> Option<&'static Encoding> {
        match self {
            Charset::Cp862 => None,
            Charset::Iso8859_8 => Some(ISO_8859_8),
        }
    }

    fn decode<'a>(
        &self,
        data: &'a [u8],
    ) -> Result<Cow<'a, str>> {
        match self.encoding() {
            None => Ok(Cow::Owned(decode_cp862(data))),
            Some(encoding) => match encoding.decode_without_bom_handling_and_without_replacement(data) {
                Some(s) => Ok(s),
                None => Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("data is not valid {}", self.label()),
                )),
            },
        }
    }

    fn encode(
        &self,
        s: &str,
    ) -> Result<Vec<u8>> {
        match self.encoding() {
            None => encode_cp862(s),
            Some(encoding) => {
                let (bytes, _, had_unmappable) = encoding.encode(s);
                if had_unmappable {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        format!("data has chars with no {} mapping", self.label()),
                    ));
                }

                Ok(bytes.into_owned())
            }
        }
    }
}

/// Convert `data` from the `from` charset to the `to` charset.
pub fn recode(
    from: Charset,
    to: Charset,
    data: &[u8],
) -> Result<Vec<u8>> {
    dpfn!("({:?}, {:?}, data len {})", from, to, data.len());
    let decoded: Cow<str> = from.decode(data)?;
    dpfo!("decoded {} chars", decoded.chars().count());
    let result = to.encode(&decoded);
    dpfx!("return is_ok {}", result.is_ok());

    result
}
