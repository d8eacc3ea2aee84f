// src/data/bidi.rs

//! Basic tooling for bidirectional text: converting _visual order_ Hebrew
//! from the report into _logical order_.
//!
//! Only the narrow cases found in the REPY are handled; this is not an
//! implementation of the Unicode Bidirectional Algorithm.
//!
//! * [`reverse_plain`] reverses all `char`s. Used on substrings that a
//!   pattern has already isolated from any numbers.
//! * [`reverse`] reverses the text but keeps runs of digits (and the `-./`
//!   between them) in their left-to-right order, e.g. dates and decimals.

#[allow(unused_imports)]
use ::si_trace_print::{dpfn, dpfx};

/// `char`s that continue a number run when more digits follow.
const NEUTRAL_CHARS: &[char] = &['-', '.', '/'];

/// Reverse the order of `char`s in `s`.
pub fn reverse_plain(s: &str) -> String {
    s.chars().rev().collect()
}

/// Trim surrounding whitespace then [`reverse_plain`].
pub fn hebrew_flip(s: &str) -> String {
    reverse_plain(s.trim())
}

/// Mirror bracket `char`s, they are drawn mirrored in right-to-left text.
const fn mirror(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        _ => c,
    }
}

/// Reverse a visual-order Hebrew string into logical order, keeping
/// numbers such as `3.14` or `1970-01-02` readable.
///
/// A `char` is in a "number run" if it is numeric, or if it is a neutral
/// `char` (`-` `.` `/`) inside a number run with another numeric `char`
/// somewhere after it.
pub fn reverse(s: &str) -> String {
    dpfn!("({:?})", s);
    let chars: Vec<char> = s.chars().collect();

    let mut main: Vec<char> = Vec::with_capacity(chars.len());
    let mut number: Vec<char> = Vec::with_capacity(chars.len());

    let mut number_run = false;
    for (i, &c) in chars.iter().enumerate() {
        let was_number_run = number_run;
        if c.is_numeric() {
            number_run = true;
        } else if NEUTRAL_CHARS.contains(&c) {
            number_run = number_run
                && chars[i + 1..]
                    .iter()
                    .any(|c_| c_.is_numeric());
        } else {
            number_run = false;
        }

        if was_number_run && !number_run {
            // the final reversal of `main` restores left-to-right order
            main.extend(number.drain(..).rev());
        }

        if number_run {
            number.push(c);
        } else {
            main.push(mirror(c));
        }
    }
    main.extend(number.drain(..).rev());

    let result: String = main.into_iter().rev().collect();
    dpfx!("return {:?}", result);

    result
}
