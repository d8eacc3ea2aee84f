// src/debug/printers.rs

//! Printer macros for user-facing errors and warnings, and helpers for
//! debug tracing of report lines.

/// `d`ebug `e`println! an `err`or
#[macro_export]
macro_rules! de_err {
    (
        $($args:tt)*
    ) => {
        {
            #[cfg(any(debug_assertions,test))]
            eprint!("ERROR: ");
            #[cfg(any(debug_assertions,test))]
            eprintln!($($args)*)
        }
    }
}
pub use de_err;

/// `e`println! an `err`or
#[macro_export]
macro_rules! e_err {
    (
        $($args:tt)*
    ) => {
        {
            eprint!("ERROR: ");
            eprintln!($($args)*)
        }
    }
}
pub use e_err;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helper functions - report lines in debug output
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Map a C0 control character, or DEL, to its Unicode "control picture",
/// e.g. `'\n'` becomes `'␊'`. Other chars are returned as-is.
///
/// Keeps control characters one column wide in debug output.
#[cfg(any(debug_assertions, test))]
pub fn char_to_char_noraw(c: char) -> char {
    // https://en.wikipedia.org/wiki/Control_Pictures
    match c as u32 {
        n @ 0..=0x1F => char::from_u32(0x2400 + n).unwrap_or(c),
        0x7F => '␡',
        _ => c,
    }
}

/// A report line with its control characters made visible, for tracing.
#[doc(hidden)]
#[allow(non_snake_case)]
#[cfg(any(debug_assertions, test))]
pub fn str_to_String_noraw(line: &str) -> String {
    line.chars()
        .map(char_to_char_noraw)
        .collect()
}
