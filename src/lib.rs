// src/lib.rs

//! _repylib_ parses the Technion _REPY_ timetable report into a
//! [`Catalog`].
//!
//! The entry points are [`parse`] for raw report bytes (IBM code page 862)
//! and [`parse_str`] for text that was already decoded.
//!
//! [`Catalog`]: crate::data::catalog::Catalog
//! [`parse`]: crate::readers::repyparser::parse
//! [`parse_str`]: crate::readers::repyparser::parse_str

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;

pub use crate::readers::repyparser::{parse, parse_str};
