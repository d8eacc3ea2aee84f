// src/printer/mod.rs

//! The `printer` module is for printing user-facing messages: parse
//! diagnostics through a [`Logger`], and the `--summary` of a [`Catalog`],
//! with optional color.
//!
//! [`Logger`]: crate::printer::logger::Logger
//! [`Catalog`]: crate::data::catalog::Catalog

pub mod logger;
pub mod printers;
pub mod summary;
