// src/readers/mod.rs

//! "Readers" for _repylib_.
//!
//! ## Overview of readers
//!
//! * A [`RepyParser`] drives a [`LineSource`] to derive a [`Catalog`].
//! * A `LineSource` decodes the report's code page 862 bytes once and
//!   yields its lines one at a time.
//! * [`archive`] extracts the report from its published ZIP archive.
//!
//! <br/>
//!
//! The _repy_ binary program reads the report, optionally through
//! [`archive`], then calls [`parse`] once.
//!
//! [`RepyParser`]: crate::readers::repyparser::RepyParser
//! [`LineSource`]: crate::readers::linesource::LineSource
//! [`Catalog`]: crate::data::catalog::Catalog
//! [`parse`]: crate::readers::repyparser::parse

pub mod archive;
pub mod helpers;
pub mod linesource;
pub mod repyparser;
