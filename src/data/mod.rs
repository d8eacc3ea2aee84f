// src/data/mod.rs

//! The `data` module is specialized data containers for the parsed
//! [`Catalog`], the text-direction helpers in [`bidi`], the
//! line patterns in [`fields`], and the code page tables in [`codepage`].
//!
//! ## Definitions of data
//!
//! ### REPY
//!
//! The _REPY_ is a fixed-width report published by the Technion. Each line is
//! framed by `|` characters or is a `+====+` / `+----+` separator. Hebrew text
//! in the report is stored in _visual order_, i.e. the order in which it would
//! be painted on a left-to-right terminal.
//!
//! ### Faculty
//!
//! A "faculty" is a block of courses introduced by two `+====+` separators
//! enclosing the faculty name and semester. The sports faculty uses a wider
//! separator and a different layout.
//!
//! A "faculty" is represented by a [`Faculty`].
//!
//! ### Course
//!
//! A "course" is a block introduced by `+----+` separators holding the course
//! id, name, weekly hours and academic points, then the course "head" (test
//! dates, lecturer in charge), then the group region.
//!
//! A "course" is represented by a [`Course`].
//!
//! ### Group
//!
//! A "registration group" is one offering of a course (a lecture, tutorial or
//! lab section). Each group has one or more weekly [`Event`]s.
//!
//! A "group" is represented by a [`Group`].
//!
//! ### Logical order
//!
//! All text stored in the data model is in _logical order_ (reading order).
//! Reversal from visual order happens while parsing, never later.
//!
//! [`Catalog`]: crate::data::catalog::Catalog
//! [`Faculty`]: crate::data::catalog::Faculty
//! [`Course`]: crate::data::catalog::Course
//! [`Group`]: crate::data::catalog::Group
//! [`Event`]: crate::data::catalog::Event
//! [`bidi`]: crate::data::bidi
//! [`fields`]: crate::data::fields
//! [`codepage`]: crate::data::codepage

pub mod bidi;
pub mod catalog;
pub mod codepage;
pub mod fields;
