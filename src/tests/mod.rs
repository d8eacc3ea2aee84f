// src/tests/mod.rs

//! Tests for _repylib_.
//!
//! Tests are placed at `src/tests/`, inside the `repylib`. This is a
//! reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility and only exercise the public API.

pub mod common;
pub mod helpers_tests;
pub mod linesource_tests;
pub mod printers_tests;
