// src/debug/mod.rs

//! The `debug` module is printer macros for user-facing messages, plus
//! helpers for debug and test builds.

#[cfg(test)]
pub mod helpers;

pub mod printers;
