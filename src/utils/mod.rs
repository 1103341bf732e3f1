//! Process-level helpers.

pub mod interrupt;
