//! Command handlers for the badapple CLI.
//!
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod play;
