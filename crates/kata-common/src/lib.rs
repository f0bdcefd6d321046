//! Common utilities for the kata crates.
//!
//! This crate provides shared infrastructure used by the exercise crates:
//! - **Warning System** - colored terminal output for questionable input

pub mod warning;
