//! # wf-pool — Entry pool for WheelForge
//!
//! The raw roster text is the source of truth: one entry per line,
//! `Name` or `Name | Group`. This crate owns the pure transformations
//! over it:
//!
//! - [`parse`]: text → structured entries
//! - [`distinct_groups`] / [`filter`]: group derivation and selection
//! - [`remove_winners`]: whole-line winner removal back into the text
//!
//! Parsing never fails; malformed lines degrade to a name-only entry.

pub mod mutate;
pub mod parse;

pub use mutate::remove_winners;
pub use parse::{distinct_groups, filter, parse};
