//! # wf-core — Core domain types for WheelForge
//!
//! Shared types used across the wheel picker crates:
//!
//! - [`Entry`]: one roster entry (name, group, original line)
//! - [`Winner`]: an immutable recorded winner
//! - [`WheelError`] / [`WheelResult`]: error handling

pub mod entry;
pub mod error;
pub mod winner;

pub use entry::{ALL_GROUPS, Entry, GENERAL_GROUP};
pub use error::{WheelError, WheelResult};
pub use winner::Winner;
