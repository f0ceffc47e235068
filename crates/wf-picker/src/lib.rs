//! # wf-picker — Wheel orchestration for WheelForge
//!
//! Wires the entry pool, spin engine, batch selection and history ledger
//! into one [`WheelController`] driven by the host's scheduling loop:
//!
//! ```text
//! raw text → pool → active names → engine ─┐ (per tick)
//!                                          v
//!                         primary winner → batch → ledger
//!                                          │         └─ CSV export
//!                                          └─ celebration sink
//! ```
//!
//! Rendering and celebration are collaborator traits at the boundary;
//! the core runs with both absent.

pub mod collab;
pub mod controller;

pub use collab::{CelebrationSink, WheelRenderer, display_label};
pub use controller::{DEFAULT_ROSTER, SpinOutcome, WheelController};
