//! # wf-engine — Spin resolution engine for WheelForge
//!
//! Owns the rotation simulation that converts a random draw into a
//! deterministic, verifiable winning index.
//!
//! ## Architecture
//!
//! ```text
//! SpinEngine (Idle → Spinning → Resolved)
//!     │
//!     ├── SpinStrategy (TimedEase | FrictionDecay)
//!     │       └── SpinSession (transient, advanced per tick)
//!     │
//!     ├── resolve_index (strategy-independent pointer mapping)
//!     └── select_batch (without-replacement extra winners)
//! ```
//!
//! The host scheduling loop owns time: it calls [`SpinEngine::advance`]
//! with the current tick and stops once a winning index comes back.
//! Both strategies are seedable for reproducible spins.

pub mod batch;
pub mod config;
pub mod engine;
pub mod resolve;
pub mod session;
pub mod strategy;

pub use batch::select_batch;
pub use config::{SpinConfig, StrategyKind};
pub use engine::{EngineState, SpinEngine};
pub use resolve::resolve_index;
pub use session::{DecaySession, EaseSession, SpinSession, Step, ease_out_quart};
pub use strategy::{FrictionDecay, SpinStrategy, TimedEase};
