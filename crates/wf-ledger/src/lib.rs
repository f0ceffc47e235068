//! # wf-ledger — Winner history for WheelForge
//!
//! An append-only record of past winners, grouped by prize category for
//! display and exportable as CSV. The ledger owns its [`Winner`] records
//! exclusively once appended.
//!
//! [`Winner`]: wf_core::Winner

pub mod export;
pub mod ledger;

pub use export::{export_csv, export_filename, write_csv};
pub use ledger::HistoryLedger;
