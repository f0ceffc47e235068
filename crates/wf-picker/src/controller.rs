//! Wheel controller
//!
//! Owns the raw roster text (the source of truth), the spin engine and
//! the winner ledger, and runs the spin-to-history flow the host loop
//! drives one tick at a time.

use rand::prelude::*;
use serde::Serialize;

use wf_core::{ALL_GROUPS, Entry};
use wf_engine::{SpinConfig, SpinEngine, StrategyKind, select_batch};
use wf_ledger::HistoryLedger;
use wf_pool::{distinct_groups, filter, parse, remove_winners};

use crate::collab::{CelebrationSink, WheelRenderer};

/// Roster the controller starts with.
pub const DEFAULT_ROSTER: &str = "Ali | HR
Beatriz | Accounting
Charles | Engineering
Diya | HR
Eric | Marketing
Fatima | Accounting
Gabriel | Engineering
Hana | Executive
Ivan | Marketing
Jasmine | HR
Kai | Engineering
Liam | Accounting
Mia | HR
Noah | Operations
Olivia | Marketing
Priya | Engineering
Quinn | Operations
Rohan | Executive
Sofia | HR
Thomas | Accounting
Uma | Marketing
Victor | Operations
Wei | Engineering
Xara | Executive
Yara | HR
Zack | Operations";

/// Everything a resolved spin produced, handed back exactly once from
/// the settling tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinOutcome {
    /// Winning segment index on the active wheel
    pub index: usize,
    /// Name the wheel landed on
    pub primary: String,
    /// Full winner batch, primary first
    pub batch: Vec<String>,
}

/// Conducts one wheel: pool state, spin lifecycle, winner recording.
///
/// All mutation is synchronous and single-threaded; the Idle/Spinning
/// guard inside the engine is the only concurrency control, and a
/// rejected spin returns immediately.
pub struct WheelController {
    raw_text: String,
    entries: Vec<Entry>,
    selected_group: String,
    category: String,
    batch_size: usize,
    remove_winner: bool,
    engine: SpinEngine,
    ledger: HistoryLedger,
    batch_rng: StdRng,
    celebration: Option<Box<dyn CelebrationSink>>,
    pending_batch: Vec<String>,
}

impl WheelController {
    /// Controller over the default roster with canonical physics.
    pub fn new(strategy: StrategyKind) -> Self {
        Self::with_config(strategy, SpinConfig::standard())
    }

    /// Controller with specific physics tuning.
    pub fn with_config(strategy: StrategyKind, config: SpinConfig) -> Self {
        let raw_text = DEFAULT_ROSTER.to_string();
        let entries = parse(&raw_text);
        Self {
            raw_text,
            entries,
            selected_group: ALL_GROUPS.to_string(),
            category: "Round 1".to_string(),
            batch_size: 1,
            remove_winner: false,
            engine: SpinEngine::with_config(strategy, config),
            ledger: HistoryLedger::new(),
            batch_rng: StdRng::from_entropy(),
            celebration: None,
            pending_batch: Vec::new(),
        }
    }

    /// Attach an optional celebration collaborator.
    pub fn with_celebration(mut self, sink: Box<dyn CelebrationSink>) -> Self {
        self.celebration = Some(sink);
        self
    }

    /// Seed the physics and batch RNGs for reproducible runs.
    pub fn seed(&mut self, seed: u64) {
        self.engine.seed(seed);
        self.batch_rng = StdRng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // POOL STATE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Replace the roster text and reparse.
    pub fn set_raw_text(&mut self, raw_text: impl Into<String>) {
        self.raw_text = raw_text.into();
        self.entries = parse(&self.raw_text);
        self.revalidate_group();
    }

    pub fn set_group(&mut self, group: impl Into<String>) {
        self.selected_group = group.into();
        self.revalidate_group();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Winners drawn per spin; zero is treated as one.
    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size.max(1);
    }

    pub fn set_remove_winner(&mut self, remove: bool) {
        self.remove_winner = remove;
    }

    // A selection whose group vanished resets to the sentinel.
    fn revalidate_group(&mut self) {
        if self.selected_group != ALL_GROUPS
            && !self.entries.iter().any(|e| e.group == self.selected_group)
        {
            log::debug!(
                "group '{}' no longer exists, resetting to '{ALL_GROUPS}'",
                self.selected_group
            );
            self.selected_group = ALL_GROUPS.to_string();
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Every parsed roster entry.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Distinct groups, sentinel first.
    pub fn groups(&self) -> Vec<String> {
        distinct_groups(&self.entries)
    }

    pub fn selected_group(&self) -> &str {
        &self.selected_group
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Entries eligible under the current group selection.
    pub fn active_entries(&self) -> Vec<Entry> {
        filter(&self.entries, &self.selected_group)
    }

    /// Names on the wheel, in segment order.
    pub fn active_names(&self) -> Vec<String> {
        self.active_entries().into_iter().map(|e| e.name).collect()
    }

    pub fn active_count(&self) -> usize {
        self.active_entries().len()
    }

    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // SPIN LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Request a spin.
    ///
    /// Fails silently (returns `false`, nothing changes) while a spin is
    /// in progress or when the active pool is empty.
    pub fn spin(&mut self, now_ms: f64) -> bool {
        let segments = self.active_count();
        if !self.engine.spin(segments, now_ms) {
            return false;
        }
        self.pending_batch.clear();
        log::info!(
            "spin started: {segments} segment(s), group '{}', category '{}'",
            self.selected_group,
            self.category
        );
        true
    }

    /// Advance a live spin one scheduler tick.
    ///
    /// On the settling tick the winner batch is built from the active
    /// pool, appended to the ledger and announced to the celebration
    /// sink; the outcome comes back exactly once per successful spin,
    /// after the engine has already reached `Resolved`.
    pub fn tick(&mut self, now_ms: f64) -> Option<SpinOutcome> {
        let index = self.engine.advance(now_ms)?;
        let active = self.active_entries();
        let names: Vec<String> = active.iter().map(|e| e.name.clone()).collect();
        let primary = names.get(index)?.clone();

        let batch = select_batch(&primary, self.batch_size, &names, &mut self.batch_rng);
        self.ledger.append(&batch, &self.category, |name| {
            active.iter().find(|e| e.name == name).map(|e| e.group.clone())
        });
        if let Some(sink) = self.celebration.as_mut() {
            sink.celebrate(&batch);
        }
        self.pending_batch = batch.clone();
        Some(SpinOutcome {
            index,
            primary,
            batch,
        })
    }

    /// Dismiss the last result.
    ///
    /// With remove-on-win set, the recorded batch is removed from the
    /// roster (whole lines only) and the group selection re-validated.
    pub fn acknowledge(&mut self) {
        if self.remove_winner && !self.pending_batch.is_empty() {
            self.raw_text = remove_winners(&self.raw_text, &self.pending_batch);
            self.entries = parse(&self.raw_text);
            self.revalidate_group();
        }
        self.pending_batch.clear();
    }

    /// Abandon a live spin without emitting a completion.
    pub fn cancel(&mut self) {
        self.engine.cancel();
    }

    /// Feed the current wheel view to a rendering collaborator.
    pub fn render_to(&self, renderer: &mut dyn WheelRenderer) {
        renderer.render(&self.active_names(), self.engine.angle());
    }

    pub fn is_spinning(&self) -> bool {
        self.engine.is_spinning()
    }

    pub fn angle(&self) -> f64 {
        self.engine.angle()
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut HistoryLedger {
        &mut self.ledger
    }
}
