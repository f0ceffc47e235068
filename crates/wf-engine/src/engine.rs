//! Spin engine state machine

use serde::{Deserialize, Serialize};

use crate::config::{SpinConfig, StrategyKind};
use crate::resolve::resolve_index;
use crate::session::SpinSession;
use crate::strategy::{FrictionDecay, SpinStrategy, TimedEase};

/// Engine lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No spin has run yet, or the last session was cancelled.
    Idle,
    /// A session is live and advances on every tick.
    Spinning,
    /// The last spin settled on a winner; a new spin may start.
    Resolved,
}

/// Owns rotation state, advances it per tick and resolves the winning
/// index when a spin settles.
///
/// The engine never schedules itself: the host loop supplies every tick
/// and stops once [`advance`](SpinEngine::advance) returns an index.
///
/// ```rust
/// use wf_engine::{SpinEngine, StrategyKind};
///
/// let mut engine = SpinEngine::new(StrategyKind::TimedEase);
/// engine.seed(7);
/// assert!(engine.spin(8, 0.0));
///
/// let mut now_ms = 0.0;
/// let index = loop {
///     now_ms += 16.0;
///     if let Some(index) = engine.advance(now_ms) {
///         break index;
///     }
/// };
/// assert!(index < 8);
/// ```
pub struct SpinEngine {
    strategy: Box<dyn SpinStrategy>,
    state: EngineState,
    session: Option<SpinSession>,
    angle: f64,
    segment_count: usize,
}

impl SpinEngine {
    /// Engine with the canonical physics tuning.
    pub fn new(kind: StrategyKind) -> Self {
        Self::with_config(kind, SpinConfig::standard())
    }

    /// Engine with specific physics tuning.
    pub fn with_config(kind: StrategyKind, config: SpinConfig) -> Self {
        let strategy: Box<dyn SpinStrategy> = match kind {
            StrategyKind::TimedEase => Box::new(TimedEase::new(config)),
            StrategyKind::FrictionDecay => Box::new(FrictionDecay::new(config)),
        };
        Self {
            strategy,
            state: EngineState::Idle,
            session: None,
            angle: 0.0,
            segment_count: 0,
        }
    }

    /// Reseed the strategy RNG for reproducible spins.
    pub fn seed(&mut self, seed: u64) {
        self.strategy.seed(seed);
    }

    /// Request a spin over `segment_count` wheel segments.
    ///
    /// Rejected with no state change while a spin is in progress or when
    /// the wheel is empty; the caller sees `false` and nothing else.
    pub fn spin(&mut self, segment_count: usize, now_ms: f64) -> bool {
        if self.state == EngineState::Spinning || segment_count == 0 {
            return false;
        }
        self.session = Some(self.strategy.begin(self.angle, now_ms));
        self.segment_count = segment_count;
        self.state = EngineState::Spinning;
        true
    }

    /// Advance the live session one tick.
    ///
    /// Returns the winning index on the settling tick, exactly once per
    /// spin; `None` on every other tick, including when idle.
    pub fn advance(&mut self, now_ms: f64) -> Option<usize> {
        let session = self.session.as_mut()?;
        let step = self.strategy.advance(session, now_ms);
        self.angle = step.angle;
        if !step.settled {
            return None;
        }
        self.session = None;
        self.state = EngineState::Resolved;
        let index = resolve_index(self.angle, self.segment_count);
        log::debug!(
            "spin settled at {:.3} rad, segment {index} of {}",
            self.angle,
            self.segment_count
        );
        Some(index)
    }

    /// Drop a live session without resolving a winner.
    ///
    /// For host teardown mid-spin: no completion is emitted and no
    /// partial-winner state survives.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            self.state = EngineState::Idle;
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Current rotation angle (radians), for the rendering collaborator.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn is_spinning(&self) -> bool {
        self.state == EngineState::Spinning
    }
}
