//! Interchangeable rotation strategies

use std::f64::consts::TAU;

use rand::prelude::*;

use crate::config::SpinConfig;
use crate::session::{DecaySession, EaseSession, SpinSession, Step};

/// A rotation physics strategy.
///
/// [`begin`](SpinStrategy::begin) samples a fresh [`SpinSession`];
/// [`advance`](SpinStrategy::advance) moves it one tick. Mapping the
/// settled angle to a winning segment is strategy-independent and lives
/// in [`crate::resolve`].
pub trait SpinStrategy {
    /// Sample a session for a spin starting at `start_angle`.
    fn begin(&mut self, start_angle: f64, now_ms: f64) -> SpinSession;

    /// Advance a session one tick.
    fn advance(&self, session: &mut SpinSession, now_ms: f64) -> Step;

    /// Reseed the sampling RNG for reproducible spins.
    fn seed(&mut self, seed: u64);
}

/// Fixed-duration spin easing toward a sampled target angle.
///
/// On start the target is fixed at the current angle plus 5–10 full
/// rotations plus a random final offset; every subsequent tick is a pure
/// function of elapsed time.
pub struct TimedEase {
    config: SpinConfig,
    rng: StdRng,
}

impl TimedEase {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }
}

impl SpinStrategy for TimedEase {
    fn begin(&mut self, start_angle: f64, now_ms: f64) -> SpinSession {
        let rotations = self
            .rng
            .gen_range(self.config.min_rotations..self.config.max_rotations);
        let extra_angle = self.rng.gen_range(0.0..TAU);
        let target_angle = start_angle + rotations * TAU + extra_angle;
        log::debug!(
            "timed spin: {rotations:.2} rotations over {} ms",
            self.config.duration_ms
        );
        SpinSession::TimedEase(EaseSession {
            start_angle,
            target_angle,
            start_ms: now_ms,
            duration_ms: self.config.duration_ms,
        })
    }

    fn advance(&self, session: &mut SpinSession, now_ms: f64) -> Step {
        match session {
            SpinSession::TimedEase(s) => s.advance(now_ms),
            // A session from the other strategy settles where it stands.
            SpinSession::FrictionDecay(s) => Step::settled(s.angle),
        }
    }

    fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Spin driven by a sampled initial velocity decaying under friction.
///
/// Runs until the velocity drops below the stop threshold, so the spin
/// length varies with the draw.
pub struct FrictionDecay {
    config: SpinConfig,
    rng: StdRng,
}

impl FrictionDecay {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }
}

impl SpinStrategy for FrictionDecay {
    fn begin(&mut self, start_angle: f64, _now_ms: f64) -> SpinSession {
        let velocity = self
            .rng
            .gen_range(self.config.velocity_min..self.config.velocity_max);
        log::debug!("friction spin: initial velocity {velocity:.3} rad/tick");
        SpinSession::FrictionDecay(DecaySession {
            angle: start_angle,
            velocity,
        })
    }

    fn advance(&self, session: &mut SpinSession, _now_ms: f64) -> Step {
        match session {
            SpinSession::FrictionDecay(s) => {
                s.advance(self.config.friction, self.config.stop_velocity)
            }
            // A session from the other strategy settles where it was headed.
            SpinSession::TimedEase(s) => Step::settled(s.target_angle),
        }
    }

    fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_begin_samples_within_bounds() {
        let mut strategy = TimedEase::new(SpinConfig::standard());
        strategy.seed(42);

        for start_angle in [0.0, 3.2, -1.5] {
            let SpinSession::TimedEase(session) = strategy.begin(start_angle, 100.0) else {
                panic!("timed strategy produced a foreign session");
            };
            let swept = session.target_angle - session.start_angle;
            assert_eq!(session.start_angle, start_angle);
            assert_eq!(session.start_ms, 100.0);
            assert_eq!(session.duration_ms, 5_000.0);
            // 5 rotations minimum, 10 rotations + full extra turn maximum
            assert!(swept >= 5.0 * TAU, "swept too little: {swept}");
            assert!(swept < 11.0 * TAU, "swept too much: {swept}");
        }
    }

    #[test]
    fn test_timed_begin_is_reproducible() {
        let mut a = TimedEase::new(SpinConfig::standard());
        let mut b = TimedEase::new(SpinConfig::standard());
        a.seed(7);
        b.seed(7);
        assert_eq!(a.begin(0.0, 0.0), b.begin(0.0, 0.0));
    }

    #[test]
    fn test_friction_begin_samples_within_bounds() {
        let mut strategy = FrictionDecay::new(SpinConfig::standard());
        strategy.seed(42);

        for _ in 0..32 {
            let SpinSession::FrictionDecay(session) = strategy.begin(1.0, 0.0) else {
                panic!("friction strategy produced a foreign session");
            };
            assert_eq!(session.angle, 1.0);
            assert!(session.velocity >= 0.25 && session.velocity < 0.65);
        }
    }

    #[test]
    fn test_friction_ignores_wall_clock() {
        let mut strategy = FrictionDecay::new(SpinConfig::standard());
        strategy.seed(9);
        let mut session = strategy.begin(0.0, 0.0);

        // Identical decay regardless of the tick timestamps supplied.
        let first = strategy.advance(&mut session, 1_000_000.0);
        let second = strategy.advance(&mut session, 0.0);
        assert!(second.angle > first.angle);
    }
}
