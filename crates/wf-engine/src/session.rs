//! Transient per-spin state

use serde::{Deserialize, Serialize};

/// Result of advancing a session one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Wheel angle after this tick (radians)
    pub angle: f64,
    /// Whether the spin has settled
    pub settled: bool,
}

impl Step {
    pub fn settled(angle: f64) -> Self {
        Self {
            angle,
            settled: true,
        }
    }

    pub fn live(angle: f64) -> Self {
        Self {
            angle,
            settled: false,
        }
    }
}

/// State advanced on every scheduler tick while a spin is live.
///
/// One variant per strategy. A session exists only between spin start
/// and the stopping condition; the engine clears it on resolution or
/// cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpinSession {
    /// Elapsed-time interpolation toward a precomputed target.
    TimedEase(EaseSession),
    /// Velocity decay under constant friction.
    FrictionDecay(DecaySession),
}

/// Session state for the timed-ease strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EaseSession {
    /// Wheel angle when the spin started (radians)
    pub start_angle: f64,
    /// Angle the wheel will settle on (radians)
    pub target_angle: f64,
    /// Tick timestamp at spin start (ms)
    pub start_ms: f64,
    /// Total spin duration (ms)
    pub duration_ms: f64,
}

impl EaseSession {
    /// Angle at `now_ms`, snapping to the target once the duration elapses.
    pub fn advance(&self, now_ms: f64) -> Step {
        let elapsed = now_ms - self.start_ms;
        if elapsed >= self.duration_ms {
            return Step::settled(self.target_angle);
        }
        let t = elapsed / self.duration_ms;
        let angle = self.start_angle + (self.target_angle - self.start_angle) * ease_out_quart(t);
        Step::live(angle)
    }
}

/// Session state for the friction-decay strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecaySession {
    /// Accumulated wheel angle (radians)
    pub angle: f64,
    /// Current angular velocity (rad/tick)
    pub velocity: f64,
}

impl DecaySession {
    /// Apply one tick of rotation and friction.
    ///
    /// Velocity snaps to zero once it falls below `stop_velocity`.
    pub fn advance(&mut self, friction: f64, stop_velocity: f64) -> Step {
        self.angle += self.velocity;
        self.velocity *= friction;
        if self.velocity < stop_velocity {
            self.velocity = 0.0;
            return Step::settled(self.angle);
        }
        Step::live(self.angle)
    }
}

/// Quartic ease-out: fast start, slow settle.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn test_ease_monotonically_increasing() {
        let mut prev = ease_out_quart(0.0);
        for i in 1..=100 {
            let next = ease_out_quart(i as f64 / 100.0);
            assert!(next > prev, "ease not increasing at step {i}");
            prev = next;
        }
    }

    #[test]
    fn test_ease_session_interpolates() {
        let session = EaseSession {
            start_angle: 1.0,
            target_angle: 41.0,
            start_ms: 1_000.0,
            duration_ms: 5_000.0,
        };

        let start = session.advance(1_000.0);
        assert!(!start.settled);
        assert_relative_eq!(start.angle, 1.0);

        let mid = session.advance(3_500.0);
        assert!(!mid.settled);
        assert!(mid.angle > 1.0 && mid.angle < 41.0);

        let end = session.advance(6_000.0);
        assert!(end.settled);
        assert_relative_eq!(end.angle, 41.0);

        let past = session.advance(9_999.0);
        assert!(past.settled);
        assert_relative_eq!(past.angle, 41.0);
    }

    #[test]
    fn test_decay_velocity_strictly_decreasing() {
        let mut session = DecaySession {
            angle: 0.0,
            velocity: 0.65,
        };
        let mut prev = session.velocity;
        while !session.advance(0.975, 0.0005).settled {
            assert!(session.velocity < prev);
            prev = session.velocity;
        }
        assert_eq!(session.velocity, 0.0);
    }

    #[test]
    fn test_decay_terminates_in_finite_ticks() {
        for velocity in [0.25, 0.4, 0.6499] {
            let mut session = DecaySession {
                angle: 0.0,
                velocity,
            };
            let mut ticks = 0;
            while !session.advance(0.975, 0.0005).settled {
                ticks += 1;
                assert!(ticks < 1_000, "decay did not settle from {velocity}");
            }
            assert!(session.angle > 0.0);
        }
    }
}
