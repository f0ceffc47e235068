//! Spin physics configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use wf_core::{WheelError, WheelResult};

/// Which rotation strategy drives a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Fixed-duration eased interpolation toward a sampled target angle.
    /// Deterministic given the sampled rotation count and offset.
    TimedEase,
    /// Velocity decay under constant friction. Duration is a function of
    /// the sampled initial velocity, not fixed.
    FrictionDecay,
}

impl Default for StrategyKind {
    fn default() -> Self {
        Self::TimedEase
    }
}

/// Physics tuning shared by both strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinConfig {
    /// Minimum full rotations for a timed spin
    pub min_rotations: f64,
    /// Maximum full rotations for a timed spin (exclusive)
    pub max_rotations: f64,
    /// Timed spin duration (ms)
    pub duration_ms: f64,
    /// Minimum initial velocity for a friction spin (rad/tick)
    pub velocity_min: f64,
    /// Maximum initial velocity for a friction spin (rad/tick, exclusive)
    pub velocity_max: f64,
    /// Per-tick velocity multiplier
    pub friction: f64,
    /// Velocity below which a friction spin settles
    pub stop_velocity: f64,
}

impl SpinConfig {
    /// Canonical wheel tuning.
    pub fn standard() -> Self {
        Self {
            min_rotations: 5.0,
            max_rotations: 10.0,
            duration_ms: 5_000.0,
            velocity_min: 0.25,
            velocity_max: 0.65,
            friction: 0.975,
            stop_velocity: 0.0005,
        }
    }

    /// Load tuning from a JSON file.
    pub fn from_json_file(path: &Path) -> WheelResult<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| WheelError::Serialization(e.to_string()))
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self::standard()
    }
}
