//! Winner-index resolution
//!
//! The pointer sits fixed at angle 0 (pointing right) while the wheel
//! rotates under it, so the winning segment is whichever one has rotated
//! *into* the pointer's position: the accumulated rotation is read back
//! through a full turn.

use std::f64::consts::TAU;

/// Map a settled wheel angle to the winning segment index.
///
/// Segment `i` spans `[i·arc, (i+1)·arc)` in the wheel's unrotated frame,
/// with `arc = 2π/segments`. Holds `0 <= index < segments` for any finite
/// angle, including negative ones (the double modulo guards the
/// intermediate floor).
pub fn resolve_index(angle: f64, segments: usize) -> usize {
    if segments == 0 {
        return 0;
    }
    let arc = TAU / segments as f64;
    let normalized = angle % TAU;
    let rotation_offset = TAU - normalized;
    let index = (rotation_offset / arc).floor() as i64;
    index.rem_euclid(segments as i64) as usize
}
