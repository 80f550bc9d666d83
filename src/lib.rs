//! Dino Roundup - a dino-collecting arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, obstacles, collision resolution)
//! - `config`: Data-driven game balance
//!
//! Rendering, asset loading, audio and the joystick widget live outside this
//! crate; they feed the sim target headings and movement on/off edges and read
//! back positions, headings and session events.

pub mod config;
pub mod sim;

pub use config::{ActorTuning, ProximityTable, SimConfig};

/// Game structural constants
pub mod consts {
    use std::f32::consts::PI;

    /// Resolver passes per tick for the player (tuned; lets the stop
    /// cancellation converge within one visual frame)
    pub const PLAYER_RESOLVE_PASSES: u32 = 4;
    /// Distance past the proximity threshold an enemy is pushed to when
    /// bounced off an obstacle
    pub const OBSTACLE_PUSH_EPSILON: f32 = 0.02;
    /// Heading deflection applied to an enemy on obstacle contact (a fixed
    /// large turn, not a reflection)
    pub const DEFLECT_TURN: f32 = PI * 0.6;
    /// Player-to-enemy pickup distance
    pub const PICKUP_RANGE: f32 = 0.4;
    /// Animation playback rate for states without a configured rate
    pub const ANIM_RATE_FALLBACK: f32 = 0.025;
    /// Progress value at which the session completes
    pub const PROGRESS_COMPLETE: f32 = 100.0;
}

/// Shortest signed angular distance from `from` to `to`, in [-π, π).
///
/// Uses floor-mod (`rem_euclid`) so the result is correct for negative
/// operands and for headings that have accumulated past 2π.
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    use std::f32::consts::TAU;
    let delta = (to - from).rem_euclid(TAU);
    (2.0 * delta).rem_euclid(TAU) - delta
}

/// Interpolate an angle toward a target along the shortest arc
#[inline]
pub fn angle_lerp(from: f32, to: f32, t: f32) -> f32 {
    from + shortest_angle_delta(from, to) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_shortest_delta_basic() {
        assert!((shortest_angle_delta(0.0, 1.0) - 1.0).abs() < 1e-6);
        assert!((shortest_angle_delta(1.0, 0.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_shortest_delta_wraps() {
        // 0.1 to 2π - 0.1 should go backward 0.2, not forward 2π - 0.2
        let d = shortest_angle_delta(0.1, TAU - 0.1);
        assert!((d + 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_shortest_delta_negative_operands() {
        // Floor-mod edge case: negative from/to must not flip the turn
        let d = shortest_angle_delta(-0.1, 0.1);
        assert!((d - 0.2).abs() < 1e-5);
        let d = shortest_angle_delta(-3.0 * PI, PI / 2.0);
        assert!(d.abs() <= PI + 1e-5);
    }

    #[test]
    fn test_angle_lerp_full_step() {
        let a = angle_lerp(0.2, 1.2, 1.0);
        assert!((a - 1.2).abs() < 1e-6);
    }

    proptest! {
        // The turn taken is always the short way around: |delta| <= π, and
        // stepping by it lands exactly on the target (mod 2π).
        #[test]
        fn prop_shortest_delta_bounded(from in -10.0f32..10.0, to in -10.0f32..10.0) {
            let d = shortest_angle_delta(from, to);
            prop_assert!(d.abs() <= PI + 1e-4);
            let landed = (from + d - to).rem_euclid(TAU);
            prop_assert!(landed < 1e-3 || (TAU - landed) < 1e-3);
        }
    }
}
