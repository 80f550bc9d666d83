//! Game balance configuration
//!
//! Every tuned value the sim consumes at construction lives here so game
//! variants can ship different balance without touching the core. Defaults
//! carry the shipped game's values.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Per-kind movement and animation tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActorTuning {
    /// Speed commanded while movement is enabled (distance per tick)
    pub max_speed: f32,
    /// Exponential smoothing factor for heading, in (0, 1]
    pub heading_alpha: f32,
    /// Exponential smoothing factor for speed, in (0, 1]
    pub speed_alpha: f32,
    /// Animation playback rate while idle
    pub idle_anim_rate: f32,
    /// Animation playback rate while walking
    pub walk_anim_rate: f32,
    /// Visual scale applied by the renderer (carried for mesh placement)
    pub scale: f32,
}

impl ActorTuning {
    /// The controllable hero: fast, tight steering
    pub fn player() -> Self {
        Self {
            max_speed: 0.03,
            heading_alpha: 0.4,
            speed_alpha: 0.6,
            idle_anim_rate: 0.01,
            walk_anim_rate: 0.05,
            scale: 0.6,
        }
    }

    /// Wandering dinos: slower, lazier turns
    pub fn enemy() -> Self {
        Self {
            max_speed: 0.01,
            heading_alpha: 0.15,
            speed_alpha: 0.6,
            idle_anim_rate: 0.01,
            walk_anim_rate: 0.05,
            scale: 0.5,
        }
    }
}

/// Obstacle proximity thresholds by scenery category
///
/// Distance from an actor's tentative position to an obstacle's bounding-box
/// center below which the contact policy kicks in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProximityTable {
    pub default: f32,
    pub egg: f32,
    pub stone: f32,
    pub palm: f32,
}

impl Default for ProximityTable {
    fn default() -> Self {
        Self {
            default: 0.4,
            egg: 0.55,
            stone: 0.2,
            palm: 0.6,
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Player movement tuning
    pub player: ActorTuning,
    /// Enemy movement tuning
    pub enemy: ActorTuning,
    /// Player spawn position (y is ground level)
    pub player_spawn: Vec3,
    /// Maximum distance from the arena origin before steer-back kicks in
    pub boundary_radius: f32,
    /// Number of enemies spawned at session start
    pub enemy_count: u32,
    /// Obstacle contact thresholds
    pub thresholds: ProximityTable,
    /// Progress meter value at session start
    pub progress_start: f32,
    /// Progress added per collected enemy
    pub progress_per_collect: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player: ActorTuning::player(),
            enemy: ActorTuning::enemy(),
            player_spawn: Vec3::new(-1.0, 0.0, -0.5),
            boundary_radius: 6.0,
            enemy_count: 10,
            thresholds: ProximityTable::default(),
            progress_start: 50.0,
            progress_per_collect: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_balance() {
        let cfg = SimConfig::default();
        assert!((cfg.player.max_speed - 0.03).abs() < f32::EPSILON);
        assert!((cfg.enemy.max_speed - 0.01).abs() < f32::EPSILON);
        assert!((cfg.enemy.heading_alpha - 0.15).abs() < f32::EPSILON);
        assert_eq!(cfg.enemy_count, 10);
        assert!((cfg.thresholds.stone - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_json_round_trip() {
        let cfg = SimConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert!((back.boundary_radius - cfg.boundary_radius).abs() < f32::EPSILON);
        assert!((back.thresholds.egg - cfg.thresholds.egg).abs() < f32::EPSILON);
    }
}
