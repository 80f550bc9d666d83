//! Session state
//!
//! Everything a running session owns: the player, the enemy roster, the
//! obstacle registry, the progress meter and the event queue the external
//! UI/audio layer drains.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::consts::PROGRESS_COMPLETE;
use crate::sim::actor::{Actor, ActorKind};
use crate::sim::obstacle::{ObstacleRegistry, SceneryItem};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Roaming and collecting
    Playing,
    /// Meter full; the player celebrates, the survivors keep wandering
    Complete,
}

/// Outbound events, drained by the external progress/UI/audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An enemy was caught and removed from the roster
    Collected { id: u32 },
    /// The progress meter filled; fired exactly once per session
    SessionComplete,
}

/// Static world content, as handed over by the (external) asset loader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldDef {
    /// Collidable scenery meshes
    pub scenery: Vec<SceneryItem>,
    /// Grass patches enemies may spawn on
    pub enemy_spawns: Vec<Vec3>,
}

/// Complete session state (deterministic per seed, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Progress meter, 0-100
    pub progress: f32,
    pub player: Actor,
    /// Live enemy roster; shrinks only through the collection pass
    pub enemies: Vec<Actor>,
    pub obstacles: ObstacleRegistry,
    pub config: SimConfig,
    /// Pending outbound events
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Build a session: registry from the scenery, player at the configured
    /// spawn, enemies scattered over seeded-random grass patches with random
    /// initial headings and movement on.
    ///
    /// # Panics
    /// If enemies are requested but the world has no spawn points.
    pub fn new(config: SimConfig, world: WorldDef, seed: u64) -> Self {
        assert!(
            config.enemy_count == 0 || !world.enemy_spawns.is_empty(),
            "world has no enemy spawn points"
        );

        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = ObstacleRegistry::build(world.scenery, &config.thresholds);

        let player = Actor::new(0, ActorKind::Player, config.player, config.player_spawn);

        let enemies = (0..config.enemy_count)
            .map(|i| {
                let patch = world.enemy_spawns[rng.random_range(0..world.enemy_spawns.len())];
                let mut enemy = Actor::new(1 + i, ActorKind::Enemy, config.enemy, patch);
                enemy.set_target_heading(std::f32::consts::PI * rng.random::<f32>());
                enemy.set_movement_enabled(true);
                enemy
            })
            .collect();

        let next_id = 1 + config.enemy_count;
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Playing,
            progress: config.progress_start,
            player,
            enemies,
            obstacles,
            config,
            events: Vec::new(),
            next_id,
        }
    }

    /// Allocate an entity ID (for variants that spawn mid-session)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance the meter for this tick's collections; completing the meter
    /// fires `SessionComplete` once and parks the player in the celebration
    /// state.
    pub(crate) fn apply_collections(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.progress += self.config.progress_per_collect * count as f32;

        if self.progress >= PROGRESS_COMPLETE && self.phase == GamePhase::Playing {
            self.phase = GamePhase::Complete;
            self.player.enter_final();
            self.events.push(GameEvent::SessionComplete);
        }
    }

    /// Take all pending events (external collaborators call this per frame)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
