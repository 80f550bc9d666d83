//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (speeds are per-tick)
//! - Seeded RNG only
//! - Stable iteration order (roster order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod obstacle;
pub mod resolve;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorKind, MotionState};
pub use obstacle::{Obb, Obstacle, ObstacleCategory, ObstacleRegistry, SceneryItem};
pub use resolve::{resolve_enemy, resolve_player};
pub use state::{GameEvent, GamePhase, GameState, WorldDef};
pub use tick::{TickInput, tick};
