//! Per-frame simulation tick
//!
//! The render loop calls `tick` once per frame. Ordering is load-bearing:
//! the player integrates and resolves several times before committing, then
//! every surviving enemy integrates, resolves once and commits. Positions
//! become authoritative only at the commit at the end of each actor's turn.

use crate::consts::PLAYER_RESOLVE_PASSES;
use crate::sim::resolve::{resolve_enemy, resolve_player};
use crate::sim::state::{GamePhase, GameState};

/// Input edges for a single tick, as delivered by the joystick layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Desired player heading (joystick angle), if it changed
    pub target_heading: Option<f32>,
    /// Movement on/off edge (joystick press/release)
    pub movement: Option<bool>,
}

/// Advance the session by one fixed step.
///
/// Speeds are per-tick, so there is no dt: the external loop owns frame
/// pacing and simply stops calling this on pause.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Joystick input only steers a live session; after completion the
    // player holds the celebration pose.
    if state.phase == GamePhase::Playing {
        if let Some(angle) = input.target_heading {
            state.player.set_target_heading(angle);
        }
        if let Some(on) = input.movement {
            state.player.set_movement_enabled(on);
        }
    }

    let events_before = state.events.len();

    state.player.calculate(false);
    for _ in 0..PLAYER_RESOLVE_PASSES {
        resolve_player(
            &mut state.player,
            &state.obstacles,
            state.config.boundary_radius,
            &mut state.enemies,
            &mut state.events,
        );
    }
    state.player.commit();

    for enemy in state.enemies.iter_mut() {
        enemy.calculate(false);
        resolve_enemy(enemy, &state.obstacles, state.config.boundary_radius);
        enemy.commit();
    }

    let collected = state.events.len() - events_before;
    state.apply_collections(collected);
}
