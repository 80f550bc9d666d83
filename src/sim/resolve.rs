//! Collision resolution passes
//!
//! Rewrites actors' tentative positions against static scenery, the arena
//! boundary and the enemy roster. Policy differs by who is being resolved:
//! the player is driven by imprecise joystick input and is only ever
//! stopped; autonomous enemies are pushed off and turned away so they do
//! not grind against the same obstacle forever.

use glam::Vec3;

use crate::consts::{DEFLECT_TURN, OBSTACLE_PUSH_EPSILON, PICKUP_RANGE};
use crate::sim::actor::Actor;
use crate::sim::obstacle::ObstacleRegistry;
use crate::sim::state::GameEvent;

/// One resolver pass for a wandering enemy: obstacles (with bounce), then
/// the arena boundary.
pub fn resolve_enemy(actor: &mut Actor, obstacles: &ObstacleRegistry, boundary_radius: f32) {
    obstacle_pass(actor, obstacles, true);
    boundary_pass(actor, boundary_radius);
}

/// One resolver pass for the player: obstacles (stop only), the arena
/// boundary, then pickup of any enemies in reach. The driver runs this
/// several times per tick before the player commits.
pub fn resolve_player(
    player: &mut Actor,
    obstacles: &ObstacleRegistry,
    boundary_radius: f32,
    enemies: &mut Vec<Actor>,
    events: &mut Vec<GameEvent>,
) {
    obstacle_pass(player, obstacles, false);
    boundary_pass(player, boundary_radius);
    collection_pass(player, enemies, events);
}

/// Compare the actor's tentative position against every obstacle's
/// world-space volume. On contact the tick's displacement is cancelled
/// outright; deflecting passes additionally place the actor just outside
/// the contact distance and command a hard turn.
fn obstacle_pass(actor: &mut Actor, obstacles: &ObstacleRegistry, deflect: bool) {
    for obstacle in obstacles.iter() {
        let center = obstacle.world_obb().center;
        let distance = actor.tentative.distance(center);
        if distance < obstacle.threshold {
            actor.tentative = actor.position();

            if deflect {
                // Away-direction from the already reset position
                let away = (actor.tentative.x - center.x).atan2(actor.tentative.z - center.z);
                let reach = obstacle.threshold + OBSTACLE_PUSH_EPSILON;
                actor.tentative.x = center.x + reach * away.sin();
                actor.tentative.z = center.z + reach * away.cos();

                actor.set_target_heading(actor.target_heading() + DEFLECT_TURN);
            }
        }
    }
}

/// Steer back toward the origin once the tentative position leaves the
/// arena. The displacement already taken stands; only the desired heading
/// changes, so the turn-back reads as motion rather than a wall.
fn boundary_pass(actor: &mut Actor, boundary_radius: f32) {
    if actor.tentative.distance(Vec3::ZERO) > boundary_radius {
        let p = actor.position();
        actor.set_target_heading(p.x.atan2(-p.z));
    }
}

/// Remove every enemy within pickup range of the player and report each as
/// collected. Candidates are gathered before any removal so a shrinking
/// roster cannot perturb the scan.
fn collection_pass(player: &Actor, enemies: &mut Vec<Actor>, events: &mut Vec<GameEvent>) {
    let caught: Vec<u32> = enemies
        .iter()
        .filter(|enemy| player.tentative.distance(enemy.tentative) < PICKUP_RANGE)
        .map(|enemy| enemy.id)
        .collect();

    if caught.is_empty() {
        return;
    }

    enemies.retain_mut(|enemy| {
        if caught.contains(&enemy.id) {
            enemy.destroy();
            events.push(GameEvent::Collected { id: enemy.id });
            false
        } else {
            true
        }
    });
}
