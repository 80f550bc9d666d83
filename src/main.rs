//! Dino Roundup entry point
//!
//! Headless session driver: builds the demo island, steers the player at the
//! nearest dino each frame and runs the sim until the meter fills. The real
//! game embeds the same `GameState`/`tick` pair under a renderer and a
//! virtual joystick; this binary stands in for both.

use std::f32::consts::TAU;
use std::process::ExitCode;

use glam::{Affine3A, Vec3};

use dino_roundup::config::SimConfig;
use dino_roundup::sim::{GameEvent, GamePhase, GameState, SceneryItem, TickInput, WorldDef, tick};

/// Hard stop for a demo run that never completes
const MAX_TICKS: u64 = 20_000;

/// The demo island: a ring of palms, scattered stones and eggs around the
/// nest, and grass patches the dinos spawn on.
fn demo_world() -> WorldDef {
    let mut scenery = Vec::new();

    let unit_box = |name: &str, at: Vec3| SceneryItem {
        name: name.to_string(),
        aabb_min: Vec3::new(-0.5, 0.0, -0.5),
        aabb_max: Vec3::new(0.5, 1.0, 0.5),
        transform: Affine3A::from_translation(at),
    };

    for i in 0..8 {
        let theta = i as f32 / 8.0 * TAU;
        scenery.push(unit_box(
            &format!("mPalm0{i}"),
            Vec3::new(4.5 * theta.sin(), 0.0, 4.5 * theta.cos()),
        ));
    }
    scenery.push(unit_box("Stone01", Vec3::new(1.5, 0.0, 2.0)));
    scenery.push(unit_box("Stone02", Vec3::new(-2.5, 0.0, -1.0)));
    scenery.push(unit_box("Egg01", Vec3::new(0.8, 0.0, -1.8)));
    scenery.push(unit_box("Nest", Vec3::new(0.0, 0.0, 2.8)));

    let enemy_spawns = (0..12)
        .map(|i| {
            let theta = i as f32 / 12.0 * TAU;
            let r = 1.5 + (i % 3) as f32;
            Vec3::new(r * theta.sin(), 0.0, r * theta.cos())
        })
        .collect();

    WorldDef {
        scenery,
        enemy_spawns,
    }
}

/// Joystick angle that walks the player from `from` toward `to`
fn heading_toward(from: Vec3, to: Vec3) -> f32 {
    (-(to.x - from.x)).atan2(to.z - from.z)
}

/// Stand-in for the joystick/AI layer: chase the nearest surviving dino
fn chase_input(state: &GameState) -> TickInput {
    let target = state
        .enemies
        .iter()
        .min_by(|a, b| {
            let pa = state.player.position().distance(a.position());
            let pb = state.player.position().distance(b.position());
            pa.partial_cmp(&pb).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|enemy| heading_toward(state.player.position(), enemy.position()));

    TickInput {
        target_heading: target,
        movement: Some(target.is_some()),
    }
}

fn load_config(path: &str) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0xD1D0);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Failed to load config {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };

    log::info!(
        "Dino Roundup starting: seed {seed}, {} dinos, arena radius {}",
        config.enemy_count,
        config.boundary_radius
    );

    let mut state = GameState::new(config, demo_world(), seed);

    while state.time_ticks < MAX_TICKS {
        let input = chase_input(&state);
        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::Collected { id } => {
                    log::info!(
                        "tick {}: collected dino {id}, progress {:.0}, {} left",
                        state.time_ticks,
                        state.progress,
                        state.enemies.len()
                    );
                }
                GameEvent::SessionComplete => {
                    log::info!("tick {}: session complete!", state.time_ticks);
                }
            }
        }

        if state.phase == GamePhase::Complete {
            break;
        }
    }

    let p = state.player.position();
    log::info!(
        "done after {} ticks: progress {:.0}, player at ({:.2}, {:.2}), {} dinos left",
        state.time_ticks,
        state.progress,
        p.x,
        p.z,
        state.enemies.len()
    );

    if state.phase == GamePhase::Complete {
        ExitCode::SUCCESS
    } else {
        log::warn!("demo run hit the tick limit before completing");
        ExitCode::FAILURE
    }
}
