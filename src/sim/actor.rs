//! Moving entities: the player and the wandering dinos
//!
//! An actor smooths its heading and speed toward externally commanded
//! targets, integrates a tentative displacement each tick, and only adopts
//! it as its authoritative position at commit time, after the resolver has
//! had its say. Heading 0 faces +z; a positive heading turns toward -x.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::ActorTuning;
use crate::consts::ANIM_RATE_FALLBACK;
use crate::angle_lerp;

/// Sentinel for a tentative position not yet seeded from the spawn point.
/// Unreachable in play; the first non-forced `calculate` replaces it.
const TENTATIVE_UNSET: Vec3 = Vec3::new(f32::MAX, f32::MAX, 0.0);

/// Which roster an actor belongs to (and which tuning/mesh it gets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Enemy,
}

/// Animation-facing motion state
///
/// `Final` is the player's celebration pose; it is terminal and entered only
/// through `enter_final` when the session completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    Idle,
    Walking,
    Final,
}

/// A simulated moving entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub kind: ActorKind,
    tuning: ActorTuning,

    heading: f32,
    target_heading: f32,
    speed: f32,
    target_speed: f32,

    /// Authoritative position; written only by `commit` (y stays at ground)
    position: Vec3,
    /// Next candidate position; rewritten freely by resolver passes
    pub(crate) tentative: Vec3,
    spawn: Vec3,

    movement_active: bool,
    state: MotionState,
    /// Animation playback clock; resets on a real state change
    anim_time: f32,

    /// Set by `calculate(false)`, consumed by `commit`
    integrated: bool,
    destroyed: bool,
}

impl Actor {
    /// Create an actor at its spawn point, posed stably (heading and speed
    /// snapped to their targets) and idle.
    pub fn new(id: u32, kind: ActorKind, tuning: ActorTuning, spawn: Vec3) -> Self {
        let mut actor = Self {
            id,
            kind,
            tuning,
            heading: 0.0,
            // Spawn facing -z, toward the camera
            target_heading: std::f32::consts::PI,
            speed: 0.0,
            target_speed: 0.0,
            position: spawn,
            tentative: TENTATIVE_UNSET,
            spawn,
            movement_active: false,
            state: MotionState::Idle,
            anim_time: 0.0,
            integrated: false,
            destroyed: false,
        };
        actor.calculate(true);
        actor
    }

    /// Desired heading in radians; takes effect over the next ticks
    pub fn set_target_heading(&mut self, angle: f32) {
        self.target_heading = angle;
    }

    pub fn target_heading(&self) -> f32 {
        self.target_heading
    }

    /// Command movement on (at the tuned max speed) or off.
    ///
    /// Re-commanding the current state is a no-op so the walk animation does
    /// not restart mid-stride. Ignored once the actor is in `Final`.
    pub fn set_movement_enabled(&mut self, enabled: bool) {
        if self.state == MotionState::Final {
            return;
        }
        self.target_speed = if enabled { self.tuning.max_speed } else { 0.0 };
        self.movement_active = enabled;
        self.set_state(if enabled {
            MotionState::Walking
        } else {
            MotionState::Idle
        });
    }

    /// Whether an external driver is currently commanding movement
    /// (the audio layer polls this for footsteps)
    pub fn is_movement_active(&self) -> bool {
        self.movement_active
    }

    /// Advance smoothing and integrate this tick's tentative displacement.
    ///
    /// With `force_snap` (construction only) heading and speed jump straight
    /// to their targets and nothing is integrated. Performs no collision
    /// checks and never touches the authoritative position.
    pub fn calculate(&mut self, force_snap: bool) {
        assert!(!self.destroyed, "calculate on destroyed actor {}", self.id);

        if force_snap {
            self.heading = self.target_heading;
            self.speed = self.target_speed;
            return;
        }

        self.heading = angle_lerp(self.heading, self.target_heading, self.tuning.heading_alpha);
        self.speed += (self.target_speed - self.speed) * self.tuning.speed_alpha;

        if self.tentative == TENTATIVE_UNSET {
            self.tentative = self.spawn;
        }

        // Heading 0 moves along +z; sign convention must match the mesh yaw
        self.tentative.x -= self.speed * self.heading.sin();
        self.tentative.z += self.speed * self.heading.cos();

        self.integrated = true;
    }

    /// Adopt the resolved tentative position and advance animation playback.
    ///
    /// Must run exactly once per tick, after every resolver pass for the
    /// tick.
    ///
    /// # Panics
    /// If no `calculate` preceded this commit.
    pub fn commit(&mut self) {
        assert!(!self.destroyed, "commit on destroyed actor {}", self.id);
        assert!(
            self.integrated,
            "commit without a preceding calculate on actor {}",
            self.id
        );
        self.integrated = false;

        self.position.x = self.tentative.x;
        self.position.z = self.tentative.z;

        self.anim_time += self.playback_rate();
    }

    /// Halt playback and mark the actor dead. The caller removes it from the
    /// roster; any later use panics.
    pub fn destroy(&mut self) {
        assert!(!self.destroyed, "double destroy on actor {}", self.id);
        self.destroyed = true;
    }

    /// Terminal celebration pose, driven by the session-completion event
    pub fn enter_final(&mut self) {
        self.target_speed = 0.0;
        self.movement_active = false;
        self.set_state(MotionState::Final);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn tentative_position(&self) -> Vec3 {
        self.tentative
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn motion_state(&self) -> MotionState {
        self.state
    }

    pub fn anim_time(&self) -> f32 {
        self.anim_time
    }

    fn set_state(&mut self, state: MotionState) {
        if self.state != state {
            self.state = state;
            self.anim_time = 0.0;
        }
    }

    fn playback_rate(&self) -> f32 {
        match self.state {
            MotionState::Idle => self.tuning.idle_anim_rate,
            MotionState::Walking => self.tuning.walk_anim_rate,
            MotionState::Final => ANIM_RATE_FALLBACK,
        }
    }
}
