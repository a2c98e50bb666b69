//! Don't Touch the Center - gravity-well survival
//!
//! A constant pull toward the center hazard grows over the session,
//! periodic random shoves get stronger, and the player fights back with
//! keys or pointer. Touching the center ends the round; the best-record
//! metric is seconds survived.

pub mod tick;

pub use tick::{is_touching_center, pointer_force, tick};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::session::GamePhase;

/// Square viewport edge length (px)
pub const VIEWPORT: f32 = 500.0;
pub const PLAYER_RADIUS: f32 = 8.0;
pub const CENTER_RADIUS: f32 = 40.0;
/// Pull toward the center at session start (px/tick²)
pub const BASE_GRAVITY: f32 = 0.08;
/// Extra pull per elapsed second
pub const GRAVITY_RAMP: f32 = 0.002;
/// Per-tick velocity retention
pub const FRICTION: f32 = 0.98;
/// Thrust per unit of key axis (px/tick²)
pub const KEY_ACCEL: f32 = 1.2;
/// Thrust per unit of pointer force (px/tick²)
pub const POINTER_ACCEL: f32 = 1.5;
/// Velocity magnitude cap (px/tick)
pub const MAX_SPEED: f32 = 12.0;
/// Wall bounce attenuation
pub const RESTITUTION: f32 = 0.5;
/// Seconds between random shoves
pub const IMPULSE_INTERVAL: f32 = 2.0;
/// Shove magnitude at session start (px/tick)
pub const BASE_IMPULSE: f32 = 0.3;
/// Extra shove magnitude per elapsed second
pub const IMPULSE_RAMP: f32 = 0.01;
/// Pointer dead zone around the player (px)
pub const POINTER_DEAD_ZONE: f32 = 15.0;
/// Pointer distance for full force (px)
pub const POINTER_RANGE: f32 = 80.0;
pub const POINTER_MAX_INTENSITY: f32 = 1.5;

/// The center hazard position
pub fn center() -> Vec2 {
    Vec2::splat(VIEWPORT / 2.0)
}

/// One running round of the gravity toy
#[derive(Debug, Clone)]
pub struct DontTouch {
    pub phase: GamePhase,
    pub pos: Vec2,
    /// px per tick
    pub vel: Vec2,
    /// Seconds of unpaused play, the persisted metric
    pub elapsed: f32,
    impulse_timer: f32,
    seed: u64,
    rng: Pcg32,
}

impl DontTouch {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            pos: spawn_point(),
            vel: Vec2::ZERO,
            elapsed: 0.0,
            impulse_timer: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a round. The RNG is rewound to the seed so a round replays
    /// identically from the same input sequence.
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.pos = spawn_point();
        self.vel = Vec2::ZERO;
        self.elapsed = 0.0;
        self.impulse_timer = 0.0;
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// Current pull toward the center (px/tick²)
    pub fn gravity(&self) -> f32 {
        BASE_GRAVITY + self.elapsed * GRAVITY_RAMP
    }

    /// Current random-shove magnitude (px/tick)
    pub fn impulse_magnitude(&self) -> f32 {
        BASE_IMPULSE + self.elapsed * IMPULSE_RAMP
    }
}

/// Round starting position, up and right of the hazard
fn spawn_point() -> Vec2 {
    Vec2::new(VIEWPORT * 0.8, VIEWPORT * 0.2)
}
