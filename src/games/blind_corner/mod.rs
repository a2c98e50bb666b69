//! Blind Corner - lane-avoidance driving in the fog
//!
//! The car sits at a fixed depth in the viewport while a procedurally
//! curved track scrolls past. Forward speed ramps up over the run; leaving
//! the lane ends it. The best-record metric is distance travelled.

pub mod tick;
pub mod track;

pub use tick::{is_colliding, tick};
pub use track::{Track, TrackSegment, center_offset};

use glam::Vec2;

use crate::session::GamePhase;

/// Starting forward speed (track px per tick)
pub const INITIAL_SPEED: f32 = 3.0;
/// Forward speed gained per second of play
pub const SPEED_RAMP: f32 = 0.5;
/// Forward speed ceiling
pub const MAX_SPEED: f32 = 10.0;
/// Lane width (px)
pub const TRACK_WIDTH: f32 = 120.0;
/// Car footprint (px)
pub const CAR_WIDTH: f32 = 20.0;
pub const CAR_HEIGHT: f32 = 30.0;
/// Lateral steering rate (px per tick)
pub const STEER_SPEED: f32 = 4.0;
/// Pointer steering dead zone (px)
pub const POINTER_DEAD_ZONE: f32 = 5.0;
/// Distance score gained per second per unit of speed
pub const DISTANCE_PER_SPEED: f32 = 10.0;
/// Fraction of viewport height where the car sits
pub const CAR_DEPTH: f32 = 0.7;
/// Center-line curve parameters
pub const CURVE_FREQUENCY: f32 = 0.01;
pub const CURVE_AMPLITUDE: f32 = 80.0;
/// Fog visibility radius around the car (px); the shell's fog gradient
/// honors this, the simulation itself sees the whole track
pub const VISIBILITY_RADIUS: f32 = 150.0;

/// One running round of the driving game
#[derive(Debug, Clone)]
pub struct BlindCorner {
    pub phase: GamePhase,
    /// Viewport size sampled at round start
    pub viewport: Vec2,
    /// Forward speed (track px per tick)
    pub speed: f32,
    /// Distance score, the persisted metric
    pub distance: f32,
    /// Track px scrolled past since round start
    pub scroll: f32,
    /// Car center x in viewport coordinates
    pub car_x: f32,
    /// Seconds of unpaused play
    pub elapsed: f32,
    pub track: Track,
}

impl BlindCorner {
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            phase: GamePhase::Menu,
            viewport: Vec2::new(viewport_w, viewport_h),
            speed: INITIAL_SPEED,
            distance: 0.0,
            scroll: 0.0,
            car_x: viewport_w / 2.0,
            elapsed: 0.0,
            track: Track::new(viewport_w, viewport_h),
        }
    }

    /// Begin a round, discarding any previous round's state
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.speed = INITIAL_SPEED;
        self.distance = 0.0;
        self.scroll = 0.0;
        self.car_x = self.viewport.x / 2.0;
        self.elapsed = 0.0;
        self.track = Track::new(self.viewport.x, self.viewport.y);
    }

    /// Screen y of the car's fixed depth
    pub fn car_y(&self) -> f32 {
        self.viewport.y * CAR_DEPTH
    }

    /// Track-space position of the car's cross-section
    pub fn car_track_y(&self) -> f32 {
        self.scroll + self.viewport.y * (1.0 - CAR_DEPTH)
    }
}
