//! Prime or Trap - falling-number reflex game
//!
//! Numbers fall from the top; clicking a prime scores, clicking a composite
//! ends the round, and letting a prime escape costs a life. Score drives a
//! level counter that tightens the spawn interval and widens the value
//! range. The best-record metric is score.

pub mod tick;

pub use tick::{ClickOutcome, click, tick};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::session::GamePhase;

/// Seconds between spawns at level 1
pub const START_INTERVAL: f32 = 1.2;
/// Spawn interval floor
pub const MIN_INTERVAL: f32 = 0.4;
/// Interval shrink per level
pub const INTERVAL_STEP: f32 = 0.15;
/// Smallest spawnable value (below 2 nothing is prime)
pub const MIN_NUMBER: u32 = 2;
/// Largest spawnable value at level 1
pub const START_MAX_NUMBER: u32 = 20;
/// Value range growth per level, and its cap
pub const MAX_NUMBER_STEP: u32 = 10;
pub const MAX_NUMBER_CAP: u32 = 100;
pub const START_LIVES: u32 = 3;
/// Score needed per level
pub const LEVEL_THRESHOLD: u32 = 100;
/// Points per prime click, scaled by the level
pub const POINTS_PER_PRIME: u32 = 10;
/// Click/render radius of a falling number (px)
pub const NUMBER_RADIUS: f32 = 30.0;
/// Fall speed at level 1 (px/tick) and growth per level
pub const BASE_FALL_SPEED: f32 = 1.0;
pub const FALL_SPEED_STEP: f32 = 0.3;
/// Horizontal spawn inset from the viewport edges (px)
pub const SPAWN_MARGIN: f32 = 30.0;
/// How far past the bottom a number lives before despawning (px)
pub const DESPAWN_MARGIN: f32 = 50.0;

/// Trial-division primality test: false below 2, check 2, then odd
/// divisors up to the square root.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// A number currently on screen
#[derive(Debug, Clone, Copy)]
pub struct SpawnedNumber {
    pub value: u32,
    pub pos: Vec2,
    /// px per tick
    pub fall_speed: f32,
    pub is_prime: bool,
}

/// Why the round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// A prime escaped with no lives left
    MissedPrime,
    /// A composite was clicked
    ClickedComposite,
}

/// One running round of the prime game
#[derive(Debug, Clone)]
pub struct PrimeTrap {
    pub phase: GamePhase,
    pub viewport: Vec2,
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub numbers: Vec<SpawnedNumber>,
    pub spawn_interval: f32,
    pub max_number: u32,
    pub game_over_reason: Option<GameOverReason>,
    /// Seconds of unpaused play
    pub elapsed: f32,
    pub(crate) last_spawn: f32,
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
}

impl PrimeTrap {
    pub fn new(seed: u64, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            phase: GamePhase::Menu,
            viewport: Vec2::new(viewport_w, viewport_h),
            score: 0,
            level: 1,
            lives: START_LIVES,
            numbers: Vec::new(),
            spawn_interval: START_INTERVAL,
            max_number: START_MAX_NUMBER,
            game_over_reason: None,
            elapsed: 0.0,
            last_spawn: 0.0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a round. The RNG is rewound to the seed so the spawn sequence
    /// replays identically.
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.level = 1;
        self.lives = START_LIVES;
        self.numbers.clear();
        self.spawn_interval = START_INTERVAL;
        self.max_number = START_MAX_NUMBER;
        self.game_over_reason = None;
        self.elapsed = 0.0;
        self.last_spawn = 0.0;
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_classifier_spot_checks() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(9));
        assert!(is_prime(17));
        assert!(!is_prime(20));
        assert!(is_prime(97));
    }

    #[test]
    fn squares_of_primes_are_composite() {
        for p in [3u32, 5, 7, 11] {
            assert!(is_prime(p));
            assert!(!is_prime(p * p));
        }
    }
}
