//! Round state machine and frame pacing shared by all four games.

use crate::consts::{MAX_SUBSTEPS, TICK_DT};

/// Current phase of a round
///
/// Every game follows the same shape: menu/instructions, play, optional
/// pause, terminal game-over, restart back into play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Instructions overlay shown, simulation idle
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen: ticks return immediately, so simulated time stands still
    Paused,
    /// Round ended by a terminal condition
    GameOver,
}

impl GamePhase {
    pub fn is_running(self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Apply a pause toggle. Menu and GameOver are unaffected.
    pub fn toggle_pause(&mut self) {
        *self = match *self {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }
}

/// Wall-clock to fixed-step conversion for the host loop.
///
/// The shell feeds in raw frame deltas and runs the returned number of
/// fixed ticks. Frame spikes are capped so a backgrounded tab cannot queue
/// seconds of catch-up simulation.
#[derive(Debug, Clone, Default)]
pub struct StepAccumulator {
    acc: f32,
}

impl StepAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fixed ticks due for a frame of `frame_dt` seconds
    pub fn substeps(&mut self, frame_dt: f32) -> u32 {
        self.acc += frame_dt.min(0.1);
        let mut steps = 0;
        while self.acc >= TICK_DT && steps < MAX_SUBSTEPS {
            self.acc -= TICK_DT;
            steps += 1;
        }
        steps
    }

    /// Drop accumulated time, e.g. on resume so the pause gap is not simulated
    pub fn reset(&mut self) {
        self.acc = 0.0;
    }
}
