//! Pocket Arcade - simulation cores for a collection of tiny canvas games
//!
//! Core modules:
//! - `games`: one deterministic simulation per game (no rendering, no DOM)
//! - `input`: per-frame input snapshot sampled by the shell
//! - `session`: round state machine and fixed-timestep pacing
//! - `best`: persisted best-record scalar per game
//! - `catalog`: landing-page game list
//! - `platform`: browser/native logging and storage abstraction
//!
//! The rendering/input shell drives each game once per animation frame:
//! sample input, run the due fixed ticks, draw the resulting state. The
//! cores never touch the canvas or raw platform events.

pub mod best;
pub mod catalog;
pub mod games;
pub mod input;
pub mod platform;
pub mod session;

pub use best::BestRecord;
pub use catalog::{Catalog, GameInfo};
pub use input::InputSnapshot;
pub use session::{GamePhase, StepAccumulator};

/// Frame pacing constants shared by every simulation core
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the canvas frame rate)
    pub const TICK_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
