//! The four simulation cores.
//!
//! Everything under this module follows the same discipline: plain state
//! structs advanced by a `tick(&mut state, &input, dt)` function at a fixed
//! 60 Hz step, seeded RNG only, no rendering or platform dependencies.
//! Velocities are expressed in viewport px per tick (the units the games
//! were balanced in); timers and difficulty ramps scale with `dt`.

pub mod blind_corner;
pub mod dont_touch;
pub mod maze_runner;
pub mod prime_trap;

pub use blind_corner::BlindCorner;
pub use dont_touch::DontTouch;
pub use maze_runner::Campaign;
pub use prime_trap::PrimeTrap;
