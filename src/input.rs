//! Per-frame input snapshot
//!
//! The shell folds raw platform events (keydown/keyup, pointer, touch) into
//! a plain value once per animation frame; the simulation cores only ever
//! see this snapshot.

use glam::Vec2;

/// Input state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Pointer/touch target in viewport coordinates while a pointer is down
    pub pointer: Option<Vec2>,
    /// Pause toggle, edge-triggered: set on the frame the pause key went
    /// down, cleared by the shell after the tick that consumed it
    pub pause: bool,
}

impl InputSnapshot {
    /// Held keys folded into a vector with components in {-1, 0, 1}
    pub fn axis(&self) -> Vec2 {
        Vec2::new(self.axis_x(), self.axis_y())
    }

    /// Horizontal steering component (lane games)
    pub fn axis_x(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }

    pub fn axis_y(&self) -> f32 {
        (self.down as i8 - self.up as i8) as f32
    }
}
