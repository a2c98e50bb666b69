//! Gravity-well integrator and the center-contact check.
//!
//! Force order per tick: input thrust, periodic random shove, center pull,
//! then friction, the speed cap, and position integration. Walls bounce
//! inelastically. The order is fixed; reordering changes trajectories and
//! breaks replay determinism.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::{
    CENTER_RADIUS, DontTouch, FRICTION, IMPULSE_INTERVAL, KEY_ACCEL, MAX_SPEED, PLAYER_RADIUS,
    POINTER_ACCEL, POINTER_DEAD_ZONE, POINTER_MAX_INTENSITY, POINTER_RANGE, RESTITUTION, VIEWPORT,
    center,
};
use crate::input::InputSnapshot;
use crate::session::GamePhase;

/// Advance the round by one fixed timestep.
pub fn tick(state: &mut DontTouch, input: &InputSnapshot, dt: f32) {
    if input.pause {
        state.phase.toggle_pause();
    }
    if !state.phase.is_running() {
        return;
    }

    state.elapsed += dt;

    // Input thrust: an active pointer overrides held keys
    let thrust = match input.pointer {
        Some(target) => pointer_force(state.pos, target) * POINTER_ACCEL,
        None => input.axis() * KEY_ACCEL,
    };
    state.vel += thrust;

    // Periodic random shove, growing with the session
    state.impulse_timer += dt;
    if state.impulse_timer > IMPULSE_INTERVAL {
        let angle = state.rng.random_range(0.0..TAU);
        state.vel += Vec2::from_angle(angle) * state.impulse_magnitude();
        state.impulse_timer = 0.0;
    }

    // Ramping pull toward the center
    let to_center = center() - state.pos;
    let dist = to_center.length();
    if dist > 0.0 {
        state.vel += to_center / dist * state.gravity();
    }

    // Friction, speed cap, integrate
    state.vel *= FRICTION;
    state.vel = state.vel.clamp_length_max(MAX_SPEED);
    state.pos += state.vel;

    bounce_off_walls(state);

    if is_touching_center(state.pos) {
        state.phase = GamePhase::GameOver;
    }
}

/// Convert a pointer target into a thrust direction with distance-scaled
/// intensity. Targets inside the dead zone produce no force.
pub fn pointer_force(player: Vec2, target: Vec2) -> Vec2 {
    let delta = target - player;
    let dist = delta.length();
    if dist <= POINTER_DEAD_ZONE {
        return Vec2::ZERO;
    }
    let intensity = (dist / POINTER_RANGE).min(POINTER_MAX_INTENSITY);
    delta / dist * intensity
}

/// True once the player overlaps the hazard. Exact tangency does not count.
pub fn is_touching_center(pos: Vec2) -> bool {
    pos.distance(center()) < PLAYER_RADIUS + CENTER_RADIUS
}

/// Clamp to the viewport, reflecting and halving the normal velocity
fn bounce_off_walls(state: &mut DontTouch) {
    let r = PLAYER_RADIUS;
    if state.pos.x - r < 0.0 {
        state.pos.x = r;
        state.vel.x *= -RESTITUTION;
    }
    if state.pos.x + r > VIEWPORT {
        state.pos.x = VIEWPORT - r;
        state.vel.x *= -RESTITUTION;
    }
    if state.pos.y - r < 0.0 {
        state.pos.y = r;
        state.vel.y *= -RESTITUTION;
    }
    if state.pos.y + r > VIEWPORT {
        state.pos.y = VIEWPORT - r;
        state.vel.y *= -RESTITUTION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_DT;
    use proptest::prelude::*;

    fn started(seed: u64) -> DontTouch {
        let mut game = DontTouch::new(seed);
        game.start();
        game
    }

    #[test]
    fn tangency_is_not_a_collision() {
        let contact = PLAYER_RADIUS + CENTER_RADIUS;
        let tangent = center() + Vec2::new(contact, 0.0);
        assert!(!is_touching_center(tangent));
        assert!(is_touching_center(tangent - Vec2::new(0.1, 0.0)));
    }

    #[test]
    fn friction_decays_speed_while_moving_outward() {
        // Start at the hazard's center moving outward: gravity opposes the
        // motion the whole way, so speed must fall monotonically until the
        // pull turns the player around. Short enough that no shove fires.
        let mut game = started(7);
        game.pos = center();
        game.vel = Vec2::new(2.0, 0.0);

        let mut prev_speed = game.vel.length();
        for _ in 0..120 {
            tick(&mut game, &InputSnapshot::default(), TICK_DT);
            if game.vel.x <= 0.0 {
                break; // turned around; the pull now accelerates it
            }
            let speed = game.vel.length();
            assert!(speed <= prev_speed);
            prev_speed = speed;
        }
    }

    #[test]
    fn same_seed_and_inputs_replay_the_same_trajectory() {
        let mut a = started(42);
        let mut b = started(42);
        let input = InputSnapshot {
            right: true,
            up: true,
            ..Default::default()
        };
        // Long enough to include two random shoves
        for _ in 0..300 {
            tick(&mut a, &input, TICK_DT);
            tick(&mut b, &input, TICK_DT);
        }
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);

        // Restarting rewinds the RNG as well
        let mut c = started(42);
        c.start();
        for _ in 0..300 {
            tick(&mut c, &input, TICK_DT);
        }
        assert_eq!(a.pos, c.pos);
    }

    #[test]
    fn pointer_force_has_a_dead_zone_and_an_intensity_cap() {
        let player = Vec2::new(100.0, 100.0);
        assert_eq!(pointer_force(player, player + Vec2::new(10.0, 0.0)), Vec2::ZERO);

        let near = pointer_force(player, player + Vec2::new(40.0, 0.0));
        assert!((near.x - 0.5).abs() < 1e-6);

        let far = pointer_force(player, player + Vec2::new(400.0, 0.0));
        assert!((far.length() - POINTER_MAX_INTENSITY).abs() < 1e-6);
    }

    #[test]
    fn walls_reflect_and_attenuate() {
        let mut game = started(1);
        game.pos = Vec2::new(PLAYER_RADIUS + 1.0, VIEWPORT / 2.0);
        game.vel = Vec2::new(-10.0, 0.0);
        tick(&mut game, &InputSnapshot::default(), TICK_DT);
        assert_eq!(game.pos.x, PLAYER_RADIUS);
        assert!(game.vel.x > 0.0);
        assert!(game.vel.x < 10.0 * RESTITUTION + 1.0);
    }

    proptest! {
        #[test]
        fn speed_never_exceeds_the_cap(
            seed in any::<u64>(),
            keys in prop::collection::vec(any::<(bool, bool, bool, bool)>(), 1..300),
        ) {
            let mut game = started(seed);
            for (left, right, up, down) in keys {
                let input = InputSnapshot { left, right, up, down, ..Default::default() };
                tick(&mut game, &input, TICK_DT);
                prop_assert!(game.vel.length() <= MAX_SPEED + 1e-3);
            }
        }
    }
}
