//! Per-tick update and the lane-departure check.

use super::{
    BlindCorner, CAR_WIDTH, DISTANCE_PER_SPEED, MAX_SPEED, POINTER_DEAD_ZONE, SPEED_RAMP,
    STEER_SPEED,
};
use crate::input::InputSnapshot;
use crate::session::GamePhase;

/// Advance the round by one fixed timestep.
pub fn tick(state: &mut BlindCorner, input: &InputSnapshot, dt: f32) {
    if input.pause {
        state.phase.toggle_pause();
    }
    if !state.phase.is_running() {
        return;
    }

    state.elapsed += dt;

    // Speed ramps toward the ceiling
    state.speed = (state.speed + SPEED_RAMP * dt).min(MAX_SPEED);

    // Forward motion
    state.scroll += state.speed;
    state.distance += state.speed * DISTANCE_PER_SPEED * dt;
    state.track.extend_past(state.scroll, state.viewport.y);

    // Steering: held keys plus pointer chase
    if input.left {
        state.car_x -= STEER_SPEED;
    }
    if input.right {
        state.car_x += STEER_SPEED;
    }
    if let Some(pointer) = input.pointer {
        let diff = pointer.x - state.car_x;
        if diff.abs() > POINTER_DEAD_ZONE {
            state.car_x += diff.signum() * STEER_SPEED;
        }
    }

    // Keep the car inside the viewport
    let half = CAR_WIDTH / 2.0;
    state.car_x = state.car_x.clamp(half, state.viewport.x - half);

    if is_colliding(state) {
        state.phase = GamePhase::GameOver;
    }
}

/// Lane-departure test at the car's fixed depth.
///
/// The boundary is sampled at a single cross-section per tick; cross-sections
/// the car skips within one tick go untested. Lookups past the generated
/// horizon count as on-track.
pub fn is_colliding(state: &BlindCorner) -> bool {
    let Some(segment) = state.track.segment_at(state.car_track_y()) else {
        return false;
    };
    let car_left = state.car_x - CAR_WIDTH / 2.0;
    let car_right = state.car_x + CAR_WIDTH / 2.0;
    car_left < segment.left_edge || car_right > segment.right_edge
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_DT;
    use crate::games::blind_corner::INITIAL_SPEED;
    use glam::Vec2;
    use proptest::prelude::*;

    fn started() -> BlindCorner {
        let mut game = BlindCorner::new(400.0, 600.0);
        game.start();
        game
    }

    #[test]
    fn car_stays_in_viewport() {
        let mut game = started();
        let input = InputSnapshot {
            left: true,
            ..Default::default()
        };
        for _ in 0..1000 {
            tick(&mut game, &input, TICK_DT);
        }
        assert!(game.car_x >= CAR_WIDTH / 2.0);
    }

    #[test]
    fn leaving_the_lane_ends_the_round() {
        let mut game = started();
        let segment = game.track.segment_at(game.car_track_y()).copied().unwrap();
        game.car_x = segment.left_edge - CAR_WIDTH;
        assert!(is_colliding(&game));

        tick(&mut game, &InputSnapshot::default(), TICK_DT);
        assert_eq!(game.phase, GamePhase::GameOver);
    }

    #[test]
    fn centered_car_is_on_track_at_start() {
        let mut game = started();
        let segment = game.track.segment_at(game.car_track_y()).copied().unwrap();
        game.car_x = segment.center_x;
        assert!(!is_colliding(&game));
    }

    #[test]
    fn pause_freezes_distance_and_elapsed() {
        let mut game = started();
        tick(&mut game, &InputSnapshot::default(), TICK_DT);
        let (distance, elapsed) = (game.distance, game.elapsed);

        let pause = InputSnapshot {
            pause: true,
            ..Default::default()
        };
        tick(&mut game, &pause, TICK_DT);
        assert_eq!(game.phase, GamePhase::Paused);
        tick(&mut game, &InputSnapshot::default(), TICK_DT);
        assert_eq!(game.distance, distance);
        assert_eq!(game.elapsed, elapsed);

        tick(&mut game, &pause, TICK_DT);
        assert_eq!(game.phase, GamePhase::Playing);
    }

    #[test]
    fn pointer_steers_toward_target() {
        let mut game = started();
        let input = InputSnapshot {
            pointer: Some(Vec2::new(game.car_x + 100.0, 0.0)),
            ..Default::default()
        };
        let before = game.car_x;
        tick(&mut game, &input, TICK_DT);
        assert_eq!(game.car_x, before + STEER_SPEED);
    }

    #[test]
    fn pointer_inside_dead_zone_does_not_steer() {
        let mut game = started();
        let input = InputSnapshot {
            pointer: Some(Vec2::new(game.car_x + POINTER_DEAD_ZONE - 1.0, 0.0)),
            ..Default::default()
        };
        let before = game.car_x;
        tick(&mut game, &input, TICK_DT);
        assert_eq!(game.car_x, before);
    }

    proptest! {
        #[test]
        fn speed_stays_clamped(dts in prop::collection::vec(0.0f32..0.1, 1..200)) {
            let mut game = started();
            let input = InputSnapshot::default();
            for dt in dts {
                tick(&mut game, &input, dt);
                prop_assert!(game.speed >= INITIAL_SPEED);
                prop_assert!(game.speed <= MAX_SPEED);
            }
        }
    }
}
