//! Spawn scheduling, falling motion, and click classification.

use glam::Vec2;
use rand::Rng;

use super::{
    BASE_FALL_SPEED, DESPAWN_MARGIN, FALL_SPEED_STEP, GameOverReason, INTERVAL_STEP,
    LEVEL_THRESHOLD, MIN_INTERVAL, MIN_NUMBER, MAX_NUMBER_CAP, MAX_NUMBER_STEP, NUMBER_RADIUS,
    POINTS_PER_PRIME, PrimeTrap, SPAWN_MARGIN, START_INTERVAL, START_MAX_NUMBER, SpawnedNumber,
    is_prime,
};
use crate::input::InputSnapshot;
use crate::session::GamePhase;

/// Advance the round by one fixed timestep: spawn at most one number when
/// the interval has elapsed, then advance every fall.
pub fn tick(state: &mut PrimeTrap, input: &InputSnapshot, dt: f32) {
    if input.pause {
        state.phase.toggle_pause();
    }
    if !state.phase.is_running() {
        return;
    }

    state.elapsed += dt;
    spawn_due_number(state);
    advance_falls(state);
}

/// Result of a click on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing under the pointer
    Miss,
    /// A prime was cleared for this many points
    Prime { points: u32 },
    /// A composite was clicked; the round is over
    Composite,
}

/// Classify a click. Numbers spawned later sit on top and are tested first.
pub fn click(state: &mut PrimeTrap, target: Vec2) -> ClickOutcome {
    if !state.phase.is_running() {
        return ClickOutcome::Miss;
    }
    let Some(index) = state
        .numbers
        .iter()
        .rposition(|n| n.pos.distance(target) < NUMBER_RADIUS)
    else {
        return ClickOutcome::Miss;
    };

    let number = state.numbers.remove(index);
    if number.is_prime {
        let points = POINTS_PER_PRIME * state.level;
        state.score += points;
        apply_level_ups(state);
        ClickOutcome::Prime { points }
    } else {
        state.phase = GamePhase::GameOver;
        state.game_over_reason = Some(GameOverReason::ClickedComposite);
        ClickOutcome::Composite
    }
}

fn spawn_due_number(state: &mut PrimeTrap) {
    if state.elapsed - state.last_spawn <= state.spawn_interval {
        return;
    }
    let value = state.rng.random_range(MIN_NUMBER..=state.max_number);
    let x = state
        .rng
        .random_range(SPAWN_MARGIN..state.viewport.x - SPAWN_MARGIN);
    state.numbers.push(SpawnedNumber {
        value,
        pos: Vec2::new(x, -NUMBER_RADIUS),
        fall_speed: BASE_FALL_SPEED + (state.level - 1) as f32 * FALL_SPEED_STEP,
        is_prime: is_prime(value),
    });
    state.last_spawn = state.elapsed;
}

fn advance_falls(state: &mut PrimeTrap) {
    let bottom = state.viewport.y + DESPAWN_MARGIN;
    let mut escaped_primes = 0;
    state.numbers.retain_mut(|number| {
        number.pos.y += number.fall_speed;
        if number.pos.y > bottom {
            if number.is_prime {
                escaped_primes += 1;
            }
            false
        } else {
            true
        }
    });

    if escaped_primes > 0 {
        state.lives = state.lives.saturating_sub(escaped_primes);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            state.game_over_reason = Some(GameOverReason::MissedPrime);
        }
    }
}

/// Raise the level whenever the score crosses another multiple of the
/// threshold, tightening the spawn interval and widening the value range.
fn apply_level_ups(state: &mut PrimeTrap) {
    let level = state.score / LEVEL_THRESHOLD + 1;
    if level > state.level {
        state.level = level;
        state.spawn_interval =
            (START_INTERVAL - (level - 1) as f32 * INTERVAL_STEP).max(MIN_INTERVAL);
        state.max_number = (START_MAX_NUMBER + (level - 1) * MAX_NUMBER_STEP).min(MAX_NUMBER_CAP);
        log::debug!("prime game reached level {level}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_DT;
    use crate::games::prime_trap::START_LIVES;

    fn started(seed: u64) -> PrimeTrap {
        let mut game = PrimeTrap::new(seed, 400.0, 600.0);
        game.start();
        game
    }

    fn plant(game: &mut PrimeTrap, value: u32, pos: Vec2) {
        game.numbers.push(SpawnedNumber {
            value,
            pos,
            fall_speed: BASE_FALL_SPEED,
            is_prime: is_prime(value),
        });
    }

    #[test]
    fn spawns_at_most_one_number_per_interval() {
        let mut game = started(1);
        let input = InputSnapshot::default();

        // 1.2 s has not elapsed yet
        for _ in 0..60 {
            tick(&mut game, &input, TICK_DT);
        }
        assert!(game.numbers.is_empty());

        for _ in 0..20 {
            tick(&mut game, &input, TICK_DT);
        }
        assert_eq!(game.numbers.len(), 1);

        let number = game.numbers[0];
        assert!((MIN_NUMBER..=game.max_number).contains(&number.value));
        assert!(number.pos.x >= SPAWN_MARGIN);
        assert!(number.pos.x <= game.viewport.x - SPAWN_MARGIN);
    }

    #[test]
    fn spawn_sequence_replays_from_the_seed() {
        let mut a = started(99);
        let mut b = started(99);
        let input = InputSnapshot::default();
        for _ in 0..600 {
            tick(&mut a, &input, TICK_DT);
            tick(&mut b, &input, TICK_DT);
        }
        assert!(!a.numbers.is_empty());
        assert_eq!(a.numbers.len(), b.numbers.len());
        for (x, y) in a.numbers.iter().zip(&b.numbers) {
            assert_eq!(x.value, y.value);
            assert_eq!(x.pos, y.pos);
        }
    }

    #[test]
    fn crossing_the_threshold_levels_up() {
        let mut game = started(1);
        let spot = Vec2::new(200.0, 300.0);

        // Ten prime clicks at level 1 reach the 100-point threshold
        for _ in 0..10 {
            plant(&mut game, 17, spot);
            assert_eq!(click(&mut game, spot), ClickOutcome::Prime { points: 10 });
        }
        assert_eq!(game.score, 100);
        assert_eq!(game.level, 2);
        assert_eq!(game.max_number, START_MAX_NUMBER + MAX_NUMBER_STEP);
        assert!((game.spawn_interval - (START_INTERVAL - INTERVAL_STEP)).abs() < 1e-6);

        // The next prime is worth double
        plant(&mut game, 17, spot);
        assert_eq!(click(&mut game, spot), ClickOutcome::Prime { points: 20 });
        assert_eq!(game.score, 120);
    }

    #[test]
    fn interval_and_range_respect_their_bounds() {
        let mut game = started(1);
        game.score = 10 * LEVEL_THRESHOLD; // jump far past the caps
        apply_level_ups(&mut game);
        assert_eq!(game.spawn_interval, MIN_INTERVAL);
        assert_eq!(game.max_number, MAX_NUMBER_CAP);
    }

    #[test]
    fn clicking_a_composite_ends_the_round() {
        let mut game = started(1);
        let spot = Vec2::new(200.0, 300.0);
        plant(&mut game, 20, spot);
        assert_eq!(click(&mut game, spot), ClickOutcome::Composite);
        assert_eq!(game.phase, GamePhase::GameOver);
        assert_eq!(game.game_over_reason, Some(GameOverReason::ClickedComposite));

        // Clicks after the round are ignored
        assert_eq!(click(&mut game, spot), ClickOutcome::Miss);
    }

    #[test]
    fn topmost_number_wins_an_overlapping_click() {
        let mut game = started(1);
        let spot = Vec2::new(200.0, 300.0);
        plant(&mut game, 20, spot);
        plant(&mut game, 17, spot); // spawned later, drawn on top
        assert_eq!(click(&mut game, spot), ClickOutcome::Prime { points: 10 });
    }

    #[test]
    fn escaped_primes_cost_lives_until_game_over() {
        let mut game = started(1);
        let input = InputSnapshot::default();
        let low = Vec2::new(200.0, game.viewport.y + DESPAWN_MARGIN);

        for expected in (0..START_LIVES).rev() {
            plant(&mut game, 17, low);
            tick(&mut game, &input, TICK_DT);
            assert_eq!(game.lives, expected);
        }
        assert_eq!(game.phase, GamePhase::GameOver);
        assert_eq!(game.game_over_reason, Some(GameOverReason::MissedPrime));
    }

    #[test]
    fn escaped_composites_are_free() {
        let mut game = started(1);
        let input = InputSnapshot::default();
        let low = Vec2::new(200.0, game.viewport.y + DESPAWN_MARGIN);
        plant(&mut game, 20, low);
        tick(&mut game, &input, TICK_DT);
        assert_eq!(game.lives, START_LIVES);
        assert!(game.numbers.is_empty());
    }
}
