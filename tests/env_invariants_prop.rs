// tests/env_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the environment step kernel.
 *
 * Invariants covered:
 * - Paddles stay between the playfield ceiling and the floor.
 * - The ball never rests inside a paddle after a step.
 * - Bounces only flip signs; heading magnitudes and speed never change.
 * - A step is terminal exactly when the ball's edge crossed a side bound,
 *   and exactly one score moves by exactly one.
 * - Equal seeds and action sequences give equal rollouts.
 */
use proptest::prelude::*;
use pong_env::sim::{PhysicsState, Side};
use pong_env::{Action, EnvConfig, Environment};

const EPS: f32 = 1e-5;

fn env() -> Environment {
    Environment::new(EnvConfig::default()).unwrap()
}

fn assert_paddles_in_bounds(p: &PhysicsState) {
    for side in [Side::Left, Side::Right] {
        let rect = p.paddle_rect(side);
        assert!(rect.top() >= p.arena.min_height - EPS, "{side:?} paddle above ceiling");
        assert!(rect.bottom() <= p.arena.height + EPS, "{side:?} paddle below floor");
    }
}

fn assert_ball_clear_of_paddles(p: &PhysicsState) {
    let ball = p.ball_rect();
    assert!(!ball.intersects(&p.paddle_rect(Side::Left)));
    assert!(!ball.intersects(&p.paddle_rect(Side::Right)));
}

/// Check one step against the pre-step state
fn assert_step_consistent(before: &PhysicsState, env: &mut Environment, action: Action) -> bool {
    let r = env.step(action).unwrap();
    let after = env.physics().unwrap();

    assert_paddles_in_bounds(after);
    assert_ball_clear_of_paddles(after);

    // Bounces flip signs only
    assert!((after.ball.direction.x.abs() - before.ball.direction.x.abs()).abs() < EPS);
    assert!((after.ball.direction.y.abs() - before.ball.direction.y.abs()).abs() < EPS);
    assert_eq!(after.ball.speed, before.ball.speed);

    let left_delta = after.left.score - before.left.score;
    let right_delta = after.right.score - before.right.score;
    assert!(!r.truncated);

    // Horizontal position before collision response; wall bounces never touch x
    let moved_x = before.ball.center().x + before.ball.displacement().x;
    let r_ball = before.ball.radius;

    if r.terminated {
        assert_eq!(left_delta + right_delta, 1);
        assert_eq!(after.ball.center(), after.arena.center());
        if right_delta == 1 {
            assert!(moved_x - r_ball < 0.0);
            assert_eq!(r.reward, 2.0);
        } else {
            assert!(moved_x + r_ball > after.arena.width);
            assert_eq!(r.reward, -1.0);
        }
    } else {
        assert_eq!(left_delta + right_delta, 0);
        assert_eq!(r.reward, 0.0);
        assert!(after.ball.rect.left() >= 0.0);
        assert!(after.ball.rect.right() <= after.arena.width);
        assert!(after.ball.rect.top() >= after.arena.min_height);
        assert!(after.ball.rect.bottom() <= after.arena.height);
    }

    r.terminated
}

#[test]
fn long_rollout_respects_invariants() {
    let mut e = env();
    e.reset(Some(20260228));
    let mut terminals = 0;

    for i in 0..5_000usize {
        let before = e.physics().unwrap().clone();
        if assert_step_consistent(&before, &mut e, Action::ALL[(i / 7) % 3]) {
            terminals += 1;
            e.reset(None);
        }
    }

    assert!(terminals > 0);
}

#[test]
fn seed_123_stay_scenario_is_reproducible() {
    let play = || {
        let mut e = env();
        e.reset(Some(123));
        let initial = e.physics().unwrap().ball.direction;
        for step in 1..=10_000u32 {
            let heading_x = e.physics().unwrap().ball.direction.x;
            let r = e.step_id(2).unwrap();
            if r.terminated {
                return Some((initial, step, r.reward, heading_x));
            }
        }
        None
    };

    let (initial, step, reward, heading_x) =
        play().expect("an episode must end within 10k steps");
    assert_eq!(play(), Some((initial, step, reward, heading_x)));

    // Seed 123 opens heading right and up
    assert!((initial.x - 0.6507).abs() < 1e-3, "heading {initial:?}");
    assert!((initial.y + 0.7593).abs() < 1e-3, "heading {initial:?}");

    // Right paddle, left paddle, then out through the right edge
    assert_eq!(step, 360);
    assert_eq!(reward, -1.0);
    assert!(heading_x > 0.0);
}

proptest! {
    #[test]
    fn generated_rollout_respects_core_invariants(
        seed in any::<u64>(),
        actions in proptest::collection::vec(0usize..3, 1..400),
    ) {
        let mut e = env();
        e.reset(Some(seed));

        for a in actions {
            let before = e.physics().unwrap().clone();
            if assert_step_consistent(&before, &mut e, Action::ALL[a]) {
                e.reset(None);
            }
        }
    }

    #[test]
    fn equal_seeds_give_equal_rollouts(
        seed in any::<u64>(),
        actions in proptest::collection::vec(0i64..3, 1..300),
    ) {
        let rollout = |actions: &[i64]| {
            let mut e = env();
            let mut out = vec![e.reset(Some(seed)).0];
            for &a in actions {
                let r = e.step_id(a).unwrap();
                out.push(r.observation);
                if r.terminated {
                    out.push(e.reset(None).0);
                }
            }
            out
        };

        prop_assert_eq!(rollout(&actions), rollout(&actions));
    }

    #[test]
    fn out_of_range_actions_are_rejected(id in prop_oneof![i64::MIN..0, 3i64..i64::MAX]) {
        let mut e = env();
        e.reset(Some(0));
        prop_assert!(e.step_id(id).is_err());
        prop_assert_eq!(e.steps(), 0);
    }
}
