// Whole-flock behavior checks, run against seeded populations.

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tadpoles::{Boid, Flock, GuidePath, Polyline, SimulationParams, SteeringVector, Viewport};

const EPSILON: f32 = 1e-4;

fn seeded(count: usize, seed: u64, viewport: &Viewport) -> (Flock, SimulationParams) {
    let mut params = SimulationParams::default();
    params.num_boids = count;
    params.seed = Some(seed);
    let mut rng = StdRng::seed_from_u64(seed);
    (Flock::new(&params, viewport, &mut rng), params)
}

#[test]
fn flock_invariants_hold_for_a_long_run() {
    let viewport = Viewport::new(640.0, 480.0);
    let (mut flock, mut params) = seeded(200, 2024, &viewport);
    let guide = Polyline::heart(&viewport);

    for frame in 0..300 {
        if frame % 75 == 0 {
            params.toggle_group_mode();
        }
        flock.step(&params, &viewport, Some(&guide as &dyn GuidePath));

        for boid in flock.boids() {
            assert!(boid.velocity.length() <= boid.max_speed + EPSILON);
            assert_eq!(boid.chain_points()[0], boid.position);
            assert_eq!(boid.short_chain_points()[0], boid.position);
            assert!(boid.tail_length() >= 10);

            // Wrapping keeps every boid within one step of the margin
            let slack = boid.radius + boid.max_speed + 1.0;
            assert!(boid.position.x >= -slack && boid.position.x <= viewport.width + slack);
            assert!(boid.position.y >= -slack && boid.position.y <= viewport.height + slack);
        }
    }
}

#[test]
fn steering_never_exceeds_max_force_across_a_run() {
    let viewport = Viewport::new(500.0, 500.0);
    let (mut flock, params) = seeded(120, 77, &viewport);

    for _ in 0..50 {
        let snapshot = flock.snapshot();
        for boid in flock.boids() {
            let rules = &params.rules;
            assert!(boid.separate(&snapshot, rules.separation_radius).length() <= boid.max_force + EPSILON);
            assert!(boid.align(&snapshot, rules.alignment_radius).length() <= boid.max_force + EPSILON);
            assert!(boid.cohesion(&snapshot, rules.cohesion_radius).length() <= boid.max_force + EPSILON);
        }
        flock.step(&params, &viewport, None);
    }
}

#[test]
fn two_boids_ten_apart_repel_each_other() {
    let a = Boid::from_parts(pt2(200.0, 200.0), Vec2::ZERO, 10.0, 0.05, 10);
    let b = Boid::from_parts(pt2(200.0, 210.0), Vec2::ZERO, 10.0, 0.05, 10);
    let neighbors = [a.neighbor(), b.neighbor()];

    let on_a = a.separate(&neighbors, 60.0);
    let on_b = b.separate(&neighbors, 60.0);
    assert!(!on_a.is_zero_length());
    assert!(!on_b.is_zero_length());
    assert!(on_a.normalize().distance(vec2(0.0, -1.0)) < EPSILON);
    assert!(on_b.normalize().distance(vec2(0.0, 1.0)) < EPSILON);
}

#[test]
fn toggling_group_mode_changes_next_frame_forces() {
    let viewport = Viewport::new(300.0, 300.0);
    let (flock, mut params) = seeded(150, 8, &viewport);
    let snapshot = flock.snapshot();

    let scatter: Vec<Vec2> = flock.boids().iter().map(|b| b.behavior_force(&snapshot, &params)).collect();
    params.toggle_group_mode();
    let group: Vec<Vec2> = flock.boids().iter().map(|b| b.behavior_force(&snapshot, &params)).collect();

    let mut differing = 0;
    for ((boid, before), after) in flock.boids().iter().zip(&scatter).zip(&group) {
        assert_eq!(*after, boid.align(&snapshot, params.rules.alignment_radius));
        if before != after {
            differing += 1;
        }
    }
    // A dense flock has neighbors within the separation and cohesion radii
    assert!(differing > 0);
}

#[test]
fn wrapped_boid_keeps_tail_shape() {
    let viewport = Viewport::new(800.0, 600.0);
    let params = SimulationParams::default();
    let mut boid = Boid::from_parts(pt2(-20.0, 300.0), vec2(-10.0, 0.0), 10.0, 0.05, 12);

    // Swim left across the seam
    let mut wrapped = false;
    for _ in 0..5 {
        let before = boid.chain_points().to_vec();
        boid.run(&[], &params, &viewport);
        if !wrapped && boid.position.x > viewport.width / 2.0 {
            wrapped = true;
            // The tail came along to the right edge instead of stretching back
            let shift = boid.chain_points()[1] - before[1];
            assert!(shift.x > 700.0);
        }
    }
    assert!(wrapped);

    // Consecutive chain points stay close together, nothing stretched across the screen
    for pair in boid.chain_points().windows(2) {
        assert!(pair[0].distance(pair[1]) < 20.0);
    }
}
