/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * In scatter mode each boid follows three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * In group mode only alignment is applied; the flock driver adds an
 * arrival force towards a point on the guide path instead.
 *
 * Every boid drags a tadpole tail that is rebuilt after each move.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::{FlockingRules, SimulationParams};
use crate::tail::Tail;
use crate::vector::SteeringVector;
use crate::viewport::Viewport;
use crate::{ARRIVAL_RADIUS, BOID_RADIUS, MIN_TAIL_LENGTH};

// What a boid can see of another boid during a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub position: Point2,
    pub velocity: Vec2,
}

#[derive(Clone, Debug)]
pub struct Boid {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_speed: f32,
    pub max_force: f32,
    pub radius: f32,
    tail: Tail,
}

impl Boid {
    pub fn new<R: Rng>(position: Point2, max_speed: f32, max_force: f32, rng: &mut R) -> Self {
        // Per-boid strength makes the flock heterogeneous
        let strength: f32 = rng.gen::<f32>() * 0.5;

        // Random initial velocity, each component in [-1, 1)
        let vx = rng.gen::<f32>() * 2.0 - 1.0;
        let vy = rng.gen::<f32>() * 2.0 - 1.0;

        let tail_length = (strength * 10.0 + MIN_TAIL_LENGTH as f32).ceil() as usize;

        Self::from_parts(
            position,
            vec2(vx, vy),
            max_speed + strength,
            max_force + strength,
            tail_length,
        )
    }

    // Build a boid with fully specified state, no randomness involved
    pub fn from_parts(
        position: Point2,
        velocity: Vec2,
        max_speed: f32,
        max_force: f32,
        tail_length: usize,
    ) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            max_speed,
            max_force,
            radius: BOID_RADIUS,
            tail: Tail::new(tail_length, position),
        }
    }

    pub fn neighbor(&self) -> Neighbor {
        Neighbor {
            position: self.position,
            velocity: self.velocity,
        }
    }

    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    pub fn tail_length(&self) -> usize {
        self.tail.len()
    }

    pub fn chain_points(&self) -> &[Vec2] {
        self.tail.points()
    }

    pub fn short_chain_points(&self) -> &[Vec2] {
        self.tail.short_points()
    }

    // Advance the boid by one frame
    pub fn run(&mut self, neighbors: &[Neighbor], params: &SimulationParams, viewport: &Viewport) {
        let force = self.behavior_force(neighbors, params);
        self.apply_force(force);
        self.borders(viewport);
        self.update();
        self.tail.calculate(self.position, self.velocity);
    }

    // The acceleration contribution of the active behavior mode
    pub fn behavior_force(&self, neighbors: &[Neighbor], params: &SimulationParams) -> Vec2 {
        if params.group_mode {
            self.align(neighbors, params.rules.alignment_radius)
        } else {
            self.flocking_force(neighbors, &params.rules)
        }
    }

    // Weighted sum of separation, alignment and cohesion
    pub fn flocking_force(&self, neighbors: &[Neighbor], rules: &FlockingRules) -> Vec2 {
        let separation = self.separate(neighbors, rules.separation_radius) * rules.separation_weight;
        let alignment = self.align(neighbors, rules.alignment_radius) * rules.alignment_weight;
        let cohesion = self.cohesion(neighbors, rules.cohesion_radius) * rules.cohesion_weight;
        separation + alignment + cohesion
    }

    // Apply a force to the boid
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    // Update the boid's position based on its velocity and acceleration
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limited(self.max_speed);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
    }

    // Wrap the boid around the viewport edges, carrying the tail along
    pub fn borders(&mut self, viewport: &Viewport) {
        let mut offset = Vec2::ZERO;
        let radius = self.radius;

        if self.position.x < -radius {
            offset.x = viewport.width + radius;
        }
        if self.position.y < -radius {
            offset.y = viewport.height + radius;
        }
        if self.position.x > viewport.width + radius {
            offset.x = -viewport.width - radius;
        }
        if self.position.y > viewport.height + radius {
            offset.y = -viewport.height - radius;
        }

        if !offset.is_zero_length() {
            self.position += offset;
            self.tail.translate(offset);
        }
    }

    // Steering force towards a target. With `slowdown` the desired speed
    // drops off linearly inside the arrival radius.
    pub fn steer(&self, target: Point2, slowdown: bool) -> Vec2 {
        let desired = target - self.position;
        let distance = desired.length();

        let desired = if slowdown && distance < ARRIVAL_RADIUS {
            desired.with_length(self.max_speed * (distance / ARRIVAL_RADIUS))
        } else {
            desired.with_length(self.max_speed)
        };

        (desired - self.velocity).limited(self.max_force)
    }

    pub fn seek(&mut self, target: Point2) {
        let force = self.steer(target, false);
        self.apply_force(force);
    }

    pub fn arrive(&mut self, target: Point2) {
        let force = self.steer(target, true);
        self.apply_force(force);
    }

    // Calculate separation force (avoid crowding neighbors)
    pub fn separate(&self, neighbors: &[Neighbor], perception_radius: f32) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in neighbors {
            let diff = self.position - other.position;
            let d = diff.length();

            if d > 0.0 && d < perception_radius {
                // Closer neighbors push harder
                steering += diff.with_length(1.0 / d);
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;
        }

        self.reynolds(steering)
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn align(&self, neighbors: &[Neighbor], perception_radius: f32) -> Vec2 {
        let mut steering = Vec2::ZERO;
        let mut count = 0;

        for other in neighbors {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < perception_radius {
                steering += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;
        }

        self.reynolds(steering)
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, neighbors: &[Neighbor], perception_radius: f32) -> Vec2 {
        let mut sum = Vec2::ZERO;
        let mut count = 0;

        for other in neighbors {
            let d = self.position.distance(other.position);
            if d > 0.0 && d < perception_radius {
                sum += other.position;
                count += 1;
            }
        }

        if count == 0 {
            return Vec2::ZERO;
        }

        self.steer(sum / count as f32, false)
    }

    // Reynolds: Steering = Desired - Velocity, with desired at full speed
    fn reynolds(&self, desired: Vec2) -> Vec2 {
        if desired.is_zero_length() {
            return Vec2::ZERO;
        }
        (desired.with_length(self.max_speed) - self.velocity).limited(self.max_force)
    }
}
