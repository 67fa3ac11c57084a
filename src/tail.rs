/*
 * Tail Module
 *
 * The chain of points trailing behind each boid. Every frame the chain is
 * rebuilt from the head outward: each link is placed one piece length
 * behind its predecessor, pushed sideways by a sine wave, and follows the
 * direction its predecessor had on the previous frame. The one-frame lag
 * is what gives the tail its whip-like motion.
 */

use nannou::prelude::*;

use crate::vector::SteeringVector;

// Number of points in the short lead-in stub drawn over the head
pub const SHORT_CHAIN_LENGTH: usize = 3;

#[derive(Clone, Debug)]
pub struct Tail {
    points: Vec<Vec2>,
    short_points: Vec<Vec2>,
    // Never reset; only ever fed through sin()
    phase: f64,
}

impl Tail {
    // Create a tail of `length` points, all resting on `anchor`
    pub fn new(length: usize, anchor: Vec2) -> Self {
        let length = length.max(1);
        Self {
            points: vec![anchor; length],
            short_points: vec![anchor; length.min(SHORT_CHAIN_LENGTH)],
            phase: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn short_points(&self) -> &[Vec2] {
        &self.short_points
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    // Rebuild the chain behind a head at `position` moving with `velocity`
    pub fn calculate(&mut self, position: Vec2, velocity: Vec2) {
        let speed = velocity.length();
        let piece_length = 5.0 + speed / 3.0;

        let mut point = position;
        self.points[0] = point;
        self.short_points[0] = point;

        // The chain points away from the direction of travel
        let mut last_vector = -velocity;

        for i in 1..self.points.len() {
            // Captured before this link moves; steers the next link
            let vector = self.points[i] - point;

            self.phase += speed as f64 * 10.0;
            let wave = ((self.phase + i as f64 * 3.0) / 10.0).sin() as f32;
            let sway = last_vector.rotated_degrees(90.0).with_length(wave);

            point += last_vector.with_length(piece_length) + sway;
            self.points[i] = point;
            if i < self.short_points.len() {
                self.short_points[i] = point;
            }

            last_vector = vector;
        }
    }

    // Shift every point by the same offset, keeping the chain's shape
    pub fn translate(&mut self, offset: Vec2) {
        for point in self.points.iter_mut().chain(self.short_points.iter_mut()) {
            *point += offset;
        }
    }

    // Catmull-Rom resampling through every chain point, for drawing
    pub fn smoothed(&self, subdivisions: usize) -> Vec<Vec2> {
        let subdivisions = subdivisions.max(1);
        let n = self.points.len();
        if n < 3 {
            return self.points.clone();
        }

        let mut result = Vec::with_capacity((n - 1) * subdivisions + 1);
        for i in 0..n - 1 {
            let p0 = self.points[i.saturating_sub(1)];
            let p1 = self.points[i];
            let p2 = self.points[i + 1];
            let p3 = self.points[(i + 2).min(n - 1)];

            for step in 0..subdivisions {
                let t = step as f32 / subdivisions as f32;
                result.push(catmull_rom(p0, p1, p2, p3, t));
            }
        }
        result.push(self.points[n - 1]);
        result
    }
}

#[inline]
fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let t2 = t * t;
    let t3 = t2 * t;
    (p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
        * 0.5
}
