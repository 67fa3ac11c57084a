/*
 * Viewport Module
 *
 * The visible simulation area. Simulation space has its origin at the
 * top-left corner with y growing downward; nannou windows are centered
 * and y-up, so the host converts with `to_window` / `to_simulation`.
 */

use nannou::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_window_rect(rect: Rect) -> Self {
        Self::new(rect.w(), rect.h())
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() / 2.0
    }

    // Uniform point in [0, width) x [0, height)
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Vec2 {
        vec2(rng.gen::<f32>() * self.width, rng.gen::<f32>() * self.height)
    }

    // Simulation space -> window space
    pub fn to_window(&self, point: Vec2) -> Vec2 {
        vec2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    // Window space -> simulation space
    pub fn to_simulation(&self, point: Vec2) -> Vec2 {
        vec2(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }
}
