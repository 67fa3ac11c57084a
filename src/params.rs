/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the tadpole simulation. The same struct is passed
 * into every flock step, so the interaction mode lives here rather than in
 * global state. Parameters can be edited through the UI and loaded from or
 * saved to a JSON file.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

const DEFAULT_PHYSICS_FPS: f32 = 60.0;

// Neighbor radii and weights for the three flocking rules
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockingRules {
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
}

impl Default for FlockingRules {
    fn default() -> Self {
        Self {
            separation_radius: 60.0,
            alignment_radius: 25.0,
            cohesion_radius: 100.0,
            separation_weight: 3.0,
            alignment_weight: 1.0,
            cohesion_weight: 1.0,
        }
    }
}

impl FlockingRules {
    // Largest radius any rule looks at; sizes the spatial grid cells
    pub fn max_radius(&self) -> f32 {
        self.separation_radius
            .max(self.alignment_radius)
            .max(self.cohesion_radius)
    }
}

// Parameters for the simulation that can be adjusted via UI
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub num_boids: usize,
    // Base values; every boid adds its own random strength on top
    pub max_speed: f32,
    pub max_force: f32,
    pub rules: FlockingRules,
    // Follow the guide path instead of free flocking
    pub group_mode: bool,
    // Frames it takes a boid to advance one slot along the guide path
    pub guide_cycle_frames: f32,
    pub physics_fps: f32,
    pub enable_spatial_grid: bool,
    pub pause_simulation: bool,
    pub show_debug: bool,
    pub seed: Option<u64>,

    // Internal state for tracking changes
    #[serde(skip)]
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    num_boids: usize,
    max_speed: f32,
    max_force: f32,
    rules: FlockingRules,
    group_mode: bool,
    enable_spatial_grid: bool,
    pause_simulation: bool,
    show_debug: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 200,
            max_speed: 10.0,
            max_force: 0.05,
            rules: FlockingRules::default(),
            group_mode: false,
            guide_cycle_frames: 30.0,
            physics_fps: DEFAULT_PHYSICS_FPS,
            enable_spatial_grid: false,
            pause_simulation: false,
            show_debug: false,
            seed: None,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Flip between scatter and group mode, returning the new mode
    pub fn toggle_group_mode(&mut self) -> bool {
        self.group_mode = !self.group_mode;
        self.group_mode
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("max_speed", self.max_speed),
            ("max_force", self.max_force),
            ("separation_radius", self.rules.separation_radius),
            ("alignment_radius", self.rules.alignment_radius),
            ("cohesion_radius", self.rules.cohesion_radius),
            ("guide_cycle_frames", self.guide_cycle_frames),
            ("physics_fps", self.physics_fps),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if self.num_boids == 0 {
            return Err(ConfigError::Invalid("num_boids must be at least 1".to_string()));
        }
        if !Self::get_physics_fps_range().contains(&self.physics_fps) {
            return Err(ConfigError::Invalid(format!(
                "physics_fps must be within {:?}, got {}",
                Self::get_physics_fps_range(),
                self.physics_fps
            )));
        }
        Ok(())
    }

    // Wall-clock time covered by one flock step
    pub fn physics_step(&self) -> Duration {
        let fps = self.physics_fps.clamp(
            *Self::get_physics_fps_range().start(),
            *Self::get_physics_fps_range().end(),
        );
        // NaN survives the clamp
        let fps = if fps.is_nan() { DEFAULT_PHYSICS_FPS } else { fps };
        Duration::from_secs_f32(1.0 / fps)
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            max_speed: self.max_speed,
            max_force: self.max_force,
            rules: self.rules,
            group_mode: self.group_mode,
            enable_spatial_grid: self.enable_spatial_grid,
            pause_simulation: self.pause_simulation,
            show_debug: self.show_debug,
        });
    }

    // Check if any parameters have changed since the last snapshot
    // Returns (num_boids_changed, any_changed)
    pub fn detect_changes(&self) -> (bool, bool) {
        let prev = match &self.previous_values {
            Some(prev) => prev,
            None => return (false, false),
        };

        let num_boids_changed = self.num_boids != prev.num_boids;
        let any_changed = num_boids_changed
            || self.max_speed != prev.max_speed
            || self.max_force != prev.max_force
            || self.rules != prev.rules
            || self.group_mode != prev.group_mode
            || self.enable_spatial_grid != prev.enable_spatial_grid
            || self.pause_simulation != prev.pause_simulation
            || self.show_debug != prev.show_debug;

        (num_boids_changed, any_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=2000
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        1.0..=30.0
    }

    pub fn get_max_force_range() -> std::ops::RangeInclusive<f32> {
        0.01..=1.0
    }

    pub fn get_weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        5.0..=200.0
    }

    pub fn get_physics_fps_range() -> std::ops::RangeInclusive<f32> {
        1.0..=1000.0
    }
}
