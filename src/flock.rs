/*
 * Flock Module
 *
 * The flock owns every boid and advances the whole population one frame at
 * a time. A step is synchronous and deterministic: all randomness happens
 * when boids are created, so a seeded RNG gives a reproducible run.
 *
 * Boids are updated one after another against the live flock: boid i sees
 * boids 0..i at their new state for this frame and the rest as they were.
 * The spatial grid moves each boid to its new cell right after it updates,
 * so the grid always answers for the live positions.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::boid::{Boid, Neighbor};
use crate::guide_path::GuidePath;
use crate::params::SimulationParams;
use crate::spatial_grid::SpatialGrid;
use crate::viewport::Viewport;

pub struct Flock {
    boids: Vec<Boid>,
    frame_count: u64,
    spatial_grid: Option<SpatialGrid>,
}

impl Flock {
    // Create `params.num_boids` boids scattered over the viewport
    pub fn new<R: Rng>(params: &SimulationParams, viewport: &Viewport, rng: &mut R) -> Self {
        let boids = spawn_boids(params, viewport, rng);
        log::debug!(
            "spawned {} boids over {:.0}x{:.0}",
            boids.len(),
            viewport.width,
            viewport.height
        );
        Self::from_boids(boids)
    }

    pub fn from_boids(boids: Vec<Boid>) -> Self {
        Self {
            boids,
            frame_count: 0,
            spatial_grid: None,
        }
    }

    // Throw away the current population and scatter a fresh one
    pub fn reset<R: Rng>(&mut self, params: &SimulationParams, viewport: &Viewport, rng: &mut R) {
        self.boids = spawn_boids(params, viewport, rng);
        self.frame_count = 0;
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // Position and velocity of every boid, in flock order
    pub fn snapshot(&self) -> Vec<Neighbor> {
        self.boids.iter().map(Boid::neighbor).collect()
    }

    // Where boid `index` is heading on the guide path this frame
    pub fn guide_target(
        &self,
        index: usize,
        guide: &dyn GuidePath,
        params: &SimulationParams,
    ) -> Option<Point2> {
        let count = self.boids.len() as f64;
        let slot = index as f64 + self.frame_count as f64 / params.guide_cycle_frames as f64;
        let fraction = (slot % count) / count;
        guide.point_at_fraction(fraction as f32)
    }

    // Advance every boid by one frame, in flock order
    pub fn step(&mut self, params: &SimulationParams, viewport: &Viewport, guide: Option<&dyn GuidePath>) {
        let guide = if params.group_mode { guide } else { None };
        let mut live = self.snapshot();
        let mut grid = if params.enable_spatial_grid {
            Some(self.take_spatial_grid(&live, params, viewport))
        } else {
            None
        };

        let mut nearby = Vec::new();
        for i in 0..self.boids.len() {
            if let Some(target) = guide.and_then(|guide| self.guide_target(i, guide, params)) {
                self.boids[i].arrive(target);
            }

            let boid = &mut self.boids[i];
            match &mut grid {
                Some(grid) => {
                    nearby.clear();
                    nearby.extend(grid.get_nearby_indices(live[i].position).into_iter().map(|j| live[j]));
                    boid.run(&nearby, params, viewport);
                    grid.relocate(i, live[i].position, boid.position);
                }
                None => boid.run(&live, params, viewport),
            }
            live[i] = boid.neighbor();
        }

        if grid.is_some() {
            self.spatial_grid = grid;
        }
        self.frame_count += 1;
    }

    // Grid over the current positions, reusing the last one if the perception
    // radii and viewport are unchanged
    fn take_spatial_grid(&mut self, live: &[Neighbor], params: &SimulationParams, viewport: &Viewport) -> SpatialGrid {
        let cell_size = params.rules.max_radius();
        let mut grid = match self.spatial_grid.take() {
            Some(grid) if grid.fits(cell_size, viewport) => grid,
            _ => SpatialGrid::new(cell_size, viewport),
        };
        grid.rebuild(live.iter().map(|n| n.position));
        grid
    }
}

fn spawn_boids<R: Rng>(params: &SimulationParams, viewport: &Viewport, rng: &mut R) -> Vec<Boid> {
    (0..params.num_boids)
        .map(|_| {
            let position = viewport.random_point(rng);
            Boid::new(position, params.max_speed, params.max_force, rng)
        })
        .collect()
}
