/*
 * Tadpoles Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the tadpole simulation.
 * The simulation core (boid, tail, flock, guide_path, spatial_grid, vector,
 * viewport, params) has no dependency on the window; app, input, renderer
 * and ui host it inside a nannou window.
 */

// Re-export key components for easier access
pub use boid::{Boid, Neighbor};
pub use error::{ConfigError, ConfigResult};
pub use flock::Flock;
pub use guide_path::{GuidePath, Polyline};
pub use params::{FlockingRules, SimulationParams};
pub use spatial_grid::SpatialGrid;
pub use tail::Tail;
pub use vector::SteeringVector;
pub use viewport::Viewport;
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod boid;
pub mod error;
pub mod flock;
pub mod guide_path;
pub mod params;
pub mod spatial_grid;
pub mod tail;
pub mod vector;
pub mod viewport;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Constants
pub const BOID_RADIUS: f32 = 30.0;
pub const ARRIVAL_RADIUS: f32 = 100.0;
pub const MIN_TAIL_LENGTH: usize = 10;
pub const GUIDE_SIMPLIFY_TOLERANCE: f32 = 10.0;
pub const GUIDE_FIT_SCALE: f32 = 0.8;
