/*
 * Application Module
 *
 * This module defines the main application model and logic for the tadpole
 * simulation. It handles the initialization and the per-frame update; the
 * simulation itself lives in Flock and is advanced with a fixed timestep so
 * one flock step is one 60 Hz animation frame, whatever the display refresh
 * rate.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::guide_path::{GuidePath, Polyline};
use crate::input::{key_pressed, mouse_moved, mouse_pressed, mouse_released, raw_window_event, resized};
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::ui;
use crate::viewport::Viewport;

// Never run more than this many flock steps in a single update
const MAX_STEPS_PER_UPDATE: usize = 4;

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub viewport: Viewport,
    pub guide: Polyline,
    // Guide path being drawn with the right mouse button
    pub sketch: Option<Polyline>,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Last cursor position, in simulation space
    pub mouse_position: Vec2,
    pub rng: StdRng,
    pub config_path: Option<PathBuf>,
    // Fixed timestep physics variables
    pub physics_accumulator: Duration,
    pub physics_step_size: Duration,
    pub last_update_time: Instant,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let params = load_params(config_path.as_ref());

    let window_id = app
        .new_window()
        .title("Tadpoles")
        .size(1024, 768)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .key_pressed(key_pressed)
        .resized(resized)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("Window was just created");
    let egui = Egui::from_window(&window);
    let viewport = Viewport::from_window_rect(window.rect());

    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let flock = Flock::new(&params, &viewport, &mut rng);
    let guide = Polyline::heart(&viewport);
    log::info!(
        "started with {} boids in a {:.0}x{:.0} viewport",
        flock.len(),
        viewport.width,
        viewport.height
    );

    let physics_step_size = params.physics_step();

    Model {
        flock,
        params,
        viewport,
        guide,
        sketch: None,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
        rng,
        config_path,
        physics_accumulator: Duration::ZERO,
        physics_step_size,
        last_update_time: Instant::now(),
    }
}

fn load_params(path: Option<&PathBuf>) -> SimulationParams {
    let path = match path {
        Some(path) => path,
        None => return SimulationParams::default(),
    };

    match SimulationParams::load(path) {
        Ok(params) => {
            log::info!("loaded parameters from {}", path.display());
            params
        }
        Err(err) => {
            log::warn!("{}: {}; using default parameters", path.display(), err);
            SimulationParams::default()
        }
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.debug_info,
        model.config_path.is_some(),
    );

    if actions.params_changed {
        model.physics_step_size = model.params.physics_step();
    }

    if actions.reset_flock || actions.num_boids_changed {
        model.flock.reset(&model.params, &model.viewport, &mut model.rng);
        log::info!("reset flock with {} boids", model.flock.len());
    }

    if actions.save_config {
        save_params(model);
    }

    let current_time = Instant::now();
    let frame_time = current_time.duration_since(model.last_update_time);
    model.last_update_time = current_time;

    if model.params.pause_simulation {
        model.physics_accumulator = Duration::ZERO;
        model.debug_info.physics_updates_per_frame = 0;
        return;
    }

    model.physics_accumulator += frame_time;

    let guide: &dyn GuidePath = &model.guide;
    let mut physics_updates_this_frame = 0;
    while model.physics_accumulator >= model.physics_step_size {
        model.physics_accumulator -= model.physics_step_size;
        if physics_updates_this_frame == MAX_STEPS_PER_UPDATE {
            // Fell behind; drop the backlog instead of spiralling
            model.physics_accumulator = Duration::ZERO;
            break;
        }
        model.flock.step(&model.params, &model.viewport, Some(guide));
        physics_updates_this_frame += 1;
    }

    model.debug_info.physics_updates_per_frame = physics_updates_this_frame;
    model.debug_info.frame_count = model.flock.frame_count();
    model.debug_info.guide_length = model.guide.length();
}

fn save_params(model: &Model) {
    if let Some(path) = &model.config_path {
        match model.params.save(path) {
            Ok(()) => log::info!("saved parameters to {}", path.display()),
            Err(err) => log::error!("could not save parameters to {}: {}", path.display(), err),
        }
    }
}
