/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters.
 * Parameter change detection is handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// What the user asked for during this frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiActions {
    pub reset_flock: bool,
    pub num_boids_changed: bool,
    pub params_changed: bool,
    pub save_config: bool,
}

// Update the UI and report what changed
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    can_save: bool,
) -> UiActions {
    let mut actions = UiActions::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Population", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));
                ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range()).text("Base Max Speed"));
                ui.add(egui::Slider::new(&mut params.max_force, SimulationParams::get_max_force_range()).text("Base Max Force"));
                ui.label("Speed and force apply to newly spawned boids");

                if ui.button("Reset Boids").clicked() {
                    actions.reset_flock = true;
                }
            });

            ui.collapsing("Flocking Rules", |ui| {
                let rules = &mut params.rules;
                ui.add(egui::Slider::new(&mut rules.separation_weight, SimulationParams::get_weight_range()).text("Separation Weight"));
                ui.add(egui::Slider::new(&mut rules.alignment_weight, SimulationParams::get_weight_range()).text("Alignment Weight"));
                ui.add(egui::Slider::new(&mut rules.cohesion_weight, SimulationParams::get_weight_range()).text("Cohesion Weight"));
                ui.add(egui::Slider::new(&mut rules.separation_radius, SimulationParams::get_radius_range()).text("Separation Radius"));
                ui.add(egui::Slider::new(&mut rules.alignment_radius, SimulationParams::get_radius_range()).text("Alignment Radius"));
                ui.add(egui::Slider::new(&mut rules.cohesion_radius, SimulationParams::get_radius_range()).text("Cohesion Radius"));
            });

            ui.collapsing("Guide Path", |ui| {
                ui.label("Left click: toggle group mode");
                ui.label("Right drag: draw a new guide path");
                ui.label(format!("Path length: {:.0}", debug_info.guide_length));
            });

            ui.checkbox(&mut params.group_mode, "Group Mode");
            ui.checkbox(&mut params.enable_spatial_grid, "Spatial Grid");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");

            if can_save && ui.button("Save Parameters").clicked() {
                actions.save_config = true;
            }

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame: {}", debug_info.frame_count));
        });

    let (num_boids_changed, params_changed) = params.detect_changes();
    actions.num_boids_changed = num_boids_changed;
    actions.params_changed = params_changed;
    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boids_len: usize,
    group_mode: bool,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Boids: {}", boids_len),
        format!("Steps this frame: {}", debug_info.physics_updates_per_frame),
        format!("Mode: {}", if group_mode { "group" } else { "scatter" }),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // nannou centers text, so offset by roughly half the line width
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
