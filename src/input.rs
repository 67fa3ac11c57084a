/*
 * Input Module
 *
 * This module handles user input events for the tadpole simulation.
 *
 * Features:
 * - Left click toggles between scatter and group mode
 * - Right drag draws a new guide path, simplified on release
 * - Space toggles the debug overlay
 * - Window resize refits the guide path to the new viewport
 */

use nannou::prelude::*;
use nannou::event::Key;
use nannou::winit::event::{MouseButton, WindowEvent};

use crate::app::Model;
use crate::guide_path::{GuidePath, Polyline};
use crate::viewport::Viewport;
use crate::GUIDE_SIMPLIFY_TOLERANCE;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = model.viewport.to_simulation(pos);

    if let Some(sketch) = &mut model.sketch {
        sketch.push(model.mouse_position);
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    // Clicks on the control panel belong to egui
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    match button {
        MouseButton::Left => {
            let group_mode = model.params.toggle_group_mode();
            log::info!("group mode {}", if group_mode { "on" } else { "off" });
        }
        MouseButton::Right => {
            model.sketch = Some(Polyline::from_points([model.mouse_position]));
        }
        _ => {}
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Right {
        return;
    }

    if let Some(mut sketch) = model.sketch.take() {
        let drawn = sketch.len();
        sketch.simplify(GUIDE_SIMPLIFY_TOLERANCE);

        if sketch.length() > 0.0 {
            log::debug!("new guide path: {} points simplified to {}", drawn, sketch.len());
            model.guide = sketch;
        } else {
            log::debug!("guide sketch too short, keeping the current path");
        }
    }
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Space {
        model.params.show_debug = !model.params.show_debug;
    }
}

// Keep the guide path fitted to the window
pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    // Minimizing reports a zero size; keep the last real viewport
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    model.viewport = Viewport::new(size.x, size.y);
    model.guide.fit_to_viewport(&model.viewport);
    log::debug!("viewport resized to {:.0}x{:.0}", size.x, size.y);
}

// Pass raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
