/*
 * Renderer Module
 *
 * This module handles the rendering of the tadpole simulation.
 * Each boid is drawn as a smoothed tail stroke with a slightly thinner
 * stub over its head. The guide path is shown in group mode, and the
 * debug overlay adds the raw chain points and the debug panel.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::viewport::Viewport;

const TAIL_WEIGHT: f32 = 5.0;
const STUB_WEIGHT: f32 = 4.0;
const TAIL_SUBDIVISIONS: usize = 4;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let viewport = &model.viewport;

    if model.params.group_mode || model.params.show_debug {
        draw_path(&draw, viewport, model.guide.points(), rgba(1.0, 0.75, 0.8, 0.35));
    }
    if let Some(sketch) = &model.sketch {
        draw_path(&draw, viewport, sketch.points(), rgba(1.0, 0.75, 0.8, 1.0));
    }

    for boid in model.flock.boids() {
        let tail = boid.tail().smoothed(TAIL_SUBDIVISIONS);
        draw.polyline()
            .weight(TAIL_WEIGHT)
            .caps_round()
            .join_round()
            .points(tail.into_iter().map(|p| viewport.to_window(p)))
            .color(PINK);

        draw.polyline()
            .weight(STUB_WEIGHT)
            .caps_round()
            .points(boid.short_chain_points().iter().map(|p| viewport.to_window(*p)))
            .color(PINK);

        if model.params.show_debug {
            for point in boid.chain_points() {
                draw.ellipse()
                    .xy(viewport.to_window(*point))
                    .radius(1.5)
                    .color(WHITE);
            }
        }
    }

    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            app.window_rect(),
            model.flock.len(),
            model.params.group_mode,
        );
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", err);
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("failed to draw controls: {:?}", err);
    }
}

fn draw_path(draw: &Draw, viewport: &Viewport, points: &[Point2], color: Rgba) {
    if points.len() < 2 {
        return;
    }
    draw.polyline()
        .weight(2.0)
        .join_round()
        .points(points.iter().map(|p| viewport.to_window(*p)))
        .color(color);
}
