/*
 * Tadpoles
 *
 * A flocking simulation where every boid trails an animated tadpole tail.
 * Boids scatter following three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * Clicking switches to group mode, where the boids line up along a guide
 * path (a heart, until a new one is drawn with the right mouse button).
 *
 * Usage: tadpoles [params.json]
 */

use tadpoles::app;

fn main() {
    env_logger::init();

    nannou::app(app::model).update(app::update).run();
}
