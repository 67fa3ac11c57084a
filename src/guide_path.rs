/*
 * Guide Path Module
 *
 * In group mode the flock spreads itself out along a guide path. The flock
 * only needs to ask for a point at some fraction of the path's length, which
 * is what the GuidePath trait exposes. Polyline is the path the application
 * hands in: a heart shape by default, or whatever the user draws with the
 * mouse.
 */

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::viewport::Viewport;
use crate::GUIDE_FIT_SCALE;

pub trait GuidePath {
    // Total arc length
    fn length(&self) -> f32;

    // Point at `distance` along the path, None outside [0, length]
    fn point_at(&self, distance: f32) -> Option<Point2>;

    fn point_at_fraction(&self, fraction: f32) -> Option<Point2> {
        let length = self.length();
        if length <= 0.0 {
            return None;
        }
        self.point_at(fraction * length)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
    // cumulative[i] is the arc length from points[0] to points[i]
    cumulative: Vec<f32>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let mut path = Self::new();
        for point in points {
            path.push(point);
        }
        path
    }

    // Heart outline fitted to the viewport, leaving a 10% margin
    pub fn heart(viewport: &Viewport) -> Self {
        const SAMPLES: usize = 120;
        // y is negated because simulation space is y-down
        let mut path = Self::from_points((0..=SAMPLES).map(|i| {
            let t = i as f32 / SAMPLES as f32 * TAU;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            pt2(x, -y)
        }));
        path.fit_to_viewport(viewport);
        path
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point2) {
        let total = match (self.points.last(), self.cumulative.last()) {
            (Some(last), Some(length)) => length + last.distance(point),
            _ => 0.0,
        };
        self.points.push(point);
        self.cumulative.push(total);
    }

    // Axis-aligned bounds as (min, max)
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))))
    }

    // Ramer-Douglas-Peucker reduction; points closer than `tolerance` to
    // the simplified line are dropped
    pub fn simplify(&mut self, tolerance: f32) {
        if self.points.len() < 3 {
            return;
        }

        let mut keep = vec![false; self.points.len()];
        keep[0] = true;
        keep[self.points.len() - 1] = true;

        let mut stack = vec![(0, self.points.len() - 1)];
        while let Some((start, end)) = stack.pop() {
            let mut farthest = None;
            let mut max_distance = tolerance;
            for i in start + 1..end {
                let d = segment_distance(self.points[i], self.points[start], self.points[end]);
                if d > max_distance {
                    max_distance = d;
                    farthest = Some(i);
                }
            }
            if let Some(i) = farthest {
                keep[i] = true;
                stack.push((start, i));
                stack.push((i, end));
            }
        }

        let kept: Vec<Point2> = self
            .points
            .iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|(p, _)| *p)
            .collect();
        *self = Self::from_points(kept);
    }

    // Scale uniformly and move so the bounds fit inside the viewport, centered
    pub fn fit_bounds(&mut self, viewport: &Viewport) {
        // A minimized window would collapse the path to a single point for good
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            return;
        }
        let (min, max) = match self.bounds() {
            Some(bounds) => bounds,
            None => return,
        };
        let size = max - min;
        let scale = match (size.x > 0.0, size.y > 0.0) {
            (true, true) => (viewport.width / size.x).min(viewport.height / size.y),
            (true, false) => viewport.width / size.x,
            (false, true) => viewport.height / size.y,
            (false, false) => 1.0,
        };
        let center = (min + max) / 2.0;
        let target = viewport.center();
        self.transform(|p| (p - center) * scale + target);
    }

    // Fit to the viewport with some room around the edges
    pub fn fit_to_viewport(&mut self, viewport: &Viewport) {
        if !(viewport.width > 0.0 && viewport.height > 0.0) {
            return;
        }
        self.fit_bounds(viewport);
        self.scale_about_center(GUIDE_FIT_SCALE);
    }

    pub fn scale_about_center(&mut self, factor: f32) {
        if let Some((min, max)) = self.bounds() {
            let center = (min + max) / 2.0;
            self.transform(|p| (p - center) * factor + center);
        }
    }

    fn transform(&mut self, f: impl Fn(Point2) -> Point2) {
        let points: Vec<Point2> = self.points.iter().map(|p| f(*p)).collect();
        *self = Self::from_points(points);
    }
}

impl GuidePath for Polyline {
    fn length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn point_at(&self, distance: f32) -> Option<Point2> {
        let length = self.length();
        if self.points.len() < 2 || length <= 0.0 || !(0.0..=length).contains(&distance) {
            return None;
        }

        // First vertex at or beyond the requested distance
        let end = self.cumulative.partition_point(|d| *d < distance).max(1);
        let start = end - 1;
        let span = self.cumulative[end] - self.cumulative[start];
        if span <= 0.0 {
            return Some(self.points[end]);
        }
        let t = (distance - self.cumulative[start]) / span;
        Some(self.points[start].lerp(self.points[end], t))
    }
}

// Distance from `point` to the segment a-b
fn segment_distance(point: Point2, a: Point2, b: Point2) -> f32 {
    let ab = b - a;
    let length_squared = ab.length_squared();
    if length_squared == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_squared).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn square() -> Polyline {
        Polyline::from_points([pt2(0.0, 0.0), pt2(10.0, 0.0), pt2(10.0, 10.0), pt2(0.0, 10.0)])
    }

    #[test]
    fn length_accumulates_segments() {
        assert_eq!(square().length(), 30.0);
        assert_eq!(Polyline::new().length(), 0.0);
        assert_eq!(Polyline::from_points([pt2(3.0, 3.0)]).length(), 0.0);
    }

    #[test]
    fn point_at_interpolates_along_segments() {
        let path = square();
        assert_eq!(path.point_at(0.0), Some(pt2(0.0, 0.0)));
        assert_eq!(path.point_at(5.0), Some(pt2(5.0, 0.0)));
        assert_eq!(path.point_at(10.0), Some(pt2(10.0, 0.0)));
        assert_eq!(path.point_at(15.0), Some(pt2(10.0, 5.0)));
        assert_eq!(path.point_at(30.0), Some(pt2(0.0, 10.0)));
        assert_eq!(path.point_at(30.5), None);
        assert_eq!(path.point_at(-1.0), None);
    }

    #[test]
    fn point_at_fraction_scales_by_length() {
        let path = square();
        assert_eq!(path.point_at_fraction(0.5), Some(pt2(10.0, 5.0)));
        assert_eq!(Polyline::new().point_at_fraction(0.5), None);
        assert_eq!(Polyline::from_points([pt2(1.0, 1.0)]).point_at_fraction(0.0), None);
    }

    #[test]
    fn repeated_points_do_not_break_lookup() {
        let path = Polyline::from_points([pt2(0.0, 0.0), pt2(0.0, 0.0), pt2(4.0, 0.0)]);
        assert_eq!(path.point_at(0.0), Some(pt2(0.0, 0.0)));
        assert_eq!(path.point_at(2.0), Some(pt2(2.0, 0.0)));
    }

    #[test]
    fn simplify_drops_collinear_points() {
        let mut path = Polyline::from_points((0..=20).map(|i| pt2(i as f32, (i as f32 * 0.3).sin() * 0.5)));
        path.simplify(10.0);
        assert_eq!(path.points(), &[pt2(0.0, 0.0), pt2(20.0, (20.0f32 * 0.3).sin() * 0.5)]);
    }

    #[test]
    fn simplify_keeps_corners() {
        let mut path = Polyline::from_points([
            pt2(0.0, 0.0),
            pt2(50.0, 1.0),
            pt2(100.0, 0.0),
            pt2(100.0, 50.0),
            pt2(100.0, 100.0),
        ]);
        path.simplify(10.0);
        assert_eq!(path.points(), &[pt2(0.0, 0.0), pt2(100.0, 0.0), pt2(100.0, 100.0)]);
        assert!((path.length() - 200.0).abs() < EPSILON);
    }

    #[test]
    fn fit_bounds_centers_and_preserves_aspect() {
        let viewport = Viewport::new(800.0, 400.0);
        let mut path = square();
        path.fit_bounds(&viewport);
        let (min, max) = path.bounds().unwrap();
        assert!(min.distance(pt2(200.0, 0.0)) < EPSILON);
        assert!(max.distance(pt2(600.0, 400.0)) < EPSILON);
    }

    #[test]
    fn zero_size_viewport_leaves_path_intact() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut path = Polyline::heart(&viewport);
        let length = path.length();

        path.fit_to_viewport(&Viewport::new(0.0, 0.0));
        path.fit_bounds(&Viewport::new(0.0, 0.0));
        assert_eq!(path.length(), length);

        path.fit_to_viewport(&viewport);
        assert!((path.length() - length).abs() < 0.1);
        assert!(path.point_at_fraction(0.5).is_some());
    }

    #[test]
    fn scale_about_center_keeps_center() {
        let mut path = square();
        path.scale_about_center(0.8);
        let (min, max) = path.bounds().unwrap();
        assert!(min.distance(pt2(1.0, 1.0)) < EPSILON);
        assert!(max.distance(pt2(9.0, 9.0)) < EPSILON);
        assert!((path.length() - 24.0).abs() < EPSILON);
    }

    #[test]
    fn heart_fits_inside_viewport() {
        let viewport = Viewport::new(1000.0, 600.0);
        let heart = Polyline::heart(&viewport);
        let (min, max) = heart.bounds().unwrap();
        assert!(min.x >= 0.0 && min.y >= 0.0);
        assert!(max.x <= 1000.0 && max.y <= 600.0);
        assert!(((min + max) / 2.0).distance(viewport.center()) < 0.5);
        assert!(heart.length() > 0.0);
    }
}
