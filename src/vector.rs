/*
 * Vector Module
 *
 * Steering helpers on top of nannou's Vec2. All steering math in the
 * simulation goes through these so that a zero-length vector is never
 * normalized: rescaling a zero vector leaves it at zero.
 */

use nannou::prelude::*;

pub trait SteeringVector: Sized {
    // True when both components are exactly zero
    fn is_zero_length(self) -> bool;

    // Rescale to the given magnitude. A negative magnitude flips the direction.
    fn with_length(self, length: f32) -> Self;

    // Cap the magnitude at `max`, keeping the direction
    fn limited(self, max: f32) -> Self;

    // Rotate counter-clockwise (in y-up terms) by an angle in degrees
    fn rotated_degrees(self, degrees: f32) -> Self;
}

impl SteeringVector for Vec2 {
    #[inline]
    fn is_zero_length(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    fn with_length(self, length: f32) -> Self {
        let current = self.length();
        if current == 0.0 {
            return self;
        }
        self * (length / current)
    }

    #[inline]
    fn limited(self, max: f32) -> Self {
        let current = self.length();
        if current > max {
            self.with_length(max)
        } else {
            self
        }
    }

    #[inline]
    fn rotated_degrees(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        vec2(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn zero_vector_keeps_zero_length() {
        assert!(Vec2::ZERO.with_length(10.0).is_zero_length());
        assert!(Vec2::ZERO.limited(1.0).is_zero_length());
        assert!(Vec2::ZERO.rotated_degrees(90.0).is_zero_length());
    }

    #[test]
    fn with_length_rescales_and_keeps_direction() {
        let v = vec2(3.0, 4.0).with_length(10.0);
        assert!((v.length() - 10.0).abs() < EPSILON);
        assert!((v.x - 6.0).abs() < EPSILON);
        assert!((v.y - 8.0).abs() < EPSILON);
    }

    #[test]
    fn negative_length_flips_direction() {
        let v = vec2(2.0, 0.0).with_length(-0.5);
        assert!((v.x + 0.5).abs() < EPSILON);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn limited_only_shrinks() {
        let short = vec2(0.01, 0.02);
        assert_eq!(short.limited(1.0), short);

        let long = vec2(30.0, 40.0).limited(5.0);
        assert!((long.length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn rotating_by_ninety_degrees_is_perpendicular() {
        let v = vec2(1.0, 0.0).rotated_degrees(90.0);
        assert!(v.x.abs() < EPSILON);
        assert!((v.y - 1.0).abs() < EPSILON);

        let w = vec2(2.0, 5.0);
        assert!(w.dot(w.rotated_degrees(90.0)).abs() < EPSILON * 10.0);
    }
}
