use crate::types::Point;
use std::f64::consts::{PI, TAU};

/// Linear interpolation between two f64 values
pub fn lerp_f64(start: f64, end: f64, alpha: f64) -> f64 {
    start + (end - start) * alpha
}

/// Linear interpolation between two Point values
pub fn lerp_point(start: Point, end: Point, alpha: f64) -> Point {
    Point {
        x: lerp_f64(start.x, end.x, alpha),
        y: lerp_f64(start.y, end.y, alpha),
    }
}

/// Angular interpolation in radians along the shorter arc.
/// Both inputs and the result are in [0, 2π).
pub fn angle_lerp(start: f64, end: f64, alpha: f64) -> f64 {
    // Difference wrapped to (-π, π] so we interpolate across the seam
    let mut diff = end - start;
    while diff <= -PI {
        diff += TAU;
    }
    while diff > PI {
        diff -= TAU;
    }
    (start + diff * alpha).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_lerp_f64() {
        assert_approx_eq!(lerp_f64(0.0, 10.0, 0.5), 5.0);
        assert_approx_eq!(lerp_f64(0.0, 10.0, 0.0), 0.0);
        assert_approx_eq!(lerp_f64(0.0, 10.0, 1.0), 10.0);
        assert_approx_eq!(lerp_f64(5.0, 10.0, 0.5), 7.5);
    }

    #[test]
    fn test_lerp_point() {
        let start = Point { x: 0.0, y: 0.0 };
        let end = Point { x: 10.0, y: 20.0 };
        let result = lerp_point(start, end, 0.5);
        assert_approx_eq!(result.x, 5.0);
        assert_approx_eq!(result.y, 10.0);
    }

    #[test]
    fn test_angle_lerp() {
        // Simple case
        assert_approx_eq!(angle_lerp(0.0, PI / 2.0, 0.5), PI / 4.0);

        // Crossing the 0/2π seam should take the short way around
        let result = angle_lerp(TAU - 0.2, 0.2, 0.5);
        assert!(
            result.abs() < 1e-9 || (result - TAU).abs() < 1e-9,
            "Expected approximately 0, got {}",
            result
        );

        // Interpolating from 0 toward 3π/2 should go backward through 2π
        let result2 = angle_lerp(0.0, 1.5 * PI, 0.5);
        assert_approx_eq!(result2, 1.75 * PI);
    }

    #[test]
    fn test_angle_lerp_stays_normalized() {
        let mut angle = 0.1;
        let mut probe = 0.0;
        while probe < TAU {
            angle = angle_lerp(angle, probe, 0.3);
            assert!((0.0..TAU).contains(&angle), "angle {} out of range", angle);
            probe += 0.37;
        }
    }
}
