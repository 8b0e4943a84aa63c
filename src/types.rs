// Shared value types for the simulation.

/// A point in arena coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// The point the robot is driving toward. Set from mouse clicks, so it
/// lives in whole pixels like the click coordinates themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub x: i32,
    pub y: i32,
}

impl Target {
    pub fn new(x: i32, y: i32) -> Self {
        Target { x, y }
    }

    pub fn as_point(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_approx_eq!(a.distance_to(b), 5.0);
        assert_approx_eq!(b.distance_to(a), 5.0);
        assert_approx_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn test_target_as_point() {
        let t = Target::new(150, 100);
        let p = t.as_point();
        assert_approx_eq!(p.x, 150.0);
        assert_approx_eq!(p.y, 100.0);
    }
}
