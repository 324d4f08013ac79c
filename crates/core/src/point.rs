#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A location in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Pairs this point with a field value.
    #[must_use]
    pub const fn with_z(self, z: f64) -> TrajectoryPoint {
        TrajectoryPoint {
            x: self.x,
            y: self.y,
            z,
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// A visited location together with the field value there.
///
/// `z` is always `f(x, y)` for the field that produced the point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TrajectoryPoint {
    /// Drops the field value.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<TrajectoryPoint> for [f64; 3] {
    fn from(point: TrajectoryPoint) -> Self {
        [point.x, point.y, point.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_conversions() {
        let point = Point::from([1.5, -2.0]);
        assert_eq!(point, Point::new(1.5, -2.0));
        assert_eq!(<[f64; 2]>::from(point), [1.5, -2.0]);

        let visited = point.with_z(4.0);
        assert_eq!(<[f64; 3]>::from(visited), [1.5, -2.0, 4.0]);
        assert_eq!(visited.point(), point);
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(0.0, 1e300).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::NEG_INFINITY).is_finite());
    }
}
