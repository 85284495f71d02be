use serde::{Deserialize, Serialize};

/// A position in host pixels. `y` grows downward, so positive polar angles
/// run clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Projects a polar coordinate (angle in degrees) around `center`.
    pub fn polar(center: Point, radius: f64, degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Self::new(
            center.x + radius * radians.cos(),
            center.y + radius * radians.sin(),
        )
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Length of the vector from the origin to this point.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle of this point around the origin, in degrees.
    pub fn degrees(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Position relative to `origin`.
    pub fn relative_to(self, origin: Point) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }
}
