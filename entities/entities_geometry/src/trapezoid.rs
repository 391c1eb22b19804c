//! Trapezoid Module
//!
//! A quadrilateral with at least one pair of parallel sides.

use std::fmt;

use crate::figure::{sort_counter_clockwise, write_figure, Figure};
use crate::point::Point;

/// Trapezoid figure
///
/// The default trapezoid has bases 4 and 2 and height 2.
#[derive(Clone, Debug)]
pub struct Trapezoid {
    points: [Point; 4],
}

impl Trapezoid {
    /// Create a trapezoid from four vertices in any order
    pub fn new(points: [Point; 4]) -> Self {
        Self {
            points: sort_counter_clockwise(points),
        }
    }
}

impl Default for Trapezoid {
    fn default() -> Self {
        Self::new([
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(3.0, 2.0),
            Point::new(1.0, 2.0),
        ])
    }
}

impl Figure for Trapezoid {
    fn type_name(&self) -> &'static str {
        "Trapezoid"
    }

    fn points(&self) -> &[Point; 4] {
        &self.points
    }

    fn set_points(&mut self, points: [Point; 4]) {
        self.points = sort_counter_clockwise(points);
    }
}

impl fmt::Display for Trapezoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_figure(f, self.type_name(), &self.points)
    }
}

impl PartialEq for Trapezoid {
    fn eq(&self, other: &Self) -> bool {
        self.same_vertices(other)
    }
}

impl From<&Trapezoid> for f64 {
    fn from(trapezoid: &Trapezoid) -> Self {
        trapezoid.area()
    }
}
