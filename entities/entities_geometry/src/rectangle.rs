//! Rectangle Module
//!
//! A quadrilateral with opposite sides equal and four right angles.

use std::fmt;

use crate::figure::{sort_counter_clockwise, write_figure, Figure};
use crate::point::Point;

/// Rectangle figure
///
/// The default rectangle is 2 wide and 1 high, with a corner at the origin.
#[derive(Clone, Debug)]
pub struct Rectangle {
    points: [Point; 4],
}

impl Rectangle {
    /// Create a rectangle from four vertices in any order
    pub fn new(points: [Point; 4]) -> Self {
        Self {
            points: sort_counter_clockwise(points),
        }
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new([
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }
}

impl Figure for Rectangle {
    fn type_name(&self) -> &'static str {
        "Rectangle"
    }

    fn points(&self) -> &[Point; 4] {
        &self.points
    }

    fn set_points(&mut self, points: [Point; 4]) {
        self.points = sort_counter_clockwise(points);
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_figure(f, self.type_name(), &self.points)
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.same_vertices(other)
    }
}

impl From<&Rectangle> for f64 {
    fn from(rectangle: &Rectangle) -> Self {
        rectangle.area()
    }
}
