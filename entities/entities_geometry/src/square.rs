//! Square Module
//!
//! A quadrilateral with four equal sides and four right angles.

use std::fmt;

use crate::figure::{sort_counter_clockwise, write_figure, Figure};
use crate::point::Point;

/// Square figure
///
/// The default square is the unit square with a corner at the origin.
#[derive(Clone, Debug)]
pub struct Square {
    points: [Point; 4],
}

impl Square {
    /// Create a square from four vertices in any order
    pub fn new(points: [Point; 4]) -> Self {
        Self {
            points: sort_counter_clockwise(points),
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }
}

impl Figure for Square {
    fn type_name(&self) -> &'static str {
        "Square"
    }

    fn points(&self) -> &[Point; 4] {
        &self.points
    }

    fn set_points(&mut self, points: [Point; 4]) {
        self.points = sort_counter_clockwise(points);
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_figure(f, self.type_name(), &self.points)
    }
}

impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        self.same_vertices(other)
    }
}

impl From<&Square> for f64 {
    fn from(square: &Square) -> Self {
        square.area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(raw: [(f64, f64); 4]) -> Square {
        Square::new(raw.map(Point::from))
    }

    #[test]
    fn test_default_square() {
        let sq = Square::default();
        assert_eq!(sq.area(), 1.0);
        assert_eq!(sq.center(), Point::new(0.5, 0.5));
    }

    #[test]
    fn test_area_and_center() {
        let sq = square([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(sq.area(), 4.0);
        assert_eq!(sq.center(), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_cast_to_f64() {
        let sq = square([(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
        assert_eq!(f64::from(&sq), 9.0);
        assert_eq!(sq.as_f64(), 9.0);
    }

    #[test]
    fn test_random_order_points() {
        let sq = square([(1.0, 1.0), (0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        assert_eq!(sq.area(), 1.0);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = square([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let b = square([(2.0, 2.0), (0.0, 0.0), (0.0, 2.0), (2.0, 0.0)]);
        let c = square([(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::default().to_string(), "Square: (0,0) (1,0) (1,1) (0,1)");
    }

    #[test]
    fn test_clone_and_assign() {
        let original = square([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        let mut target = Square::default();
        assert_eq!(target.area(), 1.0);
        target = original.clone();
        assert_eq!(target.area(), 4.0);
        assert_eq!(original.area(), 4.0);
    }
}
