//! Figure Module
//!
//! The `Figure` trait shared by every quadrilateral, and the vertex
//! arithmetic behind it.
//!
//! Every figure stores exactly four vertices. Vertices are kept in
//! counter-clockwise order: on every update they are sorted by their
//! `atan2` angle around the vertex mean. The shoelace area formula and the
//! centroid depend on that ordering, so points may be given in any order.
//!
//! No check is made that four points really form the named shape.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::point::Point;
use crate::rectangle::Rectangle;
use crate::square::Square;
use crate::trapezoid::Trapezoid;

/// Tolerance used when comparing vertices
pub const VERTEX_EPSILON: f64 = 1e-4;

/// Geometry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Vertex text could not be read as four points
    #[error("invalid points: {0}")]
    InvalidPoints(String),
    /// Figure name not recognised
    #[error("unknown figure type: {0}")]
    UnknownFigure(String),
}

/// A quadrilateral with four ordered vertices
pub trait Figure: fmt::Debug {
    /// Type tag, e.g. `"Square"`
    fn type_name(&self) -> &'static str;

    /// Vertices in counter-clockwise order
    fn points(&self) -> &[Point; 4];

    /// Replace the vertices; they are re-sorted counter-clockwise
    fn set_points(&mut self, points: [Point; 4]);

    /// Geometric center (mean of the vertices)
    fn center(&self) -> Point {
        vertex_mean(self.points())
    }

    /// Area by the shoelace formula
    fn area(&self) -> f64 {
        shoelace_area(self.points())
    }

    /// Numeric value of a figure, which is its area
    fn as_f64(&self) -> f64 {
        self.area()
    }

    /// Read eight whitespace-separated coordinates and replace the vertices
    ///
    /// On error the figure keeps its previous vertices.
    fn read_from(&mut self, text: &str) -> Result<(), GeometryError> {
        let points = parse_points(text)?;
        self.set_points(points);
        Ok(())
    }

    /// Check if both figures have the same vertices, in any order
    fn same_vertices(&self, other: &dyn Figure) -> bool {
        self.points().iter().all(|p| {
            other
                .points()
                .iter()
                .any(|q| p.approx_eq(q, VERTEX_EPSILON))
        })
    }
}

impl fmt::Display for dyn Figure + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_figure(f, self.type_name(), self.points())
    }
}

impl PartialEq for dyn Figure + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.same_vertices(other)
    }
}

/// Write `"<Type>: (x,y) (x,y) (x,y) (x,y)"`
pub(crate) fn write_figure(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    points: &[Point; 4],
) -> fmt::Result {
    write!(f, "{}:", name)?;
    for p in points {
        write!(f, " {}", p)?;
    }
    Ok(())
}

/// Sort four vertices counter-clockwise around their mean
pub fn sort_counter_clockwise(mut points: [Point; 4]) -> [Point; 4] {
    let c = vertex_mean(&points);
    points.sort_by(|a, b| {
        let angle_a = (a.y - c.y).atan2(a.x - c.x);
        let angle_b = (b.y - c.y).atan2(b.x - c.x);
        angle_a.total_cmp(&angle_b)
    });
    points
}

/// Mean of the vertices
pub fn vertex_mean(points: &[Point; 4]) -> Point {
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / 4.0, sy / 4.0)
}

/// Shoelace area of a closed polygon
pub fn shoelace_area(points: &[Point; 4]) -> f64 {
    let mut sum = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum += points[i].x * points[j].y;
        sum -= points[j].x * points[i].y;
    }
    sum.abs() / 2.0
}

/// Parse eight whitespace-separated numbers into four points
pub fn parse_points(text: &str) -> Result<[Point; 4], GeometryError> {
    let coords = text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| GeometryError::InvalidPoints(format!("bad coordinate {:?}", token)))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if coords.len() != 8 {
        return Err(GeometryError::InvalidPoints(format!(
            "expected 8 coordinates, got {}",
            coords.len()
        )));
    }

    let mut points = [Point::default(); 4];
    for (point, pair) in points.iter_mut().zip(coords.chunks_exact(2)) {
        *point = Point::new(pair[0], pair[1]);
    }
    Ok(points)
}

/// The concrete figure variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureKind {
    Square,
    Rectangle,
    Trapezoid,
}

impl FigureKind {
    /// Build a boxed figure of this kind with its default vertices
    pub fn build_default(self) -> Box<dyn Figure> {
        match self {
            FigureKind::Square => Box::new(Square::default()),
            FigureKind::Rectangle => Box::new(Rectangle::default()),
            FigureKind::Trapezoid => Box::new(Trapezoid::default()),
        }
    }

    /// Build a boxed figure of this kind from four vertices
    pub fn build(self, points: [Point; 4]) -> Box<dyn Figure> {
        match self {
            FigureKind::Square => Box::new(Square::new(points)),
            FigureKind::Rectangle => Box::new(Rectangle::new(points)),
            FigureKind::Trapezoid => Box::new(Trapezoid::new(points)),
        }
    }
}

impl FromStr for FigureKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(FigureKind::Square),
            "rectangle" => Ok(FigureKind::Rectangle),
            "trapezoid" => Ok(FigureKind::Trapezoid),
            _ => Err(GeometryError::UnknownFigure(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: [(f64, f64); 4]) -> [Point; 4] {
        raw.map(Point::from)
    }

    #[test]
    fn test_sort_counter_clockwise() {
        let sorted = sort_counter_clockwise(pts([(1.0, 1.0), (0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]));
        // atan2 ascending from -pi: bottom-left, bottom-right, top-right, top-left
        assert_eq!(sorted, pts([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
    }

    #[test]
    fn test_shoelace_needs_ordering() {
        let crossed = pts([(1.0, 1.0), (0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        assert_ne!(shoelace_area(&crossed), 1.0);
        assert_eq!(shoelace_area(&sort_counter_clockwise(crossed)), 1.0);
    }

    #[test]
    fn test_vertex_mean() {
        let c = vertex_mean(&pts([(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]));
        assert_eq!(c, Point::new(2.0, 1.0));
    }

    #[test]
    fn test_parse_points() {
        let parsed = parse_points("0 0  2 0\n2 2 0 2").unwrap();
        assert_eq!(parsed, pts([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]));
    }

    #[test]
    fn test_parse_points_errors() {
        assert!(matches!(parse_points("0 0 1 1"), Err(GeometryError::InvalidPoints(_))));
        assert!(matches!(parse_points("0 0 1 1 2 2 3 x"), Err(GeometryError::InvalidPoints(_))));
        assert!(matches!(parse_points("0 0 1 1 2 2 3 3 4"), Err(GeometryError::InvalidPoints(_))));
        assert!(matches!(parse_points("0 0 1 1 2 2 3 NaN"), Err(GeometryError::InvalidPoints(_))));
    }

    #[test]
    fn test_figure_kind_from_str() {
        assert_eq!("Square".parse::<FigureKind>(), Ok(FigureKind::Square));
        assert_eq!("rectangle".parse::<FigureKind>(), Ok(FigureKind::Rectangle));
        assert_eq!("TRAPEZOID".parse::<FigureKind>(), Ok(FigureKind::Trapezoid));
        assert_eq!(
            "circle".parse::<FigureKind>(),
            Err(GeometryError::UnknownFigure("circle".to_string()))
        );
    }

    #[test]
    fn test_build_by_kind() {
        assert_eq!(FigureKind::Square.build_default().type_name(), "Square");
        assert_eq!(FigureKind::Rectangle.build_default().area(), 2.0);
        let trap = FigureKind::Trapezoid.build(pts([(0.0, 0.0), (4.0, 0.0), (3.0, 2.0), (1.0, 2.0)]));
        assert!((trap.area() - 6.0).abs() < 1e-9);
    }
}
