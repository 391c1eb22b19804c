//! Integration tests for entities_geometry crate
//!
//! These tests drive figures through the `Figure` trait object the way a
//! caller holding mixed shapes would.

use entities_geometry::*;
use proptest::prelude::*;

fn points(raw: [(f64, f64); 4]) -> [Point; 4] {
    raw.map(Point::from)
}

#[test]
fn test_virtual_dispatch() {
    let figures: Vec<Box<dyn Figure>> = vec![
        Box::new(Square::default()),
        Box::new(Rectangle::default()),
        Box::new(Trapezoid::default()),
    ];

    let names: Vec<&str> = figures.iter().map(|f| f.type_name()).collect();
    assert_eq!(names, vec!["Square", "Rectangle", "Trapezoid"]);

    assert_eq!(figures[0].area(), 1.0);
    assert_eq!(figures[1].area(), 2.0);
    assert!(figures[2].area() > 0.0);
    assert_eq!(figures[0].as_f64(), 1.0);
    assert_eq!(figures[0].center(), Point::new(0.5, 0.5));
}

#[test]
fn test_mixed_array_total_area() {
    let mut arr = FigureArray::new();
    arr.push(Square::new(points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])));
    arr.push(Rectangle::new(points([(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)])));
    arr.push(Trapezoid::new(points([(0.0, 0.0), (4.0, 0.0), (3.0, 2.0), (1.0, 2.0)])));

    assert!((arr.total_area() - 9.0).abs() < 0.1);
}

#[test]
fn test_trait_object_display_and_equality() {
    let a: Box<dyn Figure> = FigureKind::Square.build(points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
    let b: Box<dyn Figure> = Box::new(Square::default());
    let c: Box<dyn Figure> = Box::new(Rectangle::default());

    assert_eq!(a.to_string(), "Square: (0,0) (1,0) (1,1) (0,1)");
    assert!(a == b);
    assert!(a != c);
}

#[test]
fn test_read_through_trait_object() {
    let mut fig: Box<dyn Figure> = FigureKind::Square.build_default();
    fig.read_from("2 2 0 0 0 2 2 0").unwrap();
    assert_eq!(fig.area(), 4.0);
    assert_eq!(fig.points()[0], Point::new(0.0, 0.0));

    let err = fig.read_from("nope").unwrap_err();
    assert!(err.to_string().starts_with("invalid points"));
}

#[test]
fn test_array_round_trip_through_remove() {
    let mut arr = FigureArray::new();
    arr.push(Square::default());
    arr.push(Rectangle::default());

    let taken = arr.remove(0).unwrap();
    assert_eq!(taken.type_name(), "Square");
    arr.push_boxed(Some(taken));

    let names: Vec<&str> = arr.iter().map(|f| f.type_name()).collect();
    assert_eq!(names, vec!["Rectangle", "Square"]);
}

proptest! {
    #[test]
    fn prop_axis_rectangle_area_ignores_vertex_order(
        x in -100i32..100,
        y in -100i32..100,
        w in 1i32..50,
        h in 1i32..50,
        order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    ) {
        let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
        let corners = [
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ];
        let shuffled = [corners[order[0]], corners[order[1]], corners[order[2]], corners[order[3]]];
        let rect = Rectangle::new(shuffled);
        prop_assert!((rect.area() - w * h).abs() < 1e-9);
        prop_assert_eq!(rect.center(), Point::new(x + w / 2.0, y + h / 2.0));
    }
}
