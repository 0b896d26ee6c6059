use na::{Point2, Vector2};
use sat2d::shape::{Ellipse, Polygon, Shape, ShapeType};
use sat2d::Body;

#[test]
fn translated_polygon_contains_world_points() {
    let rect = Polygon::rectangle(10.0, 10.0);
    let body = Body::translation(5.0, 0.0);

    assert!(rect.contains_point(&body, &Point2::new(14.9, 9.9)));
    assert!(rect.contains_point(&body, &Point2::new(5.1, 0.1)));
    assert!(!rect.contains_point(&body, &Point2::new(4.9, 5.0)));
    assert!(!rect.contains_point(&body, &Point2::new(15.1, 5.0)));
}

#[test]
fn concave_polygon_uses_the_even_odd_rule() {
    // An L-shaped hull: the notch between (2, 2) and (4, 4) lies outside.
    let l_shape = Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(4.0, 2.0),
        Point2::new(2.0, 2.0),
        Point2::new(2.0, 4.0),
        Point2::new(0.0, 4.0),
    ])
    .unwrap();

    assert!(l_shape.contains_local_point(&Point2::new(1.0, 3.0)));
    assert!(l_shape.contains_local_point(&Point2::new(3.0, 1.0)));
    assert!(!l_shape.contains_local_point(&Point2::new(3.0, 3.0)));
}

#[test]
fn rotated_ellipse_contains_points_along_its_long_axis() {
    // Radii (4, 1) rotated a quarter turn: the long axis now points up.
    let ellipse = Ellipse::new(Point2::origin(), Vector2::new(4.0, 1.0));
    let body = Body::new(Point2::origin(), f32::to_radians(90.0), Vector2::new(1.0, 1.0));

    assert!(ellipse.contains_point(&body, &Point2::new(0.0, 3.0)));
    assert!(!ellipse.contains_point(&body, &Point2::new(3.0, 0.0)));
}

#[test]
fn scaled_ellipse_grows_its_reach() {
    let circle = Ellipse::circle(Point2::origin(), 1.0);
    let stretched = Body::new(Point2::origin(), 0.0, Vector2::new(5.0, 1.0));

    assert!(circle.contains_point(&stretched, &Point2::new(4.5, 0.0)));
    assert!(!circle.contains_point(&stretched, &Point2::new(0.0, 1.5)));
    assert!(!circle.contains_point(&Body::identity(), &Point2::new(4.5, 0.0)));
}

#[test]
fn shape_enum_forwards_to_the_concrete_kind() {
    let square = Shape::from(Polygon::rectangle(2.0, 2.0));
    let circle = Shape::from(Ellipse::circle(Point2::origin(), 1.0));

    assert_eq!(square.shape_type(), ShapeType::Polygon);
    assert_eq!(circle.shape_type(), ShapeType::Ellipse);
    assert!(square.as_polygon().is_some());
    assert!(square.as_ellipse().is_none());
    assert!(circle.as_ellipse().is_some());

    assert!(square.contains_local_point(&Point2::new(1.0, 1.0)));
    assert!(circle.contains_point(&Body::translation(3.0, 0.0), &Point2::new(3.5, 0.0)));

    let shrunk = circle.scaled(&Vector2::new(0.5, 0.5));
    assert!(!shrunk.contains_local_point(&Point2::new(0.75, 0.0)));
}
