use approx::assert_relative_eq;
use na::{Point2, Vector2};
use sat2d::shape::{InvalidPolygonError, Polygon};
use sat2d::Body;

#[test]
fn too_few_points_are_rejected() {
    let err = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]).unwrap_err();
    assert_eq!(err, InvalidPolygonError::TooFewPoints { found: 2 });
    assert_eq!(
        err.to_string(),
        "a polygon requires at least 3 vertices, found 2"
    );
}

#[test]
fn non_finite_points_are_rejected() {
    let err = Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, f32::INFINITY),
        Point2::new(1.0, 1.0),
    ])
    .unwrap_err();
    assert_eq!(err, InvalidPolygonError::NonFinitePoint);
}

#[test]
fn triangle_construction_succeeds() {
    let triangle = Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(1.0, 2.0),
    ])
    .unwrap();
    assert_eq!(triangle.points().len(), 3);
}

#[test]
fn scaled_then_transformed_matches_the_full_body_transform() {
    let rect = Polygon::rectangle(3.0, 2.0);
    let body = Body::new(
        Point2::new(1.0, -2.0),
        f32::to_radians(30.0),
        Vector2::new(2.0, 0.5),
    );

    // Baking the scale first, then applying the unscaled remainder of the
    // transform, must land on the same world points.
    let baked = rect.scaled(&Vector2::new(2.0, 0.5));
    let remainder = Body::new(Point2::new(1.0, -2.0), f32::to_radians(30.0), Vector2::new(1.0, 1.0));

    let direct = rect.transformed(&body);
    let staged = baked.transformed(&remainder);

    for (p, q) in direct.points().iter().zip(staged.points()) {
        assert_relative_eq!(*p, *q, epsilon = 1.0e-5);
    }
}
