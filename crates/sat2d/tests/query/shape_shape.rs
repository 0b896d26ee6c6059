use approx::assert_relative_eq;
use na::{Point2, Vector2};
use sat2d::query::{
    test_ellipse_ellipse, test_ellipse_polygon, test_polygon_ellipse, test_polygon_polygon,
    test_shape_shape, Response,
};
use sat2d::shape::{Ellipse, Polygon, Shape};
use sat2d::Body;

use super::random_body;

#[test]
fn dispatcher_matches_the_direct_pair_calls() {
    // Close enough for every ordered pair to overlap, whichever shape
    // carries which body.
    let square = Polygon::rectangle(10.0, 10.0);
    let circle = Ellipse::circle(Point2::origin(), 5.0);
    let body_a = Body::identity();
    let body_b = Body::translation(2.0, 2.0);

    let polygon_shape = Shape::from(square.clone());
    let ellipse_shape = Shape::from(circle);

    let mut dispatched = Response::new();
    let mut direct = Response::new();

    assert!(test_shape_shape(
        &body_a,
        &polygon_shape,
        &body_b,
        &polygon_shape,
        Some(&mut dispatched)
    ));
    assert!(test_polygon_polygon(
        &body_a,
        &square,
        &body_b,
        &square,
        Some(&mut direct)
    ));
    assert_eq!(dispatched, direct);

    assert!(test_shape_shape(
        &body_a,
        &polygon_shape,
        &body_b,
        &ellipse_shape,
        Some(&mut dispatched)
    ));
    assert!(test_polygon_ellipse(
        &body_a,
        &square,
        &body_b,
        &circle,
        Some(&mut direct)
    ));
    assert_eq!(dispatched, direct);

    assert!(test_shape_shape(
        &body_a,
        &ellipse_shape,
        &body_b,
        &polygon_shape,
        Some(&mut dispatched)
    ));
    assert!(test_ellipse_polygon(
        &body_a,
        &circle,
        &body_b,
        &square,
        Some(&mut direct)
    ));
    assert_eq!(dispatched, direct);

    assert!(test_shape_shape(
        &body_a,
        &ellipse_shape,
        &body_b,
        &ellipse_shape,
        Some(&mut dispatched)
    ));
    assert!(test_ellipse_ellipse(
        &body_a,
        &circle,
        &body_b,
        &circle,
        Some(&mut direct)
    ));
    assert_eq!(dispatched, direct);
}

#[test]
fn verdicts_are_symmetric_in_argument_order() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..1000 {
        let shapes = [
            Shape::from(Polygon::rectangle(
                1.0 + rng.rand_float() * 7.0,
                1.0 + rng.rand_float() * 7.0,
            )),
            Shape::from(Ellipse::new(
                Point2::origin(),
                Vector2::new(0.5 + rng.rand_float() * 3.5, 0.5 + rng.rand_float() * 3.5),
            )),
        ];
        let body_a = random_body(&mut rng);
        let body_b = random_body(&mut rng);

        for shape_a in &shapes {
            for shape_b in &shapes {
                let mut response = Response::new();
                let collided =
                    test_shape_shape(&body_a, shape_a, &body_b, shape_b, Some(&mut response));
                let boolean = test_shape_shape(&body_a, shape_a, &body_b, shape_b, None);
                let swapped = test_shape_shape(&body_b, shape_b, &body_a, shape_a, None);

                assert_eq!(
                    collided, boolean,
                    "requesting a response changed the verdict for {:?} vs {:?}",
                    body_a, body_b,
                );
                assert_eq!(
                    collided, swapped,
                    "swapping the arguments changed the verdict for {:?} {:?} vs {:?} {:?}",
                    shape_a.shape_type(),
                    body_a,
                    shape_b.shape_type(),
                    body_b,
                );

                if collided {
                    assert!(response.overlap > 0.0);
                    assert_relative_eq!(response.overlap_n.norm(), 1.0, epsilon = 1.0e-5);
                    assert_eq!(response.overlap_v, response.overlap_n * response.overlap);
                    assert_eq!(response.a, Some(&body_a));
                    assert_eq!(response.b, Some(&body_b));
                } else {
                    assert_eq!(response, Response::new());
                }
            }
        }
    }
}
