use crate::body::Body;
use crate::query::sat::{
    test_ellipse_ellipse, test_ellipse_polygon, test_polygon_ellipse, test_polygon_polygon,
};
use crate::query::Response;
use crate::shape::Shape;

/// Tests two shapes of any supported kind for overlap, routing to the
/// matching pairwise test.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use sat2d::{Body, Response};
/// use sat2d::query::test_shape_shape;
/// use sat2d::shape::{Ellipse, Polygon, Shape};
/// use nalgebra::Point2;
///
/// let square = Shape::from(Polygon::rectangle(10.0, 10.0));
/// let circle = Shape::from(Ellipse::circle(Point2::origin(), 4.0));
/// let a = Body::translation(0.0, 0.0);
/// let b = Body::translation(11.0, 5.0);
///
/// let mut response = Response::new();
/// assert!(test_shape_shape(&a, &square, &b, &circle, Some(&mut response)));
/// assert_eq!(response.overlap, 3.0);
/// # }
/// ```
pub fn test_shape_shape<'a>(
    a: &'a Body,
    shape_a: &Shape,
    b: &'a Body,
    shape_b: &Shape,
    response: Option<&mut Response<'a>>,
) -> bool {
    match (shape_a, shape_b) {
        (Shape::Polygon(poly_a), Shape::Polygon(poly_b)) => {
            test_polygon_polygon(a, poly_a, b, poly_b, response)
        }
        (Shape::Polygon(poly_a), Shape::Ellipse(ellipse_b)) => {
            test_polygon_ellipse(a, poly_a, b, ellipse_b, response)
        }
        (Shape::Ellipse(ellipse_a), Shape::Polygon(poly_b)) => {
            test_ellipse_polygon(a, ellipse_a, b, poly_b, response)
        }
        (Shape::Ellipse(ellipse_a), Shape::Ellipse(ellipse_b)) => {
            test_ellipse_ellipse(a, ellipse_a, b, ellipse_b, response)
        }
    }
}
