use crate::body::Body;
use crate::math::{UnitVector, Vector, DEFAULT_EPSILON};
use crate::query::sat::{is_separating_axis, OverlapState};
use crate::query::Response;
use crate::shape::Ellipse;

/// Tests an ellipse attached to `a` against an ellipse attached to `b`.
///
/// The only candidate axis is the direction between the two world-space
/// centers; for circles this is exact, and for ellipses it matches the
/// behavior game engines conventionally settle on for this pair. Returns
/// `true` on a strictly positive overlap along that axis; the `response`,
/// if provided, is only written in that case.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use sat2d::{Body, Response};
/// use sat2d::query::test_ellipse_ellipse;
/// use sat2d::shape::Ellipse;
/// use nalgebra::{Point2, Vector2};
///
/// let circle = Ellipse::circle(Point2::origin(), 5.0);
/// let a = Body::translation(0.0, 0.0);
/// let b = Body::translation(8.0, 0.0);
///
/// let mut response = Response::new();
/// assert!(test_ellipse_ellipse(&a, &circle, &b, &circle, Some(&mut response)));
/// assert_eq!(response.overlap, 2.0);
/// assert_eq!(response.overlap_n, Vector2::new(-1.0, 0.0));
/// # }
/// ```
pub fn test_ellipse_ellipse<'a>(
    a: &'a Body,
    ellipse_a: &Ellipse,
    b: &'a Body,
    ellipse_b: &Ellipse,
    response: Option<&mut Response<'a>>,
) -> bool {
    let world_a = ellipse_a.to_world(a);
    let world_b = ellipse_b.to_world(b);

    let axis = UnitVector::try_new(world_b.center - world_a.center, DEFAULT_EPSILON)
        .unwrap_or_else(|| {
            log::debug!("coincident ellipse centers; falling back to the x axis");
            Vector::x_axis()
        });

    let mut state = response.is_some().then(OverlapState::new);
    if is_separating_axis(&world_a, &world_b, &axis, state.as_mut()) {
        return false;
    }

    if let (Some(response), Some(state)) = (response, state) {
        state.write(a, b, response);
    }

    true
}
