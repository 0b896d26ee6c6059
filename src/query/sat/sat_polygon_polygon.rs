use crate::body::Body;
use crate::math::{Real, UnitVector};
use crate::query::sat::{is_separating_axis, OverlapState};
use crate::query::Response;
use crate::shape::{Polygon, WorldPoints};
use crate::utils;

/// Tests a polygon attached to `a` against a polygon attached to `b`.
///
/// Returns `true` if the polygons overlap with strictly positive depth;
/// shapes that merely touch are reported as separated. On overlap, if a
/// `response` is provided it is filled with the minimum translation vector
/// and the containment flags. On separation the response is left untouched.
///
/// The candidate axes are the edge normals of both polygons, `a`'s edges
/// first, each polygon's edges in vertex order. Ties on the overlap depth
/// keep the earliest axis.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use sat2d::{Body, Response};
/// use sat2d::query::test_polygon_polygon;
/// use sat2d::shape::Polygon;
///
/// let square = Polygon::rectangle(10.0, 10.0);
/// let a = Body::translation(0.0, 0.0);
/// let b = Body::translation(5.0, 5.0);
///
/// let mut response = Response::new();
/// assert!(test_polygon_polygon(&a, &square, &b, &square, Some(&mut response)));
/// assert_eq!(response.overlap, 5.0);
/// # }
/// ```
pub fn test_polygon_polygon<'a>(
    a: &'a Body,
    poly_a: &Polygon,
    b: &'a Body,
    poly_b: &Polygon,
    response: Option<&mut Response<'a>>,
) -> bool {
    let pts_a = poly_a.world_points(a);
    let pts_b = poly_b.world_points(b);

    let mut state = response.is_some().then(OverlapState::new);
    let mut num_axes = 0;

    for pts in [&pts_a, &pts_b] {
        for axis in edge_normals(pts) {
            num_axes += 1;
            if is_separating_axis(&pts_a[..], &pts_b[..], &axis, state.as_mut()) {
                return false;
            }
        }
    }

    // Every edge of both polygons was degenerate; there is nothing
    // meaningful to test against.
    if num_axes == 0 {
        log::debug!("no usable edge normal on either polygon; reporting no collision");
        return false;
    }

    if let (Some(response), Some(state)) = (response, state) {
        state.write(a, b, response);
    }

    true
}

/// Iterates over the outward unit normals of a world-space vertex loop, in
/// vertex order, skipping edges too short to define a direction.
pub(crate) fn edge_normals(pts: &WorldPoints) -> impl Iterator<Item = UnitVector<Real>> + '_ {
    (0..pts.len()).filter_map(move |i| {
        let j = (i + 1) % pts.len();
        utils::ccw_edge_normal(&pts[i], &pts[j])
    })
}
