use crate::body::Body;
use crate::math::{Point, Real, UnitVector, DEFAULT_EPSILON};
use crate::query::sat::sat_polygon_polygon::edge_normals;
use crate::query::sat::{is_separating_axis, OverlapState};
use crate::query::Response;
use crate::shape::{Ellipse, Polygon, WorldEllipse};

/// Tests a polygon attached to `a` against an ellipse attached to `b`.
///
/// The candidate axes are the polygon's edge normals, in vertex order,
/// followed by the direction from the ellipse's world-space center to the
/// polygon's nearest world-space vertex. The extra axis catches the
/// vertex-region contacts that edge normals alone miss.
///
/// Returns `true` on a strictly positive overlap; the `response`, if
/// provided, is only written in that case.
pub fn test_polygon_ellipse<'a>(
    a: &'a Body,
    poly_a: &Polygon,
    b: &'a Body,
    ellipse_b: &Ellipse,
    response: Option<&mut Response<'a>>,
) -> bool {
    let pts_a = poly_a.world_points(a);
    let world_b = ellipse_b.to_world(b);

    let mut state = response.is_some().then(OverlapState::new);
    let mut num_axes = 0;

    for axis in edge_normals(&pts_a) {
        num_axes += 1;
        if is_separating_axis(&pts_a[..], &world_b, &axis, state.as_mut()) {
            return false;
        }
    }

    if let Some(axis) = nearest_vertex_axis(&pts_a, &world_b) {
        num_axes += 1;
        if is_separating_axis(&pts_a[..], &world_b, &axis, state.as_mut()) {
            return false;
        }
    }

    if num_axes == 0 {
        log::debug!("no usable axis between the polygon and the ellipse; reporting no collision");
        return false;
    }

    if let (Some(response), Some(state)) = (response, state) {
        state.write(a, b, response);
    }

    true
}

/// Tests an ellipse attached to `a` against a polygon attached to `b`.
///
/// This delegates to [`test_polygon_ellipse`] with the arguments swapped
/// and then flips the written response back to this call's point of view,
/// which makes it slightly less efficient than calling the polygon-first
/// version directly.
pub fn test_ellipse_polygon<'a>(
    a: &'a Body,
    ellipse_a: &Ellipse,
    b: &'a Body,
    poly_b: &Polygon,
    mut response: Option<&mut Response<'a>>,
) -> bool {
    let collided = test_polygon_ellipse(b, poly_b, a, ellipse_a, response.as_deref_mut());

    if collided {
        if let Some(response) = response {
            response.flip();
        }
    }

    collided
}

/// The axis from the ellipse's center towards the polygon vertex nearest to
/// it, or `None` when the center sits exactly on that vertex.
fn nearest_vertex_axis(
    pts: &[Point<Real>],
    ellipse: &WorldEllipse,
) -> Option<UnitVector<Real>> {
    let mut best_sq = Real::MAX;
    let mut nearest = ellipse.center;

    for pt in pts {
        let sq = (pt - ellipse.center).norm_squared();
        if sq < best_sq {
            best_sq = sq;
            nearest = *pt;
        }
    }

    UnitVector::try_new(nearest - ellipse.center, DEFAULT_EPSILON)
}
