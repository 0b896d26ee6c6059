use crate::math::{Point, Real};
use num::Zero;

/// Tests if the given point is inside a convex polygon with arbitrary winding.
///
/// The polygon is assumed to be closed, i.e., the first and last points are
/// implicitly connected by an edge. Points lying exactly on an edge are
/// reported as inside.
pub fn point_in_convex_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut sign = 0.0;

    for i1 in 0..poly.len() {
        let i2 = (i1 + 1) % poly.len();
        let edge = poly[i2] - poly[i1];
        let dpt = pt - poly[i1];
        let perp = dpt.perp(&edge);

        if sign.is_zero() {
            sign = perp;
        } else if sign * perp < 0.0 {
            return false;
        }
    }

    true
}

/// Tests if the given point is inside a simple polygon with arbitrary
/// vertices, using the even-odd crossing rule.
///
/// Handles concave polygons. For a function dedicated to convex polygons,
/// see [`point_in_convex_poly2d`]. Points lying exactly on an edge may be
/// reported on either side.
pub fn point_in_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    let mut inside = false;
    let mut j = poly.len() - 1;

    for i in 0..poly.len() {
        let (pi, pj) = (poly[i], poly[j]);

        if (pi.y > pt.y) != (pj.y > pt.y)
            && pt.x < (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }

        j = i;
    }

    inside
}
