use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Computes the direction pointing toward the right-hand side of the oriented
/// edge `a -> b`.
///
/// For a counter-clockwise polygon this is the outward edge normal. Returns
/// `None` if the edge is degenerate.
#[inline]
pub fn ccw_edge_normal(a: &Point<Real>, b: &Point<Real>) -> Option<UnitVector<Real>> {
    let ab = b - a;
    let res = Vector::new(ab.y, -ab.x);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}
