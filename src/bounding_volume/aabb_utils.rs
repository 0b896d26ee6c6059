use crate::body::Body;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the AABB of a set of points transformed by `body`.
///
/// The input iterator must yield at least one point.
pub fn point_cloud_aabb<'a, I>(body: &Body, pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next().expect(
        "Point cloud AABB construction: the input iterator should yield at least one point.",
    );
    let wp0 = body.transform_point(p0);
    let mut mins: Point<Real> = wp0;
    let mut maxs: Point<Real> = wp0;

    for pt in it {
        let wpt = body.transform_point(pt);
        mins = mins.inf(&wpt);
        maxs = maxs.sup(&wpt);
    }

    Aabb::new(mins, maxs)
}

/// Computes the AABB of a set of points.
///
/// The input iterator must yield at least one point.
pub fn local_point_cloud_aabb<'a, I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = &'a Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next().expect(
        "Point cloud AABB construction: the input iterator should yield at least one point.",
    );
    let mut mins: Point<Real> = *p0;
    let mut maxs: Point<Real> = *p0;

    for pt in it {
        mins = mins.inf(pt);
        maxs = maxs.sup(pt);
    }

    Aabb::new(mins, maxs)
}
