use crate::math::{Point, Real, UnitVector};

/// The interval covered by a shape projected onto a separating axis candidate.
///
/// Both bounds are world-space scalars along the axis direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// The lower bound of the projected interval.
    pub min: Real,
    /// The upper bound of the projected interval.
    pub max: Real,
}

impl Projection {
    /// Does `self` share no interior with `other`?
    ///
    /// Intervals that merely touch (`self.max == other.min`) count as
    /// separated: the narrow-phase reports a collision only for a strictly
    /// positive overlap.
    #[inline]
    pub fn separated_from(&self, other: &Projection) -> bool {
        self.max <= other.min || other.max <= self.min
    }

    /// Does `self` contain the whole of `other`, boundaries included?
    #[inline]
    pub fn contains(&self, other: &Projection) -> bool {
        self.min <= other.min && other.max <= self.max
    }
}

/// Shapes that can be projected onto a world-space axis.
///
/// This is the only operation the Separating Axis Theorem needs from a
/// shape: given a unit direction, report the interval covered by the
/// shape's orthogonal projection onto that direction.
pub trait AxisProjection {
    /// Projects `self` onto `axis`, returning the covered interval.
    fn project_onto(&self, axis: &UnitVector<Real>) -> Projection;
}

impl AxisProjection for [Point<Real>] {
    /// Projects a vertex set onto the axis by taking the extremal dot products.
    #[inline]
    fn project_onto(&self, axis: &UnitVector<Real>) -> Projection {
        let mut min = Real::MAX;
        let mut max = -Real::MAX;

        for pt in self {
            let dot = pt.coords.dot(axis);
            min = min.min(dot);
            max = max.max(dot);
        }

        Projection { min, max }
    }
}
