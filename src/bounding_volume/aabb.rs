//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector};

/// An Axis-Aligned Bounding Box (AABB), defined by its minimum and maximum
/// corners.
///
/// AABBs are conservative bounds: a pair whose boxes do not intersect
/// cannot overlap, so they make a cheap broad-phase filter in front of the
/// narrow-phase tests. Unlike those tests, box intersection treats touching
/// boxes as intersecting, since a filter must never reject a pair the
/// narrow-phase could accept.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use sat2d::bounding_volume::Aabb;
/// use nalgebra::Point2;
///
/// let aabb = Aabb::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0));
///
/// assert_eq!(aabb.center(), Point2::origin());
/// assert_eq!(aabb.extents().x, 2.0);
/// assert!(aabb.contains_local_point(&Point2::new(0.5, -1.0)));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Each component of `mins` should be smaller than or equal to the
    /// corresponding component of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Useful as the initial value when accumulating boxes with
    /// [`Aabb::merged`]: merging anything into it yields the other box.
    #[inline]
    pub fn new_invalid() -> Aabb {
        Aabb {
            mins: Point::new(Real::MAX, Real::MAX),
            maxs: Point::new(-Real::MAX, -Real::MAX),
        }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Aabb {
        Aabb {
            mins: center - half_extents,
            maxs: center + half_extents,
        }
    }

    /// Creates the smallest AABB enclosing all the given points.
    pub fn from_points<'a, I>(pts: I) -> Aabb
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Aabb::new_invalid();

        for pt in pts {
            result.mins = result.mins.inf(pt);
            result.maxs = result.maxs.sup(pt);
        }

        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Does this AABB contain the given point? Boundary included.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        pt.x >= self.mins.x && pt.x <= self.maxs.x && pt.y >= self.mins.y && pt.y <= self.maxs.y
    }

    /// Does this AABB fully contain `other`? Shared boundaries count as
    /// contained.
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        self.mins.x <= other.mins.x
            && self.mins.y <= other.mins.y
            && self.maxs.x >= other.maxs.x
            && self.maxs.y >= other.maxs.y
    }

    /// Does this AABB intersect `other`? Touching boxes are considered
    /// intersecting.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x <= other.maxs.x
            && other.mins.x <= self.maxs.x
            && self.mins.y <= other.maxs.y
            && other.mins.y <= self.maxs.y
    }

    /// Enlarges this AABB so it also encloses `other`.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// The smallest AABB enclosing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }
}
