use crate::body::Body;
use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::shape::{AxisProjection, Projection};

/// An ellipse shape, in its body's local space.
///
/// The radii are aligned with the local coordinate axes; the body's
/// rotation orients the principal axes in world space.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipse {
    /// The center of the ellipse, in local space.
    pub center: Point<Real>,
    /// The radii along the local x and y axes.
    pub radii: Vector<Real>,
}

impl Ellipse {
    /// Creates an ellipse from its local center and per-axis radii.
    ///
    /// The radii are stored as absolute values. Both must be non-zero for
    /// the narrow-phase tests to be meaningful.
    #[inline]
    pub fn new(center: Point<Real>, radii: Vector<Real>) -> Ellipse {
        Ellipse {
            center,
            radii: radii.abs(),
        }
    }

    /// Creates a circle, i.e. an ellipse with both radii equal to `radius`.
    #[inline]
    pub fn circle(center: Point<Real>, radius: Real) -> Ellipse {
        Ellipse::new(center, Vector::new(radius, radius))
    }

    /// Computes a version of this ellipse with the given non-uniform scale
    /// baked into its center and radii.
    #[inline]
    pub fn scaled(&self, scale: &Vector<Real>) -> Ellipse {
        Ellipse {
            center: Point::from(self.center.coords.component_mul(scale)),
            radii: self.radii.component_mul(&scale.abs()),
        }
    }

    /// Does this ellipse contain the given local-space point?
    ///
    /// Points on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        let d = pt - self.center;
        let nx = d.x / self.radii.x;
        let ny = d.y / self.radii.y;
        nx * nx + ny * ny <= 1.0
    }

    /// Does this ellipse, attached to `body`, contain the given world-space
    /// point?
    #[inline]
    pub fn contains_point(&self, body: &Body, pt: &Point<Real>) -> bool {
        self.contains_local_point(&body.inverse_transform_point(pt))
    }

    /// The world-space view of this ellipse under `body`'s transform.
    #[inline]
    pub fn to_world(&self, body: &Body) -> WorldEllipse {
        WorldEllipse {
            center: body.transform_point(&self.center),
            radii: self.radii.component_mul(&body.scale.abs()),
            rotation: body.rotation,
        }
    }
}

/// An ellipse expressed in world space: transformed center, scaled radii,
/// rotated principal axes.
///
/// This is the form consumed by the narrow-phase; it is rebuilt from an
/// [`Ellipse`] and its [`Body`] on each query.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct WorldEllipse {
    /// The center, in world space.
    pub center: Point<Real>,
    /// The radii along the principal axes.
    pub radii: Vector<Real>,
    /// The orientation of the principal axes.
    pub rotation: Rotation<Real>,
}

impl WorldEllipse {
    /// The support extent of this ellipse along `axis`: half the length of
    /// its projection onto that direction.
    ///
    /// For an ellipse with principal radii `r` and orientation `R`, the
    /// extent along a unit direction `n` is `‖diag(r) · R⁻¹n‖`. This is
    /// exact for anisotropic radii; approximating it with a single radius
    /// reports phantom collisions for elongated ellipses.
    #[inline]
    pub fn support_extent(&self, axis: &UnitVector<Real>) -> Real {
        let local_axis = self.rotation.inverse() * **axis;
        self.radii.component_mul(&local_axis).norm()
    }
}

impl AxisProjection for WorldEllipse {
    #[inline]
    fn project_onto(&self, axis: &UnitVector<Real>) -> Projection {
        let center = self.center.coords.dot(axis);
        let extent = self.support_extent(axis);
        Projection {
            min: center - extent,
            max: center + extent,
        }
    }
}
