//! World transform of the objects owning collision shapes.

use crate::math::{Point, Real, Rotation, Vector};

/// The world transform of an object owning one or more collision shapes.
///
/// Shapes are described in the local space of their owning body. The body
/// maps a local point to world space by scaling it, rotating it, then
/// translating it: `world = position + rotation * (scale ∘ local)`.
///
/// The narrow-phase tests only read this transform; they never mutate it.
/// A `&Body` is also the handle recorded in [`crate::query::Response`] to
/// identify which of the two tested objects each result field refers to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// World-space position of the body origin.
    pub position: Point<Real>,
    /// Orientation of the body.
    pub rotation: Rotation<Real>,
    /// Per-axis scale applied to local coordinates before rotating.
    ///
    /// Components must be non-zero; negative components mirror the shape.
    pub scale: Vector<Real>,
}

impl Body {
    /// Creates a new body transform from a position, a rotation angle
    /// (radians), and a per-axis scale.
    #[inline]
    pub fn new(position: Point<Real>, angle: Real, scale: Vector<Real>) -> Body {
        Body {
            position,
            rotation: Rotation::new(angle),
            scale,
        }
    }

    /// The identity transform: no translation, no rotation, unit scale.
    #[inline]
    pub fn identity() -> Body {
        Body {
            position: Point::origin(),
            rotation: Rotation::identity(),
            scale: Vector::repeat(1.0),
        }
    }

    /// A pure translation, with no rotation and unit scale.
    #[inline]
    pub fn translation(x: Real, y: Real) -> Body {
        Body {
            position: Point::new(x, y),
            rotation: Rotation::identity(),
            scale: Vector::repeat(1.0),
        }
    }

    /// The rotation angle of this body, in radians.
    #[inline]
    pub fn angle(&self) -> Real {
        self.rotation.angle()
    }

    /// Maps a point from this body's local space to world space.
    #[inline]
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.position + self.rotation * pt.coords.component_mul(&self.scale)
    }

    /// Maps a world-space point back to this body's local space.
    ///
    /// The result is unspecified if any scale component is zero.
    #[inline]
    pub fn inverse_transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        let unrotated = self.rotation.inverse() * (pt - self.position);
        Point::from(unrotated.component_div(&self.scale))
    }
}

impl Default for Body {
    fn default() -> Body {
        Body::identity()
    }
}
