use crate::body::Body;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{Ellipse, Polygon};

/// Enum representing the type of a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A polygon shape.
    Polygon = 0,
    /// An ellipse shape.
    Ellipse,
}

/// A collision shape, as a tagged union of every supported shape kind.
///
/// The narrow-phase entry points take concrete shapes; this enum is for
/// callers that attach heterogeneous shapes to their bodies and dispatch
/// with [`crate::query::test_shape_shape`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub enum Shape {
    /// A polygon shape.
    Polygon(Polygon),
    /// An ellipse shape.
    Ellipse(Ellipse),
}

impl Shape {
    /// The runtime kind of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Ellipse(_) => ShapeType::Ellipse,
        }
    }

    /// Converts this shape to a polygon, if it is one.
    #[inline]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Converts this shape to an ellipse, if it is one.
    #[inline]
    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Shape::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    /// Computes the local-space axis-aligned bounding box of this shape.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        match self {
            Shape::Polygon(p) => p.local_aabb(),
            Shape::Ellipse(e) => e.local_aabb(),
        }
    }

    /// Computes the world-space axis-aligned bounding box of this shape,
    /// attached to `body`.
    #[inline]
    pub fn aabb(&self, body: &Body) -> Aabb {
        match self {
            Shape::Polygon(p) => p.aabb(body),
            Shape::Ellipse(e) => e.aabb(body),
        }
    }

    /// Does this shape contain the given local-space point?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        match self {
            Shape::Polygon(p) => p.contains_local_point(pt),
            Shape::Ellipse(e) => e.contains_local_point(pt),
        }
    }

    /// Does this shape, attached to `body`, contain the given world-space
    /// point?
    #[inline]
    pub fn contains_point(&self, body: &Body, pt: &Point<Real>) -> bool {
        match self {
            Shape::Polygon(p) => p.contains_point(body, pt),
            Shape::Ellipse(e) => e.contains_point(body, pt),
        }
    }

    /// Computes a version of this shape with the given non-uniform scale
    /// baked into it.
    #[inline]
    pub fn scaled(&self, scale: &Vector<Real>) -> Shape {
        match self {
            Shape::Polygon(p) => Shape::Polygon(p.scaled(scale)),
            Shape::Ellipse(e) => Shape::Ellipse(e.scaled(scale)),
        }
    }
}

impl From<Polygon> for Shape {
    #[inline]
    fn from(polygon: Polygon) -> Shape {
        Shape::Polygon(polygon)
    }
}

impl From<Ellipse> for Shape {
    #[inline]
    fn from(ellipse: Ellipse) -> Shape {
        Shape::Ellipse(ellipse)
    }
}
