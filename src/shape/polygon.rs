use crate::body::Body;
use crate::math::{Point, Real, Vector};
use crate::utils;
use smallvec::SmallVec;

/// Per-call scratch buffer holding a polygon's world-space vertices.
///
/// Stays on the stack for polygons with up to eight vertices and spills to
/// the heap beyond that, so queries on typical colliders do not allocate.
pub type WorldPoints = SmallVec<[Point<Real>; 8]>;

/// Error indicating that a vertex set does not describe a valid polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidPolygonError {
    /// A polygon requires at least three vertices.
    #[error("a polygon requires at least 3 vertices, found {found}")]
    TooFewPoints {
        /// The number of vertices that was provided.
        found: usize,
    },
    /// At least one vertex has a NaN or infinite coordinate.
    #[error("polygon vertices must have finite coordinates")]
    NonFinitePoint,
}

/// A polygon shape, in its body's local space.
///
/// Vertices are stored in the order given at construction. Two consecutive
/// vertices determine an edge, the last edge closing back on the first
/// vertex, and that order fixes the edge enumeration order of the
/// narrow-phase. The SAT tests are only meaningful for convex polygons;
/// convexity is the caller's responsibility and is not enforced here.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct Polygon {
    points: Vec<Point<Real>>,
}

impl Polygon {
    /// Creates a polygon from its local-space vertices.
    ///
    /// Fails if fewer than three vertices are given or if any coordinate is
    /// NaN or infinite.
    pub fn new(points: Vec<Point<Real>>) -> Result<Polygon, InvalidPolygonError> {
        if points.len() < 3 {
            return Err(InvalidPolygonError::TooFewPoints {
                found: points.len(),
            });
        }

        if points
            .iter()
            .any(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(InvalidPolygonError::NonFinitePoint);
        }

        Ok(Polygon { points })
    }

    /// Creates an axis-aligned rectangle with one corner at the local origin
    /// and the opposite corner at `(width, height)`.
    ///
    /// Both extents must be finite and positive.
    pub fn rectangle(width: Real, height: Real) -> Polygon {
        Polygon {
            points: vec![
                Point::origin(),
                Point::new(width, 0.0),
                Point::new(width, height),
                Point::new(0.0, height),
            ],
        }
    }

    /// The local-space vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Computes the world-space vertices of this polygon under `body`'s
    /// transform.
    #[inline]
    pub fn world_points(&self, body: &Body) -> WorldPoints {
        self.points
            .iter()
            .map(|pt| body.transform_point(pt))
            .collect()
    }

    /// Computes a version of this polygon with the given non-uniform scale
    /// baked into its vertices.
    ///
    /// A zero scale component flattens the polygon.
    pub fn scaled(&self, scale: &Vector<Real>) -> Polygon {
        Polygon {
            points: self
                .points
                .iter()
                .map(|pt| Point::from(pt.coords.component_mul(scale)))
                .collect(),
        }
    }

    /// Computes a version of this polygon with `body`'s whole transform
    /// baked into its vertices.
    pub fn transformed(&self, body: &Body) -> Polygon {
        Polygon {
            points: self
                .points
                .iter()
                .map(|pt| body.transform_point(pt))
                .collect(),
        }
    }

    /// Does this polygon contain the given local-space point?
    ///
    /// Uses the even-odd crossing rule, so this also works for non-convex
    /// vertex sets.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        utils::point_in_poly2d(pt, &self.points)
    }

    /// Does this polygon, attached to `body`, contain the given world-space
    /// point?
    #[inline]
    pub fn contains_point(&self, body: &Body, pt: &Point<Real>) -> bool {
        self.contains_local_point(&body.inverse_transform_point(pt))
    }
}
