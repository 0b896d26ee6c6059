//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! The **Separating Axis Theorem** states that two convex shapes do **not**
//! intersect if and only if there exists an axis onto which their
//! projections do not overlap. The narrow-phase therefore projects both
//! shapes onto a finite set of candidate axes and bails out as soon as one
//! of them separates the projections:
//!
//! - for two polygons, the candidates are the edge normals of both
//!   polygons;
//! - for two ellipses, the single candidate is the direction between their
//!   centers;
//! - for a polygon and an ellipse, the candidates are the polygon's edge
//!   normals plus the direction from the ellipse's center to the polygon's
//!   nearest vertex.
//!
//! When no candidate separates the shapes, the axis with the smallest
//! overlap yields the minimum translation vector reported through
//! [`Response`](crate::query::Response).
//!
//! All tests work on world-space geometry derived from each shape's
//! [`Body`](crate::Body), so non-uniform scale and rotation compose
//! correctly.

pub use self::sat_ellipse_ellipse::test_ellipse_ellipse;
pub use self::sat_polygon_ellipse::{test_ellipse_polygon, test_polygon_ellipse};
pub use self::sat_polygon_polygon::test_polygon_polygon;
pub use self::sat_shape_shape::test_shape_shape;

pub(crate) use self::separating_axis::{is_separating_axis, OverlapState};

mod sat_ellipse_ellipse;
mod sat_polygon_ellipse;
mod sat_polygon_polygon;
mod sat_shape_shape;
mod separating_axis;
