//! Non-persistent narrow-phase collision queries.
//!
//! The entry points provided by this module are:
//!
//! * [`query::test_polygon_polygon()`] to test two polygons for overlap.
//! * [`query::test_ellipse_ellipse()`] to test two ellipses for overlap.
//! * [`query::test_polygon_ellipse()`] to test a polygon against an ellipse.
//! * [`query::test_ellipse_polygon()`] to test an ellipse against a polygon.
//! * [`query::test_shape_shape()`] to test two [`Shape`]s of any supported
//!   kind, routing to the matching pairwise test.
//!
//! Every test returns `true` only for a strictly positive overlap; shapes
//! that merely touch are reported as separated. Passing a [`Response`]
//! additionally yields the minimum translation vector and containment
//! flags; the response is written only when a test returns `true` and left
//! untouched otherwise, so tests without one skip the overlap bookkeeping
//! entirely.
//!
//! The pairwise functions have the form `test_[shape1]_[shape2]()` where
//! `[shape1]` is the kind of the first shape passed to the function and
//! `[shape2]` the kind of the second.
//!
//! [`query::test_polygon_polygon()`]: test_polygon_polygon()
//! [`query::test_ellipse_ellipse()`]: test_ellipse_ellipse()
//! [`query::test_polygon_ellipse()`]: test_polygon_ellipse()
//! [`query::test_ellipse_polygon()`]: test_ellipse_polygon()
//! [`query::test_shape_shape()`]: test_shape_shape()
//! [`Shape`]: crate::shape::Shape

pub use self::response::Response;
pub use self::sat::{
    test_ellipse_ellipse, test_ellipse_polygon, test_polygon_ellipse, test_polygon_polygon,
    test_shape_shape,
};

mod response;
pub mod sat;
