/*!
sat2d
========

**sat2d** is a 2-dimensional narrow-phase collision detection library
written with the rust programming language. It implements Separating Axis
Theorem (SAT) overlap tests between convex polygons and ellipses, and
reports the minimum translation vector a physics resolution step needs to
push the colliding bodies apart.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "http://docs.rs/sat2d/0.1.0")]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod body;
pub mod bounding_volume;
pub mod query;
pub mod shape;
pub mod utils;

pub use crate::body::Body;
pub use crate::query::Response;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The dimension of the ambient space.
    pub type Dim = na::U2;

    /// The point type.
    pub type Point<N> = na::Point2<N>;

    /// The vector type.
    pub type Vector<N> = na::Vector2<N>;

    /// The unit vector type.
    pub type UnitVector<N> = na::UnitVector2<N>;

    /// The rotation type.
    pub type Rotation<N> = na::UnitComplex<N>;
}
