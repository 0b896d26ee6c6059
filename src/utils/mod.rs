//! Various unsorted geometrical operators.

pub use self::ccw_edge_normal::ccw_edge_normal;
pub use self::point_in_poly2d::{point_in_convex_poly2d, point_in_poly2d};

mod ccw_edge_normal;
mod point_in_poly2d;
