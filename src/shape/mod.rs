//! Shapes supported by sat2d.

pub use self::axis_projection::{AxisProjection, Projection};
pub use self::ellipse::{Ellipse, WorldEllipse};
pub use self::polygon::{InvalidPolygonError, Polygon, WorldPoints};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};

#[doc(hidden)]
pub mod axis_projection;
mod ellipse;
mod polygon;
#[doc(hidden)]
pub mod shape;
