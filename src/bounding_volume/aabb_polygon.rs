use crate::body::Body;
use crate::bounding_volume::{aabb_utils, Aabb};
use crate::shape::Polygon;

impl Polygon {
    /// Computes the world-space AABB of this polygon attached to `body`.
    #[inline]
    pub fn aabb(&self, body: &Body) -> Aabb {
        aabb_utils::point_cloud_aabb(body, self.points())
    }

    /// Computes the local-space AABB of this polygon.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        aabb_utils::local_point_cloud_aabb(self.points())
    }
}
