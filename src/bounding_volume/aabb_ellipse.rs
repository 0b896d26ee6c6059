use crate::body::Body;
use crate::bounding_volume::Aabb;
use crate::math::Vector;
use crate::shape::Ellipse;

impl Ellipse {
    /// Computes the world-space AABB of this ellipse attached to `body`.
    ///
    /// The box is tight even for rotated ellipses: each half-extent is the
    /// support extent of the world-space ellipse along the matching
    /// coordinate axis.
    #[inline]
    pub fn aabb(&self, body: &Body) -> Aabb {
        let world = self.to_world(body);
        let half_extents = Vector::new(
            world.support_extent(&Vector::x_axis()),
            world.support_extent(&Vector::y_axis()),
        );

        Aabb::from_half_extents(world.center, half_extents)
    }

    /// Computes the local-space AABB of this ellipse.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, self.radii)
    }
}
