//! Ray representation for intersection testing.
//!
//! A ray is defined as r(t) = origin + t * direction, a semi-infinite
//! line in 3D space.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates, the camera center
    /// for the primary rays generated here.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized; shading normalizes where the math
    /// needs a unit vector, construction does not.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction. Valid for any real t,
    /// including negative values behind the origin.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
