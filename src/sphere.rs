//! Sphere primitive and ray-sphere intersection.
//!
//! Intersection uses the half-b form of the quadratic, which yields the
//! same near root as the classic `t = (-b - sqrt(b² - 4ac)) / 2a`.

use glam::Vec3A;

use crate::error::RenderError;
use crate::ray::Ray;

/// Sphere defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere, strictly positive.
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Returns `InvalidConfiguration` if the radius is not strictly
    /// positive.
    pub fn new(center: Vec3A, radius: f32) -> Result<Self, RenderError> {
        if !(radius > 0.0) {
            return Err(RenderError::InvalidConfiguration(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        Ok(Self { center, radius })
    }

    /// Distance along the ray to the nearest visible intersection.
    ///
    /// Solves |r(t) - center|² = radius² and returns the smaller root.
    /// `Ok(None)` means no displayable hit: either the discriminant is
    /// negative (the ray misses) or the near root lies at or behind the
    /// ray origin. A tangent ray (discriminant exactly zero) with a
    /// positive root counts as a hit.
    ///
    /// A zero-length direction makes the quadratic degenerate and is
    /// reported as `DegenerateRay` instead of dividing by zero.
    pub fn hit(&self, r: &Ray) -> Result<Option<f32>, RenderError> {
        let oc = self.center - r.origin;

        let a = r.direction.length_squared();
        if a == 0.0 {
            return Err(RenderError::DegenerateRay);
        }
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return Ok(None);
        }

        // Near root; a hit behind the camera is not displayable.
        let root = (h - discriminant.sqrt()) / a;
        if root <= 0.0 {
            return Ok(None);
        }
        Ok(Some(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_radius() {
        assert!(Sphere::new(Vec3A::ZERO, 0.0).is_err());
        assert!(Sphere::new(Vec3A::ZERO, -0.5).is_err());
        assert!(Sphere::new(Vec3A::ZERO, 0.5).is_ok());
    }

    #[test]
    fn optical_axis_hit_is_near_root() {
        // Camera at origin looking down -z at a sphere one unit away.
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5).unwrap();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let t = s.hit(&r).unwrap().expect("ray should hit");
        assert!((t - 0.5).abs() < 1e-6);
    }

    #[test]
    fn miss_returns_none() {
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5).unwrap();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0));
        assert!(s.hit(&r).unwrap().is_none());
    }

    #[test]
    fn tangent_ray_reports_single_root() {
        // Ray grazes the sphere at x = radius: discriminant is exactly 0.
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5).unwrap();
        let r = Ray::new(Vec3A::new(0.5, 0.0, 0.0), Vec3A::new(0.0, 0.0, -1.0));
        let t = s.hit(&r).unwrap().expect("tangent ray is still a hit");
        assert!((t - 1.0).abs() < 1e-6);
    }

    #[test]
    fn hit_behind_origin_is_not_visible() {
        // Sphere behind the ray: both roots negative.
        let s = Sphere::new(Vec3A::new(0.0, 0.0, 2.0), 0.5).unwrap();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r).unwrap().is_none());
    }

    #[test]
    fn zero_direction_is_degenerate() {
        let s = Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5).unwrap();
        let r = Ray::new(Vec3A::ZERO, Vec3A::ZERO);
        assert!(matches!(s.hit(&r), Err(RenderError::DegenerateRay)));
    }
}
