//! Pixel shading: normal color on a hit, sky gradient on a miss.

use glam::Vec3A;

use crate::ray::Ray;
use crate::sphere::Sphere;

/// RGB color with components in [0, 1].
pub type Color = Vec3A;

const WHITE: Color = Vec3A::new(1.0, 1.0, 1.0);
const SKY_BLUE: Color = Vec3A::new(0.5, 0.7, 1.0);

/// Color for a ray given its intersection result.
///
/// `hit` is the distance returned by [`Sphere::hit`]. On a hit the color
/// visualizes the surface normal, remapping each component from [-1, 1]
/// to [0, 1]. On a miss the color is a vertical white-to-blue gradient
/// driven by the y component of the normalized ray direction.
pub fn shade(r: &Ray, sphere: &Sphere, hit: Option<f32>) -> Color {
    if let Some(t) = hit {
        let normal = (r.at(t) - sphere.center).normalize();
        return 0.5 * (normal + WHITE);
    }

    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * WHITE + a * SKY_BLUE
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    fn assert_color_eq(got: Color, want: Color) {
        assert!(
            (got - want).abs().max_element() < EPS,
            "color {got:?} != {want:?}"
        );
    }

    #[test]
    fn hit_color_remaps_normal() {
        // Looking at the near pole of the sphere: normal is (0,0,1).
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5).unwrap();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert_color_eq(shade(&r, &sphere, Some(0.5)), Vec3A::new(0.5, 0.5, 1.0));
    }

    #[test]
    fn miss_color_is_white_to_blue_lerp() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5).unwrap();

        // Horizontal ray: a = 0.5, halfway between white and sky blue.
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(1.0, 0.0, 0.0));
        assert_color_eq(shade(&r, &sphere, None), Vec3A::new(0.75, 0.85, 1.0));

        // Straight up: a = 1, pure sky blue.
        let up = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 2.0, 0.0));
        assert_color_eq(shade(&up, &sphere, None), SKY_BLUE);

        // Straight down: a = 0, pure white.
        let down = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, -3.0, 0.0));
        assert_color_eq(shade(&down, &sphere, None), WHITE);
    }

    #[test]
    fn miss_color_matches_analytic_lerp_for_oblique_ray() {
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5).unwrap();
        let dir = Vec3A::new(-0.3, 0.8, -1.0);
        let r = Ray::new(Vec3A::ZERO, dir);

        let a = 0.5 * (dir.normalize().y + 1.0);
        let want = (1.0 - a) * WHITE + a * SKY_BLUE;
        assert_color_eq(shade(&r, &sphere, None), want);
    }
}
