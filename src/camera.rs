//! Pinhole camera and per-pixel ray generation.

use glam::Vec3A;

use crate::error::RenderError;
use crate::ray::Ray;

/// Pinhole camera for a square image.
///
/// Holds only the input parameters; the quantities actually used for ray
/// generation live in [`CameraGeometry`] and are rederived from the
/// current parameters by [`Camera::geometry`] on every render pass, so a
/// resolution change can never leave stale pixel deltas behind.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    resolution: u32,
    center: Vec3A,
    focal_length: f32,
    viewport_width: f32,
    viewport_height: f32,
}

impl Camera {
    /// Create a camera, validating all scale parameters.
    ///
    /// `resolution` is the side length of the square image in pixels.
    /// Returns `InvalidConfiguration` if the resolution, focal length, or
    /// either viewport dimension is not strictly positive.
    pub fn new(
        resolution: u32,
        center: Vec3A,
        focal_length: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<Self, RenderError> {
        if resolution == 0 {
            return Err(RenderError::InvalidConfiguration(
                "resolution must be positive".to_string(),
            ));
        }
        if !(focal_length > 0.0) {
            return Err(RenderError::InvalidConfiguration(format!(
                "focal length must be positive, got {focal_length}"
            )));
        }
        if !(viewport_width > 0.0) || !(viewport_height > 0.0) {
            return Err(RenderError::InvalidConfiguration(format!(
                "viewport dimensions must be positive, got {viewport_width}x{viewport_height}"
            )));
        }
        Ok(Self {
            resolution,
            center,
            focal_length,
            viewport_width,
            viewport_height,
        })
    }

    /// Side length of the square image in pixels.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Change the image resolution.
    ///
    /// The caller must reallocate its pixel buffer to match before the
    /// next render pass (see [`crate::FrameBuffer::reallocate`]); the
    /// render pass itself rejects a stale buffer size.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), RenderError> {
        if resolution == 0 {
            return Err(RenderError::InvalidConfiguration(
                "resolution must be positive".to_string(),
            ));
        }
        self.resolution = resolution;
        Ok(())
    }

    /// Derive the viewport geometry for the current parameters.
    ///
    /// Pure function of the camera state; callers use the returned value
    /// for one render pass and rederive after any parameter change.
    pub fn geometry(&self) -> CameraGeometry {
        let viewport_u = Vec3A::new(self.viewport_width, 0.0, 0.0);
        // Image row 0 is the top of the picture, so the v axis points
        // down in world space. Without the sign flip the image mirrors
        // vertically.
        let viewport_v = Vec3A::new(0.0, -self.viewport_height, 0.0);

        let pixel_delta_u = viewport_u / self.resolution as f32;
        let pixel_delta_v = viewport_v / self.resolution as f32;

        let viewport_upper_left = self.center
            - viewport_u / 2.0
            - viewport_v / 2.0
            - Vec3A::new(0.0, 0.0, self.focal_length);
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        CameraGeometry {
            center: self.center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        }
    }
}

impl Default for Camera {
    /// Camera at the origin, focal length 1, 2x2 viewport, 500px image.
    fn default() -> Self {
        Self {
            resolution: 500,
            center: Vec3A::ZERO,
            focal_length: 1.0,
            viewport_width: 2.0,
            viewport_height: 2.0,
        }
    }
}

/// Viewport quantities derived from a [`Camera`].
///
/// Valid only for the parameters it was derived from; a fresh value is
/// cheap to compute, so nothing caches one across configuration changes.
#[derive(Debug, Clone, Copy)]
pub struct CameraGeometry {
    /// Camera position, the origin of every generated ray.
    pub center: Vec3A,
    /// World position of the center of pixel (0, 0), the upper left.
    pub pixel00_loc: Vec3A,
    /// World-space step from one pixel center to the next along a row.
    pub pixel_delta_u: Vec3A,
    /// World-space step from one row of pixel centers to the next.
    pub pixel_delta_v: Vec3A,
}

impl CameraGeometry {
    /// Ray from the camera center through the center of pixel (x, y).
    ///
    /// The direction is `pixel_center - camera_center`, not normalized.
    pub fn pixel_ray(&self, x: u32, y: u32) -> Ray {
        let pixel_center =
            self.pixel00_loc + x as f32 * self.pixel_delta_u + y as f32 * self.pixel_delta_v;
        Ray::new(self.center, pixel_center - self.center)
    }
}
