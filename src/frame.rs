//! Frame orchestration: ray generation, intersection, and shading across
//! every pixel of the image, written into a flat RGBA f32 buffer.
//!
//! The buffer layout is row-major, top-to-bottom, left-to-right, four
//! floats per pixel in [0, 1]. Pixels are independent, so rows are
//! partitioned across the rayon thread pool; each worker writes a
//! disjoint row slice and no locking is needed.

use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::RenderError;
use crate::shading::shade;
use crate::sphere::Sphere;

/// Number of f32 channels per pixel (RGBA).
pub const CHANNELS: usize = 4;

fn expected_len(resolution: u32) -> usize {
    let res = resolution as usize;
    res * res * CHANNELS
}

fn check_buffer(resolution: u32, len: usize) -> Result<(), RenderError> {
    let expected = expected_len(resolution);
    if len != expected {
        return Err(RenderError::BufferSizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Render one frame of the sphere scene into `buffer`.
///
/// The camera geometry is rederived from `camera` on every call, so the
/// pass always reflects the current parameters. Fails with
/// `BufferSizeMismatch` before writing anything if `buffer` does not hold
/// exactly `resolution² * 4` floats. A `DegenerateRay` from the
/// intersector aborts the frame; with a validated camera (positive focal
/// length puts every ray direction off zero) this does not occur in
/// practice.
///
/// Pure transform: rendering the same configuration twice produces
/// identical buffers.
pub fn render_frame(camera: &Camera, sphere: &Sphere, buffer: &mut [f32]) -> Result<(), RenderError> {
    let resolution = camera.resolution();
    check_buffer(resolution, buffer.len())?;

    let geometry = camera.geometry();
    let row_len = resolution as usize * CHANNELS;

    buffer
        .par_chunks_mut(row_len)
        .enumerate()
        .try_for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                let ray = geometry.pixel_ray(x as u32, y as u32);
                let color = shade(&ray, sphere, sphere.hit(&ray)?);
                pixel[0] = color.x;
                pixel[1] = color.y;
                pixel[2] = color.z;
                pixel[3] = 1.0;
            }
            Ok(())
        })
}

/// Fill `buffer` with a position gradient instead of the sphere scene.
///
/// Useful for checking the buffer and display plumbing independently of
/// the ray path: red ramps left to right, green top to bottom, blue right
/// to left. Same buffer contract and size check as [`render_frame`].
pub fn render_test_pattern(resolution: u32, buffer: &mut [f32]) -> Result<(), RenderError> {
    check_buffer(resolution, buffer.len())?;

    let res = resolution as usize;
    for y in 0..res {
        for x in 0..res {
            let idx = (y * res + x) * CHANNELS;
            buffer[idx] = x as f32 / res as f32;
            buffer[idx + 1] = y as f32 / res as f32;
            buffer[idx + 2] = (res - x) as f32 / res as f32;
            buffer[idx + 3] = 1.0;
        }
    }
    Ok(())
}

/// Pixel buffer owned by the frame-orchestration layer.
///
/// Allocated for one resolution; a resolution change goes through
/// [`FrameBuffer::reallocate`], which replaces the storage outright so a
/// stale buffer can never be rendered into or displayed. The display side
/// only ever sees the buffer through [`FrameBuffer::as_slice`] after a
/// render pass completes.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    resolution: u32,
    data: Vec<f32>,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer for a square image of the given side.
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution,
            data: vec![0.0; expected_len(resolution)],
        }
    }

    /// Side length this buffer was allocated for.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Replace the storage for a new resolution.
    ///
    /// Allocates a fresh zeroed vector rather than resizing in place, so
    /// previous contents are dropped rather than partially reinterpreted
    /// at the new size.
    pub fn reallocate(&mut self, resolution: u32) {
        self.resolution = resolution;
        self.data = vec![0.0; expected_len(resolution)];
    }

    /// Render one frame of the sphere scene into this buffer.
    ///
    /// Fails with `BufferSizeMismatch` if the camera resolution differs
    /// from the resolution this buffer was allocated for.
    pub fn render(&mut self, camera: &Camera, sphere: &Sphere) -> Result<(), RenderError> {
        render_frame(camera, sphere, &mut self.data)
    }

    /// Read-only view for the display layer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable view for a render pass.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3A;

    fn scene() -> (Camera, Sphere) {
        let camera = Camera::new(8, Vec3A::ZERO, 1.0, 2.0, 2.0).unwrap();
        let sphere = Sphere::new(Vec3A::new(0.0, 0.0, -1.0), 0.5).unwrap();
        (camera, sphere)
    }

    #[test]
    fn wrong_size_buffer_fails_without_writes() {
        let (camera, sphere) = scene();
        let mut buffer = vec![7.0; 8 * 8 * 4 - 4];
        let err = render_frame(&camera, &sphere, &mut buffer).unwrap_err();
        assert!(matches!(
            err,
            RenderError::BufferSizeMismatch { expected: 256, actual: 252 }
        ));
        // Nothing was touched.
        assert!(buffer.iter().all(|&v| v == 7.0));
    }

    #[test]
    fn alpha_is_opaque_and_colors_in_range() {
        let (camera, sphere) = scene();
        let mut fb = FrameBuffer::new(camera.resolution());
        fb.render(&camera, &sphere).unwrap();

        for pixel in fb.as_slice().chunks_exact(CHANNELS) {
            assert_eq!(pixel[3], 1.0);
            for &v in &pixel[..3] {
                assert!((0.0..=1.0).contains(&v), "channel out of range: {v}");
            }
        }
    }

    #[test]
    fn center_pixel_hits_sphere() {
        // With an even resolution the four center pixels straddle the
        // axis; all of them look at the sphere front, where the normal
        // points mostly back at the camera (blue-ish, z near 1).
        let (camera, sphere) = scene();
        let mut fb = FrameBuffer::new(camera.resolution());
        fb.render(&camera, &sphere).unwrap();

        let res = camera.resolution() as usize;
        let idx = (res / 2 * res + res / 2) * CHANNELS;
        let b = fb.as_slice()[idx + 2];
        assert!(b > 0.9, "center pixel should face the camera, got b={b}");
    }

    #[test]
    fn corner_pixel_shows_sky_gradient() {
        let (camera, sphere) = scene();
        let mut fb = FrameBuffer::new(camera.resolution());
        fb.render(&camera, &sphere).unwrap();

        // Top-left corner misses the sphere; must equal the analytic lerp.
        let ray = camera.geometry().pixel_ray(0, 0);
        let a = 0.5 * (ray.direction.normalize().y + 1.0);
        let want = (1.0 - a) * Vec3A::ONE + a * Vec3A::new(0.5, 0.7, 1.0);

        let got = &fb.as_slice()[..3];
        assert!((got[0] - want.x).abs() < 1e-6);
        assert!((got[1] - want.y).abs() < 1e-6);
        assert!((got[2] - want.z).abs() < 1e-6);
    }

    #[test]
    fn test_pattern_fills_gradient() {
        let mut buffer = vec![0.0; 4 * 4 * 4];
        render_test_pattern(4, &mut buffer).unwrap();
        // Pixel (1, 2): r = 1/4, g = 2/4, b = 3/4.
        let idx = (2 * 4 + 1) * CHANNELS;
        assert_eq!(&buffer[idx..idx + 4], &[0.25, 0.5, 0.75, 1.0]);
    }
}
