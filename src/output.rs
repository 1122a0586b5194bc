//! PNG export of the rendered pixel buffer.
//!
//! The display layer proper (window, texture upload) is outside this
//! crate; the CLI's substitute is writing the RGBA f32 buffer to an
//! 8-bit PNG. Values are clamped to [0, 1] and scaled linearly — the
//! buffer contract hands the display side linear values, so no gamma
//! curve is applied here.

use std::path::Path;
use std::time::Instant;

use image::{ImageBuffer, Rgba};
use log::info;

use crate::error::RenderError;
use crate::frame::CHANNELS;

/// Save an RGBA f32 pixel buffer as an 8-bit PNG.
///
/// `buffer` must hold exactly `resolution² * 4` floats in the row-major
/// layout produced by [`crate::render_frame`]; anything else is a
/// `BufferSizeMismatch`.
pub fn save_frame_png<P: AsRef<Path>>(
    buffer: &[f32],
    resolution: u32,
    path: P,
) -> Result<(), RenderError> {
    let expected = resolution as usize * resolution as usize * CHANNELS;
    if buffer.len() != expected {
        return Err(RenderError::BufferSizeMismatch {
            expected,
            actual: buffer.len(),
        });
    }

    let start = Instant::now();
    let ldr: Vec<u8> = buffer
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
        .collect();

    // Length was checked above, so the conversion cannot come up short.
    let image: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(resolution, resolution, ldr)
        .ok_or(RenderError::BufferSizeMismatch {
            expected,
            actual: buffer.len(),
        })?;
    image.save(path.as_ref())?;

    info!(
        "Saved {}x{} PNG to {} in {:.2?}",
        resolution,
        resolution,
        path.as_ref().display(),
        start.elapsed()
    );
    Ok(())
}
