//! SphereCast preview renderer
//!
//! Renders a single sphere through a pinhole camera into a caller-owned
//! RGBA f32 pixel buffer, one frame per call. The display side (window,
//! texture upload, GUI) is an external collaborator that consumes the
//! finished buffer read-only; this crate only produces it.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod error;
pub mod frame;
pub mod logger;
pub mod output;
pub mod ray;
pub mod shading;
pub mod sphere;

pub use camera::{Camera, CameraGeometry};
pub use error::RenderError;
pub use frame::{render_frame, render_test_pattern, FrameBuffer};
pub use sphere::Sphere;
