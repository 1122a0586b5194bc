use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, error, info};

use spherecast::cli::Args;
use spherecast::logger::init_logger;
use spherecast::output::save_frame_png;
use spherecast::{render_test_pattern, Camera, FrameBuffer, RenderError, Sphere};

fn run(args: &Args) -> Result<(), RenderError> {
    // Configuration is validated here, before any frame is rendered; an
    // invalid setup is rejected and nothing is drawn.
    let camera = Camera::new(
        args.resolution,
        args.camera_center,
        args.focal_length,
        args.viewport_width,
        args.viewport_height,
    )?;
    let sphere = Sphere::new(args.sphere_center, args.sphere_radius)?;

    info!(
        "Image resolution: {0}x{0}, sphere at {1:?} radius {2}",
        args.resolution, args.sphere_center, args.sphere_radius
    );

    let mut frame = FrameBuffer::new(camera.resolution());

    if args.test_pattern {
        render_test_pattern(camera.resolution(), frame.as_mut_slice())?;
    } else {
        info!("Rendering on {} CPU cores...", rayon::current_num_threads());
        let passes = args.frames.max(1);
        let mut total = Duration::ZERO;
        for pass in 0..passes {
            let start = Instant::now();
            frame.render(&camera, &sphere)?;
            let elapsed = start.elapsed();
            debug!("frame {} rendered in {:.2?}", pass, elapsed);
            total += elapsed;
        }
        info!(
            "Rendered {} frame(s), average {:.2?} per frame",
            passes,
            total / passes
        );
    }

    save_frame_png(frame.as_slice(), frame.resolution(), &args.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());
    info!(
        "SphereCast - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
