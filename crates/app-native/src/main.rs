use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

use starfield_core::{
    Background, FrameInputs, PointerKind, Starfield, StarfieldParams, Viewport, DEFAULT_SEED,
    TARGET_STARS,
};

/// Run the starfield without a window: a scripted host feeds viewport, clock
/// and pointer, and frame statistics go to the log.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Simulated frame rate for the clock
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Number of stars in the pool
    #[arg(long, default_value_t = TARGET_STARS)]
    stars: usize,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Frame at which a mouse move is reported, ending the intro sweep
    #[arg(long)]
    mouse_at_frame: Option<u64>,

    /// Write the baked background to this PNG
    #[arg(long)]
    background: Option<PathBuf>,
}

fn save_background(bg: &Background, path: &Path) -> anyhow::Result<()> {
    let img = image::RgbaImage::from_raw(bg.width, bg.height, bg.rgba.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("background buffer does not match {}x{}", bg.width, bg.height)
        })?;
    img.save(path)
        .with_context(|| format!("writing background to {}", path.display()))?;
    log::info!("[host] background written to {}", path.display());
    Ok(())
}

// Pointer sways across the viewport once the host reports a mouse.
fn scripted_pointer_x(frame: u64, width: f32) -> f32 {
    (0.5 + 0.5 * (frame as f32 * 0.01).sin()) * width
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if args.fps.is_nan() || args.fps <= 0.0 {
        anyhow::bail!("--fps must be positive, got {}", args.fps);
    }

    let viewport = Viewport::new(args.width.max(0.0), args.height.max(0.0));
    let params = StarfieldParams {
        star_count: args.stars,
        seed: args.seed,
        ..StarfieldParams::default()
    };
    let mut starfield = Starfield::new(params, viewport, 0.0)?;

    if let Some(path) = &args.background {
        save_background(starfield.background(), path)?;
    }

    let wall = Instant::now();
    let ms_per_frame = 1000.0 / args.fps;
    let report_every = args.fps.round().max(1.0) as u64;
    let mut total_recycled = 0usize;

    for frame in 1..=args.frames {
        if args.mouse_at_frame == Some(frame) {
            starfield.on_pointer_move(PointerKind::Mouse);
        }
        let inputs = FrameInputs {
            viewport,
            frame_index: frame,
            now_ms: frame as f64 * ms_per_frame,
            pointer_x: scripted_pointer_x(frame, viewport.width),
        };
        let vertex_count = starfield.frame(inputs).len();
        let stats = starfield.stats();
        total_recycled += stats.recycled;

        if frame % report_every == 0 {
            log::info!(
                "[host] frame={} influence={:.1} visible={} vertices={} recycled={}",
                frame,
                starfield.control().influence(),
                stats.visible,
                vertex_count,
                stats.recycled
            );
        }
    }

    log::info!(
        "[host] simulated {} frames in {:.2?} (sweep_done={}, live_control={}, recycled={})",
        args.frames,
        wall.elapsed(),
        starfield.control().sweep_done(),
        !starfield.control().sweep_enabled(),
        total_recycled
    );
    Ok(())
}
