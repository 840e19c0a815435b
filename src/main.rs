use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use raylib::prelude::*;

mod constants;
mod renderer;
mod rotator;
mod slide;
mod texture_loader;
mod ticker;

use crate::constants::*;
use crate::rotator::Rotator;
use crate::slide::{Slide, StripRenderer};
use crate::texture_loader::{load_sorted_slide_paths, load_texture_oriented};

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "Rotates a strip of slide images on a fixed 2 second timer")]
struct Args {
    /// Directory with the slide images, shown in filename order
    slide_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let paths = load_sorted_slide_paths(&args.slide_dir)?;

    let mut slides: Vec<Slide> = Vec::new();
    for path in &paths {
        match load_texture_oriented(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => eprintln!("Warning: skipping {}: {}", path.display(), e),
        }
    }

    if slides.is_empty() {
        bail!("no slides could be loaded from {}", args.slide_dir.display());
    }

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {}", e))?;

    // --- Start the Rotator ---
    // Content is ready: slides are loaded and the window is up.
    let mut renderer = StripRenderer;
    let mut rotator = Rotator::new(slides);
    rotator.start(&mut renderer);
    println!(
        "Rotating {} slides every {} seconds",
        rotator.len(),
        ROTATION_INTERVAL
    );

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        rotator.update(dt, &mut renderer);

        // Render the strip at fixed size, then scale to the window
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(Color::BLACK);

            for (slot, slide) in rotator.slides().iter().enumerate() {
                slide.draw(&mut d, slot);
            }
        });

        let mut d = rl.begin_drawing(&thread);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(
                0.0,
                0.0,
                framebuffer.width() as f32,
                -(framebuffer.height() as f32),
            ),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    Ok(())
}
