use std::path::Path;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

mod config;
mod constants;
mod engine;
mod error;
mod events;
mod logging;
mod rotator;
mod slide;
mod state;
mod texture_loader;
mod view;

use crate::config::Args;
use crate::constants::*;
use crate::engine::CarouselEngine;
use crate::error::SlideSourceError;
use crate::rotator::Rotator;
use crate::slide::{Slide, SlideDeck};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation, shuffle_paths};
use crate::view::FrameInput;

/// Loads every image of `dir` into a deck. A directory without images yields an empty deck.
fn load_deck(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: &Path,
    shuffle: bool,
) -> Result<SlideDeck> {
    let mut paths = match load_sorted_image_paths(dir) {
        Ok(paths) => paths,
        Err(SlideSourceError::NoImages(dir)) => {
            warn!("No images found in {:?}", dir);
            Vec::new()
        }
        Err(e) => return Err(e).with_context(|| format!("cannot load slides from {:?}", dir)),
    };

    if shuffle {
        shuffle_paths(&mut paths);
    }

    let mut slides = Vec::with_capacity(paths.len());
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!("Skipping slide: {}", e),
        }
    }

    Ok(SlideDeck::new(slides))
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.log_level)?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let hero_deck = load_deck(&mut rl, &thread, &args.hero_dir, args.shuffle)?;
    let hero = Rotator::new("hero", hero_deck, args.hero_interval());

    let secondary = match &args.secondary {
        Some(dir) => {
            let deck = load_deck(&mut rl, &thread, dir, args.shuffle)?;
            Some(Rotator::new("secondary", deck, args.secondary_interval()))
        }
        None => None,
    };

    let mut engine = CarouselEngine::new(
        hero,
        secondary,
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
    );
    info!(
        "Carousel running (hero every {:?}), close the window to quit",
        engine.hero().rotator().interval()
    );

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_window_resized() {
            engine.resize(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        }

        let input = FrameInput::capture(&rl);
        engine.update(Duration::try_from_secs_f32(dt).unwrap_or_default(), &input);
        engine.animate(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        engine.draw(&mut d);
    }

    info!("Window closed");
    Ok(())
}
