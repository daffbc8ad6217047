//! Raylib window hosting a carousel over a directory of images.

mod layout;
mod slide;
mod surface;
mod texture_loader;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::carousel::Input;
use crate::config::CarouselConfig;
use crate::constants::*;
use crate::page::PageContext;

use self::layout::Layout;
use self::slide::Slide;
use self::surface::ViewerSurface;
use self::texture_loader::{load_image_paths, load_texture_with_exif_rotation};

pub fn run(directory: &Path, shuffle: bool, config: CarouselConfig) -> Result<()> {
    let paths = load_image_paths(directory, shuffle)
        .with_context(|| format!("failed to list images in {}", directory.display()))?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Promotions Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides = Vec::new();
    for path in &paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!(error = %e, "skipping image"),
        }
    }
    info!(loaded = slides.len(), found = paths.len(), "slides loaded");

    let mut page = PageContext::new();
    let Some(mut carousel) = page.init_carousel(ViewerSurface::new(slides), config) else {
        bail!("need at least two loadable images in {}", directory.display());
    };
    carousel.surface_mut().settle();

    let mut clock = Duration::ZERO;
    let mut hovered = false;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        clock += Duration::from_secs_f32(dt);

        let layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            carousel.slide_count(),
        );
        let mouse = rl.get_mouse_position();

        let on_screen = rl.is_cursor_on_screen();
        if on_screen != hovered {
            hovered = on_screen;
            let input = if on_screen { Input::PointerEnter } else { Input::PointerLeave };
            carousel.handle(input, clock);
        }

        // Dragging outside the controls stands in for a touch swipe
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let input = layout.hit(mouse).unwrap_or(Input::TouchStart { x: mouse.x });
            carousel.handle(input, clock);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            carousel.handle(Input::TouchEnd { x: mouse.x }, clock);
        }

        carousel.tick(clock);
        carousel.log_transitions();
        carousel.surface_mut().update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.surface().draw(&mut d, &layout);
        if !carousel.autoplay().is_running() {
            d.draw_text("paused", 16, 16, 20, Color::LIGHTGRAY);
        }
    }

    Ok(())
}
