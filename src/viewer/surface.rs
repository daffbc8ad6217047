use raylib::prelude::*;

use crate::surface::SlideSurface;
use crate::viewer::layout::Layout;
use crate::viewer::slide::Slide;

/// Slides and indicator dots drawn by raylib.
pub struct ViewerSurface {
    slides: Vec<Slide>,
    indicators: Vec<bool>,
}

impl ViewerSurface {
    pub fn new(slides: Vec<Slide>) -> Self {
        let indicators = vec![false; slides.len()];
        Self { slides, indicators }
    }

    pub fn settle(&mut self) {
        for slide in self.slides.iter_mut() {
            slide.settle();
        }
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, layout: &Layout) {
        // Outgoing slides first so the incoming one fades in on top
        for slide in self.slides.iter().filter(|slide| !slide.active) {
            slide.draw(d, layout.slide_area());
        }
        for slide in self.slides.iter().filter(|slide| slide.active) {
            slide.draw(d, layout.slide_area());
        }

        for button in [layout.prev_button(), layout.next_button()] {
            d.draw_rectangle_rec(button, Color::BLACK.fade(0.4));
        }
        for (label, button) in [("<", layout.prev_button()), (">", layout.next_button())] {
            d.draw_text(
                label,
                (button.x + button.width * 0.35) as i32,
                (button.y + button.height * 0.35) as i32,
                32,
                Color::WHITE,
            );
        }

        for (index, active) in self.indicators.iter().enumerate() {
            let center = layout.indicator_center(index);
            let color = if *active { Color::WHITE } else { Color::GRAY.fade(0.6) };
            d.draw_circle(center.x as i32, center.y as i32, layout.indicator_radius(), color);
        }
    }
}

impl SlideSurface for ViewerSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn is_slide_marked_active(&self, index: usize) -> bool {
        self.slides.get(index).is_some_and(|slide| slide.active)
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.active = active;
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            *indicator = active;
        }
    }
}
