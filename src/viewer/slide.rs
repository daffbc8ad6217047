use raylib::prelude::*;

use crate::constants::*;

/// One image of the viewer, cross-faded in and out as it is (de)activated.
pub struct Slide {
    image: Texture2D,
    pub active: bool,
    opacity: f32,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            active: false,
            opacity: 0.0,
        }
    }

    /// Jumps straight to the end of the current fade.
    pub fn settle(&mut self) {
        self.opacity = if self.active { 1.0 } else { 0.0 };
    }

    pub fn update(&mut self, dt: f32) {
        let step = dt / FADE_DURATION;
        self.opacity = if self.active {
            (self.opacity + step).min(1.0)
        } else {
            (self.opacity - step).max(0.0)
        };
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if self.opacity <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        // Fit inside the area, never upscale
        let scale = (area.width / tex_width).min(area.height / tex_height).min(1.0);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE.fade(self.opacity),
        );
    }
}
