use raylib::prelude::*;

use crate::carousel::Input;

const BUTTON_WIDTH: f32 = 48.0;
const BUTTON_HEIGHT: f32 = 96.0;
const MARGIN: f32 = 16.0;
const INDICATOR_RADIUS: f32 = 7.0;
const INDICATOR_SPACING: f32 = 24.0;

/// Screen geometry of the carousel for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub indicators: usize,
}

impl Layout {
    pub fn new(width: f32, height: f32, indicators: usize) -> Self {
        Self {
            width,
            height,
            indicators,
        }
    }

    pub fn slide_area(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.width, self.height)
    }

    pub fn prev_button(&self) -> Rectangle {
        Rectangle::new(
            MARGIN,
            (self.height - BUTTON_HEIGHT) * 0.5,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn next_button(&self) -> Rectangle {
        Rectangle::new(
            self.width - MARGIN - BUTTON_WIDTH,
            (self.height - BUTTON_HEIGHT) * 0.5,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }

    pub fn indicator_center(&self, index: usize) -> Vector2 {
        let row_width = INDICATOR_SPACING * self.indicators.saturating_sub(1) as f32;
        Vector2::new(
            (self.width - row_width) * 0.5 + INDICATOR_SPACING * index as f32,
            self.height - MARGIN - INDICATOR_RADIUS,
        )
    }

    pub fn indicator_radius(&self) -> f32 {
        INDICATOR_RADIUS
    }

    /// The click input for a control under `point`, if any.
    pub fn hit(&self, point: Vector2) -> Option<Input> {
        if self.prev_button().check_collision_point_rec(point) {
            return Some(Input::PrevClick);
        }
        if self.next_button().check_collision_point_rec(point) {
            return Some(Input::NextClick);
        }
        (0..self.indicators)
            .find(|&index| {
                let center = self.indicator_center(index);
                let (dx, dy) = (point.x - center.x, point.y - center.y);
                // Generous hit box around the dot
                dx * dx + dy * dy <= (INDICATOR_RADIUS * 2.0).powi(2)
            })
            .map(Input::IndicatorClick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_navigation() {
        let layout = Layout::new(1280.0, 720.0, 3);

        assert_eq!(layout.hit(Vector2::new(40.0, 360.0)), Some(Input::PrevClick));
        assert_eq!(layout.hit(Vector2::new(1240.0, 360.0)), Some(Input::NextClick));
        assert_eq!(layout.hit(Vector2::new(640.0, 360.0)), None);
    }

    #[test]
    fn indicators_are_centered_and_clickable() {
        let layout = Layout::new(1280.0, 720.0, 3);

        assert_eq!(layout.indicator_center(1).x, 640.0);
        let last = layout.indicator_center(2);
        assert_eq!(layout.hit(last), Some(Input::IndicatorClick(2)));
    }
}
