/// Optional navigation controls a page may expose next to the slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    Prev,
    Next,
}

/// The page environment a carousel is attached to: an ordered set of slides,
/// a parallel set of indicators, each taggable as active.
pub trait SlideSurface {
    fn slide_count(&self) -> usize;
    fn indicator_count(&self) -> usize;
    fn is_slide_marked_active(&self, index: usize) -> bool;
    fn set_slide_active(&mut self, index: usize, active: bool);
    fn set_indicator_active(&mut self, index: usize, active: bool);

    fn has_control(&self, _control: NavControl) -> bool {
        true
    }
}

impl<T: SlideSurface + ?Sized> SlideSurface for &mut T {
    fn slide_count(&self) -> usize {
        (**self).slide_count()
    }

    fn indicator_count(&self) -> usize {
        (**self).indicator_count()
    }

    fn is_slide_marked_active(&self, index: usize) -> bool {
        (**self).is_slide_marked_active(index)
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        (**self).set_slide_active(index, active)
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        (**self).set_indicator_active(index, active)
    }

    fn has_control(&self, control: NavControl) -> bool {
        (**self).has_control(control)
    }
}

/// In-memory surface, used by the replay driver and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    slides: Vec<bool>,
    indicators: Vec<bool>,
    prev: bool,
    next: bool,
}

impl MemorySurface {
    /// `count` slides with as many indicators, none marked active, both controls present.
    pub fn new(count: usize) -> Self {
        Self {
            slides: vec![false; count],
            indicators: vec![false; count],
            prev: true,
            next: true,
        }
    }

    pub fn with_active(mut self, index: usize) -> Self {
        if let Some(slide) = self.slides.get_mut(index) {
            *slide = true;
        }
        if let Some(indicator) = self.indicators.get_mut(index) {
            *indicator = true;
        }
        self
    }

    pub fn with_indicators(mut self, count: usize) -> Self {
        self.indicators.resize(count, false);
        self
    }

    pub fn without_controls(mut self) -> Self {
        self.prev = false;
        self.next = false;
        self
    }

    pub fn active_slides(&self) -> Vec<usize> {
        marked(&self.slides)
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        marked(&self.indicators)
    }
}

fn marked(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(index, active)| active.then_some(index))
        .collect()
}

impl SlideSurface for MemorySurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn is_slide_marked_active(&self, index: usize) -> bool {
        self.slides.get(index).copied().unwrap_or(false)
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            *slide = active;
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            *indicator = active;
        }
    }

    fn has_control(&self, control: NavControl) -> bool {
        match control {
            NavControl::Prev => self.prev,
            NavControl::Next => self.next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_marks_slide_and_indicator() {
        let surface = MemorySurface::new(4).with_active(2);

        assert_eq!(surface.active_slides(), vec![2]);
        assert_eq!(surface.active_indicators(), vec![2]);
        assert!(surface.is_slide_marked_active(2));
        assert!(!surface.is_slide_marked_active(9));
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut surface = MemorySurface::new(2).with_indicators(1);

        surface.set_slide_active(5, true);
        surface.set_indicator_active(1, true);

        assert!(surface.active_slides().is_empty());
        assert!(surface.active_indicators().is_empty());
    }

    #[test]
    fn controls_can_be_removed() {
        let surface = MemorySurface::new(3).without_controls();

        assert!(!surface.has_control(NavControl::Prev));
        assert!(!surface.has_control(NavControl::Next));
    }
}
