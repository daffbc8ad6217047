use tracing::debug;

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::surface::SlideSurface;

/// Per-page lifecycle state. Only one carousel is supported per page.
#[derive(Debug, Default)]
pub struct PageContext {
    carousel_initialized: bool,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn carousel_initialized(&self) -> bool {
        self.carousel_initialized
    }

    /// Attaches the page's carousel the first time one can attach; every
    /// later call returns `None`. A surface with fewer than two slides does
    /// not count as initialized.
    pub fn init_carousel<S: SlideSurface>(
        &mut self,
        surface: S,
        config: CarouselConfig,
    ) -> Option<Carousel<S>> {
        if self.carousel_initialized {
            debug!("carousel already initialized on this page");
            return None;
        }

        let carousel = Carousel::attach(surface, config)?;
        self.carousel_initialized = true;
        Some(carousel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn initializes_at_most_once() {
        let mut page = PageContext::new();

        let first = page.init_carousel(MemorySurface::new(3), CarouselConfig::default());
        let second = page.init_carousel(MemorySurface::new(3), CarouselConfig::default());

        assert!(first.is_some());
        assert!(second.is_none());
        assert!(page.carousel_initialized());
    }

    #[test]
    fn single_slide_leaves_page_uninitialized() {
        let mut page = PageContext::new();
        let surface = MemorySurface::new(1).with_active(0);

        assert!(page.init_carousel(surface, CarouselConfig::default()).is_none());
        assert!(!page.carousel_initialized());

        assert!(page
            .init_carousel(MemorySurface::new(2), CarouselConfig::default())
            .is_some());
    }

    #[test]
    fn single_slide_carousel_changes_nothing() {
        let mut surface = MemorySurface::new(1);
        let untouched = surface.clone();

        let mut page = PageContext::new();
        assert!(page.init_carousel(&mut surface, CarouselConfig::default()).is_none());

        assert_eq!(surface, untouched);
        assert!(surface.active_slides().is_empty());
    }

    #[test]
    fn attached_carousel_drives_borrowed_surface() {
        let mut surface = MemorySurface::new(4).with_active(2);

        {
            let mut page = PageContext::new();
            let mut carousel = page
                .init_carousel(&mut surface, CarouselConfig::default())
                .expect("carousel should attach");
            carousel.advance();
        }

        assert_eq!(surface.active_slides(), vec![3]);
        assert_eq!(surface.active_indicators(), vec![3]);
    }
}
