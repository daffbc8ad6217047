use std::fmt;
use std::time::Duration;

use tracing::{info, warn};

use crate::carousel::Transition;
use crate::config::CarouselConfig;
use crate::page::PageContext;
use crate::script::{Action, Script};
use crate::state::AutoplayState;
use crate::surface::MemorySurface;

/// Page layout and timing for a headless replay.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub slides: usize,
    pub active: Option<usize>,
    pub indicators: Option<usize>,
    pub controls: bool,
    pub until: Option<Duration>,
    pub config: CarouselConfig,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            slides: 4,
            active: None,
            indicators: None,
            controls: true,
            until: None,
            config: CarouselConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub attached: bool,
    pub transitions: Vec<Transition>,
    pub final_index: Option<usize>,
    pub autoplay: AutoplayState,
    pub ended_at: Duration,
}

/// Feeds `script` to a carousel over an in-memory page and collects every slide change.
pub fn run(script: &Script, options: &ReplayOptions) -> ReplayReport {
    let mut surface = MemorySurface::new(options.slides);
    if let Some(active) = options.active {
        surface = surface.with_active(active);
    }
    if let Some(indicators) = options.indicators {
        surface = surface.with_indicators(indicators);
    }
    if !options.controls {
        surface = surface.without_controls();
    }

    let until = options
        .until
        .unwrap_or_else(|| script.last_time() + options.config.autoplay_interval);

    let mut page = PageContext::new();
    let Some(mut carousel) = page.init_carousel(surface, options.config) else {
        warn!(slides = options.slides, "carousel did not attach, nothing to replay");
        return ReplayReport {
            attached: false,
            transitions: Vec::new(),
            final_index: None,
            autoplay: AutoplayState::Stopped,
            ended_at: until,
        };
    };

    let mut transitions = Vec::new();
    for event in script.events.iter().filter(|event| event.at <= until) {
        match event.action {
            Action::Input(input) => carousel.handle(input, event.at),
            Action::Tick => carousel.tick(event.at),
        }
        transitions.append(&mut carousel.drain_transitions());
    }
    carousel.tick(until);
    transitions.append(&mut carousel.drain_transitions());

    info!(
        events = script.events.len(),
        transitions = transitions.len(),
        "replay finished"
    );

    ReplayReport {
        attached: true,
        transitions,
        final_index: Some(carousel.current()),
        autoplay: carousel.autoplay(),
        ended_at: until,
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.attached {
            return writeln!(f, "carousel inactive (fewer than 2 slides)");
        }
        for transition in &self.transitions {
            writeln!(
                f,
                "{:>8} ms  {} -> {}  ({})",
                transition.at.as_millis(),
                transition.from,
                transition.to,
                transition.cause
            )?;
        }
        let index = self.final_index.unwrap_or_default();
        writeln!(
            f,
            "at {} ms: slide {}, autoplay {:?}",
            self.ended_at.as_millis(),
            index,
            self.autoplay
        )
    }
}
