use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::CarouselConfig;
use crate::state::AutoplayState;
use crate::surface::{NavControl, SlideSurface};
use crate::timer::{TimerId, TimerQueue, TimerTask};

/// User input delivered by the page environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    NextClick,
    PrevClick,
    IndicatorClick(usize),
    PointerEnter,
    PointerLeave,
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
}

/// Why the active slide changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Autoplay,
    Next,
    Prev,
    Indicator,
    SwipeLeft,
    SwipeRight,
    Manual,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cause::Autoplay => "autoplay",
            Cause::Next => "next",
            Cause::Prev => "prev",
            Cause::Indicator => "indicator",
            Cause::SwipeLeft => "swipe-left",
            Cause::SwipeRight => "swipe-right",
            Cause::Manual => "manual",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub at: Duration,
    pub from: usize,
    pub to: usize,
    pub cause: Cause,
}

/// Auto-advancing carousel over a [`SlideSurface`].
///
/// Exactly one slide and its indicator are active at any time. Autoplay
/// advances every `autoplay_interval`; explicit navigation stops it and
/// restarts it `reset_delay` later unless something restarted it first.
/// Hovering stops autoplay, leaving restarts it.
///
/// All entry points take the current time since page load; timers due up to
/// that time fire first, in order.
#[derive(Debug)]
pub struct Carousel<S: SlideSurface> {
    surface: S,
    config: CarouselConfig,
    timers: TimerQueue,

    current: usize,
    autoplay: AutoplayState,
    autoplay_timer: Option<TimerId>,
    pending_restart: Option<TimerId>,
    touch_start_x: Option<f32>,

    transitions: Vec<Transition>,
}

impl<S: SlideSurface> Carousel<S> {
    /// Attaches to `surface`. Returns `None`, leaving the surface untouched,
    /// when there are fewer than two slides.
    pub fn attach(surface: S, config: CarouselConfig) -> Option<Self> {
        let count = surface.slide_count();
        if count < 2 {
            debug!(slides = count, "not enough slides, carousel stays inactive");
            return None;
        }

        // Last slide already marked active in the markup wins
        let current = (0..count)
            .rev()
            .find(|&index| surface.is_slide_marked_active(index))
            .unwrap_or(0);

        let mut carousel = Self {
            surface,
            config,
            timers: TimerQueue::new(),
            current,
            autoplay: AutoplayState::Stopped,
            autoplay_timer: None,
            pending_restart: None,
            touch_start_x: None,
            transitions: Vec::new(),
        };

        carousel.apply_marks(current);
        carousel
            .timers
            .set_timeout(config.initial_delay, TimerTask::InitialStart);

        info!(slides = count, current, "carousel attached");
        Some(carousel)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.surface.slide_count()
    }

    pub fn autoplay(&self) -> AutoplayState {
        self.autoplay
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// When the pending post-navigation restart will fire, if one is scheduled.
    pub fn pending_restart_at(&self) -> Option<Duration> {
        self.pending_restart.and_then(|id| self.timers.due_of(id))
    }

    /// Slide changes since the last call.
    pub fn drain_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.transitions)
    }

    /// Slide changes recorded and not yet drained.
    pub fn buffered_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Drains recorded slide changes into the log, for hosts that don't keep them.
    pub fn log_transitions(&mut self) {
        for transition in self.transitions.drain(..) {
            debug!(
                from = transition.from,
                to = transition.to,
                cause = %transition.cause,
                at = ?transition.at,
                "transition"
            );
        }
    }

    /// Makes `index` the only active slide and indicator. `index` must be a valid slide.
    pub fn show_slide(&mut self, index: usize) {
        self.go_to(index, Cause::Manual);
    }

    pub fn advance(&mut self) {
        self.step_forward(Cause::Manual);
    }

    pub fn retreat(&mut self) {
        self.step_back(Cause::Manual);
    }

    pub fn start(&mut self) {
        self.stop();
        self.autoplay_timer = Some(
            self.timers
                .set_interval(self.config.autoplay_interval, TimerTask::Autoplay),
        );
        self.autoplay = AutoplayState::Running;
        debug!(at = ?self.now(), "autoplay started");
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.autoplay_timer.take() {
            self.timers.clear(id);
            debug!(at = ?self.now(), "autoplay stopped");
        }
        self.autoplay = AutoplayState::Stopped;
    }

    /// Stops autoplay now and restarts it after `reset_delay` unless it is
    /// already running by then. Replaces any restart still pending.
    pub fn reset(&mut self) {
        self.stop();
        if let Some(id) = self.pending_restart.take() {
            self.timers.clear(id);
        }
        self.pending_restart = Some(
            self.timers
                .set_timeout(self.config.reset_delay, TimerTask::DelayedRestart),
        );
    }

    /// Fires every timer due up to `now`.
    pub fn tick(&mut self, now: Duration) {
        while let Some((id, task)) = self.timers.pop_due(now) {
            self.fire(id, task);
        }
        self.timers.advance_to(now);
    }

    /// Applies `input` received at time `at`.
    pub fn handle(&mut self, input: Input, at: Duration) {
        self.tick(at);

        match input {
            Input::NextClick => {
                if self.surface.has_control(NavControl::Next) {
                    self.step_forward(Cause::Next);
                    self.reset();
                }
            }
            Input::PrevClick => {
                if self.surface.has_control(NavControl::Prev) {
                    self.step_back(Cause::Prev);
                    self.reset();
                }
            }
            Input::IndicatorClick(index) => {
                if index < self.slide_count() {
                    self.go_to(index, Cause::Indicator);
                    self.reset();
                } else {
                    debug!(index, "ignoring click on unknown indicator");
                }
            }
            Input::PointerEnter => self.stop(),
            Input::PointerLeave => {
                if !self.autoplay.is_running() {
                    self.start();
                }
            }
            Input::TouchStart { x } => self.touch_start_x = Some(x),
            Input::TouchEnd { x } => {
                if let Some(start_x) = self.touch_start_x.take() {
                    self.swipe(start_x - x);
                }
            }
        }
    }

    fn swipe(&mut self, delta: f32) {
        // NaN or infinite coordinates never count as a swipe
        if !delta.is_finite() || delta.abs() < self.config.swipe_threshold {
            return;
        }
        if delta > 0.0 {
            self.step_forward(Cause::SwipeLeft);
        } else {
            self.step_back(Cause::SwipeRight);
        }
        self.reset();
    }

    fn fire(&mut self, id: TimerId, task: TimerTask) {
        match task {
            TimerTask::Autoplay => self.step_forward(Cause::Autoplay),
            TimerTask::InitialStart => self.start(),
            TimerTask::DelayedRestart => {
                if self.pending_restart == Some(id) {
                    self.pending_restart = None;
                }
                // Hover-leave may have restarted autoplay inside the delay
                if !self.autoplay.is_running() {
                    self.start();
                }
            }
        }
    }

    fn step_forward(&mut self, cause: Cause) {
        let next = (self.current + 1) % self.slide_count();
        self.go_to(next, cause);
    }

    fn step_back(&mut self, cause: Cause) {
        let len = self.slide_count();
        let prev = (self.current + len - 1) % len;
        self.go_to(prev, cause);
    }

    fn go_to(&mut self, index: usize, cause: Cause) {
        debug_assert!(index < self.slide_count(), "slide {index} out of range");

        let from = self.current;
        self.apply_marks(index);
        self.current = index;

        let at = self.now();
        debug!(from, to = index, %cause, ?at, "slide shown");
        self.transitions.push(Transition {
            at,
            from,
            to: index,
            cause,
        });
    }

    fn apply_marks(&mut self, index: usize) {
        for slide in 0..self.surface.slide_count() {
            self.surface.set_slide_active(slide, false);
        }
        for indicator in 0..self.surface.indicator_count() {
            self.surface.set_indicator_active(indicator, false);
        }
        self.surface.set_slide_active(index, true);
        if index < self.surface.indicator_count() {
            self.surface.set_indicator_active(index, true);
        }
    }
}
