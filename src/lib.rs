//! Auto-advancing promotions carousel: a single-threaded controller driven by
//! page events and a virtual clock, with a headless replay driver and an
//! optional raylib viewer.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod page;
pub mod replay;
pub mod script;
pub mod state;
pub mod surface;
pub mod timer;
#[cfg(feature = "gui")]
pub mod viewer;

pub use crate::carousel::{Carousel, Cause, Input, Transition};
pub use crate::config::{CarouselConfig, ConfigError};
pub use crate::page::PageContext;
pub use crate::state::AutoplayState;
pub use crate::surface::{MemorySurface, NavControl, SlideSurface};
