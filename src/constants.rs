use std::time::Duration;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000); // Period between automatic advances
pub const RESET_DELAY: Duration = Duration::from_millis(100);        // Pause before autoplay restarts after navigation
pub const INITIAL_DELAY: Duration = Duration::from_millis(500);      // Settle time before the first autoplay arm
pub const SWIPE_THRESHOLD: f32 = 50.0;                               // Minimum horizontal travel of a swipe (px)

#[cfg(feature = "gui")]
pub const WINDOW_WIDTH: i32 = 1280;           // Width of the viewer window
#[cfg(feature = "gui")]
pub const WINDOW_HEIGHT: i32 = 720;           // Height of the viewer window
#[cfg(feature = "gui")]
pub const FPS: u32 = 60;                      // Frames per second
#[cfg(feature = "gui")]
pub const FADE_DURATION: f32 = 0.4;           // Cross-fade between slides (seconds)
