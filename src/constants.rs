use std::time::Duration;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const HERO_INTERVAL: Duration = Duration::from_millis(3000);      // Hero rotator auto-advance
pub const SECONDARY_INTERVAL: Duration = Duration::from_millis(5000); // Secondary rotator auto-advance

pub const FADE_DURATION: f32 = 0.6;           // Cross-fade between slides (seconds)
pub const ARROW_SIZE: f32 = 48.0;             // Side length of the arrow buttons (pixels)
pub const ARROW_MARGIN: f32 = 16.0;           // Gap between arrow buttons and region edge (pixels)
pub const SECONDARY_HEIGHT_RATIO: f32 = 0.35; // Share of the window used by the secondary region
