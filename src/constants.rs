pub const RENDER_WIDTH: i32 = 1920;      // Width of the render viewport (one slot)
pub const RENDER_HEIGHT: i32 = 1080;     // Height of the render viewport
pub const FPS: u32 = 60;                 // Frames per second

pub const ROTATION_INTERVAL: f32 = 2.0;  // Time between rotation ticks (seconds)
pub const OFFSET_STEP: f32 = 100.0;      // Offset per index step (percent of slot width)
