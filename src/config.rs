// config.rs

/// Target update and render rate for the event loop
pub const FPS: u64 = 60;

/// Game resolution constants
pub mod resolution {
    pub const WIDTH: f64 = 800.0;
    pub const HEIGHT: f64 = 600.0;
}

/// Bird physics constants, all per-frame at 60 FPS
pub mod physics {
    pub const GRAVITY: f64 = 0.8;
    pub const JUMP_STRENGTH: f64 = -8.0;
    pub const MAX_FALL_SPEED: f64 = 10.0;
    pub const BIRD_SIZE: f64 = 30.0;
}

/// Pipe obstacle constants
pub mod pipes {
    pub const WIDTH: f64 = 80.0;
    pub const GAP_HEIGHT: f64 = 200.0;
    pub const SPEED: f64 = 3.0;
    /// Frames between successive pipe spawns
    pub const SPAWN_INTERVAL: u32 = 120;
    /// Keeps the full gap on-screen when the gap center is randomized
    pub const GAP_MARGIN: f64 = 50.0;
    pub const CAP_HEIGHT: f64 = 30.0;
    pub const CAP_OVERHANG: f64 = 5.0;
}

/// Touch sensor configuration
pub mod input {
    pub const GPIO_PIN: u8 = 2;
    /// Minimum interval between two accepted sensor presses
    pub const DEBOUNCE_MS: u64 = 200;
}

/// Palette, RGBA in 0.0..=1.0
pub mod colors {
    pub const SKY_BLUE: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const GREEN: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const DARK_GREEN: [f32; 4] = [0.0, 0.39, 0.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 0.39, 1.0, 1.0];
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
