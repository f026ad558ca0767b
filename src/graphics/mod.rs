// graphics/mod.rs

pub mod backdrop;
pub mod hud;
pub mod seven_segment;
