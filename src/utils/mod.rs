// utils/mod.rs

pub mod math;
pub mod rect;
