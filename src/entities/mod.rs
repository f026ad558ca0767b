// entities/mod.rs

pub mod bird;
pub mod pipe;
