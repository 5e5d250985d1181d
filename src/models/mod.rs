//! Data models

pub mod player;
pub mod prediction;

pub use player::*;
pub use prediction::*;
