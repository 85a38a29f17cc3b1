//! Core building blocks shared by every other module: math, randomness,
//! and the small macro toolbox.

#[macro_use]
pub mod utils;
pub mod random;
pub mod vec2;

pub use random::Rng;
pub use vec2::Vec2;
