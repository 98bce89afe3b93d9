//! Core module tree: arithmetic/statistics library and the guessing game.

#[macro_use]
pub mod debug; // gated debug logging (ARITHKIT_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod game;
pub mod math;

pub use error::ArithError;
pub use math::Number;
