pub mod calc;
pub mod config;
pub mod demo;
pub mod describe;
pub mod guess;
