//! arithkit: a small integer-or-float arithmetic library plus the CLI
//! surfaces built on it (self-test printout, descriptive statistics over
//! columns with missing values, and a number-guessing game).
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::math::{
    absolute_value, add, divide, floor_division, modulus, multiply, power, subtract, Number,
    Operation,
};
pub use crate::core::ArithError;
