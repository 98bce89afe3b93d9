//! Arithmetic and statistics library.

pub mod arithmetic;
pub mod number;
pub mod statistics;

pub use arithmetic::{
    absolute_value, add, divide, evaluate, floor_division, modulus, multiply, power, subtract,
    Operation,
};
pub use number::Number;

/// Render an optional result the way the self-test printout shows it.
pub fn show(result: Option<Number>) -> String {
    match result {
        Some(n) => n.to_string(),
        None => "None".to_string(),
    }
}

/// The library's self-test block.
pub fn render_demo() -> String {
    let lines = [
        "Testing Mathematical Operations:".to_string(),
        format!("Addition: {}", add(10, 5)),
        format!("Subtraction: {}", subtract(10, 5)),
        format!("Multiplication: {}", multiply(10, 5)),
        format!("Division: {}", show(divide(10, 5))),
        format!("Power: {}", power(2, 3)),
        format!("Modulus: {}", show(modulus(17, 5))),
        format!("Floor Division: {}", show(floor_division(17, 5))),
        format!("Absolute Value: {}", absolute_value(-42)),
    ];
    lines.join("\n")
}
