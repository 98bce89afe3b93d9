use colored::Colorize;

use crate::core::math::{evaluate, Number, Operation};
use crate::core::ArithError;
use crate::debug_log;

/// Format `a op b = result`, or `undefined` for a zero divisor.
pub fn render(op: Operation, a: Number, b: Option<Number>, strict: bool) -> Result<String, ArithError> {
    let lhs = match (op, b) {
        (Operation::AbsoluteValue, _) => format!("|{a}|"),
        (_, Some(b)) => format!("{a} {} {b}", op.symbol()),
        (_, None) => a.to_string(),
    };
    match evaluate(op, a, b) {
        Ok(result) => Ok(format!("{lhs} = {}", result.to_string().as_str().green().bold())),
        Err(ArithError::UndefinedDivision(_)) if !strict => Ok(format!(
            "{lhs} = {}",
            "undefined (division by zero)".yellow()
        )),
        Err(e) => Err(e),
    }
}

pub fn main(op: Operation, a: &str, b: Option<&str>, strict: bool) -> anyhow::Result<()> {
    let a: Number = a.parse()?;
    let b = b.map(str::parse::<Number>).transpose()?;
    debug_log!("calc {} a={a:?} b={b:?} strict={strict}", op.name());
    println!("{}", render(op, a, b, strict)?);
    Ok(())
}
