//! Basic arithmetic on integer-or-float operands.
//!
//! The division family (`divide`, `modulus`, `floor_division`) returns `None`
//! for a zero divisor instead of failing. Modulus and floor division are
//! floored: the remainder takes the sign of the divisor.

use crate::core::error::ArithError;
use crate::core::math::number::Number;

/// Int op when both sides are integers and the result fits, float op otherwise.
fn int_or_float(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Int(x), Number::Int(y)) = (a, b) {
        if let Some(r) = int_op(x, y) {
            return Number::Int(r);
        }
    }
    Number::Float(float_op(a.as_f64(), b.as_f64()))
}

pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    int_or_float(a.into(), b.into(), i64::checked_add, |x, y| x + y)
}

pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    int_or_float(a.into(), b.into(), i64::checked_sub, |x, y| x - y)
}

pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    int_or_float(a.into(), b.into(), i64::checked_mul, |x, y| x * y)
}

/// True division; always yields a float.
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Option<Number> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return None;
    }
    Some(Number::Float(a.as_f64() / b.as_f64()))
}

pub fn power(base: impl Into<Number>, exponent: impl Into<Number>) -> Number {
    let (base, exponent) = (base.into(), exponent.into());
    if let (Number::Int(b), Number::Int(e)) = (base, exponent) {
        if e >= 0 {
            if let Some(r) = u32::try_from(e).ok().and_then(|e| b.checked_pow(e)) {
                return Number::Int(r);
            }
        }
    }
    Number::Float(base.as_f64().powf(exponent.as_f64()))
}

pub fn modulus(a: impl Into<Number>, b: impl Into<Number>) -> Option<Number> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return None;
    }
    Some(match (a, b) {
        (Number::Int(x), Number::Int(y)) => Number::Int(int_mod(x, y)),
        _ => Number::Float(float_divmod(a.as_f64(), b.as_f64()).1),
    })
}

pub fn floor_division(a: impl Into<Number>, b: impl Into<Number>) -> Option<Number> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return None;
    }
    Some(match (a, b) {
        (Number::Int(x), Number::Int(y)) => match x.checked_div(y) {
            Some(q) if x % y != 0 && ((x % y < 0) != (y < 0)) => Number::Int(q - 1),
            Some(q) => Number::Int(q),
            // i64::MIN / -1
            None => Number::Float(x as f64 / y as f64),
        },
        _ => Number::Float(float_divmod(a.as_f64(), b.as_f64()).0),
    })
}

pub fn absolute_value(n: impl Into<Number>) -> Number {
    match n.into() {
        Number::Int(i) => i
            .checked_abs()
            .map(Number::Int)
            .unwrap_or(Number::Float((i as f64).abs())),
        Number::Float(f) => Number::Float(f.abs()),
    }
}

fn int_mod(x: i64, y: i64) -> i64 {
    // wrapping_rem: i64::MIN % -1 is 0
    let r = x.wrapping_rem(y);
    if r != 0 && ((r < 0) != (y < 0)) {
        r + y
    } else {
        r
    }
}

/// Floored (quotient, remainder) for floats. `b` must be nonzero.
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 {
        if (b < 0.0) != (rem < 0.0) {
            rem += b;
            div -= 1.0;
        }
    } else {
        rem = 0.0f64.copysign(b);
    }
    let floordiv = if div != 0.0 {
        let mut fd = div.floor();
        if div - fd > 0.5 {
            fd += 1.0;
        }
        fd
    } else {
        0.0f64.copysign(a / b)
    };
    (floordiv, rem)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulus,
    FloorDivision,
    AbsoluteValue,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Modulus,
        Operation::FloorDivision,
        Operation::AbsoluteValue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Modulus => "modulus",
            Operation::FloorDivision => "floor_division",
            Operation::AbsoluteValue => "absolute_value",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "**",
            Operation::Modulus => "%",
            Operation::FloorDivision => "//",
            Operation::AbsoluteValue => "abs",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operation::AbsoluteValue => 1,
            _ => 2,
        }
    }

    pub fn is_division(self) -> bool {
        matches!(self, Operation::Divide | Operation::Modulus | Operation::FloorDivision)
    }

    /// Apply the operation, returning `None` only for a zero divisor.
    pub fn apply(self, a: Number, b: Number) -> Option<Number> {
        match self {
            Operation::Add => Some(add(a, b)),
            Operation::Subtract => Some(subtract(a, b)),
            Operation::Multiply => Some(multiply(a, b)),
            Operation::Divide => divide(a, b),
            Operation::Power => Some(power(a, b)),
            Operation::Modulus => modulus(a, b),
            Operation::FloorDivision => floor_division(a, b),
            Operation::AbsoluteValue => Some(absolute_value(a)),
        }
    }
}

/// Checked front door: operand count is validated and a zero divisor becomes
/// `ArithError::UndefinedDivision`.
pub fn evaluate(op: Operation, a: Number, b: Option<Number>) -> Result<Number, ArithError> {
    let b = match (op.arity(), b) {
        (1, None) => Number::Int(0),
        (1, Some(_)) => return Err(ArithError::UnexpectedOperand(op.name().to_string())),
        (_, Some(b)) => b,
        (_, None) => return Err(ArithError::MissingOperand(op.name().to_string())),
    };
    op.apply(a, b)
        .ok_or_else(|| ArithError::undefined_division(op.name()))
}
