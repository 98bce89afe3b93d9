use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ArithError {
    ParseNumber(String),
    UndefinedDivision(String),
    MissingOperand(String),
    UnexpectedOperand(String),
    EmptyData,
    InvalidPercentile(f64),
    InvalidConfig(String),
    GameFinished,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithError::ParseNumber(raw) => write!(f, "Parse Error: '{}' is not a number", raw),
            ArithError::UndefinedDivision(op) => {
                write!(f, "Undefined Operation: {} by zero", op)
            }
            ArithError::MissingOperand(op) => write!(f, "Missing Operand: {} needs two operands", op),
            ArithError::UnexpectedOperand(op) => {
                write!(f, "Unexpected Operand: {} takes a single operand", op)
            }
            ArithError::EmptyData => write!(f, "Data Error: data array cannot be empty"),
            ArithError::InvalidPercentile(p) => {
                write!(f, "Data Error: percentile must be between 0 and 100 (got {})", p)
            }
            ArithError::InvalidConfig(msg) => write!(f, "Config Error: {}", msg),
            ArithError::GameFinished => write!(f, "Game Error: the game is already over"),
        }
    }
}

impl std::error::Error for ArithError {}

impl ArithError {
    pub fn parse_number(raw: &str) -> Self { ArithError::ParseNumber(raw.to_string()) }
    pub fn undefined_division(op: &str) -> Self { ArithError::UndefinedDivision(op.to_string()) }
    pub fn invalid_config(message: &str) -> Self { ArithError::InvalidConfig(message.to_string()) }
}
