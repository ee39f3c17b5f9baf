use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegralError {
    #[error("unknown function name '{0}' (expected one of x2, sin, exp, 1/x)")]
    UnknownFunction(String),

    #[error("unknown method name '{0}' (expected one of left, right, midpoint)")]
    UnknownMethod(String),

    #[error("division by zero in 1/x")]
    DivisionByZero,

    #[error("a must be less than b (got a = {a}, b = {b})")]
    InvalidInterval { a: f64, b: f64 },

    #[error("n must be positive (got {0})")]
    InvalidSubintervalCount(i64),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        source: Box<IntegralError>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
