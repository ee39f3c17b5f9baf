use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::IntegralError;

/// The closed set of integrands the tool knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedFunction {
    Square,
    Sin,
    Exp,
    Reciprocal,
}

impl NamedFunction {
    pub const ALL: [NamedFunction; 4] = [
        NamedFunction::Square,
        NamedFunction::Sin,
        NamedFunction::Exp,
        NamedFunction::Reciprocal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedFunction::Square => "x2",
            NamedFunction::Sin => "sin",
            NamedFunction::Exp => "exp",
            NamedFunction::Reciprocal => "1/x",
        }
    }

    /// Evaluates the function at `x`.
    ///
    /// `1/x` is undefined at exactly zero and reports [`IntegralError::DivisionByZero`]
    /// instead of returning an infinity.
    pub fn eval(self, x: f64) -> Result<f64, IntegralError> {
        match self {
            NamedFunction::Square => Ok(x * x),
            NamedFunction::Sin => Ok(x.sin()),
            NamedFunction::Exp => Ok(x.exp()),
            NamedFunction::Reciprocal => {
                if x == 0. {
                    Err(IntegralError::DivisionByZero)?;
                }
                Ok(1. / x)
            }
        }
    }
}

impl FromStr for NamedFunction {
    type Err = IntegralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedFunction::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| IntegralError::UnknownFunction(s.to_owned()))
    }
}

impl Serialize for NamedFunction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for NamedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
