use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::IntegralError;

pub trait Integral {
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> Result<f64, IntegralError>
    where
        F: Fn(f64) -> Result<f64, IntegralError>;
}

/// Where the sample point sits inside each subinterval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rule {
    Left,
    #[default]
    Right,
    Midpoint,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::Left, Rule::Right, Rule::Midpoint];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Left => "left",
            Rule::Right => "right",
            Rule::Midpoint => "midpoint",
        }
    }

    fn offset(self) -> f64 {
        match self {
            Rule::Left => 0.,
            Rule::Right => 1.,
            Rule::Midpoint => 0.5,
        }
    }

    /// Sample point of the `i`-th (zero-based) subinterval of width `h` starting at `a`.
    pub fn sample(self, a: f64, h: f64, i: usize) -> f64 {
        a + (i as f64 + self.offset()) * h
    }
}

impl FromStr for Rule {
    type Err = IntegralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| IntegralError::UnknownMethod(s.to_owned()))
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct RiemannSum {
    pub n: usize,
    pub rule: Rule,
}

impl Integral for RiemannSum {
    /// Plain sequential sum of `f(x_i) * h` over `n` equal subintervals.
    ///
    /// The first failing sample aborts the whole sum.
    fn integrate<F>(&self, f: F, support: (f64, f64)) -> Result<f64, IntegralError>
    where
        F: Fn(f64) -> Result<f64, IntegralError>,
    {
        let (a, b) = support;
        let h = (b - a) / self.n as f64;

        (0..self.n).try_fold(0f64, |sum, i| Ok(sum + f(self.rule.sample(a, h, i))? * h))
    }
}
