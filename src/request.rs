use tracing::debug;

use crate::error::IntegralError;
use crate::function::NamedFunction;
use crate::integral::{Integral, RiemannSum, Rule};
use crate::report::Report;

/// A fully validated integration job: `a < b` and `n >= 1` always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationRequest {
    rule: Rule,
    function: NamedFunction,
    a: f64,
    b: f64,
    n: usize,
}

impl IntegrationRequest {
    /// Builds a request from raw user input, resolving both names and checking the bounds.
    pub fn new(
        method: &str,
        function: &str,
        a: f64,
        b: f64,
        n: i64,
    ) -> Result<Self, IntegralError> {
        let rule = method.parse()?;
        let function = function.parse()?;

        Self::from_parts(rule, function, a, b, n)
    }

    pub fn from_parts(
        rule: Rule,
        function: NamedFunction,
        a: f64,
        b: f64,
        n: i64,
    ) -> Result<Self, IntegralError> {
        // infinite bounds give an infinite width and NaN samples
        if !a.is_finite() || !b.is_finite() || a >= b {
            Err(IntegralError::InvalidInterval { a, b })?;
        }

        let n = usize::try_from(n)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(IntegralError::InvalidSubintervalCount(n))?;

        Ok(Self {
            rule,
            function,
            a,
            b,
            n,
        })
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn function(&self) -> NamedFunction {
        self.function
    }

    pub fn support(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn compute(&self) -> Result<f64, IntegralError> {
        debug!(
            rule = %self.rule,
            function = %self.function,
            a = self.a,
            b = self.b,
            n = self.n,
            "integrating"
        );

        let function = self.function;
        let result = RiemannSum {
            n: self.n,
            rule: self.rule,
        }
        .integrate(|x| function.eval(x), self.support())?;

        debug!(result, "integration finished");

        Ok(result)
    }

    pub fn report(&self) -> Result<Report, IntegralError> {
        let result = self.compute()?;

        Ok(Report::new(self, result))
    }
}
