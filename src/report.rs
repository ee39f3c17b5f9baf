use serde::Serialize;
use std::fmt;
use std::io::Write;

use crate::error::IntegralError;
use crate::function::NamedFunction;
use crate::integral::Rule;
use crate::request::IntegrationRequest;

/// One computed integral. Serializes as a `method,function,a,b,n,result` record.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    #[serde(rename = "method")]
    pub rule: Rule,
    pub function: NamedFunction,
    pub a: f64,
    pub b: f64,
    pub n: usize,
    pub result: f64,
}

impl Report {
    pub fn new(request: &IntegrationRequest, result: f64) -> Self {
        Self {
            rule: request.rule(),
            function: request.function(),
            a: request.support().0,
            b: request.support().1,
            n: request.n(),
            result,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report { a, b, .. } = self;

        writeln!(f)?;
        writeln!(f, "--- Integration Results ---")?;
        writeln!(f, "| Method      | {}", self.rule)?;
        writeln!(f, "| Function    | {}", self.function)?;
        writeln!(f, "| Interval    | [{a:.2}, {b:.2}]")?;
        writeln!(f, "| Subintervals| {}", self.n)?;
        writeln!(f, "| Result      | {:.8}", self.result)?;
        writeln!(f, "--------------------------")
    }
}

/// Writes the reports as a CSV table with a header row.
pub fn write_csv<W: Write>(reports: &[Report], writer: W) -> Result<(), IntegralError> {
    let mut writer = csv::Writer::from_writer(writer);

    for report in reports {
        writer.serialize(report)?;
    }
    writer.flush()?;

    Ok(())
}
