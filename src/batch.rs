use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::error::IntegralError;
use crate::report::Report;
use crate::request::IntegrationRequest;

#[derive(Deserialize, Debug)]
struct Job {
    method: String,
    function: String,
    a: f64,
    b: f64,
    n: i64,
}

impl TryFrom<Job> for IntegrationRequest {
    type Error = IntegralError;

    fn try_from(job: Job) -> Result<Self, Self::Error> {
        let Job {
            method,
            function,
            a,
            b,
            n,
        } = job;

        IntegrationRequest::new(&method, &function, a, b, n)
    }
}

/// Computes every row of a `method,function,a,b,n` table, stopping at the first bad row.
pub fn run<R: Read>(reader: R) -> Result<Vec<Report>, IntegralError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<Job>()
        .enumerate()
        .map(|(i, job)| {
            let row = i + 1;
            job.map_err(IntegralError::from)
                .and_then(IntegrationRequest::try_from)
                .and_then(|request| request.report())
                .map_err(|source| IntegralError::Row {
                    row,
                    source: Box::new(source),
                })
        })
        .collect()
}

pub fn run_file(path: impl AsRef<Path>) -> Result<Vec<Report>, IntegralError> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading batch input");

    run(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::function::NamedFunction;
    use crate::integral::Rule;

    use approx::assert_abs_diff_eq;

    #[test]
    fn test_batch() {
        let table = "method,function,a,b,n\n\
                     midpoint,x2,0,1,1000\n\
                     right, sin, 0, 3.141592653589793, 10000\n\
                     left,1/x,1,2,3\n";

        let reports = run(table.as_bytes()).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].rule, Rule::Midpoint);
        assert_abs_diff_eq!(reports[0].result, 1. / 3., epsilon = 1e-4);
        assert_eq!(reports[1].function, NamedFunction::Sin);
        assert_abs_diff_eq!(reports[1].result, 2., epsilon = 1e-3);
        assert_eq!(reports[2].n, 3);
        assert_abs_diff_eq!(
            reports[2].result,
            1. / 3. * (1. + 1. / (4. / 3.) + 1. / (5. / 3.)),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_empty_table() {
        let reports = run("method,function,a,b,n\n".as_bytes()).unwrap();

        assert!(reports.is_empty());
    }

    #[test]
    fn test_first_bad_row_is_reported() {
        let table = "method,function,a,b,n\n\
                     left,x2,0,1,10\n\
                     left,x2,5,2,10\n\
                     trapezoid,x2,0,1,10\n";

        let err = run(table.as_bytes()).unwrap_err();

        match err {
            IntegralError::Row { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, IntegralError::InvalidInterval { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_row() {
        let table = "method,function,a,b,n\nleft,x2,zero,1,10\n";

        let err = run(table.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            IntegralError::Row { row: 1, source } if matches!(*source, IntegralError::Csv(_))
        ));
    }

    #[test]
    fn test_division_by_zero_row() {
        let table = "method,function,a,b,n\nleft,1/x,-1,1,2\n";

        let err = run(table.as_bytes()).unwrap_err();

        assert_eq!(err.to_string(), "row 1: division by zero in 1/x");
    }
}
