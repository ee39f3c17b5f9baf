use clap::{ArgAction, Parser};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::IntegralError;
use crate::request::IntegrationRequest;

#[derive(Debug, Parser)]
#[command(
    name = "integral",
    about = "Approximate a definite integral with a left, right or midpoint Riemann sum",
    after_help = "If any of -a, -b or -n is missing, all parameters are read interactively."
)]
pub struct Cli {
    /// Rule: left, right, midpoint
    #[arg(short = 'm', long = "method", value_name = "METHOD", default_value = "right")]
    pub method: String,

    /// Integrand: x2, sin, exp, 1/x
    #[arg(short = 'f', long = "function", value_name = "FUNCTION", default_value = "x2")]
    pub function: String,

    /// Lower limit
    #[arg(short = 'a', value_name = "LOWER", allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Upper limit
    #[arg(short = 'b', value_name = "UPPER", allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// Number of subintervals
    #[arg(short = 'n', value_name = "SUBINTS", allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Read requests from a CSV file with columns method,function,a,b,n
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        conflicts_with_all = ["method", "function", "a", "b", "n"]
    )]
    pub input: Option<PathBuf>,

    /// Print results as CSV records (method,function,a,b,n,result) instead of tables
    #[arg(long = "csv", action = ArgAction::SetTrue)]
    pub csv: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Turns the flags into a request, falling back to interactive prompts
    /// when the bounds or the subinterval count were not given.
    pub fn resolve<R, W>(&self, input: R, output: W) -> Result<IntegrationRequest, IntegralError>
    where
        R: BufRead,
        W: Write,
    {
        match (self.a, self.b, self.n) {
            (Some(a), Some(b), Some(n)) => {
                IntegrationRequest::new(&self.method, &self.function, a, b, n)
            }
            _ => prompt_request(input, output),
        }
    }
}

/// Whitespace separated tokens spanning any number of lines.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, IntegralError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                Err(IntegralError::Input("unexpected end of input".to_owned()))?;
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

fn ask<R, W>(tokens: &mut Tokens<R>, output: &mut W, prompt: &str) -> Result<String, IntegralError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    tokens.next_token()
}

fn parse_number<T: FromStr>(token: &str, what: &str) -> Result<T, IntegralError> {
    token
        .parse()
        .map_err(|_| IntegralError::Input(format!("{what}: '{token}' is not a number")))
}

pub fn prompt_request<R, W>(input: R, mut output: W) -> Result<IntegrationRequest, IntegralError>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = Tokens::new(input);

    let method = ask(&mut tokens, &mut output, "Enter method (left, right, midpoint): ")?;
    let function = ask(&mut tokens, &mut output, "Enter function (x2, sin, exp, 1/x): ")?;
    let a = ask(&mut tokens, &mut output, "Enter lower limit a: ")?;
    let a = parse_number(&a, "lower limit a")?;
    let b = ask(&mut tokens, &mut output, "Enter upper limit b: ")?;
    let b = parse_number(&b, "upper limit b")?;
    let n = ask(&mut tokens, &mut output, "Enter number of subintervals n: ")?;
    let n = parse_number(&n, "number of subintervals n")?;

    IntegrationRequest::new(&method, &function, a, b, n)
}
