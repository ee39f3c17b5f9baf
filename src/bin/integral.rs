use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;
use tracing::level_filters::LevelFilter;

use riemann_integral::cli::Cli;
use riemann_integral::{batch, report, Report};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<Vec<Report>> {
    if let Some(path) = &cli.input {
        return batch::run_file(path)
            .with_context(|| format!("batch input {}", path.display()));
    }

    let request = cli.resolve(io::stdin().lock(), io::stdout())?;
    debug!(?request, "resolved request");

    Ok(vec![request.report()?])
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let reports = run(&cli)?;

    let mut stdout = io::stdout().lock();
    if cli.csv {
        report::write_csv(&reports, stdout)?;
        return Ok(());
    }

    for report in reports {
        write!(stdout, "{report}")?;
    }

    Ok(())
}
