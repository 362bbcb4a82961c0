//! Write average running tasks per worker as CSV.

use clap::Parser;
use miette::Result;
use snapreport_cli::{ReportArgs, init_logging, run};
use snapreport_reports::Report;

#[derive(Parser, Debug)]
#[command(name = "snapreport-balancing")]
#[command(about = "Write average running tasks per worker as CSV")]
struct Args {
    #[command(flatten)]
    report: ReportArgs,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    run(Report::Balancing, &args.report)?;
    Ok(())
}
