//! Write completed job makespans in minutes as CSV.

use clap::Parser;
use miette::Result;
use snapreport_cli::{ReportArgs, init_logging, run};
use snapreport_reports::Report;

#[derive(Parser, Debug)]
#[command(name = "snapreport-makespan")]
#[command(about = "Write completed job makespans in minutes as CSV")]
struct Args {
    #[command(flatten)]
    report: ReportArgs,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    run(Report::Makespan, &args.report)?;
    Ok(())
}
