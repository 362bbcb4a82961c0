//! Write required and available slots over time as CSV.

use clap::Parser;
use miette::Result;
use snapreport_cli::{ReportArgs, init_logging, run};
use snapreport_reports::Report;

#[derive(Parser, Debug)]
#[command(name = "snapreport-timeline")]
#[command(about = "Write required and available slots over time as CSV")]
struct Args {
    #[command(flatten)]
    report: ReportArgs,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    run(Report::Timeline, &args.report)?;
    Ok(())
}
