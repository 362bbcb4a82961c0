//! Write slot demand, including tasks outstanding in jobs, as CSV.

use clap::Parser;
use miette::Result;
use snapreport_cli::{ReportArgs, init_logging, run};
use snapreport_reports::Report;

#[derive(Parser, Debug)]
#[command(name = "snapreport-scaling")]
#[command(about = "Write slot demand, including tasks outstanding in jobs, as CSV")]
struct Args {
    #[command(flatten)]
    report: ReportArgs,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    run(Report::Scaling, &args.report)?;
    Ok(())
}
