//! snapreport - CSV reports from scheduler snapshot dumps.

use clap::Parser;
use miette::Result;
use snapreport_cli::{Cli, init_logging, run};

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    run(cli.command.report(), cli.command.args())?;
    Ok(())
}
