//! CLI argument parsing and the shared driver for snapreport binaries.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use snapreport_reports::{Report, ReportConfig, generate};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Input and output paths shared by every report.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Snapshot dump (JSON array) written by the metrics collector
    #[arg(short, long)]
    pub input: Utf8PathBuf,

    /// Output CSV file (derived from the input name if omitted)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

impl ReportArgs {
    /// The output path, falling back to the report's default.
    pub fn output_path(&self, report: Report) -> Utf8PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output(report, &self.input))
    }
}

#[derive(Parser, Debug)]
#[command(name = "snapreport")]
#[command(about = "Turn scheduler snapshot dumps into CSV reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Required and available slots over time
    Timeline(ReportArgs),
    /// Slot timeline plus tasks outstanding in jobs
    Scaling(ReportArgs),
    /// Average running tasks per worker, highest first
    Balancing(ReportArgs),
    /// Makespans of completed jobs in minutes, longest first
    Makespan(ReportArgs),
}

impl Command {
    pub fn report(&self) -> Report {
        match self {
            Self::Timeline(_) => Report::Timeline,
            Self::Scaling(_) => Report::Scaling,
            Self::Balancing(_) => Report::Balancing,
            Self::Makespan(_) => Report::Makespan,
        }
    }

    pub fn args(&self) -> &ReportArgs {
        match self {
            Self::Timeline(args)
            | Self::Scaling(args)
            | Self::Balancing(args)
            | Self::Makespan(args) => args,
        }
    }
}

/// Default output path for a report.
///
/// The timeline always goes to `data.csv` in the working directory. Other
/// reports replace the input's `.json` extension with a report suffix, or
/// append the suffix when there is no such extension.
pub fn default_output(report: Report, input: &Utf8Path) -> Utf8PathBuf {
    let suffix = match report {
        Report::Timeline => return Utf8PathBuf::from("data.csv"),
        Report::Scaling => "_scaling.csv",
        Report::Balancing => "_balancing.csv",
        Report::Makespan => "_makespan.csv",
    };

    let name = input.file_name().unwrap_or_default();
    let stem = name.strip_suffix(".json").unwrap_or(name);
    input.with_file_name(format!("{stem}{suffix}"))
}

/// Install the stderr log subscriber (respects RUST_LOG, defaults to warn).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Generate one report from parsed arguments.
///
/// Returns the number of data rows written.
pub fn run(report: Report, args: &ReportArgs) -> Result<usize> {
    let output = args.output_path(report);
    tracing::debug!("Building {} report: {} -> {}", report.name(), args.input, output);
    generate(report, &args.input, &output, &ReportConfig::default()).into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_output() {
        let input = Utf8Path::new("runs/cong-run1.json");
        assert_eq!(
            default_output(Report::Timeline, input),
            Utf8PathBuf::from("data.csv")
        );
        assert_eq!(
            default_output(Report::Scaling, input),
            Utf8PathBuf::from("runs/cong-run1_scaling.csv")
        );
        assert_eq!(
            default_output(Report::Balancing, input),
            Utf8PathBuf::from("runs/cong-run1_balancing.csv")
        );
        assert_eq!(
            default_output(Report::Makespan, input),
            Utf8PathBuf::from("runs/cong-run1_makespan.csv")
        );
    }

    #[test]
    fn test_default_output_without_json_extension() {
        let input = Utf8Path::new("/tmp/status.txt");
        assert_eq!(
            default_output(Report::Makespan, input),
            Utf8PathBuf::from("/tmp/status.txt_makespan.csv")
        );
    }

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from(["snapreport", "balancing", "-i", "dump.json"]).unwrap();
        assert_eq!(cli.command.report(), Report::Balancing);
        assert_eq!(cli.command.args().input, Utf8PathBuf::from("dump.json"));
        assert!(cli.command.args().output.is_none());
        assert_eq!(
            cli.command.args().output_path(Report::Balancing),
            Utf8PathBuf::from("dump_balancing.csv")
        );
    }

    #[test]
    fn test_parse_explicit_output() {
        let cli = Cli::try_parse_from([
            "snapreport",
            "timeline",
            "--input",
            "dump.json",
            "--output",
            "slots.csv",
        ])
        .unwrap();
        assert_eq!(
            cli.command.args().output_path(Report::Timeline),
            Utf8PathBuf::from("slots.csv")
        );
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["snapreport", "makespan"]).is_err());
        assert!(Cli::try_parse_from(["snapreport", "makespan", "-o", "out.csv"]).is_err());
    }

    #[test]
    fn test_run() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        let input = dir.join("dump.json");
        std::fs::write(
            &input,
            r#"[{"completedJobs": [{"startTime": "2020-01-01T00:00:00Z", "finishTime": "2020-01-01T00:05:00Z"}]}]"#,
        )
        .unwrap();

        let args = ReportArgs {
            input: input.clone(),
            output: None,
        };
        assert_eq!(run(Report::Makespan, &args).unwrap(), 1);
        assert_eq!(
            std::fs::read_to_string(dir.join("dump_makespan.csv")).unwrap(),
            "Makespan\n2.5\n"
        );
    }

    #[test]
    fn test_run_missing_input() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8Path::from_path(temp.path()).unwrap();
        let args = ReportArgs {
            input: dir.join("missing.json"),
            output: Some(dir.join("out.csv")),
        };
        assert!(run(Report::Scaling, &args).is_err());
        assert!(!dir.join("out.csv").exists());
    }
}
