mod diagnostics;
mod driver;
mod model;
mod render;
mod view;

use clap::Parser;
use std::path::PathBuf;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "channel-stats-report")]
#[command(about = "Render channel stats into an SVG chart and an HTML dashboard", long_about = None)]
struct Cli {
    /// Channel stats snapshot (JSON).
    #[arg(long, env = "CHANNEL_STATS_INPUT", default_value = driver::DEFAULT_INPUT)]
    input: PathBuf,

    /// Directory created before writing outputs.
    #[arg(long, env = "CHANNEL_STATS_OUT_DIR", default_value = driver::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    #[arg(long, env = "CHANNEL_STATS_CHART", default_value = driver::DEFAULT_CHART)]
    chart: PathBuf,

    #[arg(long, env = "CHANNEL_STATS_REPORT", default_value = driver::DEFAULT_REPORT)]
    report: PathBuf,

    /// Print each written file.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let paths = driver::Paths {
        input: cli.input,
        out_dir: cli.out_dir,
        chart: cli.chart,
        report: cli.report,
    };

    // Every outcome is reported on stdout; the exit status stays 0.
    let outcome = driver::run(&paths, cli.verbose);
    match &outcome {
        driver::Outcome::Generated => diagnostics::success(outcome.message()),
        driver::Outcome::InputMissing(_) => diagnostics::warn(outcome.message()),
        driver::Outcome::Failed(_) => println!("{}", diagnostics::error_message(outcome.message())),
    }
}
