use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::Builder;
use log::{error, info};
use serde::Serialize;

use lifecycle_analysis::format::{add_comma_to_number, break_even_labels};
use lifecycle_analysis::scenario::ScenarioConfig;
use lifecycle_analysis::sweep::run_configured_sweep;
use lifecycle_analysis::{ComparisonResult, Scenario};

const MAX_DISPLAY_YEARS: usize = 20;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Compares lifecycle carbon emissions of keeping or replacing a server
struct Args {
    /// Path to YAML file with scenario
    #[arg(short, long)]
    input: PathBuf,

    /// Path to produced JSON file with results
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Evaluate all countries and utilization levels from the sweep section
    #[arg(short, long)]
    sweep: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    scenario: &'a Scenario,
    display_years: usize,
    result: ComparisonResult,
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("scenario");
    input.with_file_name([stem, "-results"].concat()).with_extension("json")
}

fn log_summary(result: &ComparisonResult) {
    let (time, total) = break_even_labels(result.break_even);
    info!(
        "Embodied emissions: {} kgCO₂, operational: {} kgCO₂/year",
        add_comma_to_number((result.embodied_emissions() * 10.).round() / 10.),
        add_comma_to_number((result.opex.opex_per_year * 10.).round() / 10.)
    );
    info!("Break-even after {} at {}", time, total);
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScenarioConfig::from_file(&args.input.to_string_lossy())?;

    let json = if args.sweep {
        let results = run_configured_sweep(&config)?;
        for point in &results {
            info!("{} at {}% utilization:", point.country, point.utilization);
            log_summary(&point.result);
        }
        serde_json::to_string_pretty(&results)?
    } else {
        let result = config.run()?;
        log_summary(&result);
        let report = Report {
            scenario: &config.scenario,
            display_years: result.display_horizon(MAX_DISPLAY_YEARS),
            result,
        };
        serde_json::to_string_pretty(&report)?
    };

    let output = args.output.clone().unwrap_or_else(|| default_output(&args.input));
    std::fs::File::create(&output)?.write_all(json.as_bytes())?;
    info!("Results saved to {}", output.display());
    Ok(())
}

fn main() {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
