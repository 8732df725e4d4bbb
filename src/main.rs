use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use profile_step::SurveyError;
use profile_step::config::load_survey;
use profile_step::report::build_report;
use profile_step::result::TaskResult;

#[derive(Debug, Parser)]
#[command(name = "profile-step", about = "Inspect survey definitions and check results against them")]
struct Cli {
    /// Survey definition (YAML, or JSON with a .json extension).
    definition: PathBuf,

    /// Completed task result (JSON) to check against the definition.
    #[arg(long)]
    result: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns `false` when the checked result has issues.
fn run(cli: Cli) -> Result<bool, SurveyError> {
    let survey = load_survey(&cli.definition)?;

    let result = match &cli.result {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| SurveyError::Io {
                path: path.clone(),
                source,
            })?;
            Some(TaskResult::from_json_str(&raw)?)
        }
        None => None,
    };

    let report = build_report(&survey, result.as_ref());
    let clean = report.is_clean();

    let rendered = match cli.output {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
    };
    println!("{rendered}");

    Ok(clean)
}
