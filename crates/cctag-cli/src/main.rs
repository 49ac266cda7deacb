//! cctag-detect — resolve options, build the marker bank, identify markers.

use std::path::Path;

use cctag::{IdentificationRecord, Resolution, Session};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

const RESULTS_FILE: &str = "identities.json";

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let argv0 = std::env::args().next().unwrap_or_else(|| "cctag-detect".into());

    let config = match cctag::cmdline::parse_env_args() {
        Ok(Resolution::Configured(config)) => config,
        Ok(Resolution::NoConfigurationRequested) => {
            println!("{}", cctag::usage());
            return std::process::ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            println!("{}", cctag::usage());
            return std::process::ExitCode::FAILURE;
        }
    };

    print!("{}", config.describe(&argv0));

    match run(config) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(config: cctag::Configuration) -> CliResult<()> {
    if let Some(params) = config.params() {
        tracing::info!("Detector parameters: {}", params.display());
    }

    let session = Session::open(config)?;
    let records = session.run()?;

    let n_identified = records.iter().filter(|r| r.id.is_some()).count();
    tracing::info!(
        "Identified {} of {} observations",
        n_identified,
        records.len()
    );

    write_records(session.config().output(), &records)
}

fn write_records(output: Option<&Path>, records: &[IdentificationRecord]) -> CliResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    match output {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(RESULTS_FILE);
            std::fs::write(&path, &json)?;
            tracing::info!("Results written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
