use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use surfcast::cli::Args;
use surfcast::{SurfcastConfig, SurfcastError, StormglassClient, logging, report, survey_beaches};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SurfcastError>() {
                Some(err) => eprintln!("{}", err.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = SurfcastConfig::load_from_path(args.config.clone())?;
    logging::init_logging(&config.logging, args.verbose)?;

    // The credential is checked here, before any request goes out
    let client = StormglassClient::new(&config.stormglass)?;

    let date = args.date();
    debug!(
        "Scoring {} beaches for {} using source '{}'",
        config.beaches.len(),
        date,
        client.source()
    );

    let survey = survey_beaches(&client, &config.beaches, date);
    for failure in &survey.failures {
        eprintln!("{failure}");
    }

    let outcome = survey.conclude()?;
    let rendered = report::render(&outcome.report(), args.output_format())?;
    println!("{rendered}");
    Ok(())
}
