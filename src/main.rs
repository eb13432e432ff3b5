use std::{io, process::ExitCode};

use clap::Parser;
use schedsim::{Args, Sim, SimConfig, report::write_report};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = SimConfig::from_args(&args);
    let mut sim = match config.and_then(|config| Sim::from_config(&config)) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let runs = sim.run_all();
    if let Err(err) = write_report(&mut io::stdout().lock(), &runs) {
        eprintln!("error: failed to write report: {err}");
        return ExitCode::FAILURE;
    }

    if runs.iter().any(|(_, run)| run.is_err()) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
