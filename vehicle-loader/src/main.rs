use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Sample fleet shipped with the binary.
const SAMPLE: &str = include_str!("../data/vehicles.json");

fn main() -> ExitCode {
    // Diagnostics go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Build everything before printing anything, so a bad record means no output
    let vehicles = match vehicle_loader::load_str(SAMPLE) {
        Ok(vehicles) => vehicles,
        Err(e) => {
            tracing::error!(error = %e, "failed to load vehicles");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for vehicle in &vehicles {
        println!("{vehicle}");
    }

    ExitCode::SUCCESS
}
