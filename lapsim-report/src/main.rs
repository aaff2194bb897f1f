//! LapSim Report
//!
//! Prints race time and final tire condition for every tire x driving
//! style combination.

use anyhow::Result;
use lapsim_report::{config::ReportConfig, report};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing on stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ReportConfig::from_env()?;
    info!(
        "Simulating {} laps over {} tires x {} styles",
        config.laps,
        config.tires.len(),
        config.styles.len()
    );

    let report = report::build_report(&config)?;
    println!("{}", report.render(config.format)?);

    info!("Report complete ({} combinations)", report.entries.len());
    Ok(())
}
