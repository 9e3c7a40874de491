use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod script;

// CLI for replaying a workout session without a browser
fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={level},workout_lib={level}", env!("CARGO_CRATE_NAME"), level = cli.log_level()).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = script::load_config(cli.config.as_deref())?;
    let script = script::Script::load(&cli.script)?;
    tracing::info!("Replaying {} step(s) from {}", script.steps.len(), cli.script.display());

    let session = script::replay(&script, config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(session.workouts())?);
        return Ok(());
    }

    for marker in session.map().markers() {
        println!(
            "marker ({}, {}): {}",
            marker.coords.lat,
            marker.coords.lng,
            marker.content.as_deref().unwrap_or_default()
        );
    }
    for entry in session.sidebar().entries() {
        print!("{}", entry);
    }
    for alert in session.form().alerts() {
        println!("alert: {}", alert);
    }
    tracing::info!("{} workout(s), final state {:?}", session.workouts().len(), session.state());

    Ok(())
}
