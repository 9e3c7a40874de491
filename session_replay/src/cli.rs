use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "session_replay",
    about = "Replay recorded map clicks and form submissions through a workout session"
)]
pub struct Cli {
    /// JSON script with the geolocation outcome and the UI steps.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// JSON file overriding the session config (zoom, tiles, popup, locale).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the workout list as JSON instead of the rendered entries.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq).
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match 2 + self.verbose as i16 - self.quiet as i16 {
            i16::MIN..=0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}
