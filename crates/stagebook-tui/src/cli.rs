//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use stagebook_app::AppConfig;
use stagebook_services::ServiceConfig;

/// Stagebook terminal client
#[derive(Parser, Debug)]
#[command(name = "stagebook")]
#[command(about = "Terminal front end for the Stagebook artist network")]
#[command(version)]
pub struct Args {
    /// Number of cells in the one-time passcode
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub code_length: u8,

    /// Seconds to wait before a passcode can be resent
    #[arg(long, default_value_t = 30)]
    pub resend_cooldown: u32,

    /// Complete stub service calls immediately instead of simulating latency
    #[arg(long)]
    pub no_delay: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// File that receives log output; the terminal belongs to the UI
    #[arg(long, default_value = "stagebook.log")]
    pub log_file: PathBuf,
}

impl Args {
    /// App state machine settings.
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            code_length: usize::from(self.code_length),
            resend_cooldown: self.resend_cooldown,
        }
    }

    /// Stub service latency.
    pub fn service_config(&self) -> ServiceConfig {
        if self.no_delay { ServiceConfig::instant() } else { ServiceConfig::default() }
    }
}
