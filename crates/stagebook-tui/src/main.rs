//! Stagebook terminal entry point.
//!
//! # Usage
//!
//! ```bash
//! # Simulated service latency, logs in ./stagebook.log
//! stagebook
//!
//! # Four-digit codes, instant stubs, verbose logs
//! RUST_LOG=debug stagebook --code-length 4 --no-delay
//! ```

use std::{fs::File, sync::Mutex};

use clap::Parser;
use stagebook_app::{App, Bridge, Runtime};
use stagebook_services::{StubAuthService, StubFeedService, SystemEnv};
use stagebook_tui::{Args, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let log_file = File::create(&args.log_file)?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)))
        .with(filter)
        .init();

    tracing::info!(
        code_length = args.code_length,
        resend_cooldown = args.resend_cooldown,
        no_delay = args.no_delay,
        "Stagebook starting"
    );

    let env = SystemEnv::new();
    let services = args.service_config();
    let bridge =
        Bridge::new(StubAuthService::new(env, services), StubFeedService::new(env, services));

    let driver = TerminalDriver::new(bridge)?;
    Runtime::new(driver, App::new(args.app_config())).run().await?;

    tracing::info!("Stagebook stopped");
    Ok(())
}
