use anyhow::{Context, Result};
use bliss_countdown::config::Args;
use bliss_countdown::Countdown;
use chrono::{DateTime, Utc};
use clap::Parser;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let args = Args::parse();
    let countdown = Countdown::from_env().context("invalid countdown target configuration")?;

    let now = match args.now.as_deref() {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("--now is not an RFC 3339 timestamp: {}", raw))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let output = countdown.handle_at(now);

    if args.body {
        println!("{}", output.body);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    if output.status_code != 200 {
        anyhow::bail!("render failed with status {}", output.status_code);
    }

    Ok(())
}
