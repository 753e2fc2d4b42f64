use bliss_countdown::*;

use anyhow::{Context, Result};
use lambda_runtime::{service_fn, LambdaEvent};
use log::info;
use serde_json::Value;

use bliss_countdown::logging::log_target;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    info!("🚀 Starting bliss countdown");

    // ===============================
    // TARGET (ONCE PER PROCESS)
    // ===============================
    let countdown = Countdown::from_env().context("invalid countdown target configuration")?;
    log_target(countdown.target());

    // ===============================
    // LAMBDA LOOP
    // ===============================
    let countdown = &countdown;
    lambda_runtime::run(service_fn(move |_event: LambdaEvent<Value>| async move {
        Ok::<Output, lambda_runtime::Error>(countdown.handle())
    }))
    .await
    .map_err(anyhow::Error::msg)
}
