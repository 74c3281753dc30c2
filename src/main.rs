use anyhow::Context;
use dioxus::{
    logger::tracing::{Level, warn},
    prelude::*,
};

use max_chat::{App, app_settings::AppSettings};

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be set.
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dotenvy::dotenv();

    let level = if cfg!(debug_assertions) {
        Level::INFO
    } else {
        Level::WARN
    };
    dioxus::logger::init(level).context("failed to initialise logger")?;

    let settings = AppSettings::from_env();
    if !settings.is_configured() {
        warn!("GEMINI_API_KEY is not set; chat requests will fail");
    }

    LaunchBuilder::new()
        .with_context(settings)
        .launch(App);
    Ok(())
}
