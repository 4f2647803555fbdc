use std::sync::Arc;

use clap::Parser;
use tokio::signal;

mod controller;
mod events;
mod io;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use crate::controller::AppController;
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "snipgrab", about = "Screen-region OCR snipping tool")]
struct Args {
    /// Config profile to load
    #[arg(long, default_value = "main")]
    profile: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    profile::init_user_config()?;
    let mut config = profile::load_user_profile(&args.profile)?;
    config.apply_env_overrides();

    let state = Arc::new(AppState::new(args.profile, config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();
}
