use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod controller;
pub mod events;
pub mod profile;
pub mod state;
pub mod ui;

use self::cli::Args;
use self::controller::{AppController, run};
use self::state::AppState;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = profile::load_config(args.config.as_deref(), args.dictionary.as_deref())?;

    // Loaded before any task starts so the first query sees the full dictionary
    let state = Arc::new(AppState::load(config));

    let controller = AppController::new(state);
    let tasks = controller.spawn_tasks();

    run(&controller, tasks, async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    })
    .await;

    Ok(())
}

fn init_tracing(json: bool) {
    // Logs go to stderr, stdout belongs to the UI
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,slovar=info,slovar_core=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}
