use std::sync::Arc;

use tracing::{error, info};

use stack_planner::adapters::{app_router, InMemorySessionStore, PlannerAppState};
use stack_planner::config::AppConfig;
use stack_planner::telemetry::init_tracing;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!(error = %err, "Stack planner terminated");
        eprintln!("stack-planner: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server)?;

    let addr = config.server.socket_addr()?;
    let state = PlannerAppState::new(
        Arc::new(InMemorySessionStore::new()),
        config.planner.clone(),
    );
    let app = app_router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Stack planner listening");
    axum::serve(listener, app).await?;
    Ok(())
}
