mod model;
mod server;

use crate::server::{
    config::Config, router::router, scheduler::rollover, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), server::error::AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    startup::catch_up_rollover(&db).await?;

    let _scheduler = rollover::start_scheduler(db.clone()).await?;

    let app = router()
        .layer(startup::cors_layer(&config))
        .with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
