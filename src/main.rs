use tokio::net::TcpListener;
use devtools_starter::{
    config::Config,
    api::routes::create_router,
    telemetry::init_tracing,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;
    init_tracing(&config.log_level);

    let server_addr = config.server_addr;
    tracing::info!(
        environment = %config.environment,
        delay_ms = config.generate_delay.as_millis() as u64,
        seeded = config.random_seed.is_some(),
        "Starting server on {}",
        server_addr
    );

    let app_state = AppState::from_config(config);
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
