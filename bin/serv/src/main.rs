use folio_api::{config::ApiConfig, state::ApiState};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    folio_api::tracing::init_tracing(config.env);

    // Connect and migrate
    let pool = folio_db::create_pool(&config.database_url, 10).await?;
    folio_db::ensure_db_and_migrate(&config.database_url, &pool).await?;

    let state = ApiState::new(pool, config.env);

    // Configure CORS from ALLOWED_ORIGINS (comma-separated)
    let allowed_origins = std::env::var("ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    let cors = folio_api::middleware::create_cors_layer(&allowed_origins);

    // Create the application router
    let app = folio_api::router::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
