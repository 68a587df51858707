use tracing_subscriber::EnvFilter;

use stock_portfolio_backend::{
    app, config::Config, database::Database, services::quotes::QuoteClient, state::AppState,
    utils::redact_database_url,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("stock_portfolio_backend=debug,tower_http=debug")
        }))
        .init();

    let config = Config::from_env()?;

    // Initialize database
    tracing::info!("Connecting to {}", redact_database_url(&config.database_url));
    let db = Database::new(&config).await?;
    if config.run_migrations {
        db.migrate().await?;
        tracing::info!("Database migrations applied");
    }

    if config.alpha_api_key.is_none() {
        tracing::warn!("ALPHA_API_KEY not set, /get-symbol will answer 503");
    }

    let state = AppState {
        pool: db.pool().clone(),
        quotes: QuoteClient::from_config(&config)?,
    };

    // Build application
    let app = app::build_app(state, &config.static_dir);

    let addr = config.bind_addr();
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
