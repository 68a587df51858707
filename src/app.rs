use axum::{
    http::Method,
    routing::{delete, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handlers::{portfolios, quotes, root, stocks, users};
use crate::state::AppState;

pub fn build_app(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/health", get(root::health_check))
        .route("/health/db", get(root::database_health))
        .route("/get-symbol", get(quotes::get_symbol))
        .route("/user", get(users::get_user).post(users::create_user))
        .route(
            "/portfolio",
            get(portfolios::list_portfolios).post(portfolios::create_portfolio),
        )
        .route(
            "/portfolio/:portfolio_id",
            get(portfolios::get_portfolio)
                .post(portfolios::portfolio_action)
                .put(portfolios::update_portfolio)
                .delete(portfolios::delete_portfolio),
        )
        .route("/stocks", get(stocks::list_stocks).post(stocks::create_stock))
        .route("/stocks/:stock_id", delete(stocks::delete_stock))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_headers(Any),
                ),
        )
}
