use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{is_foreign_key_violation, AppError};
use crate::models::{Command, CreateStockQuery, PortfolioScope, QueryResult, Stock};
use crate::services::stocks;
use crate::state::AppState;
use crate::utils::normalize_symbol;

pub async fn create_stock(
    State(state): State<AppState>,
    Query(query): Query<CreateStockQuery>,
) -> Result<(StatusCode, Json<QueryResult<Stock>>), AppError> {
    let symbol = normalize_symbol(&query.stock)
        .ok_or_else(|| AppError::BadRequest("Stock symbol must not be empty".to_string()))?;

    let stock = stocks::create(&state.pool, &symbol, query.portfolio_id)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::BadRequest(format!("Portfolio {} does not exist", query.portfolio_id))
            } else {
                AppError::Database(e)
            }
        })?;

    Ok((StatusCode::CREATED, Json(QueryResult::single(Command::Insert, stock))))
}

pub async fn list_stocks(
    State(state): State<AppState>,
    Query(query): Query<PortfolioScope>,
) -> Result<Json<QueryResult<Stock>>, AppError> {
    let rows = stocks::list_for_portfolio(&state.pool, query.portfolio_id).await?;
    Ok(Json(QueryResult::new(Command::Select, rows)))
}

pub async fn delete_stock(
    State(state): State<AppState>,
    Path(stock_id): Path<i32>,
    Query(query): Query<PortfolioScope>,
) -> Result<Json<QueryResult<Stock>>, AppError> {
    let stock = stocks::delete(&state.pool, stock_id, query.portfolio_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Stock {} not found", stock_id)))?;

    Ok(Json(QueryResult::single(Command::Delete, stock)))
}
