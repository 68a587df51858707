use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::models::SymbolQuery;
use crate::state::AppState;
use crate::utils::normalize_symbol;

/// `GET /get-symbol?user=<SYMBOL>`: weekly series straight from the quote provider.
pub async fn get_symbol(
    State(state): State<AppState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Response, AppError> {
    let symbol = query
        .user
        .as_deref()
        .and_then(normalize_symbol)
        .ok_or_else(|| AppError::BadRequest("Missing stock symbol".to_string()))?;

    let payload = state.quotes.weekly_series(&symbol).await?;

    Ok(([(header::CONTENT_TYPE, payload.content_type)], payload.body).into_response())
}
