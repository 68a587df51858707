use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{is_foreign_key_violation, AppError};
use crate::models::{
    Command, Portfolio, PortfolioAction, PortfolioActionQuery, PortfolioFields, QueryResult,
    UserScope,
};
use crate::services::portfolios;
use crate::state::AppState;

fn not_found(portfolio_id: i32, user_id: i32) -> AppError {
    AppError::NotFound(format!(
        "Portfolio {} not found for user {}",
        portfolio_id, user_id
    ))
}

fn required_name(raw: &str) -> Result<&str, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "portfolio_name must not be empty".to_string(),
        ));
    }
    Ok(name)
}

pub async fn list_portfolios(
    State(state): State<AppState>,
    Query(scope): Query<UserScope>,
) -> Result<Json<QueryResult<Portfolio>>, AppError> {
    let rows = portfolios::list_for_user(&state.pool, scope.user_id).await?;
    Ok(Json(QueryResult::new(Command::Select, rows)))
}

pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(portfolio_id): Path<i32>,
    Query(scope): Query<UserScope>,
) -> Result<Json<QueryResult<Portfolio>>, AppError> {
    let portfolio = portfolios::find_for_user(&state.pool, scope.user_id, portfolio_id)
        .await?
        .ok_or_else(|| not_found(portfolio_id, scope.user_id))?;

    Ok(Json(QueryResult::single(Command::Select, portfolio)))
}

pub async fn create_portfolio(
    State(state): State<AppState>,
    Query(fields): Query<PortfolioFields>,
) -> Result<(StatusCode, Json<QueryResult<Portfolio>>), AppError> {
    let name = required_name(&fields.portfolio_name)?;

    let portfolio = portfolios::create(
        &state.pool,
        name,
        fields.description.as_deref(),
        fields.user_id,
    )
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::BadRequest(format!("User {} does not exist", fields.user_id))
        } else {
            AppError::Database(e)
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(QueryResult::single(Command::Insert, portfolio)),
    ))
}

/// `PUT /portfolio/:portfolio_id`
pub async fn update_portfolio(
    State(state): State<AppState>,
    Path(portfolio_id): Path<i32>,
    Query(fields): Query<PortfolioFields>,
) -> Result<Json<QueryResult<Portfolio>>, AppError> {
    edit(
        &state,
        portfolio_id,
        fields.user_id,
        &fields.portfolio_name,
        fields.description.as_deref(),
    )
    .await
}

/// `DELETE /portfolio/:portfolio_id`
pub async fn delete_portfolio(
    State(state): State<AppState>,
    Path(portfolio_id): Path<i32>,
    Query(scope): Query<UserScope>,
) -> Result<Json<QueryResult<Portfolio>>, AppError> {
    remove(&state, portfolio_id, scope.user_id).await
}

/// `POST /portfolio/edit=<id>` and `POST /portfolio/delete=<id>`.
pub async fn portfolio_action(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Query(query): Query<PortfolioActionQuery>,
) -> Result<Json<QueryResult<Portfolio>>, AppError> {
    let action = segment
        .parse::<PortfolioAction>()
        .map_err(AppError::BadRequest)?;

    match action {
        PortfolioAction::Edit(portfolio_id) => {
            let name = query.portfolio_name.as_deref().unwrap_or_default();
            edit(
                &state,
                portfolio_id,
                query.user_id,
                name,
                query.description.as_deref(),
            )
            .await
        }
        PortfolioAction::Delete(portfolio_id) => remove(&state, portfolio_id, query.user_id).await,
    }
}

async fn edit(
    state: &AppState,
    portfolio_id: i32,
    user_id: i32,
    portfolio_name: &str,
    description: Option<&str>,
) -> Result<Json<QueryResult<Portfolio>>, AppError> {
    let name = required_name(portfolio_name)?;

    let portfolio = portfolios::update(&state.pool, portfolio_id, user_id, name, description)
        .await?
        .ok_or_else(|| not_found(portfolio_id, user_id))?;

    tracing::debug!("Updated portfolio {} for user {}", portfolio_id, user_id);
    Ok(Json(QueryResult::single(Command::Update, portfolio)))
}

async fn remove(
    state: &AppState,
    portfolio_id: i32,
    user_id: i32,
) -> Result<Json<QueryResult<Portfolio>>, AppError> {
    let portfolio = portfolios::delete(&state.pool, portfolio_id, user_id)
        .await?
        .ok_or_else(|| not_found(portfolio_id, user_id))?;

    tracing::info!("Deleted portfolio {} for user {}", portfolio_id, user_id);
    Ok(Json(QueryResult::single(Command::Delete, portfolio)))
}
