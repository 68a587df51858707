use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{is_unique_violation, AppError};
use crate::models::{Command, CreateUserQuery, QueryResult, User, UserLookupQuery};
use crate::services::users;
use crate::state::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<UserLookupQuery>,
) -> Result<Json<QueryResult<User>>, AppError> {
    let username = query.data.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".to_string()));
    }

    let rows = users::find_by_username(&state.pool, username).await?;
    Ok(Json(QueryResult::new(Command::Select, rows)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Query(query): Query<CreateUserQuery>,
) -> Result<(StatusCode, Json<QueryResult<User>>), AppError> {
    let username = query.user.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username must not be empty".to_string()));
    }

    let existing = users::find_by_username(&state.pool, username).await?;
    if !existing.is_empty() {
        return Err(AppError::Conflict(format!("User {} already exists", username)));
    }

    // A concurrent insert can still win between the lookup and this statement.
    let user = users::create(&state.pool, username).await.map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict(format!("User {} already exists", username))
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!("Created user {} ({})", user.username, user.id);
    Ok((StatusCode::CREATED, Json(QueryResult::single(Command::Insert, user))))
}
