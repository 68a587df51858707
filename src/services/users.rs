use crate::models::User;
use sqlx::PgPool;

pub async fn find_by_username(pool: &PgPool, username: &str) -> sqlx::Result<Vec<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_all(pool)
        .await
}

pub async fn create(pool: &PgPool, username: &str) -> sqlx::Result<User> {
    sqlx::query_as::<_, User>("INSERT INTO users (username) VALUES ($1) RETURNING *")
        .bind(username)
        .fetch_one(pool)
        .await
}
