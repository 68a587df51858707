use crate::models::Portfolio;
use sqlx::PgPool;

pub async fn list_for_user(pool: &PgPool, user_id: i32) -> sqlx::Result<Vec<Portfolio>> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT * FROM portfolio WHERE portfolio.user_id = $1 ORDER BY portfolio.id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn find_for_user(
    pool: &PgPool,
    user_id: i32,
    portfolio_id: i32,
) -> sqlx::Result<Option<Portfolio>> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT * FROM portfolio WHERE portfolio.user_id = $1 AND portfolio.id = $2",
    )
    .bind(user_id)
    .bind(portfolio_id)
    .fetch_optional(pool)
    .await
}

pub async fn create(
    pool: &PgPool,
    portfolio_name: &str,
    description: Option<&str>,
    user_id: i32,
) -> sqlx::Result<Portfolio> {
    sqlx::query_as::<_, Portfolio>(
        r#"INSERT INTO portfolio (portfolio_name, description, user_id)
           VALUES ($1, $2, $3)
           RETURNING *"#,
    )
    .bind(portfolio_name)
    .bind(description)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Returns `None` when no portfolio with that id belongs to the user.
pub async fn update(
    pool: &PgPool,
    portfolio_id: i32,
    user_id: i32,
    portfolio_name: &str,
    description: Option<&str>,
) -> sqlx::Result<Option<Portfolio>> {
    sqlx::query_as::<_, Portfolio>(
        r#"UPDATE portfolio SET (portfolio_name, description) = ($1, $2)
           WHERE portfolio.id = $3 AND portfolio.user_id = $4
           RETURNING *"#,
    )
    .bind(portfolio_name)
    .bind(description)
    .bind(portfolio_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(
    pool: &PgPool,
    portfolio_id: i32,
    user_id: i32,
) -> sqlx::Result<Option<Portfolio>> {
    sqlx::query_as::<_, Portfolio>(
        "DELETE FROM portfolio WHERE portfolio.id = $1 AND portfolio.user_id = $2 RETURNING *",
    )
    .bind(portfolio_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::is_foreign_key_violation;
    use crate::services::users;

    #[sqlx::test(migrations = "./migrations")]
    async fn portfolios_are_scoped_to_their_owner(pool: PgPool) -> sqlx::Result<()> {
        let owner = users::create(&pool, "ada").await?;
        let other = users::create(&pool, "grace").await?;
        let portfolio = create(&pool, "Tech", Some("long only"), owner.id).await?;

        assert_eq!(portfolio.user_id, owner.id);
        assert_eq!(portfolio.description.as_deref(), Some("long only"));

        assert_eq!(list_for_user(&pool, owner.id).await?, vec![portfolio.clone()]);
        assert!(list_for_user(&pool, other.id).await?.is_empty());

        assert!(find_for_user(&pool, other.id, portfolio.id).await?.is_none());
        assert!(update(&pool, portfolio.id, other.id, "Stolen", None).await?.is_none());
        assert!(delete(&pool, portfolio.id, other.id).await?.is_none());

        // untouched by the other user's attempts
        assert_eq!(
            find_for_user(&pool, owner.id, portfolio.id).await?,
            Some(portfolio)
        );
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn owner_can_update_and_delete(pool: PgPool) -> sqlx::Result<()> {
        let owner = users::create(&pool, "ada").await?;
        let portfolio = create(&pool, "Tech", None, owner.id).await?;

        let updated = update(&pool, portfolio.id, owner.id, "Energy", Some("oil"))
            .await?
            .unwrap();
        assert_eq!(updated.portfolio_name, "Energy");
        assert_eq!(updated.description.as_deref(), Some("oil"));

        let deleted = delete(&pool, portfolio.id, owner.id).await?.unwrap();
        assert_eq!(deleted, updated);
        assert!(find_for_user(&pool, owner.id, portfolio.id).await?.is_none());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn unknown_owner_is_a_foreign_key_violation(pool: PgPool) -> sqlx::Result<()> {
        let err = create(&pool, "Orphan", None, 9999).await.unwrap_err();
        assert!(is_foreign_key_violation(&err));
        Ok(())
    }
}
