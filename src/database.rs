use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::Config;

/// Tables the embedded migrations create.
pub const SCHEMA_TABLES: [&str; 3] = ["users", "portfolio", "stocks"];

pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let options = config
            .database_url
            .parse::<PgConnectOptions>()?
            .statement_cache_capacity(0);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Applies the migrations embedded from `migrations/`.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Cheap liveness probe used by `/health/db`.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Names from `tables` that do not exist in the connection's current schema.
pub async fn missing_tables(
    pool: &PgPool,
    tables: &[&str],
) -> Result<Vec<String>, sqlx::Error> {
    let mut missing = Vec::new();
    for table in tables {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (
                   SELECT FROM information_schema.tables
                   WHERE table_schema = current_schema() AND table_name = $1
               )"#,
        )
        .bind(*table)
        .fetch_one(pool)
        .await?;

        if !exists {
            missing.push(table.to_string());
        }
    }
    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn migrated_schema_has_every_table(pool: PgPool) -> sqlx::Result<()> {
        assert!(missing_tables(&pool, &SCHEMA_TABLES).await?.is_empty());
        ping(&pool).await
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn tables_in_other_schemas_do_not_count(pool: PgPool) -> sqlx::Result<()> {
        sqlx::query("CREATE SCHEMA archive").execute(&pool).await?;
        sqlx::query("CREATE TABLE archive.watchlist (id INTEGER)")
            .execute(&pool)
            .await?;

        let missing = missing_tables(&pool, &["users", "watchlist"]).await?;
        assert_eq!(missing, vec!["watchlist".to_string()]);
        Ok(())
    }
}
