use crate::models::Stock;
use sqlx::PgPool;

pub async fn create(pool: &PgPool, stock_symbol: &str, portfolio_id: i32) -> sqlx::Result<Stock> {
    sqlx::query_as::<_, Stock>(
        "INSERT INTO stocks (stock_symbol, portfolio_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(stock_symbol)
    .bind(portfolio_id)
    .fetch_one(pool)
    .await
}

pub async fn list_for_portfolio(pool: &PgPool, portfolio_id: i32) -> sqlx::Result<Vec<Stock>> {
    sqlx::query_as::<_, Stock>(
        "SELECT * FROM stocks WHERE stocks.portfolio_id = $1 ORDER BY stocks.id",
    )
    .bind(portfolio_id)
    .fetch_all(pool)
    .await
}

pub async fn delete(
    pool: &PgPool,
    stock_id: i32,
    portfolio_id: i32,
) -> sqlx::Result<Option<Stock>> {
    sqlx::query_as::<_, Stock>(
        "DELETE FROM stocks WHERE stocks.id = $1 AND stocks.portfolio_id = $2 RETURNING *",
    )
    .bind(stock_id)
    .bind(portfolio_id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{portfolios, users};

    #[sqlx::test(migrations = "./migrations")]
    async fn stock_deletion_is_scoped_to_its_portfolio(pool: PgPool) -> sqlx::Result<()> {
        let owner = users::create(&pool, "ada").await?;
        let tech = portfolios::create(&pool, "Tech", None, owner.id).await?;
        let energy = portfolios::create(&pool, "Energy", None, owner.id).await?;

        let msft = create(&pool, "MSFT", tech.id).await?;
        let ibm = create(&pool, "IBM", tech.id).await?;
        assert_eq!(msft.portfolio_id, tech.id);

        assert!(delete(&pool, msft.id, energy.id).await?.is_none());
        assert_eq!(list_for_portfolio(&pool, tech.id).await?, vec![msft.clone(), ibm.clone()]);

        assert_eq!(delete(&pool, msft.id, tech.id).await?, Some(msft));
        assert_eq!(list_for_portfolio(&pool, tech.id).await?, vec![ibm]);
        assert!(list_for_portfolio(&pool, energy.id).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn deleting_a_portfolio_removes_its_stocks(pool: PgPool) -> sqlx::Result<()> {
        let owner = users::create(&pool, "ada").await?;
        let tech = portfolios::create(&pool, "Tech", None, owner.id).await?;
        create(&pool, "MSFT", tech.id).await?;

        portfolios::delete(&pool, tech.id, owner.id).await?;
        assert!(list_for_portfolio(&pool, tech.id).await?.is_empty());
        Ok(())
    }
}
