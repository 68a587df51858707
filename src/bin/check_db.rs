use sqlx::PgPool;
use std::env;

use stock_portfolio_backend::database::{missing_tables, SCHEMA_TABLES};
use stock_portfolio_backend::utils::redact_database_url;

async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    println!("📡 Connecting to {}", redact_database_url(database_url));
    PgPool::connect(database_url).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in .env file"))?;
    let database_url_fallback = env::var("DATABASE_URL_FALLBACK")
        .ok()
        .map(|raw| raw.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty());

    println!("🔍 --- DATABASE CHECK ---");

    let pool = match connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            let Some(fallback_url) = database_url_fallback.as_deref() else {
                return Err(report_failure(e));
            };
            println!("⚠️ Primary failed ({}), trying fallback", e);
            connect(fallback_url).await.map_err(report_failure)?
        }
    };

    println!("✅ Connection established");

    let missing = missing_tables(&pool, &SCHEMA_TABLES).await?;
    for table in SCHEMA_TABLES {
        if missing.iter().any(|m| m == table) {
            println!("  ❌ {} (missing)", table);
        } else {
            println!("  ✅ {}", table);
        }
    }

    println!("🔍 --- END CHECK ---");

    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Missing tables: {}. Start the server with RUN_MIGRATIONS=true to create them.",
            missing.join(", ")
        ))
    }
}

fn report_failure(e: sqlx::Error) -> anyhow::Error {
    println!("❌ Connection failed: {}", e);

    let message = e.to_string();
    if message.contains("password") || message.contains("authentication") {
        println!("💡 If the password contains special characters, URL-encode them");
        println!("   @ → %40, # → %23, % → %25");
    } else if message.contains("timeout") {
        println!("💡 Check that port 5432 is reachable from this host");
    }

    anyhow::anyhow!("Connection error: {}", e)
}
