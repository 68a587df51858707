use crate::services::quotes::QuoteClient;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub quotes: QuoteClient,
}
