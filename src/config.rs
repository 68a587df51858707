use std::env;

pub const DEFAULT_ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub alpha_api_key: Option<String>,
    pub alpha_vantage_url: String,
    pub static_dir: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let database_url = non_empty("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable not set"))?;

        let host = non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = non_empty("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("Invalid PORT value"))?;

        let max_connections = non_empty("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid DATABASE_MAX_CONNECTIONS value"))?;

        let run_migrations = non_empty("RUN_MIGRATIONS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Config {
            database_url,
            host,
            port,
            alpha_api_key: non_empty("ALPHA_API_KEY"),
            alpha_vantage_url: non_empty("ALPHA_VANTAGE_URL")
                .unwrap_or_else(|| DEFAULT_ALPHA_VANTAGE_URL.to_string()),
            static_dir: non_empty("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            max_connections,
            run_migrations,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
