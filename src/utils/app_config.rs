use anyhow::{Context, Result};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use dotenvy::dotenv;

/// Shared handler state: the store connection pool. Cheap to clone, one
/// connection is checked out per request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pool: Pool<ConnectionManager<PgConnection>>,
}

impl AppConfig {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn from_env() -> Result<Self> {
        let _ = dotenv();

        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL must be set in .env file or environment variables")?;
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::new(manager)?;

        Ok(Self::new(pool))
    }
}
