use crate::config::get_config;
use crate::error::Result;
use sqlx::{migrate::Migrator, postgres::PgPoolOptions, PgPool};

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool() -> Result<PgPool> {
    let config = get_config();
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
