use crate::dto::config_dto::{ConfigPayload, UpdateConfigPayload};
use crate::error::Result;
use crate::models::configuration::Configuration;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ConfigService {
    pool: PgPool,
}

impl ConfigService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates or replaces configuration values, keyed by `config_name`.
    pub async fn upsert(&self, payloads: Vec<ConfigPayload>) -> Result<Vec<Configuration>> {
        let mut tx = self.pool.begin().await?;
        let mut rows = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let row = sqlx::query_as::<_, Configuration>(
                r#"
                INSERT INTO config (config_name, challenge_limit)
                VALUES ($1, $2)
                ON CONFLICT (config_name)
                DO UPDATE SET challenge_limit = EXCLUDED.challenge_limit
                RETURNING id, config_name, challenge_limit, created_at
                "#,
            )
            .bind(&payload.config_name)
            .bind(payload.challenge_limit)
            .fetch_one(&mut *tx)
            .await?;
            tracing::info!(name = %row.config_name, limit = row.challenge_limit, "configuration stored");
            rows.push(row);
        }
        tx.commit().await?;
        Ok(rows)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateConfigPayload) -> Result<Configuration> {
        let row = sqlx::query_as::<_, Configuration>(
            r#"
            UPDATE config
            SET
                config_name = COALESCE($2, config_name),
                challenge_limit = COALESCE($3, challenge_limit)
            WHERE id = $1
            RETURNING id, config_name, challenge_limit, created_at
            "#,
        )
        .bind(id)
        .bind(payload.config_name)
        .bind(payload.challenge_limit)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Configuration> {
        let row = sqlx::query_as::<_, Configuration>(
            r#"SELECT id, config_name, challenge_limit, created_at FROM config WHERE id = $1"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list(&self) -> Result<Vec<Configuration>> {
        let rows = sqlx::query_as::<_, Configuration>(
            r#"SELECT id, config_name, challenge_limit, created_at FROM config ORDER BY config_name ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
